//! hicpairs: streaming parser for paired-end Hi-C contact records
//!
//! # Overview
//!
//! hicpairs turns a sorted, line-oriented contact file into a typed stream of
//! [`AlignmentPair`] records while keeping memory bounded: lines are read
//! into one reused buffer and chromosome names are canonicalized through a
//! per-stream intern pool, so a file with tens of millions of lines costs no
//! more than its name vocabulary.
//!
//! ## Key pieces
//!
//! - [`AsciiPairStream`]: the parser — detects the 8- or 16-column layout
//!   from the first line, decodes fields at fixed offsets, and resolves
//!   chromosome names against a caller-supplied ordinal map
//! - [`PairSource`]: the stream contract — lazy `has_next`/`next_pair` with
//!   a single-slot `push_back` for one-record lookahead
//! - [`MergedPairStream`]: sorted k-way merge built on that lookahead
//! - [`StringPool`]: the canonicalization pool behind the bounded memory
//!
//! ## Quick Start
//!
//! ```no_run
//! use hicpairs::AsciiPairStream;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! # fn main() -> hicpairs::Result<()> {
//! let ordinals = Arc::new(HashMap::from([
//!     ("1".to_string(), 0),
//!     ("2".to_string(), 1),
//! ]));
//!
//! let stream = AsciiPairStream::from_path("sample.pairs.gz", ordinals)?;
//! for pair in stream {
//!     let pair = pair?;
//!     if pair.is_resolved() {
//!         // Feed the contact into downstream binning
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`error`]: crate error type and `Result` alias
//! - [`types`]: the [`AlignmentPair`] record and its sentinels
//! - [`intern`]: chromosome-name canonicalization
//! - [`stream`]: the [`PairSource`] contract
//! - [`io`]: the ASCII parser, sorted merge, and file opening

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod intern;
pub mod io;
pub mod stream;
pub mod types;

// Re-export commonly used types
pub use error::{PairsError, Result};
pub use intern::StringPool;
pub use io::{AsciiPairStream, MergedPairStream, PairFormat};
pub use stream::PairSource;
pub use types::{AlignmentPair, MAPQ_UNSPECIFIED, SENTINEL};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
