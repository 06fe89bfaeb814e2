//! I/O module: streaming pair parsing, merging, and file opening

pub mod ascii;
pub mod compression;
pub mod merge;

pub use ascii::{AsciiPairStream, PairFormat};
pub use compression::{open_pairs_file, MMAP_THRESHOLD};
pub use merge::MergedPairStream;
