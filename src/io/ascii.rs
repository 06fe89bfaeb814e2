//! Streaming parser for ASCII pair files.
//!
//! # Format
//!
//! One record per line, fields separated by one or more tab/space characters.
//! Two layouts exist, distinguished by column count on the first line:
//!
//! - **8 columns** ([`PairFormat::Short`]):
//!   `str1 chr1 pos1 frag1 str2 chr2 pos2 frag2`
//! - **16 columns** ([`PairFormat::Long`]): the above plus
//!   `mapq1 cigar1 seq1 mapq2 cigar2 seq2 rname1 rname2`, of which only
//!   `mapq1` (column 9) and `mapq2` (column 12) are read here
//!
//! Strand fields are integers: `0` means forward, any nonzero value reverse.
//! Short-form records carry [`MAPQ_UNSPECIFIED`] in both quality fields.
//!
//! The layout is locked once the first line establishes it. Later lines are
//! decoded under the locked layout without re-counting columns, so a line
//! with extra columns parses its leading fields and a line with too few
//! yields [`PairsError::TruncatedRecord`].
//!
//! # Memory
//!
//! Lines are read into one reused buffer, and chromosome-name tokens are
//! canonicalized through a per-stream [`StringPool`], so memory stays
//! proportional to the name vocabulary rather than the line count.
//!
//! # Example
//!
//! ```
//! use hicpairs::AsciiPairStream;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! # fn main() -> hicpairs::Result<()> {
//! let ordinals: HashMap<String, i32> = [
//!     ("15".to_string(), 14),
//!     ("10".to_string(), 9),
//!     ("9".to_string(), 8),
//! ]
//! .into_iter()
//! .collect();
//!
//! let data = b"0 15 61559113 0 16 15 61559309 16\n\
//!              16 10 26641879 16 0 9 12797549 0\n" as &[u8];
//!
//! let stream = AsciiPairStream::new(data, Arc::new(ordinals))?;
//! for pair in stream {
//!     let pair = pair?;
//!     // Process one record at a time
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{PairsError, Result};
use crate::intern::StringPool;
use crate::io::compression::open_pairs_file;
use crate::stream::PairSource;
use crate::types::{AlignmentPair, MAPQ_UNSPECIFIED};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

/// Record layout of a pair file, detected from the first line's column count
/// and fixed for the remainder of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairFormat {
    /// 8 columns, no mapping quality
    Short,
    /// 16 columns, mapping quality at columns 9 and 12
    Long,
}

impl PairFormat {
    /// Column count of this layout.
    pub fn columns(self) -> usize {
        match self {
            PairFormat::Short => 8,
            PairFormat::Long => 16,
        }
    }

    fn detect(n_tokens: usize) -> Option<Self> {
        match n_tokens {
            8 => Some(PairFormat::Short),
            16 => Some(PairFormat::Long),
            _ => None,
        }
    }
}

/// Streaming reader turning a line source into [`AlignmentPair`] records.
///
/// Construction eagerly buffers the first record so
/// [`has_next`](PairSource::has_next) can be answered before any take; a
/// first-line layout error therefore fails construction. The stream is
/// forward-only and exhausted after one pass.
///
/// Chromosome names are resolved against an immutable name-to-ordinal map
/// supplied by the caller. A line whose name is absent from the map (an
/// unplaced contig) still produces a record, a contig marker, so output
/// records stay one-to-one with input lines.
///
/// A read failure after construction is not swallowed: the record already
/// buffered is still delivered, the failure is returned by the following
/// [`next_pair`](PairSource::next_pair) call, and the stream is exhausted
/// afterwards.
#[derive(Debug)]
pub struct AsciiPairStream<R: BufRead> {
    reader: Option<R>,
    chromosome_ordinals: Arc<HashMap<String, i32>>,
    pool: StringPool,
    format: Option<PairFormat>,
    buffered: Option<AlignmentPair>,
    pushed_back: Option<AlignmentPair>,
    deferred_error: Option<PairsError>,
    line: String,
    line_number: usize,
}

impl<R: BufRead> AsciiPairStream<R> {
    /// Create a stream over an open line source.
    ///
    /// # Errors
    ///
    /// Fails if the first line cannot be read or its column count is neither
    /// 8 nor 16.
    pub fn new(reader: R, chromosome_ordinals: Arc<HashMap<String, i32>>) -> Result<Self> {
        let mut stream = Self {
            reader: Some(reader),
            chromosome_ordinals,
            pool: StringPool::new(),
            format: None,
            buffered: None,
            pushed_back: None,
            deferred_error: None,
            line: String::with_capacity(256),
            line_number: 0,
        };
        stream.advance()?;
        Ok(stream)
    }

    /// Layout established by the first line, or `None` for an empty input.
    pub fn format(&self) -> Option<PairFormat> {
        self.format
    }

    /// Number of lines consumed so far (1-based after the first line).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The stream's intern pool.
    pub fn pool(&self) -> &StringPool {
        &self.pool
    }

    /// Refill the buffered record from the source.
    fn advance(&mut self) -> Result<()> {
        self.buffered = self.read_record()?;
        Ok(())
    }

    /// Read and decode one line. `Ok(None)` marks end of input.
    fn read_record(&mut self) -> Result<Option<AlignmentPair>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        self.line.clear();
        if reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        let line_number = self.line_number;

        let tokens: Vec<&str> = self.line.split_ascii_whitespace().collect();

        let format = match self.format {
            Some(format) => format,
            None => {
                let format =
                    PairFormat::detect(tokens.len()).ok_or(PairsError::ColumnCount {
                        actual: tokens.len(),
                        line: line_number,
                    })?;
                self.format = Some(format);
                format
            }
        };
        let expected = format.columns();

        // Names are interned and resolved before any numeric field is
        // touched: a contig line is a valid record whatever the rest of it
        // holds.
        let name1 = self.pool.intern(token(&tokens, 1, expected, line_number)?);
        let name2 = self.pool.intern(token(&tokens, 5, expected, line_number)?);

        let (chr1, chr2) = match (
            self.chromosome_ordinals.get(name1.as_ref()),
            self.chromosome_ordinals.get(name2.as_ref()),
        ) {
            (Some(&chr1), Some(&chr2)) => (chr1, chr2),
            _ => return Ok(Some(AlignmentPair::contig(name1, name2))),
        };

        let strand1 = parse_i64(token(&tokens, 0, expected, line_number)?, "strand1", line_number)? == 0;
        let pos1 = parse_i64(token(&tokens, 2, expected, line_number)?, "pos1", line_number)?;
        let frag1 = parse_i32(token(&tokens, 3, expected, line_number)?, "frag1", line_number)?;
        let strand2 = parse_i64(token(&tokens, 4, expected, line_number)?, "strand2", line_number)? == 0;
        let pos2 = parse_i64(token(&tokens, 6, expected, line_number)?, "pos2", line_number)?;
        let frag2 = parse_i32(token(&tokens, 7, expected, line_number)?, "frag2", line_number)?;

        let (mapq1, mapq2) = match format {
            PairFormat::Short => (MAPQ_UNSPECIFIED, MAPQ_UNSPECIFIED),
            PairFormat::Long => (
                parse_i32(token(&tokens, 8, expected, line_number)?, "mapq1", line_number)?,
                parse_i32(token(&tokens, 11, expected, line_number)?, "mapq2", line_number)?,
            ),
        };

        Ok(Some(AlignmentPair {
            strand1,
            name1,
            chr1,
            pos1,
            frag1,
            mapq1,
            strand2,
            name2,
            chr2,
            pos2,
            frag2,
            mapq2,
            contig_pair: false,
        }))
    }
}

impl AsciiPairStream<Box<dyn BufRead + Send>> {
    /// Open a pairs file from a path.
    ///
    /// A `.gz` path is decompressed transparently; large plain files are
    /// memory-mapped (see [`crate::io::compression`]).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hicpairs::{AsciiPairStream, PairSource};
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// # fn main() -> hicpairs::Result<()> {
    /// let ordinals = Arc::new(HashMap::from([("1".to_string(), 0)]));
    /// let mut stream = AsciiPairStream::from_path("sample.pairs.gz", ordinals)?;
    /// while stream.has_next() {
    ///     let pair = stream.next_pair()?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        chromosome_ordinals: Arc<HashMap<String, i32>>,
    ) -> Result<Self> {
        let reader = open_pairs_file(path.as_ref())?;
        Self::new(reader, chromosome_ordinals)
    }
}

impl<R: BufRead> PairSource for AsciiPairStream<R> {
    fn has_next(&self) -> bool {
        self.pushed_back.is_some() || self.buffered.is_some() || self.deferred_error.is_some()
    }

    fn next_pair(&mut self) -> Result<AlignmentPair> {
        if let Some(pair) = self.pushed_back.take() {
            return Ok(pair);
        }
        if let Some(err) = self.deferred_error.take() {
            return Err(err);
        }
        let pair = self.buffered.take().ok_or(PairsError::StreamExhausted)?;
        // The failing read belongs to the *next* record; deliver this one
        // first and surface the failure on the following call.
        if let Err(err) = self.advance() {
            self.deferred_error = Some(err);
        }
        Ok(pair)
    }

    fn push_back(&mut self, pair: AlignmentPair) -> Result<()> {
        if self.pushed_back.is_some() {
            return Err(PairsError::PushBackPending);
        }
        self.pushed_back = Some(pair);
        Ok(())
    }

    fn close(&mut self) {
        self.reader = None;
        self.buffered = None;
        self.pushed_back = None;
        self.deferred_error = None;
        self.pool.clear();
    }
}

impl<R: BufRead> Iterator for AsciiPairStream<R> {
    type Item = Result<AlignmentPair>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        Some(self.next_pair())
    }
}

fn token<'a>(tokens: &[&'a str], index: usize, expected: usize, line: usize) -> Result<&'a str> {
    tokens
        .get(index)
        .copied()
        .ok_or(PairsError::TruncatedRecord {
            expected,
            actual: tokens.len(),
            line,
        })
}

fn parse_i64(token: &str, field: &'static str, line: usize) -> Result<i64> {
    token.parse().map_err(|e: std::num::ParseIntError| {
        PairsError::InvalidField {
            field,
            line,
            reason: e.to_string(),
        }
    })
}

fn parse_i32(token: &str, field: &'static str, line: usize) -> Result<i32> {
    token.parse().map_err(|e: std::num::ParseIntError| {
        PairsError::InvalidField {
            field,
            line,
            reason: e.to_string(),
        }
    })
}
