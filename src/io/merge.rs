//! Sorted k-way merge over pair sources.
//!
//! Chunked preprocessing sorts pairs files piecewise; recombining them means
//! walking several already-sorted streams and always taking the globally
//! smallest head. The single-slot pushback of [`PairSource`] is exactly the
//! lookahead that needs: take each stream's head, keep the minimum, and push
//! every other head straight back.

use crate::error::{PairsError, Result};
use crate::stream::PairSource;
use crate::types::AlignmentPair;

/// Merge of several sorted [`PairSource`]s, itself a [`PairSource`].
///
/// Records are interleaved in ascending `(chr1, chr2, pos1, pos2, frag1,
/// frag2)` order, assuming each child stream is already sorted by that key.
/// Contig-marker pairs carry sentinel ordinals and therefore sort ahead of
/// resolved pairs. Ties are broken by child order, so merging is stable.
///
/// # Examples
///
/// ```
/// use hicpairs::{AsciiPairStream, MergedPairStream, PairSource};
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// # fn main() -> hicpairs::Result<()> {
/// let ordinals = Arc::new(HashMap::from([
///     ("1".to_string(), 0),
///     ("2".to_string(), 1),
/// ]));
///
/// let chunk_a = b"0 1 100 0 0 2 200 0\n0 2 500 0 0 2 600 0\n" as &[u8];
/// let chunk_b = b"0 1 150 0 0 2 250 0\n" as &[u8];
///
/// let mut merged = MergedPairStream::new(vec![
///     Box::new(AsciiPairStream::new(chunk_a, Arc::clone(&ordinals))?),
///     Box::new(AsciiPairStream::new(chunk_b, ordinals)?),
/// ]);
///
/// let mut positions = Vec::new();
/// while merged.has_next() {
///     positions.push(merged.next_pair()?.pos1);
/// }
/// assert_eq!(positions, vec![100, 150, 500]);
/// # Ok(())
/// # }
/// ```
pub struct MergedPairStream {
    sources: Vec<Box<dyn PairSource>>,
    pushed_back: Option<AlignmentPair>,
}

impl MergedPairStream {
    /// Create a merge over the given child streams.
    pub fn new(sources: Vec<Box<dyn PairSource>>) -> Self {
        Self {
            sources,
            pushed_back: None,
        }
    }

    /// Number of child streams.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// True when no child streams were supplied.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn merge_key(pair: &AlignmentPair) -> (i32, i32, i64, i64, i32, i32) {
    (
        pair.chr1, pair.chr2, pair.pos1, pair.pos2, pair.frag1, pair.frag2,
    )
}

impl PairSource for MergedPairStream {
    fn has_next(&self) -> bool {
        self.pushed_back.is_some() || self.sources.iter().any(|s| s.has_next())
    }

    fn next_pair(&mut self) -> Result<AlignmentPair> {
        if let Some(pair) = self.pushed_back.take() {
            return Ok(pair);
        }

        // Take one head per live child, remembering which child it came from.
        let mut heads: Vec<(usize, AlignmentPair)> = Vec::with_capacity(self.sources.len());
        let mut failure = None;
        for index in 0..self.sources.len() {
            if !self.sources[index].has_next() {
                continue;
            }
            match self.sources[index].next_pair() {
                Ok(head) => heads.push((index, head)),
                Err(err) => {
                    failure = Some(err);
                    break;
                }
            }
        }
        if let Some(err) = failure {
            // Return the heads already taken; each child's slot was just
            // emptied, so these pushes cannot fail.
            for (index, head) in heads {
                let _ = self.sources[index].push_back(head);
            }
            return Err(err);
        }

        if heads.is_empty() {
            return Err(PairsError::StreamExhausted);
        }
        let mut best = 0;
        for candidate in 1..heads.len() {
            if merge_key(&heads[candidate].1) < merge_key(&heads[best].1) {
                best = candidate;
            }
        }

        let (_, pair) = heads.swap_remove(best);
        for (index, head) in heads {
            self.sources[index].push_back(head)?;
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
        for source in &mut self.sources {
            source.close();
        }
        self.pushed_back = None;
    }
}

impl Iterator for MergedPairStream {
    type Item = Result<AlignmentPair>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        Some(self.next_pair())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ascii::AsciiPairStream;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn ordinals() -> Arc<HashMap<String, i32>> {
        Arc::new(HashMap::from([
            ("1".to_string(), 0),
            ("2".to_string(), 1),
            ("3".to_string(), 2),
        ]))
    }

    fn stream(data: &'static [u8]) -> Box<dyn PairSource> {
        Box::new(AsciiPairStream::new(data, ordinals()).unwrap())
    }

    #[test]
    fn test_merge_interleaves_sorted_chunks() {
        let merged = MergedPairStream::new(vec![
            stream(b"0 1 100 0 0 1 110 0\n0 2 300 0 0 2 310 0\n"),
            stream(b"0 1 200 0 0 1 210 0\n0 3 400 0 0 3 410 0\n"),
            stream(b"0 1 50 0 0 1 60 0\n"),
        ]);

        let pairs: Vec<_> = merged.collect::<Result<Vec<_>>>().unwrap();
        let positions: Vec<i64> = pairs.iter().map(|p| p.pos1).collect();
        assert_eq!(positions, vec![50, 100, 200, 300, 400]);
    }

    #[test]
    fn test_merge_orders_by_chromosome_before_position() {
        let merged = MergedPairStream::new(vec![
            stream(b"0 2 10 0 0 2 20 0\n"),
            stream(b"0 1 9000 0 0 1 9100 0\n"),
        ]);

        let pairs: Vec<_> = merged.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(pairs[0].chr1, 0);
        assert_eq!(pairs[1].chr1, 1);
    }

    #[test]
    fn test_merge_single_source_passes_through() {
        let merged =
            MergedPairStream::new(vec![stream(b"0 1 100 0 0 1 110 0\n0 1 200 0 0 1 210 0\n")]);
        let pairs: Vec<_> = merged.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_merge_empty() {
        let mut merged = MergedPairStream::new(Vec::new());
        assert!(!merged.has_next());
        assert!(merged.is_empty());
        assert!(matches!(
            merged.next_pair().unwrap_err(),
            PairsError::StreamExhausted
        ));
    }

    #[test]
    fn test_merge_push_back_slot() {
        let mut merged = MergedPairStream::new(vec![
            stream(b"0 1 100 0 0 1 110 0\n"),
            stream(b"0 1 200 0 0 1 210 0\n"),
        ]);

        let first = merged.next_pair().unwrap();
        assert_eq!(first.pos1, 100);
        merged.push_back(first.clone()).unwrap();
        assert!(matches!(
            merged.push_back(first.clone()).unwrap_err(),
            PairsError::PushBackPending
        ));

        assert_eq!(merged.next_pair().unwrap().pos1, 100);
        assert_eq!(merged.next_pair().unwrap().pos1, 200);
        assert!(!merged.has_next());
    }

    #[test]
    fn test_merge_close_closes_children() {
        let mut merged = MergedPairStream::new(vec![
            stream(b"0 1 100 0 0 1 110 0\n"),
            stream(b"0 1 200 0 0 1 210 0\n"),
        ]);
        merged.close();
        assert!(!merged.has_next());
    }
}
