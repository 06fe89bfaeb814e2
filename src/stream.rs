//! The pair stream contract.
//!
//! Any producer of [`AlignmentPair`] records implements [`PairSource`]: a
//! lazy forward-only sequence with a single-slot pushback. The pushback is
//! the minimal lookahead a k-way merge needs: take one record, compare it
//! against the other streams' heads, and return it if another stream sorts
//! earlier.

use crate::error::Result;
use crate::types::AlignmentPair;

/// A forward-only stream of alignment pairs with one-slot pushback.
///
/// Both contract violations are reported as `Err` values rather than panics,
/// so callers can exercise the boundaries deterministically:
///
/// - [`next_pair`](PairSource::next_pair) with [`has_next`](PairSource::has_next)
///   false returns [`PairsError::StreamExhausted`](crate::PairsError::StreamExhausted).
/// - a second [`push_back`](PairSource::push_back) while one pair is pending
///   returns [`PairsError::PushBackPending`](crate::PairsError::PushBackPending).
///
/// # Examples
///
/// ```
/// use hicpairs::{AsciiPairStream, PairSource};
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// # fn main() -> hicpairs::Result<()> {
/// let ordinals: HashMap<String, i32> =
///     [("15".to_string(), 14)].into_iter().collect();
/// let data = b"0 15 61559113 0 16 15 61559309 16\n" as &[u8];
/// let mut stream = AsciiPairStream::new(data, Arc::new(ordinals))?;
///
/// let head = stream.next_pair()?;
/// stream.push_back(head)?;          // not ready to consume it yet
/// let head_again = stream.next_pair()?;
/// assert_eq!(head_again.pos1, 61559113);
/// stream.close();
/// # Ok(())
/// # }
/// ```
pub trait PairSource {
    /// True iff a pushed-back pair is pending or a pair is ready to take.
    fn has_next(&self) -> bool;

    /// Return the pushed-back pair if one is pending, otherwise the buffered
    /// pair, advancing the underlying source.
    fn next_pair(&mut self) -> Result<AlignmentPair>;

    /// Place one previously-taken pair back at the front of the stream.
    ///
    /// Only a single slot exists; this is a one-level lookahead, not a stack.
    fn push_back(&mut self, pair: AlignmentPair) -> Result<()>;

    /// Release the underlying input resource. Idempotent, and safe to call
    /// before the stream is fully consumed.
    fn close(&mut self);
}
