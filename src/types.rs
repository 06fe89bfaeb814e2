//! Common types used throughout hicpairs

use std::sync::Arc;

/// Mapping quality reported when the input layout carries no mapq column.
///
/// The 8-column layout has no quality information; records read from it carry
/// this value, which downstream filters treat as maximal confidence.
pub const MAPQ_UNSPECIFIED: i32 = 1000;

/// Sentinel stored in every numeric field of a contig-marker pair.
pub const SENTINEL: i32 = -1;

/// One paired-end contact record: two read ends, each with strand,
/// chromosome, position, restriction fragment, and mapping quality.
///
/// A record is in exactly one of two states:
///
/// - **Resolved** (`contig_pair == false`): both chromosome names were found
///   in the reference mapping and every field is meaningful.
/// - **Contig marker** (`contig_pair == true`): at least one name was absent
///   from the mapping (an unplaced contig, typically). Every numeric field
///   holds [`SENTINEL`] and both strands are `false`; only the interned
///   names survive, so the caller can tell which token failed to resolve.
///
/// Chromosome names are canonical [`Arc<str>`] instances from the stream's
/// intern pool: two records mentioning the same name share one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentPair {
    /// End 1: true = forward orientation
    pub strand1: bool,
    /// End 1: canonical chromosome name
    pub name1: Arc<str>,
    /// End 1: chromosome ordinal in the reference list
    pub chr1: i32,
    /// End 1: genomic coordinate, exactly as written in the input
    pub pos1: i64,
    /// End 1: restriction-fragment index
    pub frag1: i32,
    /// End 1: mapping quality ([`MAPQ_UNSPECIFIED`] for 8-column input)
    pub mapq1: i32,
    /// End 2: true = forward orientation
    pub strand2: bool,
    /// End 2: canonical chromosome name
    pub name2: Arc<str>,
    /// End 2: chromosome ordinal in the reference list
    pub chr2: i32,
    /// End 2: genomic coordinate, exactly as written in the input
    pub pos2: i64,
    /// End 2: restriction-fragment index
    pub frag2: i32,
    /// End 2: mapping quality ([`MAPQ_UNSPECIFIED`] for 8-column input)
    pub mapq2: i32,
    /// True when either chromosome name is not a reference chromosome
    pub contig_pair: bool,
}

impl AlignmentPair {
    /// Create a contig-marker pair for a line whose chromosome name(s) could
    /// not be resolved. Numeric fields are sentinels and must not be read as
    /// coordinates.
    pub fn contig(name1: Arc<str>, name2: Arc<str>) -> Self {
        Self {
            strand1: false,
            name1,
            chr1: SENTINEL,
            pos1: SENTINEL as i64,
            frag1: SENTINEL,
            mapq1: SENTINEL,
            strand2: false,
            name2,
            chr2: SENTINEL,
            pos2: SENTINEL as i64,
            frag2: SENTINEL,
            mapq2: SENTINEL,
            contig_pair: true,
        }
    }

    /// True when this record carries real coordinates on both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use hicpairs::AlignmentPair;
    /// use std::sync::Arc;
    ///
    /// let marker = AlignmentPair::contig(Arc::from("chrUn_gl000220"), Arc::from("1"));
    /// assert!(!marker.is_resolved());
    /// ```
    pub fn is_resolved(&self) -> bool {
        !self.contig_pair
    }
}
