//! The optimal segmenter: penalized dynamic programming over prefixes.
//!
//! ## The Recurrence
//!
//! `best[j]` is the highest achievable score for partitioning sentences
//! `[0, j)`:
//!
//! ```text
//! best[0] = 0
//! best[j] = max over i < j of:
//!     best[i] + ‖Σ vectors[i..j]‖ − penalty·[i > 0]
//! ```
//!
//! The penalty is charged per *additional* segment, so a single-segment
//! partition pays none. Boundaries are recovered by backtracking the
//! argmax choices from `j = N`.
//!
//! ## Tie-Breaking
//!
//! Candidate start indices are scanned in ascending order and replaced
//! only on strict improvement, so the lowest segment-start index wins
//! ties. That makes equal-cost inputs (all-zero vectors, perfectly
//! collinear topics) reproduce byte-identical output across runs.
//!
//! ## Complexity
//!
//! O(N²) table cells, O(D) per cell via prefix sums: O(N² + N·D) total.
//! N is sentences per document — tens to low hundreds — so this is
//! comfortably cheap.

use crate::cost::PrefixSums;

/// A partition of `[0, N)` into contiguous, non-empty segments.
///
/// Boundaries are strictly increasing, starting at 0 and ending at N;
/// segment `k` spans sentences `[boundaries[k], boundaries[k+1])`. Every
/// sentence is covered exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    boundaries: Vec<usize>,
}

impl Partition {
    /// The trivial partition: every sentence its own segment.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            boundaries: (0..=n).collect(),
        }
    }

    /// The whole-sequence partition: one segment spanning `[0, n)`.
    #[must_use]
    pub fn whole(n: usize) -> Self {
        let boundaries = if n == 0 { vec![0] } else { vec![0, n] };
        Self { boundaries }
    }

    pub(crate) fn from_boundaries(boundaries: Vec<usize>) -> Self {
        debug_assert!(boundaries.first() == Some(&0));
        debug_assert!(boundaries.windows(2).all(|w| w[0] < w[1]));
        Self { boundaries }
    }

    /// The boundary indices, `[0, ..., N]`.
    #[must_use]
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Number of segments.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Number of sentences covered.
    #[must_use]
    pub fn len(&self) -> usize {
        *self.boundaries.last().unwrap_or(&0)
    }

    /// Whether the partition covers no sentences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the segment ranges in order.
    pub fn ranges(&self) -> impl Iterator<Item = std::ops::Range<usize>> + '_ {
        self.boundaries.windows(2).map(|w| w[0]..w[1])
    }
}

/// Segment costs were not finite (NaN or infinity leaked in from the
/// vector table); the caller should fall back to an unsegmented partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("segment cost is not finite")]
pub struct NonFiniteCost;

/// Find the partition maximizing total coherence minus per-segment
/// penalty.
///
/// Pure and deterministic: identical vectors and penalty always produce
/// the identical partition. Sequences of length 0 or 1 return the trivial
/// whole partition.
///
/// # Errors
///
/// [`NonFiniteCost`] if any vector component or the penalty is NaN or
/// infinite. Zero vectors are fine — only non-finite values are rejected.
///
/// ## Example
///
/// ```rust
/// use stanza::split_optimal;
///
/// let vectors = vec![
///     vec![2.0, 0.0],
///     vec![3.0, 0.0],
///     vec![0.0, 3.0],
///     vec![0.0, 2.0],
///     vec![0.0, 3.0],
/// ];
/// let partition = split_optimal(&vectors, 1.0).unwrap();
/// assert_eq!(partition.boundaries(), &[0, 2, 5]);
/// ```
pub fn split_optimal(vectors: &[Vec<f32>], penalty: f32) -> Result<Partition, NonFiniteCost> {
    let n = vectors.len();
    if n <= 1 {
        return Ok(Partition::whole(n));
    }

    let dim = vectors[0].len();
    let sums = PrefixSums::new(vectors, dim);
    if !sums.is_finite() || !penalty.is_finite() {
        return Err(NonFiniteCost);
    }
    let penalty = f64::from(penalty);

    let mut best = vec![0.0f64; n + 1];
    let mut back = vec![0usize; n + 1];

    for j in 1..=n {
        let mut best_score = f64::NEG_INFINITY;
        let mut best_start = 0;
        for i in 0..j {
            let mut score = best[i] + sums.segment_norm(i, j);
            if i > 0 {
                score -= penalty;
            }
            if score > best_score {
                best_score = score;
                best_start = i;
            }
        }
        best[j] = best_score;
        back[j] = best_start;
    }

    let mut boundaries = vec![n];
    let mut j = n;
    while j > 0 {
        j = back[j];
        boundaries.push(j);
    }
    boundaries.reverse();

    Ok(Partition::from_boundaries(boundaries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_topics() -> Vec<Vec<f32>> {
        vec![
            vec![2.0, 0.0],
            vec![3.0, 0.0],
            vec![0.0, 3.0],
            vec![0.0, 2.0],
            vec![0.0, 3.0],
        ]
    }

    #[test]
    fn test_partition_identity() {
        let p = Partition::identity(3);
        assert_eq!(p.boundaries(), &[0, 1, 2, 3]);
        assert_eq!(p.segments(), 3);
        assert_eq!(p.ranges().collect::<Vec<_>>(), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_partition_whole() {
        let p = Partition::whole(4);
        assert_eq!(p.boundaries(), &[0, 4]);
        assert_eq!(p.segments(), 1);

        let empty = Partition::whole(0);
        assert_eq!(empty.segments(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_topic_boundary_found() {
        let partition = split_optimal(&two_topics(), 1.0).unwrap();
        assert_eq!(partition.boundaries(), &[0, 2, 5]);
    }

    #[test]
    fn test_huge_penalty_never_splits() {
        let partition = split_optimal(&two_topics(), 1e6).unwrap();
        assert_eq!(partition.segments(), 1);
    }

    #[test]
    fn test_zero_penalty_ties_break_low() {
        // All-collinear vectors: every partition scores the same, so the
        // lowest-start tie-break keeps everything in one segment.
        let vectors = vec![vec![1.0, 0.0]; 4];
        let partition = split_optimal(&vectors, 0.0).unwrap();
        assert_eq!(partition.boundaries(), &[0, 4]);
    }

    #[test]
    fn test_zero_vectors_do_not_crash() {
        let vectors = vec![vec![0.0, 0.0]; 5];
        let partition = split_optimal(&vectors, 0.5).unwrap();
        assert_eq!(partition.len(), 5);
        assert_eq!(partition.segments(), 1);
    }

    #[test]
    fn test_short_sequences_are_whole() {
        assert_eq!(split_optimal(&[], 1.0).unwrap().segments(), 0);
        let one = split_optimal(&[vec![1.0]], 1.0).unwrap();
        assert_eq!(one.boundaries(), &[0, 1]);
    }

    #[test]
    fn test_non_finite_rejected() {
        let vectors = vec![vec![1.0], vec![f32::NAN]];
        assert_eq!(split_optimal(&vectors, 1.0), Err(NonFiniteCost));

        let fine = vec![vec![1.0], vec![2.0]];
        assert_eq!(split_optimal(&fine, f32::NAN), Err(NonFiniteCost));
    }

    #[test]
    fn test_deterministic() {
        let vectors = two_topics();
        let a = split_optimal(&vectors, 0.7).unwrap();
        let b = split_optimal(&vectors, 0.7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_coverage_invariants() {
        for penalty in [0.0, 0.5, 2.0, 100.0] {
            let p = split_optimal(&two_topics(), penalty).unwrap();
            let b = p.boundaries();
            assert_eq!(b[0], 0);
            assert_eq!(*b.last().unwrap(), 5);
            assert!(b.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
