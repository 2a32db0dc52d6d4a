//! Penalty calibration against a target segment length.
//!
//! The optimal segmenter charges a fixed penalty per additional segment.
//! Too low and every sentence becomes its own paragraph; too high and the
//! document never splits. Calibration picks the penalty from the data:
//!
//! 1. Greedily apply the single best split (largest coherence gain),
//!    repeating up to `max(1, N / target_len)` times.
//! 2. The penalty is the smallest gain among the splits taken.
//!
//! A split's gain is `‖left‖ + ‖right‖ − ‖whole‖`, which the triangle
//! inequality keeps non-negative — so the penalty is non-negative. The
//! greedy sequence is deterministic and a longer cap only extends it, so
//! the prefix minimum can only drop as the cap grows; raising
//! `target_segment_len` shrinks the cap and therefore never decreases the
//! penalty (the monotonicity the segmenter relies on).
//!
//! Run with the calibrated penalty, the optimizer accepts roughly the
//! splits whose gain clears the weakest greedy split — about
//! `N / target_len` segments of average length near the target.

use crate::cost::PrefixSums;

/// Derive a segmentation penalty from a vector sequence and a target
/// average segment length (in sentences).
///
/// Returns 0.0 for sequences with fewer than two vectors — such inputs are
/// not segmentable and callers gate on the fallback threshold before
/// penalties matter.
///
/// # Panics
///
/// Panics if `target_segment_len == 0`.
///
/// ## Example
///
/// ```rust
/// use stanza::calibrate_penalty;
///
/// let vectors = vec![
///     vec![1.0, 0.0],
///     vec![1.0, 0.0],
///     vec![0.0, 1.0],
///     vec![0.0, 1.0],
/// ];
/// let tight = calibrate_penalty(&vectors, 2);
/// let loose = calibrate_penalty(&vectors, 4);
/// assert!(tight <= loose);
/// ```
#[must_use]
pub fn calibrate_penalty(vectors: &[Vec<f32>], target_segment_len: usize) -> f32 {
    assert!(target_segment_len > 0, "target_segment_len must be > 0");

    let n = vectors.len();
    if n < 2 {
        return 0.0;
    }

    let dim = vectors[0].len();
    let sums = PrefixSums::new(vectors, dim);
    if !sums.is_finite() {
        // Non-finite input is the segmenter's problem to report; any
        // penalty would be meaningless here.
        return 0.0;
    }

    let max_splits = (n / target_segment_len).max(1);
    let mut boundaries = vec![0, n];
    let mut min_gain = f64::INFINITY;

    for _ in 0..max_splits {
        let Some((gain, cut)) = best_cut(&sums, &boundaries) else {
            break;
        };
        min_gain = min_gain.min(gain);
        let pos = boundaries.partition_point(|&b| b < cut);
        boundaries.insert(pos, cut);
    }

    if min_gain.is_finite() {
        min_gain as f32
    } else {
        0.0
    }
}

/// The single highest-gain cut across all current segments, lowest cut
/// index winning ties. `None` when every segment is already a singleton.
fn best_cut(sums: &PrefixSums, boundaries: &[usize]) -> Option<(f64, usize)> {
    let mut best: Option<(f64, usize)> = None;

    for window in boundaries.windows(2) {
        let (l, r) = (window[0], window[1]);
        if r - l < 2 {
            continue;
        }
        let whole = sums.segment_norm(l, r);
        for cut in (l + 1)..r {
            let gain = sums.segment_norm(l, cut) + sums.segment_norm(cut, r) - whole;
            if best.map_or(true, |(g, _)| gain > g) {
                best = Some((gain, cut));
            }
        }
    }

    best
}
