//! Segment coherence scores via prefix sums.
//!
//! The score of a candidate segment `[i, j)` is the Euclidean norm of its
//! summed sentence vectors. With cumulative sums precomputed, any
//! segment's sum is one vector subtraction, so the O(N²) callers (penalty
//! calibration, the optimal DP) pay O(D) per score instead of O(N·D).
//!
//! Accumulation runs in f64: pretrained tables are f32, and long prefix
//! sums of f32 drift enough to disturb tie-breaking.

/// Cumulative sums of a sentence-vector sequence.
pub(crate) struct PrefixSums {
    dim: usize,
    len: usize,
    // Flattened (len + 1) x dim, row 0 all zeros.
    sums: Vec<f64>,
    finite: bool,
}

impl PrefixSums {
    /// Precompute cumulative sums. `dim` must match every vector's length.
    pub(crate) fn new(vectors: &[Vec<f32>], dim: usize) -> Self {
        let len = vectors.len();
        let mut sums = vec![0.0f64; (len + 1) * dim];
        let mut finite = true;

        for (row, vector) in vectors.iter().enumerate() {
            debug_assert_eq!(vector.len(), dim);
            let (prev_start, cur_start) = (row * dim, (row + 1) * dim);
            for d in 0..dim {
                let component = f64::from(vector[d]);
                finite &= component.is_finite();
                sums[cur_start + d] = sums[prev_start + d] + component;
            }
        }

        Self {
            dim,
            len,
            sums,
            finite,
        }
    }

    /// Number of vectors in the sequence.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Whether every input component was finite.
    pub(crate) fn is_finite(&self) -> bool {
        self.finite
    }

    /// Coherence score of segment `[i, j)`: the norm of its summed vectors.
    ///
    /// Requires `i <= j <= len`.
    pub(crate) fn segment_norm(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i <= j && j <= self.len);
        let (a, b) = (i * self.dim, j * self.dim);
        let mut sq = 0.0f64;
        for d in 0..self.dim {
            let delta = self.sums[b + d] - self.sums[a + d];
            sq += delta * delta;
        }
        sq.sqrt()
    }
}
