//! # stanza
//!
//! Coherence-based paragraph segmentation for plain text.
//!
//! ## The Problem
//!
//! Plain-text dumps (OCR output, transcripts, scraped articles) arrive as a
//! wall of sentences with no paragraph structure. Rebuilding that structure
//! by hand doesn't scale, and naive approaches fail:
//!
//! - Splitting every N sentences cuts arguments in half
//! - Splitting on blank lines assumes structure the input doesn't have
//! - Splitting on similarity drops between *adjacent* sentences is greedy
//!   and over-fragments noisy text
//!
//! The right formulation is global: treat the document as a sequence of
//! sentence vectors and find the partition into contiguous runs that
//! maximizes topical coherence, with a penalty per segment so the answer is
//! neither "one giant paragraph" nor "every sentence alone".
//!
//! ## The Pipeline
//!
//! ```text
//! raw text
//!    │  SentenceSplitter (heuristic or UAX #29)
//!    ▼
//! sentences: ["The cat sat.", "It was sunny.", "Stocks fell today.", ...]
//!    │  bag-of-words sum over a WordVectorTable
//!    ▼
//! vectors:   [v0, v1, v2, ...]          (one per sentence, dimension D)
//!    │  calibrate_penalty(target segment length)
//!    ▼
//! penalty:   scalar ≥ 0                 (segment-count regularizer)
//!    │  split_optimal (O(N²) dynamic program)
//!    ▼
//! partition: [0, 2, 5]                  (segment boundaries)
//!    │  assemble
//!    ▼
//! paragraphs: ["The cat sat. It was sunny.", "Stocks fell today. ..."]
//! ```
//!
//! ## The Objective
//!
//! A segment's coherence score is the Euclidean norm of its summed sentence
//! vectors. Sentences about the same topic point the same way, so their sum
//! is long; mixing topics makes vectors cancel and the sum short. The
//! optimizer maximizes
//!
//! ```text
//! Σ ‖Σ vectors in segment‖  −  penalty × (number of segments − 1)
//! ```
//!
//! over *all* partitions into contiguous non-empty segments, by dynamic
//! programming over prefix lengths. Splitting never decreases the first
//! term (triangle inequality), so the penalty is what keeps segments from
//! collapsing into singletons.
//!
//! ## Quick Start
//!
//! ```rust
//! use stanza::{ParagraphSplitter, WordVectorTable};
//!
//! // A real run loads GloVe/word2vec text-format vectors from disk once:
//! //   let table = WordVectorTable::from_path("glove.6B.100d.txt")?;
//! let table = WordVectorTable::from_entries([
//!     ("cat".to_string(), vec![1.0, 0.0]),
//!     ("market".to_string(), vec![0.0, 1.0]),
//! ]).unwrap();
//!
//! let splitter = ParagraphSplitter::new(&table).with_target_segment_len(4);
//! let result = splitter.split("The cat sat. The market fell.");
//!
//! for p in &result.paragraphs {
//!     println!("[{}] sentences {}..{}: {}", p.index, p.start, p.end, p.text);
//! }
//! ```
//!
//! ## Degradation, Not Exceptions
//!
//! Segmentation can be inapplicable (too few sentences) or numerically
//! unusable (a corrupt table leaking NaN). Neither aborts the call: the
//! pipeline falls back to one paragraph per sentence and records why in
//! [`Outcome::Fallback`], alongside a `tracing` warning. Hard errors are
//! reserved for resource problems — a vector table that cannot be loaded
//! at all.
//!
//! ## Performance
//!
//! | Stage | Cost |
//! |-------|------|
//! | Sentence split | O(text) |
//! | Vectorize | O(tokens × D) |
//! | Calibrate | O(splits × N²) |
//! | Optimal DP | O(N² + N·D) |
//!
//! N is the sentence count of one document (tens to low hundreds), so the
//! quadratic DP is cheap next to vectorization. Documents are independent;
//! batch callers can parallelize across them freely.

mod assemble;
mod clean;
mod cost;
mod embed;
mod error;
mod optimal;
mod paragraph;
mod penalty;
mod sentence;
mod splitter;
mod vocab;

pub use assemble::assemble;
pub use clean::{ensure_period_spacing, fix_punct_spaces};
pub use embed::{embed_all, embed_sentence};
pub use error::{Error, Result};
pub use optimal::{split_optimal, NonFiniteCost, Partition};
pub use paragraph::Paragraph;
pub use penalty::calibrate_penalty;
pub use sentence::{HeuristicSplitter, UnicodeSplitter};
pub use splitter::{FallbackReason, Outcome, ParagraphSplitter, SplitResult};
pub use vocab::WordVectorTable;

/// A sentence segmentation strategy.
///
/// The pipeline is generic over how text becomes sentences. Two strategies
/// ship with the crate ([`HeuristicSplitter`], [`UnicodeSplitter`]);
/// external boundary detectors plug in through this trait:
///
/// ```rust
/// use stanza::SentenceSplitter;
///
/// struct LineSplitter;
///
/// impl SentenceSplitter for LineSplitter {
///     fn split(&self, text: &str) -> Vec<String> {
///         text.lines()
///             .map(str::trim)
///             .filter(|l| !l.is_empty())
///             .map(String::from)
///             .collect()
///     }
/// }
/// ```
pub trait SentenceSplitter: Send + Sync {
    /// Split text into an ordered sequence of sentences.
    ///
    /// Returned sentences must be trimmed and non-empty; original order is
    /// preserved. May return an empty vector for empty or whitespace-only
    /// input.
    fn split(&self, text: &str) -> Vec<String>;
}
