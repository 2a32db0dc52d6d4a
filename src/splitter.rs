//! The segmentation pipeline: text in, paragraphs plus outcome out.

use std::borrow::Cow;

use crate::assemble::assemble;
use crate::clean::fix_punct_spaces;
use crate::embed::embed_all;
use crate::optimal::{split_optimal, Partition};
use crate::paragraph::Paragraph;
use crate::penalty::calibrate_penalty;
use crate::sentence::{resplit_degenerate, UnicodeSplitter};
use crate::vocab::WordVectorTable;
use crate::SentenceSplitter;

/// Why the pipeline fell back to the trivial one-sentence-per-paragraph
/// partition instead of running the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Fewer sentences than the minimum segmentable threshold.
    TooFewSentences {
        /// Sentences found in the document.
        found: usize,
        /// The configured threshold the count must exceed.
        threshold: usize,
    },
    /// A NaN or infinity surfaced in the vectors; the cost function and
    /// DP are meaningless on such input.
    NonFiniteCost,
}

/// How a document was segmented.
///
/// Degradation is a value, not an exception: callers that care can log or
/// count fallbacks; callers that don't still get valid paragraphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The optimizer ran; `segments` paragraphs under `penalty`.
    Segmented {
        /// Number of segments in the chosen partition.
        segments: usize,
        /// The calibrated penalty the optimizer ran with.
        penalty: f32,
    },
    /// Segmentation was skipped or degraded; see the reason.
    Fallback(FallbackReason),
}

/// Paragraphs plus the outcome that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult {
    /// The assembled paragraphs, in document order.
    pub paragraphs: Vec<Paragraph>,
    /// Whether the optimizer ran or a fallback was taken.
    pub outcome: Outcome,
}

impl SplitResult {
    /// Whether this result came from a fallback path.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, Outcome::Fallback(_))
    }

    /// The paragraph texts, discarding span metadata.
    #[must_use]
    pub fn into_texts(self) -> Vec<String> {
        self.paragraphs.into_iter().map(|p| p.text).collect()
    }
}

/// The full segmentation pipeline over a borrowed word-vector table.
///
/// Construct once per configuration and reuse across documents; the
/// splitter is `Send + Sync` and documents are independent, so batch
/// callers may process them in parallel.
///
/// ## Example
///
/// ```rust
/// use stanza::{ParagraphSplitter, WordVectorTable};
///
/// let table = WordVectorTable::from_entries([
///     ("cat".to_string(), vec![1.0, 0.0]),
///     ("sunny".to_string(), vec![1.0, 0.0]),
///     ("stocks".to_string(), vec![0.0, 1.0]),
///     ("market".to_string(), vec![0.0, 1.0]),
/// ]).unwrap();
///
/// let splitter = ParagraphSplitter::new(&table)
///     .with_target_segment_len(2)
///     .with_min_sentences(2);
///
/// let result = splitter.split(
///     "The cat sat. It was sunny. Stocks fell. The market crashed.",
/// );
/// assert!(!result.paragraphs.is_empty());
/// ```
pub struct ParagraphSplitter<'v> {
    table: &'v WordVectorTable,
    target_segment_len: usize,
    min_sentences: usize,
    normalize_punctuation: bool,
    splitter: Box<dyn SentenceSplitter>,
}

impl<'v> ParagraphSplitter<'v> {
    /// Default target average segment length, in sentences.
    pub const DEFAULT_TARGET_LEN: usize = 5;

    /// Create a pipeline over a loaded vector table with defaults:
    /// target length 5, fallback threshold 5, UAX #29 sentence splitting,
    /// no punctuation normalization.
    #[must_use]
    pub fn new(table: &'v WordVectorTable) -> Self {
        Self {
            table,
            target_segment_len: Self::DEFAULT_TARGET_LEN,
            min_sentences: Self::DEFAULT_TARGET_LEN,
            normalize_punctuation: false,
            splitter: Box::new(UnicodeSplitter::new()),
        }
    }

    /// Set the target average segment length in sentences.
    ///
    /// # Panics
    ///
    /// Panics if `len == 0`.
    #[must_use]
    pub fn with_target_segment_len(mut self, len: usize) -> Self {
        assert!(len > 0, "target segment length must be > 0");
        self.target_segment_len = len;
        self
    }

    /// Set the minimum segmentable threshold: documents with this many
    /// sentences or fewer skip the optimizer and fall back to one
    /// paragraph per sentence.
    #[must_use]
    pub fn with_min_sentences(mut self, min: usize) -> Self {
        self.min_sentences = min;
        self
    }

    /// Replace the sentence splitting strategy.
    #[must_use]
    pub fn with_sentence_splitter(mut self, splitter: impl SentenceSplitter + 'static) -> Self {
        self.splitter = Box::new(splitter);
        self
    }

    /// Enable the punctuation-normalization pre-pass
    /// ([`fix_punct_spaces`]) before sentence splitting. Off by default;
    /// useful for OCR and transcript text.
    #[must_use]
    pub fn with_punctuation_normalization(mut self, enabled: bool) -> Self {
        self.normalize_punctuation = enabled;
        self
    }

    /// Split a document into topically coherent paragraphs.
    ///
    /// Never fails: inapplicable or numerically degraded segmentation
    /// falls back to one paragraph per sentence and says so in the
    /// [`Outcome`]. Empty input yields no paragraphs.
    #[must_use]
    pub fn split(&self, text: &str) -> SplitResult {
        let text = if self.normalize_punctuation {
            Cow::Owned(fix_punct_spaces(text))
        } else {
            Cow::Borrowed(text)
        };

        let mut sentences = resplit_degenerate(self.splitter.split(&text));
        if sentences.is_empty() {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return SplitResult {
                    paragraphs: vec![],
                    outcome: Outcome::Fallback(FallbackReason::TooFewSentences {
                        found: 0,
                        threshold: self.min_sentences,
                    }),
                };
            }
            // A splitter that found no sentences in non-empty text: treat
            // the whole text as one sentence and let the fallback carry it.
            sentences = vec![trimmed.to_string()];
        }

        let n = sentences.len();
        if n <= self.min_sentences {
            tracing::warn!(
                found = n,
                threshold = self.min_sentences,
                "too few sentences to segment; one paragraph per sentence"
            );
            return self.fallback(
                sentences,
                FallbackReason::TooFewSentences {
                    found: n,
                    threshold: self.min_sentences,
                },
            );
        }

        let vectors = embed_all(self.table, &sentences);
        let penalty = calibrate_penalty(&vectors, self.target_segment_len);

        match split_optimal(&vectors, penalty) {
            Ok(partition) => {
                tracing::debug!(
                    sentences = n,
                    segments = partition.segments(),
                    penalty,
                    "optimal segmentation complete"
                );
                let segments = partition.segments();
                SplitResult {
                    paragraphs: assemble(&sentences, &partition),
                    outcome: Outcome::Segmented { segments, penalty },
                }
            }
            Err(err) => {
                tracing::warn!(
                    sentences = n,
                    error = %err,
                    "segmentation degraded to unsegmented sentences"
                );
                self.fallback(sentences, FallbackReason::NonFiniteCost)
            }
        }
    }

    fn fallback(&self, sentences: Vec<String>, reason: FallbackReason) -> SplitResult {
        let partition = Partition::identity(sentences.len());
        SplitResult {
            paragraphs: assemble(&sentences, &partition),
            outcome: Outcome::Fallback(reason),
        }
    }
}

impl std::fmt::Debug for ParagraphSplitter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParagraphSplitter")
            .field("table_dim", &self.table.dim())
            .field("target_segment_len", &self.target_segment_len)
            .field("min_sentences", &self.min_sentences)
            .field("normalize_punctuation", &self.normalize_punctuation)
            .finish_non_exhaustive()
    }
}
