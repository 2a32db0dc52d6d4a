//! Sentence splitting strategies.
//!
//! Two interchangeable strategies behind the [`SentenceSplitter`] trait:
//!
//! - [`HeuristicSplitter`]: a lightweight punctuation scanner. Splits on
//!   `.` `!` `?` followed by whitespace, with a small abbreviation guard.
//!   Deterministic, no external state, and fast — but it will miss exotic
//!   boundaries.
//! - [`UnicodeSplitter`]: Unicode Standard Annex #29 sentence segmentation.
//!   Handles abbreviations (Dr., Inc.), decimal numbers (3.14), ellipses,
//!   and URLs far better than any hand-rolled scanner, with the rules
//!   compiled into the library rather than fetched at runtime.
//!
//! Both return trimmed, non-empty sentences in document order.
//!
//! ## Degenerate Detectors
//!
//! An injected external detector can misbehave and hand back the whole
//! document as one "sentence". [`resplit_degenerate`] is the recovery
//! heuristic the pipeline applies in that case: if the single returned
//! string plainly holds several period-terminated sentences, re-split it
//! on `.`.

use unicode_segmentation::UnicodeSegmentation;

use crate::SentenceSplitter;

/// Abbreviations the heuristic scanner refuses to split after.
///
/// Deliberately small: common titles and citation shorthand. The UAX #29
/// splitter is the answer when this list isn't enough.
const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "st", "vs", "etc", "no", "vol", "fig", "ca",
    "approx",
];

/// Rule-based sentence splitter.
///
/// Scans for `.` `!` `?` followed by whitespace or end of input. A period
/// does not split when the preceding token is a known abbreviation or a
/// single letter (initials like "D." in "D. C.").
///
/// ## Example
///
/// ```rust
/// use stanza::{HeuristicSplitter, SentenceSplitter};
///
/// let splitter = HeuristicSplitter::new();
/// let sentences = splitter.split("It rained. Dr. Smith stayed in!");
/// assert_eq!(sentences, vec!["It rained.", "Dr. Smith stayed in!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeuristicSplitter;

impl HeuristicSplitter {
    /// Create a new heuristic splitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Whether the text ending in `current` may close a sentence at `.`.
    fn period_can_split(current: &str) -> bool {
        // Last whitespace-delimited token before the period, period stripped.
        let last = current
            .split_whitespace()
            .next_back()
            .unwrap_or("")
            .trim_end_matches('.');
        if last.chars().count() <= 1 {
            return false;
        }
        // Token ending in a digit: likely "3." in an enumeration, keep going.
        if last.chars().last().is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        !ABBREVIATIONS.contains(&last.to_lowercase().as_str())
    }
}

impl SentenceSplitter for HeuristicSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);

            let is_terminal = c == '!' || c == '?' || (c == '.' && Self::period_can_split(&current));
            if !is_terminal {
                continue;
            }

            let at_boundary = match chars.peek() {
                None => true,
                Some(&next) => next.is_whitespace(),
            };
            if at_boundary {
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                current.clear();
            }
        }

        let trimmed = current.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }

        sentences
    }
}

/// UAX #29 sentence splitter.
///
/// Wraps `unicode-segmentation`'s sentence boundary rules. This is the
/// default strategy for [`crate::ParagraphSplitter`].
///
/// ## Example
///
/// ```rust
/// use stanza::{SentenceSplitter, UnicodeSplitter};
///
/// let splitter = UnicodeSplitter::new();
/// let sentences = splitter.split("First sentence. Second one!");
/// assert_eq!(sentences.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnicodeSplitter;

impl UnicodeSplitter {
    /// Create a new UAX #29 splitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSplitter for UnicodeSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Recover from a detector that returned the document as one string.
///
/// If `sentences` holds exactly one entry that still contains an internal
/// sentence boundary (". "), re-split it on `.`. Single genuine sentences
/// ("It was 3.14 wide.") pass through untouched.
pub(crate) fn resplit_degenerate(sentences: Vec<String>) -> Vec<String> {
    if sentences.len() != 1 || !sentences[0].contains(". ") {
        return sentences;
    }
    sentences[0]
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
