//! The Paragraph type: assembled text with its sentence span.

/// A paragraph assembled from a contiguous run of sentences.
///
/// ## Sentence Spans
///
/// `start` and `end` are *sentence indices* into the tokenized document,
/// not byte offsets: paragraph text is the member sentences re-joined with
/// single spaces, so byte positions in the original no longer line up.
///
/// ```rust
/// use stanza::Paragraph;
///
/// let p = Paragraph::new("The cat sat. It was sunny.", 0, 2, 0);
/// assert_eq!(p.sentence_count(), 2);
/// assert_eq!(p.span(), 0..2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// The paragraph text: member sentences joined by single spaces, trimmed.
    pub text: String,
    /// Index of the first member sentence in the document.
    pub start: usize,
    /// Index one past the last member sentence (exclusive).
    pub end: usize,
    /// Zero-based index of this paragraph in the output sequence.
    pub index: usize,
}

impl Paragraph {
    /// Create a new paragraph.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// Number of sentences this paragraph was assembled from.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.end - self.start
    }

    /// The sentence-index span of this paragraph in the document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Paragraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Paragraph {{ index: {}, sentences: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.text.len()
        )
    }
}
