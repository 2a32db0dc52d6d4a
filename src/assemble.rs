//! Mapping a partition back onto sentence text.

use crate::optimal::Partition;
use crate::paragraph::Paragraph;

/// Assemble paragraphs from sentences and a partition over them.
///
/// Each segment's sentences are joined with a single space and trimmed.
/// Output length equals the partition's segment count; no sentence is
/// duplicated or dropped, and document order is preserved.
///
/// # Panics
///
/// Panics if the partition does not cover exactly `sentences.len()`
/// sentences.
///
/// ## Example
///
/// ```rust
/// use stanza::{assemble, Partition};
///
/// let sentences = vec![
///     "The cat sat.".to_string(),
///     "It was sunny.".to_string(),
///     "Stocks fell.".to_string(),
/// ];
/// let paragraphs = assemble(&sentences, &Partition::identity(3));
/// assert_eq!(paragraphs.len(), 3);
/// assert_eq!(paragraphs[1].text, "It was sunny.");
/// ```
#[must_use]
pub fn assemble(sentences: &[String], partition: &Partition) -> Vec<Paragraph> {
    assert_eq!(
        partition.len(),
        sentences.len(),
        "partition covers {} sentences, got {}",
        partition.len(),
        sentences.len()
    );

    partition
        .ranges()
        .enumerate()
        .map(|(index, range)| {
            let text = sentences[range.clone()].join(" ");
            Paragraph::new(text.trim(), range.start, range.end, index)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<String> {
        ["One.", "Two.", "Three.", "Four.", "Five."]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_join_with_single_space() {
        let partition = Partition::whole(5);
        let paragraphs = assemble(&sentences(), &partition);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text, "One. Two. Three. Four. Five.");
        assert_eq!(paragraphs[0].span(), 0..5);
    }

    #[test]
    fn test_no_loss_no_duplication() {
        let partition = Partition::identity(5);
        let paragraphs = assemble(&sentences(), &partition);
        assert_eq!(paragraphs.len(), 5);
        for (i, p) in paragraphs.iter().enumerate() {
            assert_eq!(p.index, i);
            assert_eq!(p.text, sentences()[i]);
        }
    }

    #[test]
    fn test_empty_input() {
        let paragraphs = assemble(&[], &Partition::identity(0));
        assert!(paragraphs.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_mismatched_partition_panics() {
        let _ = assemble(&sentences(), &Partition::identity(3));
    }
}
