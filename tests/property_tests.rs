//! Property-based tests for paragraph segmentation.
//!
//! These verify the pipeline's core invariants:
//! - Coverage: no sentence text is lost or duplicated
//! - Order: paragraphs appear in document order with contiguous spans
//! - Validity: partitions cover [0, N) with strictly increasing boundaries
//! - Monotonicity: larger target lengths never produce more segments
//! - Determinism: identical input yields identical output

use proptest::prelude::*;
use stanza::{
    calibrate_penalty, split_optimal, ParagraphSplitter, SentenceSplitter, UnicodeSplitter,
    WordVectorTable,
};

// =============================================================================
// Test Generators
// =============================================================================

const VOCAB: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
];

/// A table assigning each vocabulary word a distinct direction.
fn test_table() -> WordVectorTable {
    let entries = VOCAB.iter().enumerate().map(|(i, w)| {
        let angle = (i as f32) * 0.7;
        ((*w).to_string(), vec![angle.cos(), angle.sin(), 0.1 * i as f32])
    });
    WordVectorTable::from_entries(entries).unwrap()
}

/// Generate text built from known-vocabulary sentences.
fn sentence_like_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::collection::vec(0usize..VOCAB.len(), 3..8), 2..25).prop_map(
        |sentences| {
            sentences
                .iter()
                .map(|words| {
                    let mut s = words
                        .iter()
                        .map(|&w| VOCAB[w])
                        .collect::<Vec<_>>()
                        .join(" ");
                    s.push('.');
                    s
                })
                .collect::<Vec<_>>()
                .join(" ")
        },
    )
}

/// Generate sentence vectors as noisy topic blocks: a handful of topics,
/// each a run of vectors near one shared direction.
fn topic_block_vectors() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(
        (
            // topic direction components
            (0.1f32..1.0, 0.1f32..1.0, 0.1f32..1.0),
            // sentences in this topic
            2usize..7,
        ),
        1..5,
    )
    .prop_map(|topics| {
        let mut vectors = Vec::new();
        for ((x, y, z), count) in topics {
            for k in 0..count {
                let jitter = 0.01 * k as f32;
                vectors.push(vec![x + jitter, y, z]);
            }
        }
        vectors
    })
}

// =============================================================================
// Invariant Helpers
// =============================================================================

/// Non-whitespace content of paragraphs equals that of the input text.
fn paragraphs_cover_text(paragraphs: &[stanza::Paragraph], text: &str) -> bool {
    let expected: Vec<&str> = text.split_whitespace().collect();
    let actual: Vec<&str> = paragraphs
        .iter()
        .flat_map(|p| p.text.split_whitespace())
        .collect();
    expected == actual
}

/// Paragraph sentence spans are contiguous and ascending.
fn spans_contiguous(paragraphs: &[stanza::Paragraph]) -> bool {
    if paragraphs.is_empty() {
        return true;
    }
    if paragraphs[0].start != 0 {
        return false;
    }
    paragraphs.windows(2).all(|w| w[0].end == w[1].start)
        && paragraphs.iter().all(|p| p.start < p.end)
}

// =============================================================================
// Pipeline Invariants
// =============================================================================

proptest! {
    #[test]
    fn pipeline_covers_input(text in sentence_like_text()) {
        let table = test_table();
        let splitter = ParagraphSplitter::new(&table)
            .with_target_segment_len(3)
            .with_min_sentences(2);
        let result = splitter.split(&text);
        prop_assert!(paragraphs_cover_text(&result.paragraphs, &text));
    }

    #[test]
    fn pipeline_spans_contiguous(text in sentence_like_text()) {
        let table = test_table();
        let splitter = ParagraphSplitter::new(&table)
            .with_target_segment_len(3)
            .with_min_sentences(2);
        let result = splitter.split(&text);
        prop_assert!(spans_contiguous(&result.paragraphs));
    }

    #[test]
    fn pipeline_paragraph_count_matches_spans(text in sentence_like_text()) {
        let table = test_table();
        let splitter = ParagraphSplitter::new(&table).with_min_sentences(2);
        let result = splitter.split(&text);

        let sentences = UnicodeSplitter::new().split(&text);
        let covered: usize = result.paragraphs.iter().map(|p| p.sentence_count()).sum();
        prop_assert_eq!(covered, sentences.len());
    }

    #[test]
    fn pipeline_deterministic(text in sentence_like_text()) {
        let table = test_table();
        let splitter = ParagraphSplitter::new(&table)
            .with_target_segment_len(2)
            .with_min_sentences(2);
        let a = splitter.split(&text);
        let b = splitter.split(&text);
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// Optimizer Invariants
// =============================================================================

proptest! {
    #[test]
    fn partition_valid(vectors in topic_block_vectors(), penalty in 0.0f32..5.0) {
        let partition = split_optimal(&vectors, penalty).unwrap();
        let b = partition.boundaries();

        prop_assert_eq!(b[0], 0);
        prop_assert_eq!(*b.last().unwrap(), vectors.len());
        prop_assert!(b.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn penalty_non_negative_and_monotone(vectors in topic_block_vectors()) {
        let mut last = 0.0f32;
        for target in [1usize, 2, 3, 5, 8] {
            let p = calibrate_penalty(&vectors, target);
            prop_assert!(p >= 0.0);
            prop_assert!(p >= last, "penalty dropped: target {} gave {} < {}", target, p, last);
            last = p;
        }
    }

    #[test]
    fn segment_count_monotone_in_target(vectors in topic_block_vectors()) {
        let mut last = usize::MAX;
        for target in [1usize, 2, 3, 5, 8] {
            let penalty = calibrate_penalty(&vectors, target);
            let segments = split_optimal(&vectors, penalty).unwrap().segments();
            prop_assert!(
                segments <= last,
                "segments grew: target {} gave {} > {}", target, segments, last
            );
            last = segments;
        }
    }

    #[test]
    fn higher_penalty_never_more_segments(
        vectors in topic_block_vectors(),
        low in 0.0f32..2.0,
        delta in 0.0f32..3.0,
    ) {
        let coarse = split_optimal(&vectors, low + delta).unwrap().segments();
        let fine = split_optimal(&vectors, low).unwrap().segments();
        prop_assert!(coarse <= fine);
    }
}
