//! Sentence vectorization: bag-of-words sums over a word-vector table.
//!
//! A sentence's vector is the sum of the vectors of its in-vocabulary
//! tokens, each weighted by how often it occurs — equivalent to the count
//! vector dotted against the stacked vocabulary matrix, computed here as a
//! direct accumulation. Out-of-vocabulary tokens contribute nothing; a
//! sentence with no recognized tokens maps to the zero vector.
//!
//! Tokenization uses Unicode word boundaries (UAX #29) and lowercases each
//! token before lookup, matching the lowercase vocabularies of common
//! pretrained tables.

use unicode_segmentation::UnicodeSegmentation;

use crate::vocab::WordVectorTable;

/// Embed one sentence as the weighted sum of its word vectors.
///
/// Deterministic; never fails. Unknown tokens are silently skipped.
///
/// ## Example
///
/// ```rust
/// use stanza::{embed_sentence, WordVectorTable};
///
/// let table = WordVectorTable::from_entries([
///     ("cat".to_string(), vec![1.0, 0.0]),
///     ("sat".to_string(), vec![0.0, 1.0]),
/// ]).unwrap();
///
/// // "the" is out of vocabulary and contributes nothing.
/// assert_eq!(embed_sentence(&table, "The cat sat."), vec![1.0, 1.0]);
/// ```
#[must_use]
pub fn embed_sentence(table: &WordVectorTable, sentence: &str) -> Vec<f32> {
    let mut acc = vec![0.0f32; table.dim()];
    for word in sentence.unicode_words() {
        let token = word.to_lowercase();
        if let Some(vector) = table.get(&token) {
            for (a, v) in acc.iter_mut().zip(vector) {
                *a += v;
            }
        }
    }
    acc
}

/// Embed a sequence of sentences, one vector per sentence, same order.
#[must_use]
pub fn embed_all(table: &WordVectorTable, sentences: &[String]) -> Vec<Vec<f32>> {
    sentences
        .iter()
        .map(|s| embed_sentence(table, s))
        .collect()
}
