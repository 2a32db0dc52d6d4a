//! Word-vector vocabulary tables.
//!
//! A [`WordVectorTable`] maps tokens to dense vectors of one shared
//! dimensionality. It is loaded once by the caller — from the standard
//! GloVe/word2vec whitespace text format, or built in memory for tests —
//! and passed by reference into every segmentation call. The crate holds
//! no global model state; "loaded at most once per process" is the
//! caller's single `let table = ...`.
//!
//! ## Text Format
//!
//! One entry per line, token first, then the vector components:
//!
//! ```text
//! the 0.418 0.24968 -0.41242 ...
//! cat 0.45281 -0.50108 -0.53714 ...
//! ```
//!
//! word2vec exports prepend a `count dim` header line; it is detected and
//! skipped.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// An immutable token → dense-vector mapping with fixed dimensionality.
///
/// ## Example
///
/// ```rust
/// use stanza::WordVectorTable;
///
/// let table = WordVectorTable::from_entries([
///     ("sun".to_string(), vec![0.9, 0.1]),
///     ("rain".to_string(), vec![0.1, 0.9]),
/// ]).unwrap();
///
/// assert_eq!(table.dim(), 2);
/// assert_eq!(table.get("sun"), Some(&[0.9, 0.1][..]));
/// assert_eq!(table.get("snow"), None);
/// ```
#[derive(Debug, Clone)]
pub struct WordVectorTable {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl WordVectorTable {
    /// Build a table from `(token, vector)` pairs.
    ///
    /// The first entry fixes the dimensionality; later entries must match.
    /// Duplicate tokens keep the last vector seen.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTable`] if the iterator is empty,
    /// [`Error::DimensionMismatch`] on ragged vectors.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let mut dim = None;
        let mut vectors = HashMap::new();

        for (token, vector) in entries {
            let expected = *dim.get_or_insert(vector.len());
            if vector.len() != expected {
                return Err(Error::DimensionMismatch {
                    token,
                    expected,
                    found: vector.len(),
                });
            }
            vectors.insert(token, vector);
        }

        match dim {
            None => Err(Error::EmptyTable),
            Some(dim) => Ok(Self { dim, vectors }),
        }
    }

    /// Parse a table from the GloVe/word2vec whitespace text format.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedLine`] on rows with non-numeric components or no
    /// components at all, [`Error::DimensionMismatch`] on ragged rows,
    /// [`Error::EmptyTable`] if nothing parses, [`Error::Io`] on read
    /// failure.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dim = None;
        let mut vectors = HashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(token) = fields.next() else {
                continue;
            };

            // word2vec header: exactly two fields, both integers.
            let rest: Vec<&str> = fields.collect();
            if idx == 0
                && rest.len() == 1
                && token.parse::<usize>().is_ok()
                && rest[0].parse::<usize>().is_ok()
            {
                continue;
            }

            let vector = rest
                .iter()
                .map(|f| {
                    f.parse::<f32>().map_err(|e| Error::MalformedLine {
                        line: idx + 1,
                        reason: format!("bad component {f:?}: {e}"),
                    })
                })
                .collect::<Result<Vec<f32>>>()?;

            if vector.is_empty() {
                return Err(Error::MalformedLine {
                    line: idx + 1,
                    reason: "token with no vector components".to_string(),
                });
            }

            let expected = *dim.get_or_insert(vector.len());
            if vector.len() != expected {
                return Err(Error::DimensionMismatch {
                    token: token.to_string(),
                    expected,
                    found: vector.len(),
                });
            }
            vectors.insert(token.to_string(), vector);
        }

        match dim {
            None => Err(Error::EmptyTable),
            Some(dim) => Ok(Self { dim, vectors }),
        }
    }

    /// Load a table from a text-format file on disk.
    ///
    /// # Errors
    ///
    /// Same as [`WordVectorTable::from_reader`], plus [`Error::Io`] if the
    /// file cannot be opened.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Shared dimensionality of every vector in the table.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tokens in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the vocabulary is empty. Always false for a constructed
    /// table; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Look up a token's vector. Out-of-vocabulary tokens return `None`.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    /// Whether the vocabulary contains a token.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.vectors.contains_key(token)
    }
}
