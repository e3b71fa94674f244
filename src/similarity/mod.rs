pub mod matrix;
pub mod scoring;
pub mod token;
pub mod vector;

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;
use self::matrix::PairwiseMatrix;
use self::scoring::Ranking;

/// A named document: identifier plus raw text content. Immutable once
/// loaded; created by the file-loading collaborator and owned by the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Document {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Score every unordered pair of `documents` and extract the `k` best,
/// best first. Convenience wrapper over `PairwiseMatrix`.
pub fn rank_documents(documents: &[Document], k: usize) -> Result<Ranking, SimilarityError> {
    let mut matrix = PairwiseMatrix::build(documents)?;
    Ok(matrix.top_k(k))
}
