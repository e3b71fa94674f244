/// This crate is a pairwise document similarity engine.
pub mod config;
pub mod discovery;
pub mod error;
pub mod similarity;

/// A named document with its raw text content.
/// Created by the file-loading collaborator (see `discovery`) or directly
/// by library callers; never mutated after construction.
pub use similarity::Document;

/// Token Frequency structure
/// A struct for analyzing/managing token occurrence frequency within a
/// document. It manages:
/// - The count of occurrences of each token
/// - The total number of tokens in the document
///
/// Built from raw text with `TokenFrequency::from_text` (case folding plus
/// whitespace tokenization), or incrementally via `add_token`/`add_tokens`.
pub use similarity::token::TokenFrequency;

/// Per-pair vector construction
/// `build_vectors` turns two `TokenFrequency` instances into a pair of
/// frequency vectors aligned over their sorted union vocabulary. The
/// vocabulary is local to the compared pair, not shared across the
/// document set.
pub use similarity::vector::{build_vectors, Vocabulary};

/// Cosine similarity scorer
/// Generic over the numeric component type. Degenerate (zero-norm)
/// vectors have an explicit policy: both empty is 1.0, one empty is 0.0.
pub use similarity::scoring::cosine;

/// Ranked results of top-K extraction
/// Holds the ordered `(score, i, j)` list and pretty-prints with `{:#?}`.
pub use similarity::scoring::Ranking;

/// Pairwise similarity matrix
/// The strictly-upper-triangular score table over a document set.
/// Build once with `PairwiseMatrix::build`, then consume with `top_k`.
pub use similarity::matrix::PairwiseMatrix;

/// One-call pipeline: build the matrix and extract the K best pairs.
pub use similarity::rank_documents;

/// Run configuration
/// Explicit configuration structure populated once from the argument list
/// at startup and passed into the pipeline.
pub use config::RunConfig;

/// Error type shared by the whole pipeline.
pub use error::SimilarityError;
