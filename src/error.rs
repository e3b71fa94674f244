use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the similarity pipeline.
#[derive(Debug, Error)]
pub enum SimilarityError {
    /// The requested source directory does not exist. Recovered locally:
    /// the caller warns and substitutes the current directory.
    #[error("\"{}\" is not a valid directory", .0.display())]
    InvalidDirectory(PathBuf),
    /// No qualifying files in the source directory. Terminal for the run,
    /// not the process.
    #[error("no \".txt\" files found in directory \"{}\"", .0.display())]
    NoDocuments(PathBuf),
    /// A document's bytes are not valid UTF-8. Aborts the whole comparison;
    /// no partial results are emitted.
    #[error("\"{}\" is not valid UTF-8", .path.display())]
    Decoding { path: PathBuf },
    /// Vectors handed to the scorer differ in length. Unreachable through
    /// `build_vectors`, which always produces an aligned pair.
    #[error("vector dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    /// Filesystem failures while listing or reading documents.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
