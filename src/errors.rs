use std::path::PathBuf;
use thiserror::Error;

/// Catalog lookup errors. A `TitleNotFound` is the normal "no results"
/// path for free-text input and is never surfaced to the user as an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("title not in catalog: {0}")]
    TitleNotFound(String),

    #[error("movie id not in catalog: {0}")]
    IdNotFound(u32),

    #[error("duplicate title in catalog artifact: {0}")]
    DuplicateTitle(String),

    #[error("duplicate movie id in catalog artifact: {0}")]
    DuplicateId(u32),
}

/// Similarity matrix errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("row {row} out of bounds for {size}x{size} matrix")]
    RowOutOfBounds { row: usize, size: usize },

    #[error("matrix is not square: {rows} rows but row {index} has {len} columns")]
    NotSquare { rows: usize, index: usize, len: usize },

    #[error("similarity matrix is {matrix}x{matrix} but catalog has {catalog} movies")]
    CatalogMismatch { matrix: usize, catalog: usize },
}

/// Artifact loading errors. A missing similarity artifact triggers a
/// one-time download; anything that fails past that point aborts startup.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {0}")]
    Missing(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("unsupported artifact version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },

    #[error("failed to download similarity artifact from {url}: {reason}")]
    Download { url: String, reason: String },
}
