//! Precomputed item-item similarity matrix.
//!
//! The matrix is a dense row-major f32 square aligned to the catalog's row
//! order. It ships as a versioned bincode artifact; on first run it is
//! downloaded once and cached in the data directory indefinitely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ArtifactError, SimilarityError};

/// Artifact version — increment when `SimilarityArtifact` changes to
/// invalidate old downloads
const ARTIFACT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SimilarityArtifact {
    version: u32,
    size: usize,
    scores: Vec<f32>,
}

#[derive(Debug)]
pub struct SimilarityMatrix {
    scores: Vec<f32>,
    size: usize,
}

impl SimilarityMatrix {
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, SimilarityError> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SimilarityError::NotSquare {
                    rows: size,
                    index,
                    len: row.len(),
                });
            }
            scores.extend(row);
        }
        Ok(Self { scores, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row(&self, index: usize) -> Result<&[f32], SimilarityError> {
        if index >= self.size {
            return Err(SimilarityError::RowOutOfBounds {
                row: index,
                size: self.size,
            });
        }
        let start = index * self.size;
        Ok(&self.scores[start..start + self.size])
    }

    /// The `k` highest-scoring rows for `row`, excluding `row` itself,
    /// ordered by descending score. Ties keep ascending row order because
    /// the sort is stable over an already-ascending index sequence.
    pub fn neighbors(&self, row: usize, k: usize) -> Result<Vec<(usize, f32)>, SimilarityError> {
        let scores = self.row(row)?;
        let mut ranked: Vec<(usize, f32)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|&(other, _)| other != row)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(k);
        Ok(ranked)
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::Missing(path.to_path_buf()));
        }
        let data = std::fs::read(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: SimilarityArtifact =
            bincode::deserialize(&data).map_err(|e| ArtifactError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        if artifact.version != ARTIFACT_VERSION {
            return Err(ArtifactError::Version {
                found: artifact.version,
                expected: ARTIFACT_VERSION,
            });
        }
        if artifact.scores.len() != artifact.size * artifact.size {
            return Err(ArtifactError::Decode {
                path: path.to_path_buf(),
                reason: format!(
                    "expected {} scores for size {}, found {}",
                    artifact.size * artifact.size,
                    artifact.size,
                    artifact.scores.len()
                ),
            });
        }
        Ok(Self {
            scores: artifact.scores,
            size: artifact.size,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let artifact = SimilarityArtifact {
            version: ARTIFACT_VERSION,
            size: self.size,
            scores: self.scores.clone(),
        };
        let encoded = bincode::serialize(&artifact).map_err(|e| ArtifactError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ArtifactError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, encoded).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the artifact, downloading it first if the local copy is absent.
    /// A failed download is fatal — there is no similarity data to run with.
    pub async fn load_or_fetch(path: &Path, url: &str) -> Result<Self, ArtifactError> {
        if !path.exists() {
            fetch_artifact(path, url).await?;
        }
        Self::load(path)
    }
}

async fn fetch_artifact(path: &Path, url: &str) -> Result<(), ArtifactError> {
    let download = |reason: String| ArtifactError::Download {
        url: url.to_string(),
        reason,
    };
    let resp = reqwest::get(url).await.map_err(|e| download(e.to_string()))?;
    let resp = resp.error_for_status().map_err(|e| download(e.to_string()))?;
    let bytes = resp.bytes().await.map_err(|e| download(e.to_string()))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, &bytes).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimilarityMatrix {
        SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.9, 0.2],
            vec![0.9, 1.0, 0.4],
            vec![0.2, 0.4, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn neighbors_excludes_own_row() {
        let matrix = sample();
        for row in 0..3 {
            let neighbors = matrix.neighbors(row, 3).unwrap();
            assert!(neighbors.iter().all(|&(other, _)| other != row));
        }
    }

    #[test]
    fn neighbors_orders_by_descending_score() {
        let matrix = sample();
        let neighbors = matrix.neighbors(0, 5).unwrap();
        assert_eq!(neighbors, vec![(1, 0.9), (2, 0.2)]);
    }

    #[test]
    fn neighbors_breaks_ties_by_lower_row_index() {
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.5, 0.5, 0.5],
            vec![0.5, 1.0, 0.5, 0.5],
            vec![0.5, 0.5, 1.0, 0.5],
            vec![0.5, 0.5, 0.5, 1.0],
        ])
        .unwrap();
        let neighbors = matrix.neighbors(2, 3).unwrap();
        assert_eq!(
            neighbors.iter().map(|&(row, _)| row).collect::<Vec<_>>(),
            vec![0, 1, 3]
        );
    }

    #[test]
    fn neighbors_rejects_out_of_bounds_row() {
        let matrix = sample();
        assert_eq!(
            matrix.neighbors(3, 5),
            Err(SimilarityError::RowOutOfBounds { row: 3, size: 3 })
        );
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5]]).unwrap_err();
        assert_eq!(
            err,
            SimilarityError::NotSquare {
                rows: 2,
                index: 1,
                len: 1
            }
        );
    }

    #[test]
    fn artifact_round_trips_through_disk() {
        let matrix = sample();
        let path = std::env::temp_dir().join("matinee_similarity_test.bin");
        matrix.save(&path).unwrap();
        let loaded = SimilarityMatrix::load(&path).unwrap();
        assert_eq!(loaded.size(), 3);
        assert_eq!(loaded.row(1).unwrap(), matrix.row(1).unwrap());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_reports_missing_artifact() {
        let path = std::env::temp_dir().join("matinee_similarity_absent.bin");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            SimilarityMatrix::load(&path),
            Err(ArtifactError::Missing(_))
        ));
    }
}
