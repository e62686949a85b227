//! Recommendation engine: title → top-5 similar movies.

use std::sync::Arc;

use crate::catalog::{Catalog, MovieRecord};
use crate::errors::SimilarityError;
use crate::similarity::SimilarityMatrix;
use crate::tmdb::TmdbClient;

pub const RECOMMEND_COUNT: usize = 5;

#[derive(Clone, Debug)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    similarity: Arc<SimilarityMatrix>,
}

impl Recommender {
    /// The matrix must be aligned to the catalog's row order, so mismatched
    /// sizes are rejected up front.
    pub fn new(
        catalog: Arc<Catalog>,
        similarity: Arc<SimilarityMatrix>,
    ) -> Result<Self, SimilarityError> {
        if similarity.size() != catalog.len() {
            return Err(SimilarityError::CatalogMismatch {
                matrix: similarity.size(),
                catalog: catalog.len(),
            });
        }
        Ok(Self {
            catalog,
            similarity,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Neighbor rows for a title, ordered by descending score. Unknown
    /// titles yield an empty list — the deliberate "no results" contract.
    pub fn neighbor_rows(&self, title: &str) -> Vec<(usize, f32)> {
        let Ok(row) = self.catalog.row_of_title(title) else {
            return Vec::new();
        };
        // Row came from the catalog and sizes are validated in new(), so
        // this cannot go out of bounds.
        self.similarity
            .neighbors(row, RECOMMEND_COUNT)
            .unwrap_or_default()
    }

    /// Recommended records in score order, without any network access
    pub fn recommend_movies(&self, title: &str) -> Vec<&MovieRecord> {
        self.neighbor_rows(title)
            .into_iter()
            .filter_map(|(row, _)| self.catalog.get(row))
            .collect()
    }

    pub fn recommend_titles(&self, title: &str) -> Vec<String> {
        self.recommend_movies(title)
            .into_iter()
            .map(|m| m.title.clone())
            .collect()
    }

    /// Names and poster URLs for the top-5 neighbors of `title`. Result
    /// order follows descending similarity exactly as the matrix returns
    /// it; no re-sorting. Unknown titles return two empty vectors.
    pub async fn recommend(&self, title: &str, tmdb: &TmdbClient) -> (Vec<String>, Vec<String>) {
        let rows = self.neighbor_rows(title);
        let mut names = Vec::with_capacity(rows.len());
        let mut posters = Vec::with_capacity(rows.len());
        for (row, _) in rows {
            let Some(movie) = self.catalog.get(row) else {
                continue;
            };
            names.push(movie.title.clone());
            posters.push(tmdb.fetch_poster(movie.id).await);
        }
        (names, posters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MovieRecord;

    fn record(id: u32, title: &str) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            popularity: 0.0,
            vote_average: 0.0,
            release_date: None,
            revenue: 0.0,
        }
    }

    fn recommender(rows: Vec<Vec<f32>>, titles: &[(u32, &str)]) -> Recommender {
        let catalog = Catalog::from_records(
            titles.iter().map(|&(id, title)| record(id, title)).collect(),
        )
        .unwrap();
        let matrix = SimilarityMatrix::from_rows(rows).unwrap();
        Recommender::new(Arc::new(catalog), Arc::new(matrix)).unwrap()
    }

    #[test]
    fn unknown_title_yields_empty_results() {
        let rec = recommender(
            vec![vec![1.0, 0.5], vec![0.5, 1.0]],
            &[(1, "A"), (2, "B")],
        );
        assert!(rec.neighbor_rows("Unknown Title").is_empty());
        assert!(rec.recommend_titles("Unknown Title").is_empty());
    }

    #[test]
    fn recommends_in_descending_score_order() {
        let rec = recommender(
            vec![
                vec![1.0, 0.9, 0.2],
                vec![0.9, 1.0, 0.4],
                vec![0.2, 0.4, 1.0],
            ],
            &[(1, "A"), (2, "B"), (3, "C")],
        );
        assert_eq!(rec.recommend_titles("A"), vec!["B", "C"]);
        assert_eq!(rec.recommend_titles("C"), vec!["B", "A"]);
    }

    #[test]
    fn returns_min_of_five_and_catalog_size_minus_one() {
        let rec = recommender(
            vec![vec![1.0, 0.5], vec![0.5, 1.0]],
            &[(1, "A"), (2, "B")],
        );
        assert_eq!(rec.recommend_titles("A").len(), 1);
    }

    #[test]
    fn mismatched_matrix_is_rejected() {
        let catalog = Catalog::from_records(vec![record(1, "A")]).unwrap();
        let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let err = Recommender::new(Arc::new(catalog), Arc::new(matrix)).unwrap_err();
        assert_eq!(
            err,
            SimilarityError::CatalogMismatch {
                matrix: 2,
                catalog: 1
            }
        );
    }
}
