//! In-memory movie catalog loaded once at startup.
//!
//! The catalog's row order defines the row index into the similarity
//! matrix, so the record sequence must never be reordered after load.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CatalogError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MovieRecord {
    #[serde(rename = "movie_id")]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default, deserialize_with = "de_release_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub revenue: f64,
}

/// Unparseable or absent dates coerce to None rather than failing the load.
fn de_release_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()))
}

/// Sort columns available for category browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Popularity,
    VoteAverage,
    ReleaseDate,
    Revenue,
}

#[derive(Debug)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
    by_title: HashMap<String, usize>,
    by_id: HashMap<u32, usize>,
}

impl Catalog {
    pub fn from_records(movies: Vec<MovieRecord>) -> Result<Self, CatalogError> {
        let mut by_title = HashMap::with_capacity(movies.len());
        let mut by_id = HashMap::with_capacity(movies.len());
        for (row, movie) in movies.iter().enumerate() {
            if by_title.insert(movie.title.clone(), row).is_some() {
                return Err(CatalogError::DuplicateTitle(movie.title.clone()));
            }
            if by_id.insert(movie.id, row).is_some() {
                return Err(CatalogError::DuplicateId(movie.id));
            }
        }
        Ok(Self {
            movies,
            by_title,
            by_id,
        })
    }

    /// Load the catalog artifact (a JSON array of records). Record order in
    /// the file is preserved as the row order.
    pub fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read catalog {}: {}", path.display(), e))?;
        let movies: Vec<MovieRecord> = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to decode catalog {}: {}", path.display(), e))?;
        Ok(Self::from_records(movies)?)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn get(&self, row: usize) -> Option<&MovieRecord> {
        self.movies.get(row)
    }

    /// Row index for a title (exact match)
    pub fn row_of_title(&self, title: &str) -> Result<usize, CatalogError> {
        self.by_title
            .get(title)
            .copied()
            .ok_or_else(|| CatalogError::TitleNotFound(title.to_string()))
    }

    pub fn by_title(&self, title: &str) -> Result<&MovieRecord, CatalogError> {
        self.row_of_title(title).map(|row| &self.movies[row])
    }

    pub fn by_id(&self, id: u32) -> Result<&MovieRecord, CatalogError> {
        self.by_id
            .get(&id)
            .map(|&row| &self.movies[row])
            .ok_or(CatalogError::IdNotFound(id))
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }

    /// Row indices sorted by `key`, truncated to `limit`. Ties keep
    /// ascending row order (stable sort) in both directions.
    pub fn sorted_view(&self, key: SortKey, descending: bool, limit: usize) -> Vec<usize> {
        let mut rows: Vec<usize> = (0..self.movies.len()).collect();
        rows.sort_by(|&a, &b| {
            let ord = self.compare_rows(a, b, key);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });
        rows.truncate(limit);
        rows
    }

    fn compare_rows(&self, a: usize, b: usize, key: SortKey) -> std::cmp::Ordering {
        let (ma, mb) = (&self.movies[a], &self.movies[b]);
        match key {
            SortKey::Popularity => ma.popularity.total_cmp(&mb.popularity),
            SortKey::VoteAverage => ma.vote_average.total_cmp(&mb.vote_average),
            SortKey::ReleaseDate => ma.release_date.cmp(&mb.release_date),
            SortKey::Revenue => ma.revenue.total_cmp(&mb.revenue),
        }
    }
}
