//! TMDB metadata client.
//!
//! Every fetch degrades to typed defaults — a missing field, a non-200, or
//! a network failure produces the placeholder image or the fallback detail
//! text, never an error the UI has to handle. Decoding from the raw
//! response structs into `MovieDetail` is pure so it can be exercised with
//! canned JSON and no network.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CAST_LIMIT: usize = 5;

/// Raw `/movie/{id}` response. Everything is optional — providers omit
/// fields freely and the defaults are applied in `MovieDetail::from_response`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MovieResponse {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreEntry>,
    pub credits: Option<CreditsResponse>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenreEntry {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<CastCredit>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CastCredit {
    pub name: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastMember {
    pub name: String,
    pub poster: String,
}

/// Enriched movie metadata for the detail screen. Transient — fetched on
/// demand and dropped when the screen changes.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub title: String,
    pub overview: String,
    pub release_year: String,
    pub genres: String,
    pub poster: String,
    pub cast: Vec<CastMember>,
}

/// Full poster URL for an artwork path, or the placeholder when the path
/// is absent or empty.
pub fn poster_url(poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) if !path.is_empty() => format!("{}{}", POSTER_BASE_URL, path),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

impl MovieDetail {
    pub fn from_response(resp: MovieResponse) -> Self {
        let release_year = resp
            .release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| d.chars().take(4).collect())
            .unwrap_or_else(|| "N/A".to_string());
        let cast = resp
            .credits
            .unwrap_or_default()
            .cast
            .into_iter()
            .take(CAST_LIMIT)
            .map(|credit| CastMember {
                poster: poster_url(credit.profile_path.as_deref()),
                name: credit.name,
            })
            .collect();
        Self {
            title: resp.title.unwrap_or_else(|| "Unknown Movie".to_string()),
            overview: resp
                .overview
                .unwrap_or_else(|| "No overview available.".to_string()),
            release_year,
            genres: resp
                .genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            poster: poster_url(resp.poster_path.as_deref()),
            cast,
        }
    }

    /// Detail shown when the request itself failed
    pub fn fallback() -> Self {
        Self::from_response(MovieResponse::default())
    }
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(API_BASE_URL.to_string(), api_key)
    }

    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .user_agent("matinee")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Poster URL for a movie. Placeholder on any failure — never an error.
    pub async fn fetch_poster(&self, movie_id: u32) -> String {
        let url = format!(
            "{}/movie/{}?api_key={}",
            self.base_url, movie_id, self.api_key
        );
        match self.get_json::<MovieResponse>(&url).await {
            Ok(resp) => poster_url(resp.poster_path.as_deref()),
            Err(_) => PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Enriched detail + top cast for a movie. Fallback detail on failure.
    pub async fn fetch_details(&self, movie_id: u32) -> MovieDetail {
        let url = format!(
            "{}/movie/{}?api_key={}&append_to_response=credits",
            self.base_url, movie_id, self.api_key
        );
        match self.get_json::<MovieResponse>(&url).await {
            Ok(resp) => MovieDetail::from_response(resp),
            Err(_) => MovieDetail::fallback(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, anyhow::Error> {
        let resp = self.client.get(url).send().await?;
        Ok(resp.error_for_status()?.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_url_uses_placeholder_for_missing_or_empty_path() {
        assert_eq!(poster_url(None), PLACEHOLDER_IMAGE);
        assert_eq!(poster_url(Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(
            poster_url(Some("/abc.jpg")),
            format!("{}/abc.jpg", POSTER_BASE_URL)
        );
    }

    #[test]
    fn detail_decodes_full_response() {
        let json = r#"{
            "title": "Inception",
            "overview": "A thief who steals corporate secrets.",
            "poster_path": "/inception.jpg",
            "release_date": "2010-07-16",
            "genres": [{"name": "Action"}, {"name": "Science Fiction"}],
            "credits": {"cast": [
                {"name": "Leonardo DiCaprio", "profile_path": "/leo.jpg"},
                {"name": "Joseph Gordon-Levitt", "profile_path": null},
                {"name": "Elliot Page", "profile_path": "/ep.jpg"},
                {"name": "Tom Hardy", "profile_path": "/th.jpg"},
                {"name": "Ken Watanabe", "profile_path": "/kw.jpg"},
                {"name": "Cillian Murphy", "profile_path": "/cm.jpg"}
            ]}
        }"#;
        let resp: MovieResponse = serde_json::from_str(json).unwrap();
        let detail = MovieDetail::from_response(resp);

        assert_eq!(detail.title, "Inception");
        assert_eq!(detail.release_year, "2010");
        assert_eq!(detail.genres, "Action, Science Fiction");
        assert_eq!(detail.poster, format!("{}/inception.jpg", POSTER_BASE_URL));
        assert_eq!(detail.cast.len(), 5, "cast is capped at top 5");
        assert_eq!(detail.cast[0].name, "Leonardo DiCaprio");
        assert_eq!(
            detail.cast[1].poster, PLACEHOLDER_IMAGE,
            "per-member placeholder fallback"
        );
    }

    #[test]
    fn detail_substitutes_defaults_for_absent_fields() {
        let resp: MovieResponse = serde_json::from_str("{}").unwrap();
        let detail = MovieDetail::from_response(resp);

        assert_eq!(detail.title, "Unknown Movie");
        assert_eq!(detail.overview, "No overview available.");
        assert_eq!(detail.release_year, "N/A");
        assert_eq!(detail.genres, "");
        assert_eq!(detail.poster, PLACEHOLDER_IMAGE);
        assert!(detail.cast.is_empty());
    }

    #[test]
    fn release_year_is_first_four_chars_of_date_string() {
        let resp: MovieResponse =
            serde_json::from_str(r#"{"release_date": "1994-09-23"}"#).unwrap();
        assert_eq!(MovieDetail::from_response(resp).release_year, "1994");

        let empty: MovieResponse = serde_json::from_str(r#"{"release_date": ""}"#).unwrap();
        assert_eq!(MovieDetail::from_response(empty).release_year, "N/A");

        // Shorter strings pass through untruncated
        let short: MovieResponse = serde_json::from_str(r#"{"release_date": "94"}"#).unwrap();
        assert_eq!(MovieDetail::from_response(short).release_year, "94");
    }

    #[test]
    fn fallback_matches_empty_response_defaults() {
        assert_eq!(
            MovieDetail::fallback(),
            MovieDetail::from_response(MovieResponse::default())
        );
    }
}
