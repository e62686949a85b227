use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Published location of the precomputed similarity artifact
pub const DEFAULT_SIMILARITY_URL: &str =
    "https://github.com/matinee-app/artifacts/releases/latest/download/similarity.bin";

pub const CATALOG_FILE: &str = "movies.json";
pub const SIMILARITY_FILE: &str = "similarity.bin";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Override for the artifact directory; defaults to the platform data dir
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_similarity_url")]
    pub similarity_url: String,
    /// Override for the TMDB endpoint (used by tests against a local server)
    #[serde(default)]
    pub api_base_url: Option<String>,
}

fn default_similarity_url() -> String {
    DEFAULT_SIMILARITY_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            similarity_url: default_similarity_url(),
            api_base_url: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, anyhow::Error> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "matinee", "matinee") {
            let config_path = proj_dirs.config_dir().join("config.json");
            if config_path.exists() {
                let content = fs::read_to_string(config_path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(AppConfig::default())
    }

    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        ProjectDirs::from("com", "matinee", "matinee")
            .map(|proj| proj.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir().join(CATALOG_FILE)
    }

    pub fn similarity_path(&self) -> PathBuf {
        self.data_dir().join(SIMILARITY_FILE)
    }

    /// API key comes from the environment. An absent key is not validated
    /// here; requests simply fail upstream into placeholder fallbacks.
    pub fn api_key(&self) -> String {
        std::env::var("TMDB_API_KEY").unwrap_or_default()
    }
}
