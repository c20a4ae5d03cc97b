use std::env;
use std::path::PathBuf;

pub struct Config {
    pub storage_path: PathBuf,
    pub posts_url: Option<String>,
    pub posts_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let posts_url = match env::var("SITE_POSTS_URL") {
            Ok(url) if url.is_empty() => None,
            Ok(url) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidPostsUrl(url));
                }
                Some(url)
            }
            Err(_) => None,
        };

        Ok(Self {
            storage_path: env::var("SITE_STORAGE_PATH")
                .unwrap_or_else(|_| "site-store.json".to_string())
                .into(),
            posts_url,
            posts_path: env::var("SITE_POSTS_PATH")
                .unwrap_or_else(|_| "data/blog-posts.json".to_string())
                .into(),
            output_dir: env::var("SITE_OUTPUT_DIR")
                .unwrap_or_else(|_| "public".to_string())
                .into(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SITE_POSTS_URL must start with http:// or https://, got {0}")]
    InvalidPostsUrl(String),
}
