use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::blog::BlogError;
use crate::models::Post;

/// Where the posts document comes from. Every source failure is handled the
/// same way by the blog service: fall back to the built-in posts.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, BlogError>;
}

/// Fetches the posts document over HTTP.
pub struct HttpPostSource {
    http: reqwest::Client,
    posts_url: String,
}

impl HttpPostSource {
    pub fn new(posts_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            posts_url: posts_url.into(),
        }
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, BlogError> {
        debug!("Fetching posts document from {}", self.posts_url);

        let resp = self.http.get(&self.posts_url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(BlogError::Status(status.as_u16()));
        }

        Ok(resp.json().await?)
    }
}

/// Reads the posts document from a local file, the usual layout for a
/// statically deployed site.
pub struct FilePostSource {
    path: PathBuf,
}

impl FilePostSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PostSource for FilePostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, BlogError> {
        debug!("Reading posts document from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Serves a fixed list of posts.
pub struct StaticPostSource {
    posts: Vec<Post>,
}

impl StaticPostSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl PostSource for StaticPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, BlogError> {
        Ok(self.posts.clone())
    }
}
