pub mod render;
pub mod source;

pub use source::{FilePostSource, HttpPostSource, PostSource, StaticPostSource};

use std::sync::Arc;

use tracing::warn;

use crate::models::{FALLBACK_POSTS, Post};
use crate::ui::{Regions, RenderTarget};

pub struct BlogService {
    source: Arc<dyn PostSource>,
}

impl BlogService {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self { source }
    }

    /// Posts from the source, newest first. Equal dates keep their document
    /// order.
    pub async fn posts(&self) -> Vec<Post> {
        let mut posts = self.fetch_or_fallback().await;
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Renders the list view into the blog region: the empty state when
    /// there are no posts, one card per post otherwise.
    pub async fn load_posts(&self, ui: &mut dyn RenderTarget) {
        let posts = self.posts().await;

        let html = if posts.is_empty() {
            render::empty_state()
        } else {
            render::post_list(&posts)
        };

        ui.replace(Regions::BLOG_LIST, html);
    }

    /// Renders the detail view for `post_id`, or the not-found state when
    /// no post carries that id.
    pub async fn load_post(&self, post_id: &str, ui: &mut dyn RenderTarget) {
        let posts = self.fetch_or_fallback().await;

        let html = match posts.iter().find(|p| p.id == post_id) {
            Some(post) => render::post_detail(post),
            None => render::not_found(),
        };

        ui.replace(Regions::BLOG_POST, html);
    }

    async fn fetch_or_fallback(&self) -> Vec<Post> {
        match self.source.fetch_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                warn!("Posts document unavailable, using fallback posts: {}", e);
                FALLBACK_POSTS.clone()
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("Posts request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Posts request returned status {0}")]
    Status(u16),
    #[error("Posts document unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("Posts document invalid: {0}")]
    Parse(#[from] serde_json::Error),
}
