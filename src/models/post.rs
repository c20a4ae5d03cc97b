use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A blog post as published in the posts document. Never mutated by this
/// system; the document (or the fallback set) is the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Slug used in detail-view links.
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub author: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Built-in posts used whenever the external document is unavailable or
/// invalid.
pub static FALLBACK_POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid fallback date");

    vec![
        Post {
            id: "welcome".to_string(),
            title: "Welcome to the Site".to_string(),
            date: date(2024, 1, 15),
            author: "Arvid".to_string(),
            excerpt: "First post on the rebuilt site: what lives here and what to expect."
                .to_string(),
            content: "Welcome! This blog documents the machines in the closet and the \
                      software that keeps them busy.\n\nExpect write-ups on storage, \
                      backups and the occasional detour into whatever broke last weekend."
                .to_string(),
            tags: vec!["welcome".to_string(), "meta".to_string()],
            image: None,
        },
        Post {
            id: "rack-refresh".to_string(),
            title: "Rebuilding the Server Rack".to_string(),
            date: date(2024, 1, 20),
            author: "Arvid".to_string(),
            excerpt: "Swapping the tower for a proper rack: parts list, cabling and lessons."
                .to_string(),
            content: "The old tower finally ran out of drive bays, so the rack went in.\n\n\
                      The **short version**: measure twice, label every cable, and keep a \
                      spare `cat6` run for the switch you have not bought yet."
                .to_string(),
            tags: vec!["homelab".to_string(), "hardware".to_string()],
            image: None,
        },
        Post {
            id: "post-pipeline".to_string(),
            title: "Publishing Posts from the Home Server".to_string(),
            date: date(2024, 1, 25),
            author: "Arvid".to_string(),
            excerpt: "How drafts written on the file server end up as JSON this site renders."
                .to_string(),
            content: "Posts start as plain files on the home server and land here as one \
                      JSON document.\n\nA small sync job exports the drafts folder, and the \
                      site picks the document up on the next build. When the export is \
                      missing you are reading the baked-in copies of these very posts."
                .to_string(),
            tags: vec!["tutorial".to_string(), "automation".to_string()],
            image: None,
        },
    ]
});
