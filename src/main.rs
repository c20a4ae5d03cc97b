use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use microsite::blog::{BlogService, FilePostSource, HttpPostSource, PostSource};
use microsite::config::Config;
use microsite::error::Result;
use microsite::services::{AuthService, MessageService};
use microsite::storage::{FileStorage, Storage};
use microsite::ui::{Regions, StaticPage, escape_html};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "microsite=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let (auth, messages) = open_store(&config)?;

    let source: Arc<dyn PostSource> = match &config.posts_url {
        Some(url) => {
            info!("Loading posts from {}", url);
            Arc::new(HttpPostSource::new(url.clone()))
        }
        None => {
            info!("Loading posts from {}", config.posts_path.display());
            Arc::new(FilePostSource::new(&config.posts_path))
        }
    };
    let blog = BlogService::new(source);

    build_site(&config, &auth, &blog).await?;

    let unread = messages.unread_count()?;
    if unread > 0 {
        info!("{} unread contact messages in the store", unread);
    }

    Ok(())
}

fn open_store(config: &Config) -> Result<(AuthService, MessageService)> {
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(&config.storage_path)?);

    Ok((
        AuthService::new(storage.clone()),
        MessageService::new(storage),
    ))
}

async fn build_site(config: &Config, auth: &AuthService, blog: &BlogService) -> Result<()> {
    let out_dir = &config.output_dir;

    // Home page carries the auth region only
    let mut home = StaticPage::with_regions(&[Regions::AUTH]);
    auth.init(&mut home)?;
    write_page(out_dir, "index.html", "Home", &home)?;

    // Blog list page
    let mut list_page = StaticPage::with_regions(&[Regions::AUTH, Regions::BLOG_LIST]);
    auth.update_auth_ui(&mut list_page);
    blog.load_posts(&mut list_page).await;
    write_page(out_dir, "blog.html", "Blog", &list_page)?;

    // One detail page per post
    let posts = blog.posts().await;
    for post in &posts {
        let mut post_page = StaticPage::with_regions(&[Regions::AUTH, Regions::BLOG_POST]);
        auth.update_auth_ui(&mut post_page);
        blog.load_post(&post.id, &mut post_page).await;

        let file = format!("post-{}.html", file_slug(&post.id));
        write_page(out_dir, &file, &post.title, &post_page)?;
    }

    info!(
        "Site written to {} ({} posts)",
        out_dir.display(),
        posts.len()
    );
    Ok(())
}

fn write_page(out_dir: &Path, file: &str, title: &str, page: &StaticPage) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(file);
    fs::write(&path, render_page(title, page))?;

    info!("Wrote {}", path.display());
    Ok(())
}

fn render_page(title: &str, page: &StaticPage) -> String {
    let mut body = String::new();

    if let Some(auth) = page.region(Regions::AUTH) {
        body.push_str(&format!("    <nav class=\"auth-buttons\">{auth}</nav>\n"));
    }
    if let Some(list) = page.region(Regions::BLOG_LIST) {
        body.push_str(&format!("    <main id=\"blog-container\">{list}</main>\n"));
    }
    if let Some(detail) = page.region(Regions::BLOG_POST) {
        body.push_str(&format!(
            "    <main id=\"blog-post-container\">{detail}</main>\n"
        ));
    }

    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
</head>
<body>
{body}</body>
</html>
"#
    )
}

// Post ids land in filenames, so anything outside [A-Za-z0-9_-] is mapped away
fn file_slug(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
