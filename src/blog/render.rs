use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Post;
use crate::ui::escape_html;

static BOLD_STARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid pattern"));
static BOLD_UNDERSCORES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.+?)__").expect("valid pattern"));
static ITALIC_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("valid pattern"));
static ITALIC_UNDERSCORES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_(.+?)_").expect("valid pattern"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").expect("valid pattern"));

/// Long-form date as shown in post metadata, e.g. "January 15, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Converts raw post content to markup. Escaping runs first so the tags
/// emitted by the markdown subset are the only markup in the result; the
/// bold passes must run before the italic ones or `**` would be eaten as
/// two italic markers.
pub fn format_content(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let escaped = escape_html(text);

    // Double newlines separate paragraphs, remaining single ones become breaks
    let paragraphs: String = escaped
        .split("\n\n")
        .map(|para| format!("<p>{para}</p>"))
        .collect();
    let mut formatted = paragraphs.replace('\n', "<br>");

    formatted = BOLD_STARS
        .replace_all(&formatted, "<strong>$1</strong>")
        .into_owned();
    formatted = BOLD_UNDERSCORES
        .replace_all(&formatted, "<strong>$1</strong>")
        .into_owned();
    formatted = ITALIC_STARS.replace_all(&formatted, "<em>$1</em>").into_owned();
    formatted = ITALIC_UNDERSCORES
        .replace_all(&formatted, "<em>$1</em>")
        .into_owned();
    formatted = INLINE_CODE
        .replace_all(&formatted, "<code>$1</code>")
        .into_owned();

    formatted
}

/// One card in the list view.
fn post_card(post: &Post) -> String {
    let image = match &post.image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="blog-card-image">"#,
            escape_html(src),
            escape_html(&post.title)
        ),
        None => r#"<div class="blog-card-image"></div>"#.to_string(),
    };

    let date = format_date(post.date);
    let author = escape_html(&post.author);
    let id = escape_html(&post.id);
    let title = escape_html(&post.title);
    let excerpt = escape_html(&post.excerpt);

    format!(
        r#"<article class="blog-card">
    {image}
    <div class="blog-card-content">
        <div class="blog-card-meta">
            <span>📅 {date}</span>
            <span>✍️ {author}</span>
        </div>
        <h3><a href="blog-post.html?id={id}">{title}</a></h3>
        <p>{excerpt}</p>
        <a href="blog-post.html?id={id}" class="read-more">Read more <span>→</span></a>
    </div>
</article>"#
    )
}

/// The list view: one card per post inside the grid wrapper.
pub fn post_list(posts: &[Post]) -> String {
    let cards: String = posts.iter().map(post_card).collect();
    format!(r#"<div class="blog-grid">{cards}</div>"#)
}

/// List view shown when there are no posts at all.
pub fn empty_state() -> String {
    r#"<div class="empty-state">
    <div class="icon">📝</div>
    <h3>No Blog Posts Yet</h3>
    <p>Check back soon for updates on projects and homelab adventures!</p>
</div>"#
        .to_string()
}

/// Detail view shown when the requested id matches no post.
pub fn not_found() -> String {
    r#"<div class="empty-state">
    <div class="icon">🔍</div>
    <h3>Post Not Found</h3>
    <p>The blog post you're looking for doesn't exist.</p>
    <a href="blog.html" class="primary-btn" style="display: inline-block; margin-top: 1rem;">Back to Blog</a>
</div>"#
        .to_string()
}

/// The detail view: header with metadata and tags, formatted content and a
/// back-link.
pub fn post_detail(post: &Post) -> String {
    let tags: String = post
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="skill-tag">{}</span>"#, escape_html(tag)))
        .collect();
    let tags_block = if tags.is_empty() {
        String::new()
    } else {
        format!(
            "\n        <div class=\"skills-grid\" style=\"justify-content: center; margin-top: 1rem;\">{tags}</div>"
        )
    };

    let title = escape_html(&post.title);
    let date = format_date(post.date);
    let author = escape_html(&post.author);
    let content = format_content(&post.content);

    format!(
        r#"<article class="blog-post">
    <header class="blog-post-header">
        <h1>{title}</h1>
        <div class="blog-post-meta">
            <span>📅 {date}</span> • <span>✍️ {author}</span>
        </div>{tags_block}
    </header>
    <div class="blog-post-content">{content}</div>
    <div style="text-align: center; margin-top: 2rem;">
        <a href="blog.html" class="secondary-btn" style="display: inline-block;">← Back to Blog</a>
    </div>
</article>"#
    )
}
