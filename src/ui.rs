use std::collections::HashMap;

/// Provides the fixed region names the stores and the blog renderer write
/// into.
pub struct Regions;

impl Regions {
    /// Region holding the login/logout fragment.
    pub const AUTH: &'static str = "auth-buttons";

    /// Region holding the blog list view.
    pub const BLOG_LIST: &'static str = "blog-container";

    /// Region holding the blog detail view.
    pub const BLOG_POST: &'static str = "blog-post-container";
}

/// Receiver for rendered markup. Implementations decide which regions they
/// carry; replacing a region the target does not carry is a silent no-op.
pub trait RenderTarget {
    /// Replaces the contents of `region` with `html`.
    fn replace(&mut self, region: &str, html: String);

    /// Records a navigation to `url`. The logout path is the only caller.
    fn navigate(&mut self, url: &str);
}

/// Buffered page: holds the declared regions' current markup plus the last
/// navigation, for page composition and tests.
pub struct StaticPage {
    regions: HashMap<String, String>,
    location: Option<String>,
}

impl StaticPage {
    /// Creates a page carrying the given regions, all initially empty.
    pub fn with_regions(regions: &[&str]) -> Self {
        Self {
            regions: regions
                .iter()
                .map(|region| (region.to_string(), String::new()))
                .collect(),
            location: None,
        }
    }

    /// Current markup of `region`, or `None` when the page does not carry
    /// it.
    pub fn region(&self, region: &str) -> Option<&str> {
        self.regions.get(region).map(String::as_str)
    }

    /// Last navigated URL, if any.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl RenderTarget for StaticPage {
    fn replace(&mut self, region: &str, html: String) {
        if let Some(slot) = self.regions.get_mut(region) {
            *slot = html;
        }
    }

    fn navigate(&mut self, url: &str) {
        self.location = Some(url.to_string());
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` for interpolation into markup. `&`
/// goes first so the emitted entities are not themselves escaped.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
