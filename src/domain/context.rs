//! The article snapshot that share links describe.

// ============================================================================
// Share Context
// ============================================================================

/// Immutable snapshot of the article being shared.
///
/// Captured once at startup from configuration and CLI flags. The image URL
/// is the one deliberately late-bound value: Pinterest resolves it at
/// dispatch time through [`ShareContext::resolve_image`], so an article
/// without an image pins with an empty media parameter instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareContext {
    /// Canonical URL of the article page.
    pub page_url: String,
    /// Article title.
    pub title: String,
    /// Article description text; may be empty.
    pub description: String,
    /// URL of the article's lead image, when the article has one.
    image_url: Option<String>,
}

impl ShareContext {
    /// Fallback title when the article supplies none.
    pub const DEFAULT_TITLE: &'static str = "Check out this article!";

    /// Creates a new share context.
    ///
    /// An empty title falls back to [`Self::DEFAULT_TITLE`].
    #[must_use]
    pub fn new(
        page_url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: Option<String>,
    ) -> Self {
        let title = title.into();
        Self {
            page_url: page_url.into(),
            title: if title.is_empty() {
                Self::DEFAULT_TITLE.to_string()
            } else {
                title
            },
            description: description.into(),
            image_url,
        }
    }

    /// Resolves the article image URL at dispatch time.
    ///
    /// Returns an empty string when the article has no image.
    #[must_use]
    pub fn resolve_image(&self) -> String {
        self.image_url.clone().unwrap_or_default()
    }

    /// Composes the tweet text: `"<title> - <description>"` when the
    /// description is non-empty, the bare title otherwise.
    #[must_use]
    pub fn tweet_text(&self) -> String {
        if self.description.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.description)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
