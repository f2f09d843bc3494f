//! The article being composed in the add-article form.

/// Server representation of a freshly created article.
///
/// The form never looks inside it; it is handed to the parent as-is.
pub type CreatedArticle = serde_json::Value;

/// Editable fields of a new article.
///
/// `F` is the file handle type: `web_sys::File` in the browser, anything
/// cheap to clone in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDraft<F> {
    pub title: String,
    pub content: String,
    pub featured_image: Option<F>,
    pub media: Vec<F>,
    /// Single-select; `None` until the user picks a category.
    pub category_id: Option<String>,
    /// Raw comma separated text as typed. See [`parse_tags`].
    pub tags: String,
}

/// Interprets the body of a successful create-article reply.
///
/// JSON is passed on as parsed, an empty body becomes `null` and anything
/// else is kept as a JSON string: the article exists either way, so the
/// reply must not turn into a failure.
pub fn created_article_from_body(body: String) -> CreatedArticle {
    if body.trim().is_empty() {
        return CreatedArticle::Null;
    }
    serde_json::from_str(&body).unwrap_or(CreatedArticle::String(body))
}

impl<F> Default for ArticleDraft<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            featured_image: None,
            media: Vec::new(),
            category_id: None,
            tags: String::new(),
        }
    }
}

impl<F> ArticleDraft<F> {
    /// Tags parsed out of the raw `tags` text.
    pub fn parsed_tags(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }
}

/// Splits a comma separated tag list.
///
/// Entries are trimmed and empty ones dropped; order is preserved and
/// duplicates are kept, the backend deduplicates.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
