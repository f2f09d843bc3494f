//! Multipart body of the create-article request.
//!
//! The plan is built from an [`ArticleDraft`] and kept independent of the
//! browser so its field order and naming can be checked natively. The
//! frontend turns it into a `FormData` part by part.

use crate::model::article::ArticleDraft;

pub const TITLE_FIELD: &str = "title";
pub const CONTENT_FIELD: &str = "content";
pub const CATEGORY_FIELD: &str = "categoryIds";
pub const TAGS_FIELD: &str = "tags";
pub const FEATURED_IMAGE_FIELD: &str = "featuredImage";
pub const MEDIA_FIELD: &str = "media";

/// Value of a single multipart field.
#[derive(Debug, Clone, PartialEq)]
pub enum PartValue<F> {
    Text(String),
    File(F),
}

/// One named multipart field. Names repeat for `tags` and `media`.
#[derive(Debug, Clone, PartialEq)]
pub struct Part<F> {
    pub name: &'static str,
    pub value: PartValue<F>,
}

impl<F> Part<F> {
    fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: PartValue::Text(value.into()),
        }
    }

    fn file(name: &'static str, file: F) -> Self {
        Self {
            name,
            value: PartValue::File(file),
        }
    }
}

/// Ordered multipart payload for `POST /api/journalist/articles`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleUpload<F> {
    parts: Vec<Part<F>>,
}

impl<F: Clone> ArticleUpload<F> {
    /// Lays out the draft as `title`, `content`, `categoryIds`, one `tags`
    /// per parsed tag, `featuredImage` when present and one `media` per file.
    ///
    /// The category part is sent empty when none is selected; callers are
    /// expected to validate the draft first.
    pub fn from_draft(draft: &ArticleDraft<F>) -> Self {
        let mut parts = vec![
            Part::text(TITLE_FIELD, draft.title.as_str()),
            Part::text(CONTENT_FIELD, draft.content.as_str()),
            Part::text(
                CATEGORY_FIELD,
                draft.category_id.clone().unwrap_or_default(),
            ),
        ];
        parts.extend(
            draft
                .parsed_tags()
                .into_iter()
                .map(|tag| Part::text(TAGS_FIELD, tag)),
        );
        if let Some(image) = &draft.featured_image {
            parts.push(Part::file(FEATURED_IMAGE_FIELD, image.clone()));
        }
        parts.extend(
            draft
                .media
                .iter()
                .cloned()
                .map(|file| Part::file(MEDIA_FIELD, file)),
        );
        Self { parts }
    }
}

impl<F> ArticleUpload<F> {
    pub fn parts(&self) -> &[Part<F>] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part<F>> {
        self.parts
    }

    /// Text values of every part named `name`, in order.
    pub fn texts(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter(|part| part.name == name)
            .filter_map(|part| match &part.value {
                PartValue::Text(text) => Some(text.as_str()),
                PartValue::File(_) => None,
            })
            .collect()
    }

    /// File handles of every part named `name`, in order.
    pub fn files(&self, name: &str) -> Vec<&F> {
        self.parts
            .iter()
            .filter(|part| part.name == name)
            .filter_map(|part| match &part.value {
                PartValue::File(file) => Some(file),
                PartValue::Text(_) => None,
            })
            .collect()
    }
}
