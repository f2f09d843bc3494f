//! Properties of the `AddArticleModal` component.
//!
//! The parent owns visibility: it flips `is_open` and reacts to the two
//! callbacks. The modal never closes itself.

use common::model::article::CreatedArticle;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AddArticleProps {
    /// Whether the form is shown. Each `false -> true` transition reloads
    /// the categories.
    pub is_open: bool,

    /// Asks the parent to close the form (backdrop, ✕, cancel, or after a
    /// successful submission).
    pub on_close: Callback<()>,

    /// Receives the server representation of a newly created article.
    pub on_article_added: Callback<CreatedArticle>,

    /// Overrides the API base URL, e.g. `https://news.example`. Defaults to
    /// the build-time `JOURNALIST_API_BASE` or `http://localhost:8000`.
    #[prop_or_default]
    pub api_base: Option<AttrValue>,
}
