//! Runtime state of the add-article modal.

use common::config::ApiConfig;
use common::form::ArticleForm;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

/// State container for `AddArticleModal`.
///
/// Fields are `pub` because `update` and `view` live in sibling modules.
pub struct AddArticleModal {
    /// Draft, categories, feedback and preview, with browser file handles.
    pub form: ArticleForm<File>,

    /// Endpoints of the journalist API.
    pub config: ApiConfig,

    /// The featured image `<input type="file">`.
    pub featured_input_ref: NodeRef,

    /// The media `<input type="file" multiple>`.
    pub media_input_ref: NodeRef,
}

impl AddArticleModal {
    pub fn new(api_base: Option<&str>) -> Self {
        Self {
            form: ArticleForm::new(),
            config: config_for(api_base),
            featured_input_ref: NodeRef::default(),
            media_input_ref: NodeRef::default(),
        }
    }

    /// Empties the file pickers so the browser's `required` check matches
    /// the draft after an image was removed or the form was reset.
    pub fn clear_file_inputs(&self, include_media: bool) {
        let mut refs = vec![&self.featured_input_ref];
        if include_media {
            refs.push(&self.media_input_ref);
        }
        for input in refs.into_iter().filter_map(|r| r.cast::<HtmlInputElement>()) {
            input.set_value("");
        }
    }
}

pub fn config_for(api_base: Option<&str>) -> ApiConfig {
    api_base.map(ApiConfig::new).unwrap_or_default()
}
