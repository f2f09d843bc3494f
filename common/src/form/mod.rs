//! State of the add-article form, independent of any UI toolkit.
//!
//! [`ArticleForm`] owns the draft, the category list, the feedback status and
//! the image preview of one form instance. Every mutation goes through a
//! method so the invariants hold after each event:
//!
//! - at most one category is selected,
//! - the preview belongs to the most recently selected featured image,
//! - category and preview results started under an older activation never
//!   reach the screen,
//! - only one submission is on the wire at a time, across close and reopen.
//!
//! Async work (category fetch, image read, submit) is started by the caller
//! with an [`ActivationToken`] or [`PreviewTicket`] and reported back with it.
//! Closing or reopening the form advances the activation generation, which
//! turns every outstanding token stale.

mod errors;
pub mod messages;

pub use errors::FormError;

use crate::model::article::ArticleDraft;
use crate::model::category::Category;
use crate::requests::ArticleUpload;

/// Identifies one activation (open period) of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationToken(u64);

/// Identifies one featured image selection within an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    activation: ActivationToken,
    selection: u64,
}

impl PreviewTicket {
    pub fn activation(&self) -> ActivationToken {
        self.activation
    }
}

/// In-flight flag plus the two feedback messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// What the caller has to do once a successful submission has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessAction {
    /// Hand the article to the parent, then ask it to close the form.
    NotifyAndClose,
    /// The form was closed in the meantime; only hand the article over.
    NotifyOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleForm<F> {
    draft: ArticleDraft<F>,
    categories: Vec<Category>,
    status: FormStatus,
    preview: Option<String>,
    open: bool,
    generation: u64,
    selection: u64,
    reset_pending: bool,
    /// Activation a still unanswered submission was started under. Survives
    /// close so a reopened form cannot send the same draft twice.
    pending_submit: Option<ActivationToken>,
}

impl<F> Default for ArticleForm<F> {
    fn default() -> Self {
        Self {
            draft: ArticleDraft::default(),
            categories: Vec::new(),
            status: FormStatus::default(),
            preview: None,
            open: false,
            generation: 0,
            selection: 0,
            reset_pending: false,
            pending_submit: None,
        }
    }
}

impl<F> ArticleForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ArticleDraft<F> {
        &self.draft
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Data URL of the featured image, once it has been read.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Token of the current activation. Only meaningful while open.
    pub fn activation(&self) -> ActivationToken {
        ActivationToken(self.generation)
    }

    pub fn is_current(&self, token: ActivationToken) -> bool {
        self.open && token.0 == self.generation
    }

    /// Opens the form. The caller must fetch the categories again with the
    /// returned token; nothing is reused from a previous activation.
    pub fn open(&mut self) -> ActivationToken {
        if self.open {
            return self.activation();
        }
        self.generation += 1;
        self.open = true;
        self.categories.clear();
        self.status = FormStatus {
            loading: self.pending_submit.is_some(),
            ..FormStatus::default()
        };
        self.activation()
    }

    /// Closes the form. The draft is kept for the next activation unless a
    /// successful submission is waiting for its reset; pending async work
    /// becomes stale. A submission still on the wire stays pending.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.generation += 1;
        self.open = false;
        self.status.loading = false;
        if self.reset_pending {
            self.reset_pending = false;
            self.reset();
        }
    }

    pub fn categories_loaded(
        &mut self,
        token: ActivationToken,
        categories: Vec<Category>,
    ) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.categories = categories;
        true
    }

    pub fn categories_failed(&mut self, token: ActivationToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.categories.clear();
        self.status.error = Some(messages::CATEGORIES_FETCH_FAILED.to_string());
        true
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_content(&mut self, content: String) {
        self.draft.content = content;
    }

    pub fn set_tags(&mut self, tags: String) {
        self.draft.tags = tags;
    }

    /// Replaces the featured image. The old preview is dropped right away;
    /// the new one arrives through [`ArticleForm::apply_preview`].
    pub fn select_featured_image(&mut self, file: F) -> PreviewTicket {
        self.selection += 1;
        self.draft.featured_image = Some(file);
        self.preview = None;
        PreviewTicket {
            activation: self.activation(),
            selection: self.selection,
        }
    }

    /// Installs the preview for `ticket`. Returns `false` when a newer image
    /// was selected, the image was removed, or the form was closed since.
    pub fn apply_preview(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if !self.is_current(ticket.activation)
            || ticket.selection != self.selection
            || self.draft.featured_image.is_none()
        {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    pub fn remove_featured_image(&mut self) {
        self.selection += 1;
        self.draft.featured_image = None;
        self.preview = None;
    }

    /// Replaces the media attachments; an empty selection clears them.
    pub fn select_media(&mut self, files: Vec<F>) {
        self.draft.media = files;
    }

    /// Selects the single category. An empty id clears the selection.
    pub fn select_category(&mut self, id: String) {
        self.draft.category_id = if id.is_empty() { None } else { Some(id) };
    }

    /// Checks the fields the form marks as required.
    ///
    /// The image requirement is met by a selected file or by a preview that
    /// is already on screen.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.draft.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.draft.content.trim().is_empty() {
            return Err(FormError::MissingContent);
        }
        if self.draft.category_id.is_none() {
            return Err(FormError::MissingCategory);
        }
        if self.draft.featured_image.is_none() && self.preview.is_none() {
            return Err(FormError::MissingImage);
        }
        Ok(())
    }

    /// Reverts every field to its empty value and drops the preview.
    pub fn reset(&mut self) {
        self.selection += 1;
        self.draft = ArticleDraft::default();
        self.preview = None;
    }

    /// Records a failed submission. Fields are left intact for a retry.
    ///
    /// The failure is shown on whichever activation is open when it lands;
    /// while the form is closed it is only cleared. Returns whether anything
    /// visible changed.
    pub fn submit_failed(&mut self, token: ActivationToken) -> bool {
        if self.pending_submit != Some(token) {
            return false;
        }
        self.pending_submit = None;
        if !self.open {
            return false;
        }
        self.status.loading = false;
        self.status.error = Some(messages::ARTICLE_ADD_FAILED.to_string());
        true
    }

    /// Records a successful submission.
    ///
    /// If the activation that sent it is still open the success message is
    /// shown and the reset is left to [`ArticleForm::finish_success`], which
    /// the caller runs after
    /// [`SUCCESS_RESET_DELAY_MS`](crate::config::SUCCESS_RESET_DELAY_MS).
    /// Otherwise the caller only has to notify the parent: a closed form has
    /// its draft reset right away, a reopened one keeps whatever the user
    /// typed since and just shows the success message.
    pub fn submit_succeeded(&mut self, token: ActivationToken) -> Option<SuccessAction> {
        if self.pending_submit == Some(token) {
            self.pending_submit = None;
        }
        if self.is_current(token) {
            self.status.loading = false;
            self.status.success = Some(messages::ARTICLE_ADDED.to_string());
            self.reset_pending = true;
            return None;
        }
        if self.open {
            self.status.loading = false;
            self.status.success = Some(messages::ARTICLE_ADDED.to_string());
        } else {
            self.reset();
        }
        Some(SuccessAction::NotifyOnly)
    }

    /// Completes a success once the delay has elapsed: clears the draft and
    /// the preview unless a close already did.
    pub fn finish_success(&mut self, token: ActivationToken) -> SuccessAction {
        if self.reset_pending {
            self.reset_pending = false;
            self.reset();
        }
        if self.is_current(token) {
            self.status.success = None;
            SuccessAction::NotifyAndClose
        } else {
            SuccessAction::NotifyOnly
        }
    }
}

impl<F: Clone> ArticleForm<F> {
    /// A featured image whose preview is missing, typically because the form
    /// was closed while it was being read. The caller reads it again and
    /// reports back with the returned ticket.
    pub fn missing_preview(&mut self) -> Option<(PreviewTicket, F)> {
        if !self.open || self.preview.is_some() {
            return None;
        }
        let file = self.draft.featured_image.clone()?;
        self.selection += 1;
        Some((
            PreviewTicket {
                activation: self.activation(),
                selection: self.selection,
            },
            file,
        ))
    }

    /// Starts a submission: validates, enters the in-flight state, clears
    /// previous feedback and returns the multipart plan to send.
    ///
    /// A draft failing validation puts the fixed "required fields" message
    /// on screen, since the browser's `required` check lets whitespace-only
    /// text through.
    pub fn begin_submit(
        &mut self,
        token: ActivationToken,
    ) -> Result<ArticleUpload<F>, FormError> {
        if !self.is_current(token) {
            return Err(FormError::Stale);
        }
        if self.pending_submit.is_some() || self.reset_pending {
            return Err(FormError::InFlight);
        }
        if let Err(err) = self.validate() {
            self.status.success = None;
            self.status.error = Some(messages::REQUIRED_FIELDS_MISSING.to_string());
            return Err(err);
        }
        self.pending_submit = Some(token);
        self.status = FormStatus {
            loading: true,
            error: None,
            success: None,
        };
        Ok(ArticleUpload::from_draft(&self.draft))
    }
}

#[cfg(test)]
mod tests;
