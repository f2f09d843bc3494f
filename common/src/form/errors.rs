use thiserror::Error;

/// Reasons the add-article form refuses to start a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("title is required")]
    MissingTitle,
    #[error("content is required")]
    MissingContent,
    #[error("a category must be selected")]
    MissingCategory,
    #[error("a featured image is required")]
    MissingImage,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form was closed or reopened since this action started")]
    Stale,
}

impl FormError {
    /// Whether the error comes from a field the user still has to fill in.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FormError::MissingTitle
                | FormError::MissingContent
                | FormError::MissingCategory
                | FormError::MissingImage
        )
    }
}
