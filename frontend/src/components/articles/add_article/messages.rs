use common::form::{ActivationToken, PreviewTicket};
use common::model::article::CreatedArticle;
use common::model::category::Category;
use web_sys::File;

#[derive(Clone)]
pub enum Msg {
    CategoriesLoaded(ActivationToken, Vec<Category>),
    CategoriesFailed(ActivationToken),
    SetTitle(String),
    SetContent(String),
    SetTags(String),
    FeaturedImageSelected(File),
    PreviewReady(PreviewTicket, String),
    RemoveFeaturedImage,
    MediaSelected(Vec<File>),
    CategorySelected(String),
    Submit,
    SubmitSucceeded(ActivationToken, CreatedArticle),
    SubmitFailed(ActivationToken),
    SuccessDelayElapsed(ActivationToken, CreatedArticle),
}
