//! Calls to the journalist API.
//!
//! Both requests carry the session cookie (`credentials: include`); the
//! session itself is owned by the login flow elsewhere in the dashboard.

use common::config::ApiConfig;
use common::model::article::{created_article_from_body, CreatedArticle};
use common::model::category::Category;
use common::requests::{ArticleUpload, PartValue};
use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData, RequestCredentials};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("could not build the multipart body: {0}")]
    FormData(String),
}

/// `GET /api/journalist/categories`.
pub async fn fetch_categories(config: &ApiConfig) -> Result<Vec<Category>, ApiError> {
    let response = Request::get(&config.categories_url())
        .credentials(RequestCredentials::Include)
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<Vec<Category>>().await?)
}

/// `POST /api/journalist/articles` with a multipart body.
///
/// The content type is left to the browser so it can add the boundary.
pub async fn create_article(
    config: &ApiConfig,
    upload: ArticleUpload<File>,
) -> Result<CreatedArticle, ApiError> {
    let body = to_form_data(upload)?;
    let response = Request::post(&config.articles_url())
        .credentials(RequestCredentials::Include)
        .body(body)?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    Ok(created_article_from_body(response.text().await?))
}

fn to_form_data(upload: ArticleUpload<File>) -> Result<FormData, ApiError> {
    let form_data = FormData::new().map_err(js_error)?;
    for part in upload.into_parts() {
        let appended = match &part.value {
            PartValue::Text(text) => form_data.append_with_str(part.name, text),
            PartValue::File(file) => {
                form_data.append_with_blob_and_filename(part.name, file, &file.name())
            }
        };
        appended.map_err(js_error)?;
    }
    Ok(form_data)
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::FormData(format!("{:?}", value))
}
