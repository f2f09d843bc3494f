//! Where the journalist API lives and how long feedback stays on screen.

/// Base URL used when neither the build nor the caller provides one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// How long the success message stays visible before the form resets and closes.
pub const SUCCESS_RESET_DELAY_MS: u32 = 1000;

const CATEGORIES_PATH: &str = "/api/journalist/categories";
const ARTICLES_PATH: &str = "/api/journalist/articles";

/// Endpoint configuration for the journalist API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Builds a config rooted at `base_url`. Trailing slashes are dropped so
    /// `http://host/` and `http://host` resolve to the same endpoints. An
    /// empty base yields same-origin relative URLs.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` endpoint listing the categories.
    pub fn categories_url(&self) -> String {
        format!("{}{}", self.base_url, CATEGORIES_PATH)
    }

    /// `POST` endpoint creating an article from a multipart body.
    pub fn articles_url(&self) -> String {
        format!("{}{}", self.base_url, ARTICLES_PATH)
    }
}

impl Default for ApiConfig {
    /// Uses `JOURNALIST_API_BASE` from the build environment, if set.
    fn default() -> Self {
        Self::new(option_env!("JOURNALIST_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}
