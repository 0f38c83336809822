//! Chat API Configuration

/// Environment variable supplying the API base address.
pub const API_URL_VAR: &str = "PASAJE_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where the chat API lives
#[derive(Clone, Debug)]
pub struct ChatApiConfig {
    /// Base URL of the Pasaje API, without a trailing slash. Empty means
    /// same-origin: the frontend is served by the API host and requests use
    /// relative paths.
    pub base_url: String,
}

impl Default for ChatApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl ChatApiConfig {
    /// Config for an explicit base address
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read `PASAJE_API_URL`, falling back to the default local address
    pub fn from_env() -> Self {
        match std::env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Same-origin deployment: relative request URLs
    pub fn same_origin() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Full URL of the chat endpoint
    pub fn chat_endpoint(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}
