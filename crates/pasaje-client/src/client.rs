//! HTTP Chat Client
//!
//! `ChatService` over reqwest against the Pasaje API's `/api/chat` route.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pasaje_core::{ChatService, Message, Result, ServiceError};

use crate::config::ChatApiConfig;

/// Request body: the full transcript, oldest turn first
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: &'a [Message],
}

/// Success body
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: String,
}

/// Failure body, when the server sends one
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Chat service over HTTP
pub struct ChatApiClient {
    client: reqwest::Client,
    config: ChatApiConfig,
}

impl ChatApiClient {
    /// Client for an explicit base address
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(ChatApiConfig::new(base_url))
    }

    /// Create from configuration
    pub fn from_config(config: ChatApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(ChatApiConfig::from_env())
    }

    /// Same-origin deployment client
    pub fn same_origin() -> Self {
        Self::from_config(ChatApiConfig::same_origin())
    }
}

#[async_trait(?Send)]
impl ChatService for ChatApiClient {
    async fn send(&self, transcript: &[Message]) -> Result<String> {
        let endpoint = self.config.chat_endpoint();
        tracing::debug!(endpoint = %endpoint, turns = transcript.len(), "posting transcript");

        let response = self
            .client
            .post(&endpoint)
            .json(&ChatRequest {
                messages: transcript,
            })
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            return Err(ServiceError::Status {
                code: status.as_u16(),
                detail,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(body.message)
    }
}
