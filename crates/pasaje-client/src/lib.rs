//! # pasaje-client
//!
//! HTTP implementation of the `ChatService` boundary: posts the transcript
//! to the Pasaje API's `/api/chat` endpoint and hands back the reply text.
//! Compiles for native targets and for wasm32 (where reqwest rides `fetch`).

pub mod client;
pub mod config;

pub use client::ChatApiClient;
pub use config::ChatApiConfig;
