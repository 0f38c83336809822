//! # pasaje-core
//!
//! Framework-free chat session core for the Pasaje assistant widget.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      ChatController                          │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │  ChatState  │  │    watch     │  │    ChatService      │  │
//! │  │  (machine)  │──│   channel    │  │    (boundary)       │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The state machine is pure: every transition is `(state, event) → state`
//! plus an optional effect, so the session logic tests without a browser.
//! The `ChatService` trait keeps the chat backend swappable — HTTP, a test
//! stub, or anything else that turns a transcript into a reply.

pub mod controller;
pub mod error;
pub mod message;
pub mod service;
pub mod state;

pub use controller::{ChatConfig, ChatController, DEFAULT_GREETING};
pub use error::{Result, ServiceError};
pub use message::{Message, Role, Transcript};
pub use service::ChatService;
pub use state::{Applied, ChatState, Effect, Event, Visibility, FALLBACK_REPLY};
