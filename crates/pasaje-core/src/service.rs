//! Chat Service Boundary
//!
//! The widget treats the chat backend as opaque: an ordered sequence of
//! role+content turns goes out, a single reply text (or a failure) comes
//! back. Response parsing, auth, and transport belong to implementations.

use async_trait::async_trait;

use crate::error::Result;
use crate::message::Message;

/// Boundary trait for the external chat backend.
///
/// Futures are not required to be `Send`: the consumer is the browser's
/// single-threaded event loop, and the wasm HTTP stack does not produce
/// `Send` futures.
#[async_trait(?Send)]
pub trait ChatService {
    /// Send the full transcript, oldest turn first, and await one reply.
    async fn send(&self, transcript: &[Message]) -> Result<String>;
}
