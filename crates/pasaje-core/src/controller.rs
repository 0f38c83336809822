//! Chat Session Controller
//!
//! Owns the session state, drives the request lifecycle against the chat
//! service, and publishes every accepted transition through a watch channel
//! so a view layer can project the state without this crate knowing how it
//! renders.

use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

use crate::service::ChatService;
use crate::state::{Applied, ChatState, Effect, Event};

/// Greeting used when the embedder does not supply one.
pub const DEFAULT_GREETING: &str =
    "¡Hola! 👋 Soy el asistente virtual de Pasaje. Pregúntame sobre rutas, horarios o precios.";

/// Controller configuration
#[derive(Clone, Debug)]
pub struct ChatConfig {
    /// Assistant turn that seeds the transcript
    pub greeting: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
        }
    }
}

/// Mediates between user input and the chat service for one mounted widget.
///
/// At most one outbound request is in flight at a time; while it runs, the
/// state machine rejects further submissions. Failures never escape: every
/// service error becomes the fixed fallback turn in the transcript.
pub struct ChatController {
    service: Arc<dyn ChatService>,
    state: watch::Sender<ChatState>,
    session_id: Uuid,
}

impl ChatController {
    /// Create a controller over the given service
    pub fn new(service: Arc<dyn ChatService>, config: ChatConfig) -> Self {
        let (state, _) = watch::channel(ChatState::new(config.greeting));
        Self {
            service,
            state,
            session_id: Uuid::new_v4(),
        }
    }

    /// Create with the default configuration
    pub fn with_defaults(service: Arc<dyn ChatService>) -> Self {
        Self::new(service, ChatConfig::default())
    }

    /// Current state, by clone
    pub fn snapshot(&self) -> ChatState {
        self.state.borrow().clone()
    }

    /// Watch accepted transitions. Rejected events do not wake subscribers.
    pub fn subscribe(&self) -> watch::Receiver<ChatState> {
        self.state.subscribe()
    }

    /// Replace the draft buffer
    pub fn edit_draft(&self, text: impl Into<String>) {
        self.dispatch(Event::DraftEdited(text.into()));
    }

    /// Open the panel from the launcher, or put it away again
    pub fn toggle_open(&self) {
        self.dispatch(Event::OpenToggled);
    }

    /// Fold the open panel to its header bar, or unfold it
    pub fn toggle_minimized(&self) {
        self.dispatch(Event::MinimizeToggled);
    }

    /// Collapse the panel back to the launcher
    pub fn dismiss(&self) {
        self.dispatch(Event::Dismissed);
    }

    /// Commit the draft: append the user turn and run one request against
    /// the chat service.
    ///
    /// A blank draft or an in-flight request makes this a no-op. The call
    /// runs to completion — no cancellation, no timeout at this layer — and
    /// its outcome always lands in the transcript: the reply text on
    /// success, the fixed fallback turn on any failure.
    pub async fn submit(&self) {
        let Some(Effect::DispatchRequest(turns)) = self.dispatch(Event::SubmitPressed) else {
            return;
        };

        tracing::debug!(
            session = %self.session_id,
            turns = turns.len(),
            "dispatching chat request"
        );

        let outcome = match self.service.send(&turns).await {
            Ok(reply) => Event::ReplyReceived(reply),
            Err(err) => {
                tracing::warn!(session = %self.session_id, error = %err, "chat request failed");
                Event::RequestFailed
            }
        };
        self.dispatch(outcome);
    }

    /// Run one event through the machine, waking subscribers only when it
    /// was accepted.
    fn dispatch(&self, event: Event) -> Option<Effect> {
        let mut effect = None;
        self.state.send_if_modified(|state| match state.apply(event) {
            Applied::Advanced(produced) => {
                effect = produced;
                true
            }
            Applied::Rejected => false,
        });
        effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, ServiceError};
    use crate::message::{Message, Role};
    use crate::state::{FALLBACK_REPLY, Visibility};

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    /// Answers (or fails) immediately, recording every transcript it saw.
    struct ScriptedService {
        reply: Option<&'static str>,
        seen: Mutex<Vec<Vec<Message>>>,
    }

    impl ScriptedService {
        fn answering(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait(?Send)]
    impl ChatService for ScriptedService {
        async fn send(&self, transcript: &[Message]) -> Result<String> {
            self.seen.lock().unwrap().push(transcript.to_vec());
            match self.reply {
                Some(reply) => Ok(reply.to_string()),
                None => Err(ServiceError::Transport("connection refused".into())),
            }
        }
    }

    /// Blocks inside `send` until the test releases it, exposing the
    /// in-flight window.
    struct GatedService {
        gate: Notify,
        calls: AtomicUsize,
    }

    impl GatedService {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                gate: Notify::new(),
                calls: AtomicUsize::new(0),
            })
        }

        fn release(&self) {
            self.gate.notify_one();
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait(?Send)]
    impl ChatService for GatedService {
        async fn send(&self, _transcript: &[Message]) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok("listo".into())
        }
    }

    #[tokio::test]
    async fn test_successful_submit_roundtrip() {
        let service = ScriptedService::answering("Cuesta 25 Bs.");
        let controller = ChatController::with_defaults(service.clone());

        controller.edit_draft("¿Cuánto cuesta un pasaje a Villa Tunari?");
        controller.submit().await;

        let state = controller.snapshot();
        assert!(!state.pending);
        assert!(state.draft.is_empty());

        let turns = state.transcript.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].role, Role::Assistant);
        assert!(turns[0].content.starts_with("¡Hola!"));
        assert_eq!(turns[1].role, Role::User);
        assert_eq!(turns[1].content, "¿Cuánto cuesta un pasaje a Villa Tunari?");
        assert_eq!(turns[2].role, Role::Assistant);
        assert_eq!(turns[2].content, "Cuesta 25 Bs.");

        // the outbound call carried the whole transcript, seed included
        let seen = service.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), 2);
        assert_eq!(seen[0][0].role, Role::Assistant);
        assert_eq!(seen[0][1].content, "¿Cuánto cuesta un pasaje a Villa Tunari?");
    }

    #[tokio::test]
    async fn test_failed_submit_appends_fallback() {
        let service = ScriptedService::failing();
        let controller = ChatController::with_defaults(service.clone());

        controller.edit_draft("¿Hay buses a Cochabamba mañana?");
        controller.submit().await;

        let state = controller.snapshot();
        assert!(!state.pending);

        let turns = state.transcript.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].content, "¿Hay buses a Cochabamba mañana?");
        assert_eq!(turns[2].role, Role::Assistant);
        assert_eq!(turns[2].content, FALLBACK_REPLY);
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_submit_issues_no_call() {
        let service = ScriptedService::answering("nunca");
        let controller = ChatController::with_defaults(service.clone());

        controller.submit().await;
        controller.edit_draft("   ");
        controller.submit().await;

        assert_eq!(service.calls(), 0);
        assert_eq!(controller.snapshot().transcript.len(), 1);
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_ignored() {
        let service = GatedService::new();
        let controller = ChatController::with_defaults(service.clone());

        controller.edit_draft("primer mensaje");
        let first = controller.submit();
        let second = async {
            controller.edit_draft("segundo mensaje");
            controller.submit().await; // rejected: a request is in flight
            assert!(controller.snapshot().pending);
            service.release();
        };
        tokio::join!(first, second);

        let state = controller.snapshot();
        assert!(!state.pending);
        assert_eq!(service.calls(), 1);
        // the rejected draft survives for a manual retry
        assert_eq!(state.draft, "segundo mensaje");
        assert_eq!(state.transcript.len(), 3);
    }

    #[tokio::test]
    async fn test_transcript_interleaves_turns() {
        let service = ScriptedService::answering("claro");
        let controller = ChatController::with_defaults(service.clone());

        for question in ["uno", "dos", "tres"] {
            controller.edit_draft(question);
            controller.submit().await;
        }

        let state = controller.snapshot();
        let turns = state.transcript.turns();
        assert_eq!(turns.len(), 7);
        for (i, turn) in turns.iter().enumerate() {
            let expected = if i % 2 == 0 { Role::Assistant } else { Role::User };
            assert_eq!(turn.role, expected, "turn {i}");
        }
        assert_eq!(service.calls(), 3);
    }

    #[tokio::test]
    async fn test_watchers_observe_accepted_transitions() {
        let service = GatedService::new();
        let controller = ChatController::with_defaults(service.clone());
        let mut watcher = controller.subscribe();

        controller.toggle_open();
        assert_eq!(watcher.borrow_and_update().visibility, Visibility::Expanded);

        // rejected events stay invisible to watchers
        controller.submit().await;
        assert!(!watcher.has_changed().unwrap());

        controller.edit_draft("hola");
        assert!(watcher.has_changed().unwrap());
        assert_eq!(watcher.borrow_and_update().draft, "hola");

        tokio::join!(controller.submit(), async {
            assert!(watcher.has_changed().unwrap());
            assert!(watcher.borrow_and_update().pending);
            service.release();
        });
        assert!(!watcher.borrow().pending);
    }

    #[tokio::test]
    async fn test_reply_lands_after_widget_dismissed() {
        let service = GatedService::new();
        let controller = ChatController::with_defaults(service.clone());

        controller.toggle_open();
        controller.edit_draft("¿sale un bus esta noche?");
        tokio::join!(controller.submit(), async {
            controller.dismiss();
            assert_eq!(controller.snapshot().visibility, Visibility::Closed);
            service.release();
        });

        let state = controller.snapshot();
        assert!(!state.pending);
        assert_eq!(state.visibility, Visibility::Closed);
        assert_eq!(state.transcript.last().unwrap().content, "listo");
    }
}
