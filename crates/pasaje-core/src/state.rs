//! Widget Session State
//!
//! One explicit struct for everything the chat widget tracks, with
//! transitions written as pure functions from (state, event) so the session
//! logic tests without any rendering environment.

use crate::message::{Message, Transcript};

/// Fixed assistant reply substituted when the outbound request fails.
pub const FALLBACK_REPLY: &str =
    "Lo siento, no pude responder ahora mismo. Intenta de nuevo en unos segundos.";

/// Widget visibility
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Collapsed to the floating launcher button
    Closed,
    /// Panel open, transcript and input visible
    Expanded,
    /// Panel open but folded to its header bar
    Minimized,
}

impl Visibility {
    /// Whether the panel is open in any form
    pub fn is_open(self) -> bool {
        !matches!(self, Visibility::Closed)
    }
}

/// Everything the widget tracks for one session
#[derive(Clone, Debug)]
pub struct ChatState {
    /// Panel visibility; starts collapsed
    pub visibility: Visibility,
    /// Uncommitted input buffer
    pub draft: String,
    /// True while exactly one outbound call is in flight; submission is
    /// disabled for the whole window
    pub pending: bool,
    /// Ordered turn history, seeded with the assistant greeting
    pub transcript: Transcript,
}

impl ChatState {
    /// Fresh session: closed launcher, empty draft, greeted transcript
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Closed,
            draft: String::new(),
            pending: false,
            transcript: Transcript::seeded(greeting),
        }
    }
}

/// Input alphabet of the session state machine
#[derive(Clone, Debug)]
pub enum Event {
    /// The input buffer was replaced with new text
    DraftEdited(String),
    /// The visitor asked to send the draft
    SubmitPressed,
    /// The chat service answered
    ReplyReceived(String),
    /// The chat service failed, for whatever reason
    RequestFailed,
    /// Launcher clicked: open the panel, or put it away again
    OpenToggled,
    /// Header fold control clicked
    MinimizeToggled,
    /// Header close control clicked
    Dismissed,
}

/// Follow-up work an accepted event hands back to the driver
#[derive(Clone, Debug)]
pub enum Effect {
    /// Send this transcript snapshot to the chat service; the outcome comes
    /// back as `ReplyReceived` or `RequestFailed`.
    DispatchRequest(Vec<Message>),
}

/// Result of applying an event
#[derive(Debug)]
pub enum Applied {
    /// State changed; the driver must run the effect, if any
    Advanced(Option<Effect>),
    /// A guard rejected the event; state is untouched
    Rejected,
}

impl ChatState {
    /// Pure transition function. No IO happens here; the only effect an
    /// event can produce is a request for the driver to perform.
    pub fn apply(&mut self, event: Event) -> Applied {
        match event {
            Event::DraftEdited(text) => {
                // typing is never blocked, only submission
                self.draft = text;
                Applied::Advanced(None)
            }
            Event::SubmitPressed => {
                if self.pending || self.draft.trim().is_empty() {
                    return Applied::Rejected;
                }
                let text = std::mem::take(&mut self.draft);
                self.transcript.push(Message::user(text.trim()));
                self.pending = true;
                Applied::Advanced(Some(Effect::DispatchRequest(
                    self.transcript.turns().to_vec(),
                )))
            }
            Event::ReplyReceived(reply) => {
                if !self.pending {
                    return Applied::Rejected;
                }
                self.transcript.push(Message::assistant(reply));
                self.pending = false;
                Applied::Advanced(None)
            }
            Event::RequestFailed => {
                if !self.pending {
                    return Applied::Rejected;
                }
                self.transcript.push(Message::assistant(FALLBACK_REPLY));
                self.pending = false;
                Applied::Advanced(None)
            }
            Event::OpenToggled => {
                self.visibility = match self.visibility {
                    Visibility::Closed => Visibility::Expanded,
                    Visibility::Expanded | Visibility::Minimized => Visibility::Closed,
                };
                Applied::Advanced(None)
            }
            Event::MinimizeToggled => match self.visibility {
                Visibility::Closed => Applied::Rejected,
                Visibility::Expanded => {
                    self.visibility = Visibility::Minimized;
                    Applied::Advanced(None)
                }
                Visibility::Minimized => {
                    self.visibility = Visibility::Expanded;
                    Applied::Advanced(None)
                }
            },
            Event::Dismissed => {
                if self.visibility == Visibility::Closed {
                    return Applied::Rejected;
                }
                self.visibility = Visibility::Closed;
                Applied::Advanced(None)
            }
        }
    }
}
