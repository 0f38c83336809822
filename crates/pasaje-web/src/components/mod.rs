//! UI Components

mod chat_widget;

pub use chat_widget::ChatWidget;

use leptos::prelude::*;
use pasaje_core::Message;

/// Message bubble component
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = format!("message message-{}", message.role);
    let time = message.sent_at.format("%H:%M").to_string();

    view! {
        <div class=class>
            <p class="content">{message.content}</p>
            <span class="time">{time}</span>
        </div>
    }
}
