//! Floating Chat Widget
//!
//! Projects the `pasaje-core` controller into Leptos signals: the widget
//! renders whatever state the controller publishes and feeds every user
//! gesture back as an event. All session logic lives in the core crate.

use std::rc::Rc;
use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;

use pasaje_client::ChatApiClient;
use pasaje_core::{ChatController, Visibility};

use super::MessageBubble;

/// Base address injected at build time; absent means the frontend is served
/// by the API host and requests stay same-origin.
fn api_client() -> ChatApiClient {
    match option_env!("PASAJE_API_URL") {
        Some(url) if !url.trim().is_empty() => ChatApiClient::new(url),
        _ => ChatApiClient::same_origin(),
    }
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let controller =
        StoredValue::new_local(Rc::new(ChatController::with_defaults(Arc::new(api_client()))));
    let (state, set_state) = signal(controller.with_value(|c| c.snapshot()));

    // Project accepted transitions into the signal; the watch channel only
    // wakes this loop when the state actually changed.
    {
        let controller = controller.with_value(Rc::clone);
        leptos::task::spawn_local(async move {
            let mut watcher = controller.subscribe();
            while watcher.changed().await.is_ok() {
                set_state.set(watcher.borrow().clone());
            }
        });
    }

    let draft_ref: NodeRef<html::Textarea> = NodeRef::new();
    let log_ref: NodeRef<html::Div> = NodeRef::new();

    // Focus the input when the panel opens from the launcher.
    let prev_visibility = StoredValue::new(Visibility::Closed);
    Effect::new(move |_| {
        let now = state.with(|s| s.visibility);
        let was = prev_visibility.get_value();
        prev_visibility.set_value(now);
        if was == Visibility::Closed && now == Visibility::Expanded {
            if let Some(input) = draft_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Keep the newest turn in view.
    Effect::new(move |_| {
        state.track();
        if let Some(log) = log_ref.get() {
            log.set_scroll_top(log.scroll_height());
        }
    });

    let toggle_open = move |_| controller.with_value(|c| c.toggle_open());
    let toggle_minimized = move |_| controller.with_value(|c| c.toggle_minimized());
    let dismiss = move |_| controller.with_value(|c| c.dismiss());
    let edit_draft = move |ev| controller.with_value(|c| c.edit_draft(event_target_value(&ev)));
    let send = move || {
        let controller = controller.with_value(Rc::clone);
        leptos::task::spawn_local(async move {
            controller.submit().await;
        });
    };
    let send_click = send;

    view! {
        <div class="chat-widget">
            <Show when=move || !state.with(|s| s.visibility.is_open())>
                <button class="chat-launcher" on:click=toggle_open.clone()>
                    "💬"
                </button>
            </Show>

            <Show when=move || state.with(|s| s.visibility.is_open())>
                <div class="chat-panel">
                    <header class="chat-header">
                        <span class="chat-title">"Asistente Pasaje"</span>
                        <div class="chat-header-controls">
                            <button class="chat-minimize" on:click=toggle_minimized.clone()>
                                {move || {
                                    if state.with(|s| s.visibility == Visibility::Minimized) {
                                        "▢"
                                    } else {
                                        "—"
                                    }
                                }}
                            </button>
                            <button class="chat-close" on:click=dismiss.clone()>"✕"</button>
                        </div>
                    </header>

                    <Show when=move || state.with(|s| s.visibility == Visibility::Expanded)>
                        <div class="messages" node_ref=log_ref>
                            <For
                                each=move || {
                                    state
                                        .with(|s| s.transcript.turns().to_vec())
                                        .into_iter()
                                        .enumerate()
                                }
                                key=|(i, _)| *i
                                children=move |(_, msg)| view! { <MessageBubble message=msg /> }
                            />
                            <Show when=move || state.with(|s| s.pending)>
                                <div class="message message-assistant typing">"..."</div>
                            </Show>
                        </div>

                        <div class="input-area">
                            <textarea
                                node_ref=draft_ref
                                placeholder="Escribe tu consulta..."
                                prop:value=move || state.with(|s| s.draft.clone())
                                on:input=edit_draft.clone()
                                on:keydown={
                                    let send = send.clone();
                                    move |ev| {
                                        if ev.key() == "Enter" && !ev.shift_key() {
                                            ev.prevent_default();
                                            send();
                                        }
                                    }
                                }
                            />
                            <button
                                class="chat-send"
                                on:click={
                                    let send = send_click.clone();
                                    move |_| send()
                                }
                                disabled=move || state.with(|s| s.pending)
                            >
                                {move || if state.with(|s| s.pending) { "..." } else { "Enviar" }}
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
