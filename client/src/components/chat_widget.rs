//! Floating chat assistant: toggle button, message panel, chips, input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `RwSignal<ChatState>` from context. Timers are owned by a
//! local `TimerBook`; the conversation is mounted once the widget is live in
//! the browser and torn down in `on_cleanup`, which cancels every pending
//! greeting or reply.

use chat::{EscapeAction, Message, script};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::chat::{BrowserHost, ChatState, Navigate, TimerBook};
use crate::util::browser;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let timers = StoredValue::new_local(TimerBook::new());
    let navigate = use_navigate();
    let navigate: Navigate = Box::new(move |path: &str| navigate(path, NavigateOptions::default()));
    let navigate = StoredValue::new_local(navigate);
    let host = BrowserHost::new(chat, timers, navigate);

    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let utc_offset = browser::utc_offset_minutes();

    // Effects only run after hydration, so the greeting timer is browser-only.
    Effect::new(move || host.mount());
    on_cleanup(move || host.unmount());

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let is_open = move || chat.with(|s| s.conversation.is_open());
    let is_typing = move || chat.with(|s| s.conversation.is_typing());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            host.submit_draft();
        }
    };

    view! {
        <div class="chat-widget" class:chat-widget--open=is_open>
            <Show when=is_open>
                <div class="chat-widget__panel" role="dialog" aria-label="Studio Assistant">
                    <div class="chat-widget__header">
                        <div class="chat-widget__avatar">"D"</div>
                        <div class="chat-widget__title">
                            <h3>"Studio Assistant"</h3>
                            <span class="chat-widget__status">
                                <span class="chat-widget__status-dot"></span>
                                "Online"
                            </span>
                        </div>
                        <button class="chat-widget__close" aria-label="Close chat" on:click=move |_| host.close()>
                            "×"
                        </button>
                    </div>

                    <div class="chat-widget__messages" node_ref=messages_ref>
                        <For
                            each=move || chat.with(|s| s.conversation.messages().to_vec())
                            key=|msg| msg.id
                            children=move |msg| view! { <ChatBubble msg=msg host=host utc_offset=utc_offset/> }
                        />
                        <Show when=is_typing>
                            <div class="chat-bubble chat-bubble--bot chat-widget__typing" aria-label="Assistant is typing">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </Show>
                    </div>

                    <div class="chat-widget__chips">
                        {chat
                            .with_untracked(|s| s.conversation.quick_replies().to_vec())
                            .into_iter()
                            .map(|label| {
                                let text = label.clone();
                                view! {
                                    <button
                                        class="chat-widget__chip"
                                        disabled=move || chat.with(ChatState::input_locked)
                                        on:click=move |_| host.quick_reply(&text)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="chat-widget__input-row">
                        <input
                            class="chat-widget__input"
                            type="text"
                            placeholder="Ask me anything..."
                            prop:value=move || chat.with(|s| s.conversation.draft().to_owned())
                            on:input=move |ev| host.set_draft(event_target_value(&ev))
                            on:keydown=on_keydown
                            disabled=is_typing
                        />
                        <button
                            class="btn btn--gold chat-widget__send"
                            aria-label="Send message"
                            on:click=move |_| host.submit_draft()
                            disabled=move || !chat.with(ChatState::can_send)
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>

            <button
                class="chat-widget__toggle"
                aria-label=move || if is_open() { "Close chat" } else { "Open chat" }
                on:click=move |_| host.toggle()
            >
                {move || if is_open() { "×" } else { "💬" }}
            </button>
        </div>
    }
}

/// One message row. Bot messages flagged `has_action` get the follow-up buttons.
#[component]
fn ChatBubble(msg: Message, host: BrowserHost, utc_offset: i32) -> impl IntoView {
    let id = msg.id;
    let row_class = if msg.is_bot() { "chat-row chat-row--bot" } else { "chat-row chat-row--user" };
    let bubble_class = if msg.is_bot() { "chat-bubble chat-bubble--bot" } else { "chat-bubble chat-bubble--user" };
    let time = msg.display_time(utc_offset);
    let actions = (msg.is_bot() && msg.has_action).then(|| {
        view! {
            <div class="chat-bubble__actions">
                <button
                    class="chat-bubble__action"
                    on:click=move |_| host.trigger(id, EscapeAction::ContactForm)
                >
                    {script::CONTACT_ACTION_LABEL}
                </button>
                <button
                    class="chat-bubble__action chat-bubble__action--external"
                    on:click=move |_| host.trigger(id, EscapeAction::ExternalChat)
                >
                    {script::EXTERNAL_ACTION_LABEL}
                </button>
            </div>
        }
    });

    view! {
        <div class=row_class>
            <div class=bubble_class>
                <p class="chat-bubble__text">{msg.text}</p>
                {actions}
                <span class="chat-bubble__time">{time}</span>
            </div>
        </div>
    }
}
