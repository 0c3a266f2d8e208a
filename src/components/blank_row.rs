//! Blank Row Component
//!
//! Trailing entry row. Typing and leaving it creates an item.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::make_on_clear_hover;
use paper_todo_core::{AppEvent, DraftId, Priority, RowKey};

use crate::context::use_app_context;

const PLACEHOLDER: &str = "输入新的待办事项...";

#[component]
pub fn BlankRow(draft: DraftId, revision: u64) -> impl IntoView {
    let ctx = use_app_context();
    let key = RowKey::Blank(draft);
    let text_ref = NodeRef::<Div>::new();
    let on_gesture = move |gesture| ctx.on_drag(gesture);

    // Leaving the row commits typed text or drops the empty row
    let entry_event = move || {
        let text = text_ref.get_untracked().and_then(|el| el.text_content()).unwrap_or_default();
        if text.trim().is_empty() {
            AppEvent::EntryAbandoned { draft }
        } else {
            AppEvent::EntryCommitted { draft, text }
        }
    };

    Effect::new(move |_| {
        if !ctx.focus_requested(key, revision) {
            return;
        }
        if let Some(el) = text_ref.get() {
            let _ = el.focus();
            ctx.clear_focus();
        }
    });

    view! {
        // Blank rows are never drop targets
        <div class="list-item blank-row" on:mousemove=make_on_clear_hover(ctx.dnd, on_gesture)>
            <div class="checkbox-box"></div>
            <div
                class="list-item-text"
                contenteditable="true"
                data-placeholder=PLACEHOLDER
                node_ref=text_ref
                on:blur=move |_| {
                    ctx.dispatch(entry_event());
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Tab" {
                        ev.prevent_default();
                        ctx.tab_from(key, entry_event());
                    }
                }
            ></div>
            <div class="item-meta">
                <select class="priority-select low" disabled=true>
                    <option value=Priority::Low.as_str()>{Priority::Low.label()}</option>
                </select>
                <input type="date" class="date-input" disabled=true />
            </div>
        </div>
    }
}
