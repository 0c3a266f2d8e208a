//! Todo Row Component
//!
//! One active item: drag handle, completion box, editable text, priority,
//! date and delete button.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_handle_mousedown, make_on_row_mousedown, make_on_row_mousemove};
use paper_todo_core::{AppEvent, Item, ListKind, MetaField, Priority, RowKey, RowMode};

use crate::context::{completion_timestamp, use_app_context};

#[component]
pub fn TodoRow(item: Item, revision: u64, mode: RowMode) -> impl IntoView {
    let ctx = use_app_context();
    let editable = mode == RowMode::Editable;
    let id = item.id;
    let key = RowKey::Item(id);
    let text_ref = NodeRef::<Div>::new();
    let (priority, set_priority) = signal(item.priority);
    let initial_priority = item.priority;
    let on_gesture = move |gesture| ctx.on_drag(gesture);
    let contenteditable = if mode.text_editable() { "true" } else { "false" };
    let controls_disabled = !mode.controls_enabled();

    // Drag feedback: the source row fades, the indicator row gets a top border
    let row_class = move || {
        if !editable {
            return "list-item".to_string();
        }
        ctx.with_state(|s| {
            let drag = s.drag();
            let mut class = String::from("list-item");
            if drag.dragged_id() == Some(id) {
                class.push_str(" dragging");
            }
            let indicator = drag.indicator(s.items().active());
            if indicator.is_some() && indicator == s.items().position(ListKind::Active, id) {
                class.push_str(" drag-over");
            }
            class
        })
    };

    let current_text = move || text_ref.get_untracked().and_then(|el| el.text_content()).unwrap_or_default();

    Effect::new(move |_| {
        if !editable || !ctx.focus_requested(key, revision) {
            return;
        }
        if let Some(el) = text_ref.get() {
            let _ = el.focus();
            ctx.clear_focus();
        }
    });

    let on_row_mousedown = make_on_row_mousedown(ctx.dnd, id, on_gesture);
    let on_row_mousemove = make_on_row_mousemove(ctx.dnd, id, on_gesture);

    view! {
        <div
            class=row_class
            on:mousedown=move |ev| {
                if editable {
                    on_row_mousedown(ev);
                }
            }
            on:mousemove=move |ev| {
                if editable {
                    on_row_mousemove(ev);
                }
            }
        >
            {mode.shows_drag_handle().then(|| view! {
                <div class="drag-handle" on:mousedown=make_on_handle_mousedown(ctx.dnd, id)></div>
            })}

            <div
                class="checkbox-box"
                on:click=move |_| {
                    if editable {
                        ctx.dispatch(AppEvent::CompletionToggled { id, timestamp: completion_timestamp() });
                    }
                }
            ></div>

            <div
                class="list-item-text"
                contenteditable=contenteditable
                node_ref=text_ref
                on:blur=move |_| {
                    // A row dropped by a rebuild blurs too; its edit was already sent
                    let connected = text_ref.get_untracked().is_some_and(|el| el.is_connected());
                    if editable && connected {
                        ctx.dispatch(AppEvent::TextEdited { id, text: current_text() });
                    }
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if editable && ev.key() == "Tab" {
                        ev.prevent_default();
                        ctx.tab_from(key, AppEvent::TextEdited { id, text: current_text() });
                    }
                }
            >
                {item.text.clone()}
            </div>

            <div class="item-meta">
                <select
                    class=move || format!("priority-select {}", priority.get().as_str())
                    disabled=controls_disabled
                    on:change=move |ev| {
                        let value = Priority::parse_lenient(&event_target_value(&ev));
                        set_priority.set(value);
                        ctx.dispatch(AppEvent::MetaChanged { id, field: MetaField::Priority(value) });
                    }
                >
                    {Priority::ALL
                        .into_iter()
                        .map(|p| view! {
                            <option value=p.as_str() selected={p == initial_priority}>{p.label()}</option>
                        })
                        .collect_view()}
                </select>
                <input
                    type="date"
                    class="date-input"
                    value=item.date.clone().unwrap_or_default()
                    disabled=controls_disabled
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.dispatch(AppEvent::MetaChanged { id, field: MetaField::Date(Some(value)) });
                    }
                />
            </div>

            {mode.shows_delete().then(|| view! {
                <button
                    class="delete-btn"
                    on:click=move |_| {
                        ctx.dispatch(AppEvent::RowDeleted { id, list: ListKind::Active });
                    }
                >
                    "×"
                </button>
            })}
        </div>
    }
}
