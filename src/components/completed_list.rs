//! Completed List Component
//!
//! Archived items in completion order. Clicking the checked box restores
//! an item to the end of the active list.

use leptos::prelude::*;
use paper_todo_core::{AppEvent, CompletedItem, ListKind, RowMode};

use crate::context::use_app_context;

#[component]
pub fn CompletedList(mode: RowMode) -> impl IntoView {
    let ctx = use_app_context();

    let rows = move || {
        ctx.with_state(|s| {
            let revision = s.revision();
            s.items()
                .completed()
                .iter()
                .map(|done| (done.clone(), revision))
                .collect::<Vec<(CompletedItem, u64)>>()
        })
    };

    view! {
        <div class="todo-list completed-list">
            <For
                each=rows
                key=|(done, revision)| (done.item.id, *revision)
                children=move |(done, _)| view! { <CompletedRow done=done mode=mode /> }
            />
        </div>
    }
}

#[component]
fn CompletedRow(done: CompletedItem, mode: RowMode) -> impl IntoView {
    let ctx = use_app_context();
    let id = done.item.id;
    let priority = done.item.priority;

    view! {
        <div class="list-item">
            <div
                class="checkbox-box checked"
                on:click=move |_| {
                    if mode == RowMode::Editable {
                        ctx.dispatch(AppEvent::Restored { id });
                    }
                }
            ></div>
            <div class="list-item-text">{done.item.text.clone()}</div>
            <div class="item-meta">
                <span class=format!("priority-select {}", priority.as_str())>{priority.label()}</span>
                <span class="date-display">{done.item.date.clone().unwrap_or_default()}</span>
            </div>
            <span class="completion-time">{done.timestamp.clone()}</span>
            {mode.shows_delete().then(|| view! {
                <button
                    class="delete-btn"
                    on:click=move |_| {
                        ctx.dispatch(AppEvent::RowDeleted { id, list: ListKind::Completed });
                    }
                >
                    "×"
                </button>
            })}
        </div>
    }
}
