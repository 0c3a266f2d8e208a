//! Active List Component
//!
//! Rows are keyed by item id and render revision, so a bumped revision
//! rebuilds every row while drag previews only move them.

use leptos::prelude::*;
use leptos_dragdrop::make_on_clear_hover;
use paper_todo_core::{Item, ListKind, RowMode};

use super::{BlankRow, TodoRow};
use crate::context::use_app_context;

#[component]
pub fn ActiveList(mode: RowMode) -> impl IntoView {
    let ctx = use_app_context();
    let on_gesture = move |gesture| ctx.on_drag(gesture);

    let rows = move || {
        ctx.with_state(|s| {
            let items = s.items().active();
            let revision = s.revision();
            s.drag()
                .visual_order(items)
                .into_iter()
                .filter_map(|pos| items.get(pos))
                .map(|item| (item.clone(), revision))
                .collect::<Vec<(Item, u64)>>()
        })
    };

    let blanks = move || {
        ctx.with_state(|s| {
            let revision = s.revision();
            s.blanks().drafts().iter().map(|draft| (*draft, revision)).collect::<Vec<_>>()
        })
    };

    view! {
        <div class="todo-list" on:mouseleave=make_on_clear_hover(ctx.dnd, on_gesture)>
            <For
                each=rows
                key=|(item, revision)| (item.id, *revision)
                children=move |(item, revision)| view! { <TodoRow item=item revision=revision mode=mode /> }
            />
            {mode.has_blank_rows(ListKind::Active).then(|| view! {
                <For
                    each=blanks
                    key=|entry| *entry
                    children=|(draft, revision)| view! { <BlankRow draft=draft revision=revision /> }
                />
            })}
        </div>
    }
}
