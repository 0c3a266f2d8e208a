//! Export Page Component
//!
//! Off-screen copy of the visible page in export mode. It only exists
//! while an export is running; the rasterizer looks it up by id.

use leptos::prelude::*;
use paper_todo_core::{ListKind, RowMode};

use super::{ActiveList, CompletedList};
use crate::context::use_app_context;
use crate::export::EXPORT_PAGE_ID;

#[component]
pub fn ExportPage() -> impl IntoView {
    let ctx = use_app_context();
    let busy = Memo::new(move |_| ctx.with_state(|s| s.export().is_busy()));
    let view_state = Memo::new(move |_| ctx.with_state(|s| s.view()));

    view! {
        <Show when=move || busy.get()>
            <div id="export-page-container" class="export-page-container">
                <div id=EXPORT_PAGE_ID class=move || format!("page {}", view_state.get().orientation.class())>
                    <h1 class="page-title">{move || view_state.get().view.title()}</h1>
                    {move || match view_state.get().view.list() {
                        ListKind::Active => view! { <ActiveList mode=RowMode::Export /> }.into_any(),
                        ListKind::Completed => view! { <CompletedList mode=RowMode::Export /> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}
