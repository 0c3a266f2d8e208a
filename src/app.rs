//! Paper Todo App
//!
//! Loads both lists, wires the controller and renders the visible page.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals};
use paper_todo_core::{AppConfig, AppState, ItemId, ListKind, ListRepository, RowMode};
use reactive_stores::Store;

use crate::components::{ActiveList, CompletedList, ExportPage, Toolbar};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::UiState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Lists are read once; every later change is written through
    let storage = BrowserStorage::open();
    let items = ListRepository::new(&storage, &config.storage).load();
    let store = Store::new(UiState::new(AppState::new(items)));

    let dnd = create_dnd_signals::<ItemId>();
    let ctx = AppContext::new(store, storage, config, dnd);
    provide_context(ctx);
    bind_global_handlers(dnd, move |gesture| ctx.on_drag(gesture));

    let view_state = Memo::new(move |_| ctx.with_state(|s| s.view()));

    view! {
        <div class="app">
            <Toolbar />

            <div
                class="page-container"
                style=move || format!("width: {}mm;", ctx.page_width_mm(view_state.get().orientation))
            >
                <div class=move || format!("page {}", view_state.get().orientation.class())>
                    <h1 class="page-title">{move || view_state.get().view.title()}</h1>
                    {move || match view_state.get().view.list() {
                        ListKind::Active => view! { <ActiveList mode=RowMode::Editable /> }.into_any(),
                        ListKind::Completed => view! { <CompletedList mode=RowMode::Editable /> }.into_any(),
                    }}
                </div>
            </div>

            <ExportPage />
        </div>
    }
}
