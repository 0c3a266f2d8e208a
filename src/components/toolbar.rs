//! Toolbar Component
//!
//! View switch, orientation toggle and export buttons. Everything is
//! disabled while an export is running.

use leptos::prelude::*;
use paper_todo_core::{AppEvent, ExportFormat, Orientation, View};

use crate::context::use_app_context;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let view_state = Memo::new(move |_| ctx.with_state(|s| s.view()));
    let busy = Memo::new(move |_| ctx.with_state(|s| s.export().is_busy()));

    let tab_class = move |view: View| {
        if view_state.get().view == view {
            "view-btn active"
        } else {
            "view-btn"
        }
    };

    view! {
        <div class="toolbar">
            <button
                class=move || tab_class(View::Active)
                disabled=move || busy.get()
                on:click=move |_| {
                    ctx.dispatch(AppEvent::ViewSwitched(View::Active));
                }
            >
                {View::Active.title()}
            </button>
            <button
                class=move || tab_class(View::Completed)
                disabled=move || busy.get()
                on:click=move |_| {
                    ctx.dispatch(AppEvent::ViewSwitched(View::Completed));
                }
            >
                {View::Completed.title()}
            </button>

            <button
                class="orientation-btn"
                disabled=move || busy.get()
                on:click=move |_| {
                    ctx.dispatch(AppEvent::OrientationToggled);
                }
            >
                {move || match view_state.get().orientation {
                    Orientation::Portrait => "切换为横向",
                    Orientation::Landscape => "切换为纵向",
                }}
            </button>

            <button
                class="export-btn"
                disabled=move || busy.get()
                on:click=move |_| ctx.start_export(ExportFormat::Pdf)
            >
                "导出 PDF"
            </button>
            <button
                class="export-btn"
                disabled=move || busy.get()
                on:click=move |_| ctx.start_export(ExportFormat::Png)
            >
                "导出图片"
            </button>
        </div>
    }
}
