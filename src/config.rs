//! Host Page Configuration
//!
//! Optional JSON overrides embedded in the page:
//! `<script id="paper-todo-config" type="application/json">{...}</script>`

use paper_todo_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "paper-todo-config";

pub fn load_config() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) => AppConfig::from_json(&raw),
        None => AppConfig::default(),
    }
}
