//! End-to-end scenarios
//!
//! Drive the reducer the way the UI does, persisting into an in-memory
//! store, and reload from it.

use crate::config::StorageKeys;
use crate::entry::RowKey;
use crate::event::AppEvent;
use crate::reorder::Hover;
use crate::repository::{KeyValueStore, ListRepository, MemoryStore};
use crate::state::AppState;
use crate::store::ListKind;
use crate::domain::{Item, Priority};

fn commit(state: &mut AppState, repo: &ListRepository<'_, MemoryStore>, text: &str) {
    let draft = state.blanks().last().expect("blank row");
    state.dispatch(AppEvent::EntryCommitted { draft, text: text.to_string() }, repo);
}

fn active_texts(state: &AppState) -> Vec<String> {
    state.items().active().iter().map(|i| i.text.clone()).collect()
}

#[test]
fn test_add_complete_restore() {
    let kv = MemoryStore::new();
    let keys = StorageKeys::default();
    let repo = ListRepository::new(&kv, &keys);
    let mut state = AppState::new(repo.load());

    commit(&mut state, &repo, "Buy milk");
    let item = state.items().active()[0].clone();
    assert_eq!(item.text, "Buy milk");
    assert_eq!(item.priority, Priority::Low);
    assert!(item.date.is_none());

    state.dispatch(AppEvent::CompletionToggled { id: item.id, timestamp: "T".into() }, &repo);
    assert!(state.items().active().is_empty());
    let done = &state.items().completed()[0];
    assert_eq!(done.item, item);
    assert_eq!(done.timestamp, "T");

    state.dispatch(AppEvent::Restored { id: item.id }, &repo);
    assert_eq!(state.items().active(), &[item]);
    assert!(state.items().completed().is_empty());

    let reloaded = repo.load();
    assert_eq!(reloaded, *state.items());
}

#[test]
fn test_drag_first_to_end() {
    let kv = MemoryStore::new();
    let keys = StorageKeys::default();
    let repo = ListRepository::new(&kv, &keys);
    let mut state = AppState::new(repo.load());
    for name in ["A", "B", "C"] {
        commit(&mut state, &repo, name);
    }

    let a = state.items().active()[0].id;
    let c = state.items().active()[2].id;
    state.dispatch(AppEvent::DragStarted { id: a, on_handle: true }, &repo);
    state.dispatch(AppEvent::DragMoved { hover: Some(Hover::lower(c)) }, &repo);
    assert!(state.drag().at_end(state.items().active()));
    let outcome = state.dispatch(AppEvent::DragDropped, &repo);

    assert!(outcome.persist && outcome.rerender);
    assert_eq!(active_texts(&state), vec!["B", "C", "A"]);
    assert_eq!(active_texts(&AppState::new(repo.load())), vec!["B", "C", "A"]);
}

#[test]
fn test_drag_to_end_with_pointer_over_moved_row() {
    let kv = MemoryStore::new();
    let keys = StorageKeys::default();
    let repo = ListRepository::new(&kv, &keys);
    let mut state = AppState::new(repo.load());
    for name in ["A", "B", "C"] {
        commit(&mut state, &repo, name);
    }

    let a = state.items().active()[0].id;
    let c = state.items().active()[2].id;
    state.dispatch(AppEvent::DragStarted { id: a, on_handle: true }, &repo);
    state.dispatch(AppEvent::DragMoved { hover: Some(Hover::lower(c)) }, &repo);
    // The preview draws A last, so the next report is A itself
    state.dispatch(AppEvent::DragMoved { hover: Some(Hover::lower(a)) }, &repo);
    assert!(state.drag().at_end(state.items().active()));
    state.dispatch(AppEvent::DragDropped, &repo);

    assert_eq!(active_texts(&state), vec!["B", "C", "A"]);
}

#[test]
fn test_blank_row_commit_leaves_one_trailing_blank() {
    let kv = MemoryStore::new();
    let keys = StorageKeys::default();
    let repo = ListRepository::new(&kv, &keys);
    let mut state = AppState::new(repo.load());
    commit(&mut state, &repo, "first");

    let keys_after = state.row_keys();
    assert_eq!(state.items().active().len(), 1);
    assert_eq!(keys_after.len(), 2);
    assert!(matches!(keys_after[0], RowKey::Item(_)));
    assert!(matches!(keys_after[1], RowKey::Blank(_)));
}

#[test]
fn test_tab_chain_then_commit() {
    let kv = MemoryStore::new();
    let keys = StorageKeys::default();
    let repo = ListRepository::new(&kv, &keys);
    let mut state = AppState::new(repo.load());

    // Tab out of the only blank row while typing, then the blur commits it
    let first = state.blanks().last().unwrap();
    let focus = state.dispatch(AppEvent::TabPressed { from: RowKey::Blank(first) }, &repo).focus;
    state.dispatch(AppEvent::EntryCommitted { draft: first, text: "one".into() }, &repo);

    assert_eq!(active_texts(&state), vec!["one"]);
    assert_eq!(state.blanks().drafts().len(), 1);
    assert_eq!(state.row_keys().last().copied(), focus);
}

#[test]
fn test_failed_storage_keeps_state() {
    let kv = MemoryStore::new();
    let keys = StorageKeys::default();
    let repo = ListRepository::new(&kv, &keys);
    let mut state = AppState::new(repo.load());
    kv.set_unavailable(true);

    commit(&mut state, &repo, "still here");
    assert_eq!(active_texts(&state), vec!["still here"]);
}

#[test]
fn test_delete_from_each_list() {
    let kv = MemoryStore::new();
    let keys = StorageKeys::default();
    let repo = ListRepository::new(&kv, &keys);
    let mut state = AppState::new(repo.load());
    commit(&mut state, &repo, "keep");
    commit(&mut state, &repo, "archive");
    let archived = state.items().active()[1].id;
    state.dispatch(AppEvent::CompletionToggled { id: archived, timestamp: "t".into() }, &repo);

    state.dispatch(AppEvent::RowDeleted { id: archived, list: ListKind::Completed }, &repo);
    assert!(state.items().completed().is_empty());
    assert_eq!(active_texts(&state), vec!["keep"]);
    assert!(repo.load().completed().is_empty());
}

#[test]
fn test_loads_items_written_by_older_builds() {
    let kv = MemoryStore::new();
    let keys = StorageKeys::default();
    kv.set("todoItems", r#"[{"text":"legacy","priority":"medium","date":""},{"text":"  ","priority":"low","date":""}]"#)
        .unwrap();
    let state = AppState::new(ListRepository::new(&kv, &keys).load());
    let items: Vec<&Item> = state.items().active().iter().collect();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].priority, Priority::Medium);
}
