//! Leptos DragDrop Utilities
//!
//! Row reordering for Leptos using mouse events.
//! A drag only starts from a row's handle, and only after the pointer has
//! moved past a small threshold, so a plain click stays a click.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Vertical half of a row under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    Upper,
    Lower,
}

impl Half {
    /// `offset_y` is measured from the row's top edge
    pub fn from_offset(offset_y: f64, height: f64) -> Self {
        if offset_y > height / 2.0 {
            Half::Lower
        } else {
            Half::Upper
        }
    }
}

/// Gestures reported to the caller, in order
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragGesture<K> {
    /// A press on a row. Off the handle it cancels; on the handle it is
    /// reported once the pointer passed the threshold.
    Started { key: K, on_handle: bool },
    /// Row under the pointer changed (None = no droppable row)
    Hovered(Option<(K, Half)>),
    /// Mouse released while dragging
    Released,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K: Copy + PartialEq + Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<K>>,
    pub dragging_write: WriteSignal<Option<K>>,
    /// Pending key (mousedown on handle but not yet dragging)
    pub pending_read: ReadSignal<Option<K>>,
    pub pending_write: WriteSignal<Option<K>>,
    /// Last reported hover, to report changes only
    pub hover_read: ReadSignal<Option<(K, Half)>>,
    pub hover_write: WriteSignal<Option<(K, Half)>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether a pointer displacement starts a drag
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals<K: Copy + PartialEq + Send + Sync + 'static>() -> DndSignals<K> {
    let (dragging_read, dragging_write) = signal(None::<K>);
    let (pending_read, pending_write) = signal(None::<K>);
    let (hover_read, hover_write) = signal(None::<(K, Half)>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        pending_read,
        pending_write,
        hover_read,
        hover_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<K: Copy + PartialEq + Send + Sync + 'static>(dnd: &DndSignals<K>) {
    dnd.dragging_write.set(None);
    dnd.pending_write.set(None);
    dnd.hover_write.set(None);
}

/// Create mousedown handler for a row's drag handle.
/// Records pending drag with start position.
pub fn make_on_handle_mousedown<K: Copy + PartialEq + Send + Sync + 'static>(
    dnd: DndSignals<K>,
    key: K,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Keep the row handler from treating this as an off-handle press
            ev.stop_propagation();
            ev.prevent_default();
            dnd.pending_write.set(Some(key));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousedown handler for the row itself. Reaching it means the
/// press missed the handle, which cancels any pending gesture.
pub fn make_on_row_mousedown<K, F>(dnd: DndSignals<K>, key: K, on_gesture: F) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DragGesture<K>) + Copy + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            dnd.pending_write.set(None);
            on_gesture(DragGesture::Started { key, on_handle: false });
        }
    }
}

/// Create mousemove handler for rows: reports which half of the row the
/// pointer is over while dragging
pub fn make_on_row_mousemove<K, F>(dnd: DndSignals<K>, key: K, on_gesture: F) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DragGesture<K>) + Copy + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_none() {
            return;
        }
        let Some(row) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let rect = row.get_bounding_client_rect();
        let half = Half::from_offset(f64::from(ev.client_y()) - rect.top(), rect.height());
        report_hover(&dnd, Some((key, half)), on_gesture);
    }
}

/// Create handler for anything that is not a drop target (blank rows,
/// leaving the list): clears the hover
pub fn make_on_clear_hover<K, F>(dnd: DndSignals<K>, on_gesture: F) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DragGesture<K>) + Copy + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            report_hover(&dnd, None, on_gesture);
        }
    }
}

fn report_hover<K, F>(dnd: &DndSignals<K>, hover: Option<(K, Half)>, on_gesture: F)
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DragGesture<K>),
{
    if dnd.hover_read.get_untracked() != hover {
        dnd.hover_write.set(hover);
        on_gesture(DragGesture::Hovered(hover));
    }
}

/// Bind document mousemove - starts the drag once moved past the threshold
fn bind_global_mousemove<K, F>(dnd: DndSignals<K>, on_gesture: F)
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DragGesture<K>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_read.get_untracked() else {
            return;
        };
        if dnd.dragging_read.get_untracked().is_some() {
            return;
        }
        let dx = ev.client_x() - dnd.start_x_read.get_untracked();
        let dy = ev.client_y() - dnd.start_y_read.get_untracked();
        if exceeds_threshold(dx, dy) {
            dnd.dragging_write.set(Some(pending));
            on_gesture(DragGesture::Started { key: pending, on_handle: true });
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection, plus the mousemove
/// handler that promotes a pending press into a drag.
///
/// Bind once per app: the listeners live as long as the page.
pub fn bind_global_handlers<K, F>(dnd: DndSignals<K>, on_gesture: F)
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DragGesture<K>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_release = on_gesture.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let was_dragging = dnd.dragging_read.get_untracked().is_some();
        end_drag(&dnd);
        // Without a drag the click event fires naturally on the element
        if was_dragging {
            on_release(DragGesture::Released);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, on_gesture);
}
