//! Leptos Drag Utilities
//!
//! Pointer dragging of a single element inside a container, using mouse events.
//! Uses movement threshold to distinguish click from drag and reports
//! positions as percentages of the container box.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Container box in client coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<web_sys::DomRect> for Rect {
    fn from(r: web_sys::DomRect) -> Self {
        Self { left: r.left(), top: r.top(), width: r.width(), height: r.height() }
    }
}

/// Convert a client point to percentages of `rect`, clamped to [0, 100]
pub fn percent_within(rect: Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    fn axis(offset: f64, size: f64) -> f64 {
        if size <= 0.0 {
            return 50.0;
        }
        (offset / size * 100.0).clamp(0.0, 100.0)
    }
    (axis(client_x - rect.left, rect.width), axis(client_y - rect.top, rect.height))
}

/// Whether the pointer moved far enough from the press point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// Drag state signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    pub dragging_read: ReadSignal<bool>,
    pub dragging_write: WriteSignal<bool>,
    /// Mousedown seen but threshold not yet crossed
    pub pending_read: ReadSignal<bool>,
    pub pending_write: WriteSignal<bool>,
    /// Press point for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
    /// Live position in percent of the container
    pub position_read: ReadSignal<(f64, f64)>,
    pub position_write: WriteSignal<(f64, f64)>,
}

pub fn create_drag_signals(initial: (f64, f64)) -> DragSignals {
    let (dragging_read, dragging_write) = signal(false);
    let (pending_read, pending_write) = signal(false);
    let (start_read, start_write) = signal((0i32, 0i32));
    let (position_read, position_write) = signal(initial);
    DragSignals {
        dragging_read,
        dragging_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
        position_read,
        position_write,
    }
}

/// Create mousedown handler for the draggable element
/// Records pending drag with start position
pub fn make_on_mousedown(drag: DragSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        ev.prevent_default();
        drag.pending_write.set(true);
        drag.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Document-level mousemove/mouseup listeners, removed on drop
pub struct GlobalDragListeners {
    on_mousemove: Closure<dyn FnMut(web_sys::MouseEvent)>,
    on_mouseup: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl Drop for GlobalDragListeners {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc.remove_event_listener_with_callback("mousemove", self.on_mousemove.as_ref().unchecked_ref());
            let _ = doc.remove_event_listener_with_callback("mouseup", self.on_mouseup.as_ref().unchecked_ref());
        }
    }
}

/// Bind document mousemove/mouseup for dragging.
///
/// `container_rect` supplies the current container box; `on_drop` receives the
/// final percent position when a real drag (not a click) ends.
pub fn bind_global_drag<R, F>(drag: DragSignals, container_rect: R, on_drop: F) -> Option<GlobalDragListeners>
where
    R: Fn() -> Option<Rect> + 'static,
    F: Fn((f64, f64)) + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !drag.pending_read.get_untracked() {
            return;
        }
        let current = (ev.client_x(), ev.client_y());
        if !drag.dragging_read.get_untracked() {
            if !exceeds_threshold(drag.start_read.get_untracked(), current) {
                return;
            }
            drag.dragging_write.set(true);
        }
        if let Some(rect) = container_rect() {
            drag.position_write.set(percent_within(rect, current.0 as f64, current.1 as f64));
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let was_dragging = drag.dragging_read.get_untracked();
        drag.pending_write.set(false);
        drag.dragging_write.set(false);
        if was_dragging {
            on_drop(drag.position_read.get_untracked());
        }
    });

    let doc = web_sys::window()?.document()?;
    doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref()).ok()?;
    doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref()).ok()?;
    Some(GlobalDragListeners { on_mousemove, on_mouseup })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Rect = Rect { left: 100.0, top: 50.0, width: 200.0, height: 100.0 };

    #[test]
    fn test_percent_within_center() {
        assert_eq!(percent_within(BOX, 200.0, 100.0), (50.0, 50.0));
    }

    #[test]
    fn test_percent_within_clamps_outside_points() {
        assert_eq!(percent_within(BOX, 0.0, 500.0), (0.0, 100.0));
    }

    #[test]
    fn test_percent_within_degenerate_box() {
        let flat = Rect { width: 0.0, ..BOX };
        assert_eq!(percent_within(flat, 120.0, 50.0).0, 50.0);
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }
}
