//! Known hotspot list: loading, selection, deletion and drag-to-reorder.
//!
//! One reorder cycle walks `ReorderState`:
//!
//! ```text
//! Idle       ── touch start ─────────────────► Pressing
//! Pressing   ── held for the long press ─────► Dragging
//! Idle       ── mouse drag start ────────────► Dragging
//! Pressing   ── moved past jitter, released ─► Idle
//! Dragging   ── released in place, cancel ───► Idle
//! Dragging   ── released on a new index ─────► Persisting
//! Persisting ── saved ───────────────────────► Idle
//! Persisting ── save failed or timed out ────► Reverting
//! Reverting  ── list reloaded ───────────────► Idle
//! Reverting  ── reload failed ───────────────► OutOfSync
//! OutOfSync  ── list reloaded ───────────────► Idle
//! ```
//!
//! A reloaded list ends any gesture in progress. A list that arrives while an
//! order write is in flight is not applied; the list is fetched again once the
//! write has succeeded.

mod auto_scroll;
mod gesture;
mod list;
mod reorder;
mod sync;

use crux_core::Command;

use crate::events::{DragEvent, Event, HotspotEvent};
use crate::model::Model;
use crate::Effect;

/// Handle list events (load, selection, deletion, persistence results)
pub fn handle(event: HotspotEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        HotspotEvent::Load => {
            model.start_loading();
            sync::refetch(model)
        }
        HotspotEvent::LoadResponse { seq, result } => sync::handle_load_response(model, seq, result),

        HotspotEvent::ToggleSelection { name } => list::handle_toggle_selection(model, name),
        HotspotEvent::SelectAll => list::handle_select_all(model),
        HotspotEvent::InvertSelection => list::handle_invert_selection(model),
        HotspotEvent::ClearSelection => list::handle_clear_selection(model),

        HotspotEvent::RequestDelete => list::handle_request_delete(model),
        HotspotEvent::CancelDelete => list::handle_cancel_delete(model),
        HotspotEvent::ConfirmDelete => list::handle_confirm_delete(model),
        HotspotEvent::DeleteResponse(result) => list::handle_delete_response(model, result),

        HotspotEvent::SaveOrderResponse { seq, result } => {
            sync::handle_save_order_response(model, seq, result)
        }
        HotspotEvent::PersistTimeout { seq } => sync::handle_persist_timeout(model, seq),
    }
}

/// Handle pointer and touch input on the list
pub fn handle_drag(event: DragEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DragEvent::MouseDragStart {
            index,
            revision,
            pointer,
        } => gesture::handle_mouse_drag_start(model, index, revision, pointer),
        DragEvent::TouchStart {
            index,
            revision,
            pointer,
        } => gesture::handle_touch_start(model, index, revision, pointer),
        DragEvent::LongPressElapsed { now_ms } => gesture::handle_long_press_elapsed(model, now_ms),
        DragEvent::PointerMove {
            pointer,
            candidate,
            container,
        } => gesture::handle_pointer_move(model, pointer, candidate, container),
        DragEvent::Release { target } => gesture::handle_release(model, target),
        DragEvent::Cancel => gesture::handle_cancel(model),
        DragEvent::AutoScrollTick { now_ms, container } => {
            gesture::handle_auto_scroll_tick(model, now_ms, container)
        }
    }
}
