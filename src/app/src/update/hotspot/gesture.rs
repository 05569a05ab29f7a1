//! Mouse drags and long-press touches both end up as one [`DragSession`].

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::haptic_pulse;
use crate::model::Model;
use crate::types::{ContainerMetrics, DragSession, PendingPress, PointerSample, ReorderState};
use crate::Effect;

use super::reorder::CommitOutcome;
use super::{auto_scroll, reorder, sync};

pub fn handle_mouse_drag_start(
    model: &mut Model,
    index: usize,
    revision: u64,
    pointer: PointerSample,
) -> Command<Effect, Event> {
    if let Some(rejected) = reject_start(model, index, revision) {
        return rejected;
    }
    start_session(model, index, &pointer)
}

pub fn handle_touch_start(
    model: &mut Model,
    index: usize,
    revision: u64,
    pointer: PointerSample,
) -> Command<Effect, Event> {
    if let Some(rejected) = reject_start(model, index, revision) {
        return rejected;
    }
    log::debug!("press on hotspot {index}, waiting for long press");
    model.reorder = ReorderState::Pressing(PendingPress {
        index,
        origin: pointer,
    });
    render()
}

/// Promote the pending press once it has been held long enough
pub fn handle_long_press_elapsed(model: &mut Model, now_ms: f64) -> Command<Effect, Event> {
    let ReorderState::Pressing(press) = &model.reorder else {
        return Command::done();
    };
    let press = *press;

    let held = now_ms - press.origin.timestamp_ms;
    if held < f64::from(model.settings.long_press_ms) {
        log::debug!("long press reported after {held}ms, still waiting");
        return Command::done();
    }
    start_session(model, press.index, &press.origin)
}

pub fn handle_pointer_move(
    model: &mut Model,
    pointer: PointerSample,
    candidate: Option<usize>,
    container: ContainerMetrics,
) -> Command<Effect, Event> {
    match &model.reorder {
        ReorderState::Pressing(press) => {
            if pointer.distance_to(&press.origin) > model.settings.touch_jitter_px {
                log::debug!("press on hotspot {} moved, treating it as a scroll", press.index);
                model.reorder = ReorderState::Idle;
                return render();
            }
            Command::done()
        }
        ReorderState::Dragging(_) => drag_move(model, pointer, candidate, container),
        _ => Command::done(),
    }
}

fn drag_move(
    model: &mut Model,
    pointer: PointerSample,
    candidate: Option<usize>,
    container: ContainerMetrics,
) -> Command<Effect, Event> {
    if let Some(stale) = candidate.filter(|c| *c >= model.hotspots.len()) {
        log::warn!(
            "pointer over hotspot {stale} but the list has {} entries, reloading",
            model.hotspots.len()
        );
        dispose_session(model);
        return sync::refetch(model);
    }

    let Model {
        reorder: state,
        auto_scroll: scroll,
        settings,
        ..
    } = model;
    let ReorderState::Dragging(session) = state else {
        return Command::done();
    };

    session.last_pointer_y = pointer.y;
    auto_scroll::handle_pointer_near_edges(
        scroll,
        &container,
        pointer.y,
        pointer.timestamp_ms,
        settings,
    );

    let mut pulse = false;
    if let Some(candidate) = candidate {
        // at most one proposal per frame
        let due = session
            .last_proposal_ms
            .map_or(true, |last| pointer.timestamp_ms - last >= settings.ideal_frame_ms);
        if due {
            session.last_proposal_ms = Some(pointer.timestamp_ms);
            pulse = reorder::propose_target(session, candidate).pulse;
        }
    }

    if pulse {
        Command::all([render(), haptic_pulse!(Light)])
    } else {
        render()
    }
}

/// End of the gesture: commit if a different position was chosen
pub fn handle_release(model: &mut Model, target: Option<usize>) -> Command<Effect, Event> {
    match std::mem::take(&mut model.reorder) {
        ReorderState::Dragging(session) => {
            model.auto_scroll.reset();
            match target.or(session.current_target_index) {
                Some(target) if target != session.dragged_index => {
                    commit(model, session.dragged_index, target)
                }
                _ => {
                    log::debug!("hotspot {} released in place", session.dragged_index);
                    render()
                }
            }
        }
        ReorderState::Pressing(press) => {
            log::debug!("press on hotspot {} released before the long press", press.index);
            render()
        }
        other => {
            model.reorder = other;
            Command::done()
        }
    }
}

fn commit(model: &mut Model, dragged: usize, target: usize) -> Command<Effect, Event> {
    match reorder::commit(&mut model.hotspots, dragged, target) {
        CommitOutcome::Moved => {
            model.revision += 1;
            log::info!("moved hotspot {dragged} to position {target}");
            let persist = sync::persist_order(model);
            Command::all([render(), haptic_pulse!(Medium), persist])
        }
        CommitOutcome::Unchanged => render(),
        CommitOutcome::OutOfRange => {
            log::warn!("drop of {dragged} onto {target} is out of range, reloading");
            sync::refetch(model)
        }
    }
}

pub fn handle_cancel(model: &mut Model) -> Command<Effect, Event> {
    if !model.reorder.is_gesture() {
        return Command::done();
    }
    log::debug!("gesture cancelled");
    dispose_session(model);
    render()
}

pub fn handle_auto_scroll_tick(
    model: &mut Model,
    now_ms: f64,
    container: ContainerMetrics,
) -> Command<Effect, Event> {
    if model.reorder.session().is_none() {
        if model.auto_scroll.active {
            log::debug!("auto-scroll tick without a drag, stopping");
            model.auto_scroll.reset();
            return render();
        }
        return Command::done();
    }
    auto_scroll::tick(&mut model.auto_scroll, &container, now_ms, &model.settings);
    render()
}

/// Drop any gesture in progress together with its scroll and indicator state
pub fn dispose_session(model: &mut Model) {
    if model.reorder.is_gesture() {
        model.reorder = ReorderState::Idle;
    }
    model.auto_scroll.reset();
}

fn start_session(model: &mut Model, index: usize, pointer: &PointerSample) -> Command<Effect, Event> {
    log::info!("dragging hotspot {index} ({:?})", pointer.kind);
    model.reorder = ReorderState::Dragging(DragSession::new(index, pointer));
    model.auto_scroll.reset();
    Command::all([render(), haptic_pulse!(Medium)])
}

/// Some(command) when a drag must not start right now
fn reject_start(
    model: &mut Model,
    index: usize,
    revision: u64,
) -> Option<Command<Effect, Event>> {
    if !model.drag_enabled() {
        log::debug!("drag on hotspot {index} ignored, list is busy");
        return Some(Command::done());
    }
    if revision != model.revision || index >= model.hotspots.len() {
        log::warn!(
            "drag on hotspot {index} uses revision {revision}, list is at {}, reloading",
            model.revision
        );
        return Some(sync::refetch(model));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DropDirection, DropIndicator, HotspotEntry, PointerKind, ScrollDirection};

    fn model_with(names: &[&str]) -> Model {
        Model {
            hotspots: names
                .iter()
                .map(|name| HotspotEntry {
                    name: name.to_string(),
                    ..Default::default()
                })
                .collect(),
            revision: 1,
            is_authenticated: true,
            ..Default::default()
        }
    }

    fn names(model: &Model) -> Vec<&str> {
        model.hotspots.iter().map(|h| h.name.as_str()).collect()
    }

    fn at(kind: PointerKind, x: f64, y: f64, timestamp_ms: f64) -> PointerSample {
        PointerSample {
            x,
            y,
            kind,
            timestamp_ms,
        }
    }

    fn container() -> ContainerMetrics {
        ContainerMetrics {
            top: 0.0,
            bottom: 800.0,
            scroll_top: 0.0,
            scroll_height: 800.0,
            client_height: 800.0,
        }
    }

    fn start_mouse_drag(model: &mut Model, index: usize) {
        let _ = handle_mouse_drag_start(model, index, 1, at(PointerKind::Mouse, 50.0, 400.0, 0.0));
    }

    #[test]
    fn mouse_drag_starts_immediately() {
        let mut model = model_with(&["A", "B", "C"]);

        start_mouse_drag(&mut model, 1);

        let session = model.reorder.session().cloned();
        assert_eq!(session.map(|s| s.dragged_index), Some(1));
    }

    #[test]
    fn drag_is_rejected_while_persisting() {
        let mut model = model_with(&["A", "B"]);
        model.reorder = ReorderState::Persisting { seq: 1 };

        start_mouse_drag(&mut model, 0);

        assert_eq!(model.reorder, ReorderState::Persisting { seq: 1 });
    }

    #[test]
    fn drag_with_stale_revision_reloads() {
        let mut model = model_with(&["A", "B"]);

        let _ = handle_mouse_drag_start(&mut model, 0, 0, at(PointerKind::Mouse, 0.0, 0.0, 0.0));

        assert_eq!(model.reorder, ReorderState::Idle);
        assert_eq!(model.load_seq, 1);
    }

    #[test]
    fn touch_becomes_drag_after_long_press() {
        let mut model = model_with(&["A", "B"]);
        let _ = handle_touch_start(&mut model, 1, 1, at(PointerKind::Touch, 10.0, 10.0, 100.0));
        assert!(matches!(model.reorder, ReorderState::Pressing(_)));

        let _ = handle_long_press_elapsed(&mut model, 700.0);
        assert!(matches!(model.reorder, ReorderState::Pressing(_)));

        let _ = handle_long_press_elapsed(&mut model, 1100.0);
        let session = model.reorder.session().cloned();
        assert_eq!(session.map(|s| (s.dragged_index, s.pointer_kind)), Some((1, PointerKind::Touch)));
    }

    #[test]
    fn moving_a_press_beyond_jitter_cancels_it() {
        let mut model = model_with(&["A", "B"]);
        let _ = handle_touch_start(&mut model, 0, 1, at(PointerKind::Touch, 10.0, 10.0, 0.0));

        let _ = handle_pointer_move(&mut model, at(PointerKind::Touch, 16.0, 18.0, 5.0), None, container());
        assert!(matches!(model.reorder, ReorderState::Pressing(_)));

        let _ = handle_pointer_move(&mut model, at(PointerKind::Touch, 10.0, 25.0, 9.0), None, container());
        assert_eq!(model.reorder, ReorderState::Idle);

        let _ = handle_long_press_elapsed(&mut model, 2000.0);
        assert_eq!(model.reorder, ReorderState::Idle);
    }

    #[test]
    fn proposals_are_throttled_to_one_per_frame() {
        let mut model = model_with(&["A", "B", "C", "D"]);
        start_mouse_drag(&mut model, 0);

        let _ = handle_pointer_move(&mut model, at(PointerKind::Mouse, 50.0, 400.0, 100.0), Some(2), container());
        let _ = handle_pointer_move(&mut model, at(PointerKind::Mouse, 50.0, 420.0, 105.0), Some(3), container());

        let session = model.reorder.session().cloned();
        assert_eq!(session.as_ref().and_then(|s| s.current_target_index), Some(2));
        assert_eq!(
            session.and_then(|s| s.indicator),
            Some(DropIndicator {
                index: 2,
                direction: DropDirection::After
            })
        );

        let _ = handle_pointer_move(&mut model, at(PointerKind::Mouse, 50.0, 420.0, 117.0), Some(3), container());
        let session = model.reorder.session().cloned();
        assert_eq!(session.and_then(|s| s.current_target_index), Some(3));
    }

    #[test]
    fn moves_near_the_edge_aim_the_auto_scroll() {
        let mut model = model_with(&["A", "B"]);
        start_mouse_drag(&mut model, 0);

        let _ = handle_pointer_move(&mut model, at(PointerKind::Mouse, 50.0, 790.0, 10.0), None, container());

        assert!(model.auto_scroll.active);
        assert_eq!(model.auto_scroll.direction, ScrollDirection::Down);
    }

    #[test]
    fn stale_candidate_cancels_and_reloads() {
        let mut model = model_with(&["A", "B"]);
        start_mouse_drag(&mut model, 0);

        let _ = handle_pointer_move(&mut model, at(PointerKind::Mouse, 0.0, 0.0, 10.0), Some(7), container());

        assert_eq!(model.reorder, ReorderState::Idle);
        assert_eq!(model.load_seq, 1);
    }

    #[test]
    fn release_commits_and_persists() {
        let mut model = model_with(&["Office", "Garage", "Phone"]);
        start_mouse_drag(&mut model, 2);
        let _ = handle_pointer_move(&mut model, at(PointerKind::Mouse, 50.0, 400.0, 50.0), Some(0), container());

        let _ = handle_release(&mut model, None);

        assert_eq!(names(&model), vec!["Phone", "Office", "Garage"]);
        assert_eq!(model.revision, 2);
        assert_eq!(model.reorder, ReorderState::Persisting { seq: 1 });
        assert!(!model.auto_scroll.active);
    }

    #[test]
    fn release_in_place_changes_nothing() {
        let mut model = model_with(&["A", "B", "C"]);
        start_mouse_drag(&mut model, 1);
        let _ = handle_pointer_move(&mut model, at(PointerKind::Mouse, 50.0, 400.0, 50.0), Some(1), container());

        let _ = handle_release(&mut model, None);

        assert_eq!(names(&model), vec!["A", "B", "C"]);
        assert_eq!(model.reorder, ReorderState::Idle);
        assert_eq!(model.persist_seq, 0);
    }

    #[test]
    fn second_release_is_ignored() {
        let mut model = model_with(&["A", "B"]);
        start_mouse_drag(&mut model, 0);

        let _ = handle_release(&mut model, Some(1));
        let _ = handle_release(&mut model, None);

        assert_eq!(names(&model), vec!["B", "A"]);
        assert_eq!(model.reorder, ReorderState::Persisting { seq: 1 });
    }

    #[test]
    fn cancel_clears_scroll_and_session() {
        let mut model = model_with(&["A", "B"]);
        start_mouse_drag(&mut model, 0);
        let _ = handle_pointer_move(&mut model, at(PointerKind::Mouse, 50.0, 2.0, 10.0), Some(1), container());
        assert!(model.auto_scroll.active);

        let _ = handle_cancel(&mut model);

        assert_eq!(model.reorder, ReorderState::Idle);
        assert!(!model.auto_scroll.active);
        assert_eq!(names(&model), vec!["A", "B"]);
    }

    #[test]
    fn tick_without_a_drag_stops_the_scroll() {
        let mut model = model_with(&["A"]);
        model.auto_scroll.active = true;
        model.auto_scroll.speed = 10.0;

        let _ = handle_auto_scroll_tick(&mut model, 16.0, container());

        assert!(!model.auto_scroll.active);
    }
}
