use crux_core::{render::render, Command};

use crate::events::{Event, HotspotEvent};
use crate::haptic_pulse;
use crate::model::Model;
use crate::script_post;
use crate::types::{DeleteHotspotsRequest, DeletionState, ReorderState};
use crate::Effect;

use super::sync;

pub fn handle_toggle_selection(model: &mut Model, name: String) -> Command<Effect, Event> {
    if !model.hotspots.iter().any(|entry| entry.name == name) {
        log::debug!("ignoring selection of unknown hotspot {name:?}");
        return Command::done();
    }
    if !model.selection.remove(&name) {
        model.selection.insert(name);
    }
    render()
}

pub fn handle_select_all(model: &mut Model) -> Command<Effect, Event> {
    model.selection = model.hotspots.iter().map(|entry| entry.name.clone()).collect();
    render()
}

pub fn handle_invert_selection(model: &mut Model) -> Command<Effect, Event> {
    model.selection = model
        .hotspots
        .iter()
        .filter(|entry| !model.selection.contains(&entry.name))
        .map(|entry| entry.name.clone())
        .collect();
    render()
}

pub fn handle_clear_selection(model: &mut Model) -> Command<Effect, Event> {
    if model.selection.is_empty() {
        return Command::done();
    }
    model.selection.clear();
    render()
}

/// Ask for confirmation before deleting the selected hotspots
pub fn handle_request_delete(model: &mut Model) -> Command<Effect, Event> {
    let pulse = haptic_pulse!(Strong);

    match model.reorder {
        ReorderState::Idle => {}
        ReorderState::OutOfSync => {
            return Command::all([
                pulse,
                model.set_error_and_render(sync::OUT_OF_SYNC_MESSAGE.to_string()),
            ]);
        }
        _ => {
            return Command::all([
                pulse,
                model.set_error_and_render("Wait until the hotspot order is saved".to_string()),
            ]);
        }
    }
    if model.selection.is_empty() {
        return Command::all([
            pulse,
            model.set_error_and_render("Select the hotspots to delete first".to_string()),
        ]);
    }

    model.deletion = DeletionState::Confirming {
        count: model.selection.len(),
    };
    Command::all([pulse, render()])
}

pub fn handle_cancel_delete(model: &mut Model) -> Command<Effect, Event> {
    if !matches!(model.deletion, DeletionState::Confirming { .. }) {
        return Command::done();
    }
    model.deletion = DeletionState::Idle;
    render()
}

pub fn handle_confirm_delete(model: &mut Model) -> Command<Effect, Event> {
    if !matches!(model.deletion, DeletionState::Confirming { .. }) {
        return Command::done();
    }

    // list order, so the request reads like the screen
    let names: Vec<String> = model
        .hotspots
        .iter()
        .filter(|entry| model.selection.contains(&entry.name))
        .map(|entry| entry.name.clone())
        .collect();
    log::info!("deleting {} hotspots", names.len());

    let request = DeleteHotspotsRequest {
        names: names.clone(),
    };
    model.deletion = DeletionState::Deleting { names };
    script_post!(Hotspot, HotspotEvent, model, "delete", DeleteResponse, "Delete hotspots",
        body_json: &request
    )
}

/// Whatever the outcome, the relay's list is re-read afterwards
pub fn handle_delete_response(
    model: &mut Model,
    result: Result<(), String>,
) -> Command<Effect, Event> {
    let deleted = match std::mem::take(&mut model.deletion) {
        DeletionState::Deleting { names } => names.len(),
        _ => 0,
    };
    model.stop_loading();

    match result {
        Ok(()) => {
            model.selection.clear();
            model.success_message = Some(match deleted {
                1 => "Deleted 1 hotspot".to_string(),
                n => format!("Deleted {n} hotspots"),
            });
        }
        Err(e) => {
            log::warn!("delete failed: {e}");
            model.set_error(e);
        }
    }
    sync::refetch(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HotspotEntry;

    fn model_with(names: &[&str]) -> Model {
        Model {
            hotspots: names
                .iter()
                .map(|name| HotspotEntry {
                    name: name.to_string(),
                    ..Default::default()
                })
                .collect(),
            is_authenticated: true,
            ..Default::default()
        }
    }

    fn selected(model: &Model) -> Vec<&str> {
        model.selection.iter().map(String::as_str).collect()
    }

    #[test]
    fn toggle_flips_membership() {
        let mut model = model_with(&["A", "B"]);

        let _ = handle_toggle_selection(&mut model, "A".into());
        assert_eq!(selected(&model), vec!["A"]);

        let _ = handle_toggle_selection(&mut model, "A".into());
        assert!(model.selection.is_empty());

        let _ = handle_toggle_selection(&mut model, "Nope".into());
        assert!(model.selection.is_empty());
    }

    #[test]
    fn invert_selects_the_rest() {
        let mut model = model_with(&["A", "B", "C"]);
        let _ = handle_toggle_selection(&mut model, "B".into());

        let _ = handle_invert_selection(&mut model);

        assert_eq!(selected(&model), vec!["A", "C"]);
    }

    #[test]
    fn select_all_then_clear() {
        let mut model = model_with(&["A", "B"]);

        let _ = handle_select_all(&mut model);
        assert_eq!(model.selection.len(), 2);

        let _ = handle_clear_selection(&mut model);
        assert!(model.selection.is_empty());
    }

    #[test]
    fn delete_needs_a_selection() {
        let mut model = model_with(&["A"]);

        let _ = handle_request_delete(&mut model);

        assert_eq!(model.deletion, DeletionState::Idle);
        assert!(model.error_message.is_some());
    }

    #[test]
    fn delete_waits_for_a_pending_save() {
        let mut model = model_with(&["A"]);
        let _ = handle_select_all(&mut model);
        model.reorder = ReorderState::Persisting { seq: 1 };

        let _ = handle_request_delete(&mut model);

        assert_eq!(model.deletion, DeletionState::Idle);
    }

    #[test]
    fn confirmed_delete_sends_names_in_list_order() {
        let mut model = model_with(&["C", "A", "B"]);
        let _ = handle_toggle_selection(&mut model, "B".into());
        let _ = handle_toggle_selection(&mut model, "C".into());

        let _ = handle_request_delete(&mut model);
        assert_eq!(model.deletion, DeletionState::Confirming { count: 2 });
        assert!(!model.drag_enabled());

        let _ = handle_confirm_delete(&mut model);
        assert_eq!(
            model.deletion,
            DeletionState::Deleting {
                names: vec!["C".into(), "B".into()]
            }
        );
        assert!(model.is_loading);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut model = model_with(&["A"]);
        let _ = handle_select_all(&mut model);
        let _ = handle_request_delete(&mut model);

        let _ = handle_cancel_delete(&mut model);

        assert_eq!(model.deletion, DeletionState::Idle);
        assert_eq!(model.selection.len(), 1);
    }

    #[test]
    fn delete_response_reloads_the_list() {
        let mut model = model_with(&["A", "B"]);
        model.deletion = DeletionState::Deleting {
            names: vec!["A".into()],
        };

        let _ = handle_delete_response(&mut model, Ok(()));

        assert_eq!(model.deletion, DeletionState::Idle);
        assert_eq!(model.success_message, Some("Deleted 1 hotspot".into()));
        assert_eq!(model.load_seq, 1);
    }

    #[test]
    fn failed_delete_still_reloads() {
        let mut model = model_with(&["A"]);
        model.deletion = DeletionState::Deleting {
            names: vec!["A".into()],
        };

        let _ = handle_delete_response(&mut model, Err("Delete hotspots failed: 500".into()));

        assert_eq!(
            model.error_message,
            Some("Delete hotspots failed: 500".into())
        );
        assert_eq!(model.load_seq, 1);
    }
}
