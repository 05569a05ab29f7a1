//! Keeps the local order and the relay's `wifi-config.json` in agreement.
//!
//! A committed reorder is written optimistically. If the write fails or times
//! out, the server copy is re-fetched and replaces the local one.

use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::events::{Event, HotspotEvent};
use crate::model::Model;
use crate::types::{HotspotConfig, ReorderState};
use crate::{
    action_url, build_url, process_json_response, process_status_response, Effect, HttpCmd,
    HOTSPOT_LIST_PATH,
};

use super::gesture::dispose_session;

pub const ORDER_SAVED_MESSAGE: &str = "Hotspot order saved";
pub const OUT_OF_SYNC_MESSAGE: &str =
    "Hotspot order may not match the relay, reload the list before reordering";

/// Fetch the list; only the response to the most recent request is applied
///
/// Leaves `error_message` alone so a pending failure notice survives the reload.
pub fn request_hotspot_list(model: &mut Model) -> Command<Effect, Event> {
    model.load_seq += 1;
    model.is_loading = true;
    let seq = model.load_seq;
    log::debug!("requesting hotspot list (seq {seq})");

    HttpCmd::get(build_url(HOTSPOT_LIST_PATH))
        .build()
        .then_send(move |result| {
            Event::Hotspot(HotspotEvent::LoadResponse {
                seq,
                result: process_json_response("Load hotspot list", result),
            })
        })
}

/// Re-fetch after an index turned out to be stale
pub fn refetch(model: &mut Model) -> Command<Effect, Event> {
    Command::all([render(), request_hotspot_list(model)])
}

pub fn handle_load_response(
    model: &mut Model,
    seq: u64,
    result: Result<HotspotConfig, String>,
) -> Command<Effect, Event> {
    if seq != model.load_seq {
        log::debug!("dropping stale hotspot list (seq {seq}, latest {})", model.load_seq);
        return Command::done();
    }
    model.is_loading = false;

    let applied = match result {
        Ok(config) => {
            if let Err(e) = config.validate() {
                log::warn!("hotspot list rejected: {e}");
                model.set_error(format!("Hotspot list is invalid: {e}"));
                false
            } else if let Some(name) = config.duplicate_name() {
                log::warn!("hotspot list rejected: duplicate name {name:?}");
                model.set_error(format!("Hotspot list contains \"{name}\" more than once"));
                false
            } else if matches!(model.reorder, ReorderState::Persisting { .. }) {
                log::info!("hotspot list arrived during an order write, fetching again after it");
                model.reload_after_persist = true;
                return render();
            } else {
                if model.reorder.is_gesture() {
                    log::info!("hotspot list replaced during a gesture, cancelling it");
                    dispose_session(model);
                }
                log::info!("loaded {} known hotspots", config.wifi.len());
                model.replace_hotspots(config.wifi);
                true
            }
        }
        Err(e) => {
            model.set_error(e);
            false
        }
    };

    match model.reorder {
        ReorderState::Reverting | ReorderState::OutOfSync if applied => {
            log::info!("hotspot order reverted to the relay's copy");
            model.reorder = ReorderState::Idle;
        }
        ReorderState::Reverting | ReorderState::OutOfSync => {
            log::warn!("hotspot order could not be restored from the relay");
            model.reorder = ReorderState::OutOfSync;
            model.error_message = Some(OUT_OF_SYNC_MESSAGE.to_string());
        }
        _ => {}
    }
    render()
}

/// Write the current order, entering `Persisting`
pub fn persist_order(model: &mut Model) -> Command<Effect, Event> {
    model.persist_seq += 1;
    let seq = model.persist_seq;
    model.reorder = ReorderState::Persisting { seq };

    let body = HotspotConfig {
        wifi: model.hotspots.clone(),
    };
    log::info!("saving hotspot order (seq {seq}, {} entries)", body.wifi.len());

    match HttpCmd::post(action_url("saveOrder"))
        .header("Content-Type", "application/json")
        .body_json(&body)
    {
        Ok(builder) => builder.build().then_send(move |result| {
            Event::Hotspot(HotspotEvent::SaveOrderResponse {
                seq,
                result: process_status_response("Save order", result),
            })
        }),
        Err(e) => fail_persist(model, format!("Failed to create Save order request: {e}")),
    }
}

pub fn handle_save_order_response(
    model: &mut Model,
    seq: u64,
    result: Result<(), String>,
) -> Command<Effect, Event> {
    if model.reorder != (ReorderState::Persisting { seq }) {
        log::debug!("ignoring save order response for seq {seq}");
        return Command::done();
    }

    match result {
        Ok(()) => {
            log::info!("hotspot order saved (seq {seq})");
            model.reorder = ReorderState::Idle;
            model.success_message = Some(ORDER_SAVED_MESSAGE.to_string());
            if std::mem::take(&mut model.reload_after_persist) {
                return refetch(model);
            }
            render()
        }
        Err(e) => fail_persist(model, e),
    }
}

pub fn handle_persist_timeout(model: &mut Model, seq: u64) -> Command<Effect, Event> {
    if model.reorder != (ReorderState::Persisting { seq }) {
        return Command::done();
    }
    fail_persist(model, "Save order timed out".to_string())
}

/// Report the failure and roll back to the server's order
fn fail_persist(model: &mut Model, reason: String) -> Command<Effect, Event> {
    log::warn!("hotspot order not saved: {reason}");
    model.success_message = None;
    model.error_message = Some(format!("Hotspot order not saved: {reason}"));
    model.reorder = ReorderState::Reverting;
    model.reload_after_persist = false;
    Command::all([render(), request_hotspot_list(model)])
}
