//! The relay's own access point. Only the fields that differ from the last
//! read are written; the access point restarts afterwards and is read again
//! once the Shell's countdown is over.

use crux_core::{render::render, Command};

use crate::events::{Event, WirelessEvent};
use crate::model::Model;
use crate::types::{
    WirelessSaveState, WirelessSettings, WirelessSettingsResponse, WIFI_RESTART_SECONDS,
};
use crate::Effect;
use crate::{script_get, script_post};

pub const WIRELESS_UPDATED_MESSAGE: &str = "Wireless settings updated";

pub fn handle(event: WirelessEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        WirelessEvent::Load => load(model),
        WirelessEvent::LoadResponse(result) => handle_load_response(model, result),

        WirelessEvent::Save(settings) => request_save(model, settings),
        WirelessEvent::CancelSave => {
            if !matches!(model.wireless_save, WirelessSaveState::Confirming { .. }) {
                return Command::done();
            }
            model.wireless_save = WirelessSaveState::Idle;
            render()
        }
        WirelessEvent::ConfirmSave => confirm_save(model),

        WirelessEvent::SaveResponse(Ok(())) => {
            log::info!("wireless settings written, access point restarting");
            model.stop_loading();
            render()
        }
        WirelessEvent::SaveResponse(Err(e)) => {
            log::warn!("wireless settings not saved: {e}");
            model.wireless_save = WirelessSaveState::Idle;
            model.set_error_and_render(format!(
                "Failed to save the wireless settings, please retry ({e})"
            ))
        }

        WirelessEvent::RestartTick => {
            let WirelessSaveState::Applying { remaining_seconds } = &mut model.wireless_save else {
                return Command::done();
            };
            if *remaining_seconds > 1 {
                *remaining_seconds -= 1;
                return render();
            }
            model.wireless_save = WirelessSaveState::Refreshing;
            load(model)
        }
    }
}

fn load(model: &mut Model) -> Command<Effect, Event> {
    script_get!(Wireless, WirelessEvent, model, "getwireless", LoadResponse, "Get wireless settings",
        expect_json: WirelessSettingsResponse
    )
}

fn handle_load_response(
    model: &mut Model,
    result: Result<WirelessSettingsResponse, String>,
) -> Command<Effect, Event> {
    let refreshing = model.wireless_save == WirelessSaveState::Refreshing;
    if refreshing {
        model.wireless_save = WirelessSaveState::Idle;
    }
    model.stop_loading();

    match result {
        Ok(wire) => {
            model.wireless = Some(WirelessSettings::from(wire));
            if refreshing {
                model.success_message = Some(WIRELESS_UPDATED_MESSAGE.to_string());
            }
        }
        Err(e) if refreshing => {
            log::warn!("wireless settings not readable after the restart: {e}");
            model.set_error(
                "Could not read the new wireless settings, reload the page".to_string(),
            );
        }
        Err(e) => model.set_error(e),
    }
    render()
}

fn request_save(model: &mut Model, settings: WirelessSettings) -> Command<Effect, Event> {
    if model.wireless_save != WirelessSaveState::Idle {
        return Command::done();
    }
    if model.wireless.is_none() {
        return model.set_error_and_render("Wireless settings are not loaded yet".to_string());
    }
    if let Err(e) = settings.check() {
        return model.set_error_and_render(e);
    }
    let unchanged = model
        .wireless
        .as_ref()
        .is_some_and(|initial| settings.changes_from(initial).is_empty());
    if unchanged {
        model.success_message = Some("Wireless settings unchanged".to_string());
        return render();
    }

    model.wireless_save = WirelessSaveState::Confirming { pending: settings };
    render()
}

fn confirm_save(model: &mut Model) -> Command<Effect, Event> {
    let WirelessSaveState::Confirming { pending } = std::mem::take(&mut model.wireless_save) else {
        return Command::done();
    };
    let Some(initial) = &model.wireless else {
        return Command::done();
    };
    let changes = pending.changes_from(initial);
    log::info!("saving {} wireless settings", changes.len());

    let command = script_post!(Wireless, WirelessEvent, model, "savewireless", SaveResponse, "Save wireless settings",
        body_json: &changes
    );
    if model.error_message.is_none() {
        model.wireless_save = WirelessSaveState::Applying {
            remaining_seconds: WIFI_RESTART_SECONDS,
        };
    }
    command
}
