//! Upstream connection: status display and switching the relay to another
//! hotspot.
//!
//! Switching writes the entry to the known list (`action=save`), then rewrites
//! the UCI upstream section (`action=config`). Both run while the Shell counts
//! down the WiFi restart; the status is read again once it is over.

use crux_core::{render::render, Command};

use crate::events::{Event, RelayEvent};
use crate::haptic_pulse;
use crate::model::Model;
use crate::types::{
    validate_relay_target, HotspotEntry, RelayConfigForm, RelaySwitchState, RelayStatus,
    WIFI_RESTART_SECONDS,
};
use crate::{action_url, process_status_response, Effect, HttpCmd};
use crate::{handle_response, script_get, script_post};

pub const RELAY_UPDATED_MESSAGE: &str = "Hotspot updated";

pub fn handle(event: RelayEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        RelayEvent::LoadStatus => load_status(model),
        RelayEvent::StatusResponse(result) => handle_response!(model, result, {
            on_success: |model, status| {
                if !status.interface_available() {
                    log::warn!("relay interface {:?} is not available", status.interface);
                }
                model.relay_status = Some(status);
            },
        }),

        RelayEvent::Connect {
            name,
            password,
            band,
            encryption,
        } => request_connect(
            model,
            HotspotEntry {
                name,
                password,
                band: band.into(),
                encryption: encryption.into(),
            },
        ),
        RelayEvent::ConnectKnown { name } => {
            match model.hotspots.iter().find(|entry| entry.name == name).cloned() {
                Some(entry) => request_connect(model, entry),
                None => {
                    log::debug!("ignoring switch to unknown hotspot {name:?}");
                    Command::done()
                }
            }
        }
        RelayEvent::CancelConnect => {
            if !matches!(model.relay_switch, RelaySwitchState::Confirming { .. }) {
                return Command::done();
            }
            model.relay_switch = RelaySwitchState::Idle;
            render()
        }
        RelayEvent::ConfirmConnect => confirm_connect(model),

        RelayEvent::SaveResponse(Ok(())) => {
            let RelaySwitchState::Applying { target, .. } = &model.relay_switch else {
                log::debug!("hotspot entry saved after the switch ended");
                return Command::done();
            };
            log::info!("hotspot {:?} written to the known list", target.name);
            let form = RelayConfigForm::from(target);
            post_config(model, &form)
        }
        RelayEvent::ConfigResponse(Ok(())) => {
            log::info!("relay upstream reconfigured, WiFi restarting");
            model.stop_loading();
            render()
        }
        RelayEvent::SaveResponse(Err(e)) | RelayEvent::ConfigResponse(Err(e)) => {
            fail_switch(model, e)
        }

        RelayEvent::RestartTick => {
            let RelaySwitchState::Applying {
                remaining_seconds, ..
            } = &mut model.relay_switch
            else {
                return Command::done();
            };
            if *remaining_seconds > 1 {
                *remaining_seconds -= 1;
                return render();
            }
            model.relay_switch = RelaySwitchState::Idle;
            let status = load_status(model);
            model.success_message = Some(RELAY_UPDATED_MESSAGE.to_string());
            status
        }
    }
}

fn load_status(model: &mut Model) -> Command<Effect, Event> {
    script_get!(Relay, RelayEvent, model, "getconfig", StatusResponse, "Get relay status",
        expect_json: RelayStatus
    )
}

/// Validate the target and ask for confirmation
fn request_connect(model: &mut Model, target: HotspotEntry) -> Command<Effect, Event> {
    let pulse = haptic_pulse!(Strong);

    if model.relay_switch != RelaySwitchState::Idle {
        return pulse;
    }
    if let Err(e) = validate_relay_target(&target) {
        return Command::all([pulse, model.set_error_and_render(e)]);
    }
    if !model
        .relay_status
        .as_ref()
        .is_some_and(RelayStatus::interface_available)
    {
        return Command::all([
            pulse,
            model.set_error_and_render(
                "No usable relay interface found, cannot switch hotspots".to_string(),
            ),
        ]);
    }

    model.relay_switch = RelaySwitchState::Confirming { target };
    Command::all([pulse, render()])
}

fn confirm_connect(model: &mut Model) -> Command<Effect, Event> {
    let RelaySwitchState::Confirming { target } = std::mem::take(&mut model.relay_switch) else {
        return Command::done();
    };
    log::info!("switching relay to {:?}", target.name);

    let command = script_post!(Relay, RelayEvent, model, "save", SaveResponse, "Save hotspot",
        body_json: &target
    );
    if model.error_message.is_none() {
        model.relay_switch = RelaySwitchState::Applying {
            target,
            remaining_seconds: WIFI_RESTART_SECONDS,
        };
    }
    command
}

fn post_config(model: &mut Model, form: &RelayConfigForm) -> Command<Effect, Event> {
    match HttpCmd::post(action_url("config"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body_form(form)
    {
        Ok(builder) => builder.build().then_send(|result| {
            Event::Relay(RelayEvent::ConfigResponse(process_status_response(
                "Configure relay",
                result,
            )))
        }),
        Err(e) => fail_switch(model, format!("Failed to create Configure relay request: {e}")),
    }
}

fn fail_switch(model: &mut Model, reason: String) -> Command<Effect, Event> {
    log::warn!("hotspot switch failed: {reason}");
    model.relay_switch = RelaySwitchState::Idle;
    model.success_message = None;
    model.set_error_and_render(format!("Failed to switch hotspot, please retry ({reason})"))
}
