mod auth;
mod autoswitch;
mod hotspot;
mod relay;
mod ui;
mod wireless;

use crux_core::Command;

use crate::events::{AuthEvent, Event};
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Initialization: decide between "create password" and "log in"
        Event::Initialize => auth::handle(AuthEvent::CheckPasswordSet, model),

        Event::Auth(auth_event) => auth::handle(auth_event, model),
        Event::Ui(ui_event) => ui::handle(ui_event, model),

        // everything past the login gate
        _ if !model.is_authenticated => {
            log::debug!("ignoring event before login");
            Command::done()
        }
        Event::Hotspot(hotspot_event) => hotspot::handle(hotspot_event, model),
        Event::Drag(drag_event) => hotspot::handle_drag(drag_event, model),
        Event::Relay(relay_event) => relay::handle(relay_event, model),
        Event::Wireless(wireless_event) => wireless::handle(wireless_event, model),
        Event::AutoSwitch(auto_switch_event) => autoswitch::handle(auto_switch_event, model),
    }
}
