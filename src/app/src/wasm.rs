//! WebAssembly FFI bindings for the Crux Core
//!
//! The browser shell serializes events and effect outputs with bincode and
//! passes them through these functions. Timers (long press, auto-scroll ticks,
//! lockout countdown, order-save timeout) live in the shell and are driven by
//! flags on the view model.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

#[wasm_bindgen(start)]
pub fn init_wasm() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // fails only when a logger is already installed, which then stays in place
    let _ = console_log::init_with_level(level);
}

/// Process a bincode-serialized Event, returning the resulting Effects
///
/// An empty buffer means the event could not be decoded.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        log::error!("failed to process event: {e:?}");
        effects.clear();
    }
    effects
}

/// Get the bincode-serialized ViewModel
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        log::error!("failed to serialize view model: {e:?}");
        view.clear();
    }
    view
}

/// Resolve the effect `id` with a bincode-serialized output
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    ) {
        log::error!("failed to resolve effect {id}: {e:?}");
        effects.clear();
    }
    effects
}
