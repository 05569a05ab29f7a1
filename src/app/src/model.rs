use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::types::*;

/// Trait for types that can handle error messages
///
/// This allows HTTP helper functions to work with Model without directly depending on it.
pub trait ModelErrorHandler {
    fn set_error(&mut self, error: String);
}

/// Application Model - the complete state
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    // Authentication state
    pub is_authenticated: bool,
    pub requires_password_set: bool,
    pub lockout_remaining_seconds: Option<u32>,

    // UI state
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Known hotspot list, in priority order
    pub hotspots: Vec<HotspotEntry>,
    /// Bumped whenever `hotspots` is replaced or reordered
    pub revision: u64,
    /// Sequence number of the latest list request, older responses are dropped
    pub load_seq: u64,

    // Selection and deletion
    pub selection: BTreeSet<String>,
    pub deletion: DeletionState,

    // Drag-reorder-persist cycle
    pub reorder: ReorderState,
    pub auto_scroll: ScrollState,
    pub persist_seq: u64,
    /// A list arrived while an order write was in flight
    pub reload_after_persist: bool,

    pub settings: DragSettings,

    // Upstream relay
    pub relay_status: Option<RelayStatus>,
    pub relay_switch: RelaySwitchState,

    // Access point, as last read from the relay
    pub wireless: Option<WirelessSettings>,
    pub wireless_save: WirelessSaveState,

    // Auto-switch
    pub auto_switch_running: bool,
    pub auto_switch_log: Vec<LogLine>,
}

impl Model {
    /// Start a loading operation (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Stop loading and clear error
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.error_message = None;
    }

    /// Set an error message and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error_message = Some(error);
    }

    /// Set an error message, stop loading, and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Replace the list with a freshly loaded one
    pub fn replace_hotspots(&mut self, hotspots: Vec<HotspotEntry>) {
        self.selection
            .retain(|name| hotspots.iter().any(|entry| &entry.name == name));
        self.hotspots = hotspots;
        self.revision += 1;
    }

    /// Whether a new drag may start right now
    pub fn drag_enabled(&self) -> bool {
        self.is_authenticated
            && matches!(self.reorder, ReorderState::Idle)
            && matches!(self.deletion, DeletionState::Idle)
            && !self.hotspots.is_empty()
    }
}

impl ModelErrorHandler for Model {
    fn set_error(&mut self, error: String) {
        Model::set_error(self, error)
    }
}
