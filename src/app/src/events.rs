use serde::{Deserialize, Serialize};

use crate::commands::haptic::HapticOutput;
use crate::types::*;

/// Authentication events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    CheckPasswordSet,
    Login {
        password: String,
        /// Only read when no password has been set yet
        confirmation: String,
    },
    ChangePassword {
        old_password: String,
        new_password: String,
        confirmation: String,
    },
    /// Sent by the Shell once per second while a lockout is shown
    LockoutTick,

    #[serde(skip)]
    CheckPasswordSetResponse(Result<PasswordSetStatus, String>),
    #[serde(skip)]
    CreatePasswordResponse(Result<ScriptResponse, String>),
    #[serde(skip)]
    VerifyPasswordResponse(Result<ScriptResponse, String>),
    #[serde(skip)]
    ChangePasswordResponse(Result<ScriptResponse, String>),
}

/// Known hotspot list events (loading, selection, deletion, persistence results)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum HotspotEvent {
    /// The "manage hotspots" view became active
    Load,
    ToggleSelection {
        name: String,
    },
    SelectAll,
    InvertSelection,
    ClearSelection,
    RequestDelete,
    CancelDelete,
    ConfirmDelete,
    /// Sent by the Shell when `pending_persist` has been set for longer than the timeout
    PersistTimeout {
        seq: u64,
    },

    #[serde(skip)]
    LoadResponse {
        seq: u64,
        result: Result<HotspotConfig, String>,
    },
    #[serde(skip)]
    SaveOrderResponse {
        seq: u64,
        result: Result<(), String>,
    },
    #[serde(skip)]
    DeleteResponse(Result<(), String>),
}

/// Pointer and touch input on the known hotspot list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum DragEvent {
    /// Native `dragstart` on a list item
    MouseDragStart {
        index: usize,
        revision: u64,
        pointer: PointerSample,
    },
    /// `touchstart` on a list item; becomes a drag after the long-press delay
    TouchStart {
        index: usize,
        revision: u64,
        pointer: PointerSample,
    },
    /// Sent by the Shell `long_press_ms` after a touch started
    LongPressElapsed {
        now_ms: f64,
    },
    /// `dragover` / `touchmove`, with the list item under the pointer if any
    PointerMove {
        pointer: PointerSample,
        candidate: Option<usize>,
        container: ContainerMetrics,
    },
    /// `drop` (with the item dropped on) or `dragend` / `touchend` (without)
    Release {
        target: Option<usize>,
    },
    /// `touchcancel` or an aborted native drag
    Cancel,
    /// Sent by the Shell about every 16ms while auto-scroll is active
    AutoScrollTick {
        now_ms: f64,
        container: ContainerMetrics,
    },
}

/// Upstream connection events (status, switching to another hotspot)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    /// The status view became active
    LoadStatus,
    /// Join the hotspot entered in the config form
    Connect {
        name: String,
        password: String,
        band: String,
        encryption: String,
    },
    /// Join a hotspot from the known list
    ConnectKnown {
        name: String,
    },
    CancelConnect,
    ConfirmConnect,
    /// Sent by the Shell once per second while `relay_restart_seconds` is set
    RestartTick,

    #[serde(skip)]
    StatusResponse(Result<RelayStatus, String>),
    #[serde(skip)]
    SaveResponse(Result<(), String>),
    #[serde(skip)]
    ConfigResponse(Result<(), String>),
}

/// Access point settings events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum WirelessEvent {
    Load,
    /// The settings form as submitted
    Save(WirelessSettings),
    CancelSave,
    ConfirmSave,
    /// Sent by the Shell once per second while `wireless_restart_seconds` is set
    RestartTick,

    #[serde(skip)]
    LoadResponse(Result<WirelessSettingsResponse, String>),
    #[serde(skip)]
    SaveResponse(Result<(), String>),
}

/// Auto-switch runs, the switch timer and the run log
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AutoSwitchEvent {
    Start,
    /// Interval in minutes as typed, 0 turns the timer off
    SetTimer {
        interval: String,
    },
    /// The Shell copied `auto_switch_log_text` to the clipboard, or failed to
    LogCopied {
        ok: bool,
    },

    #[serde(skip)]
    RunResponse(Result<String, String>),
    #[serde(skip)]
    TimerResponse(Result<String, String>),
}

/// UI events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
    ApplySettings(DragSettings),
    #[serde(skip)]
    HapticFeedback(HapticOutput),
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Event {
    Initialize,
    Auth(AuthEvent),
    Hotspot(HotspotEvent),
    Drag(DragEvent),
    Relay(RelayEvent),
    Wireless(WirelessEvent),
    AutoSwitch(AutoSwitchEvent),
    Ui(UiEvent),
}
