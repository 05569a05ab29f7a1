use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::types::{
    DeletionState, DropDirection, LogLine, RelayStatus, RelaySwitchState, ReorderState,
    WirelessSaveState, WirelessSettings,
};

/// One row of the known hotspot list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HotspotItemView {
    /// Current position, valid for `ViewModel::revision` only
    pub index: usize,
    pub name: String,
    pub band: String,
    pub encryption: String,
    pub requires_password: bool,
    pub selected: bool,
    pub dragging: bool,
    pub drop_indicator: Option<DropDirection>,
}

/// Upstream connection as shown on the status page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RelayStatusView {
    pub ssid: String,
    pub has_key: bool,
    pub band: String,
    pub interface: String,
    pub interface_available: bool,
    pub bridge_connected: bool,
    pub network_connected: bool,
}

impl From<&RelayStatus> for RelayStatusView {
    fn from(status: &RelayStatus) -> Self {
        Self {
            ssid: status.ssid.clone(),
            has_key: !status.key.is_empty(),
            band: status.band.to_uppercase(),
            interface: status.interface.clone(),
            interface_available: status.interface_available(),
            bridge_connected: status.bridge_connected(),
            network_connected: status.network_connected(),
        }
    }
}

/// What the Shell renders, plus the flags that drive its timers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    // Authentication
    pub is_authenticated: bool,
    pub requires_password_set: bool,
    pub lockout_remaining_seconds: Option<u32>,

    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    pub hotspots: Vec<HotspotItemView>,
    pub revision: u64,
    pub is_empty: bool,
    pub selected_count: usize,

    // Drag gesture
    pub drag_enabled: bool,
    /// The list container shows its "drag in progress" styling
    pub container_dragging: bool,
    /// A touch is waiting for the long press; the Shell arms its timer
    pub pressing: bool,
    pub long_press_ms: u32,
    /// The Shell sends `AutoScrollTick` while this is set
    pub auto_scroll_active: bool,
    pub scroll_to: Option<f64>,

    /// Sequence of the order write in flight; the Shell sends
    /// `PersistTimeout` if it stays set for `persist_timeout_ms`
    pub pending_persist: Option<u64>,
    pub persist_timeout_ms: u32,
    pub is_reverting: bool,
    /// The order could not be restored; the Shell offers a reload
    pub out_of_sync: bool,

    // Deletion
    pub delete_confirmation: Option<usize>,
    pub is_deleting: bool,

    // Upstream relay
    pub relay_status: Option<RelayStatusView>,
    /// Name of the hotspot waiting for confirmation
    pub relay_confirming: Option<String>,
    /// The Shell sends `RestartTick` once per second while this is set
    pub relay_restart_seconds: Option<u32>,

    // Access point
    pub wireless: Option<WirelessSettings>,
    pub wireless_confirming: bool,
    /// The Shell sends `RestartTick` once per second while this is set
    pub wireless_restart_seconds: Option<u32>,
    pub wireless_refreshing: bool,

    // Auto-switch
    pub auto_switch_running: bool,
    pub auto_switch_log: Vec<LogLine>,
    /// What "copy log" puts on the clipboard
    pub auto_switch_log_text: String,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let session = model.reorder.session();

        let hotspots = model
            .hotspots
            .iter()
            .enumerate()
            .map(|(index, entry)| HotspotItemView {
                index,
                name: entry.name.clone(),
                band: entry.band.to_string(),
                encryption: String::from(entry.encryption.clone()),
                requires_password: entry.encryption.requires_password(),
                selected: model.selection.contains(&entry.name),
                dragging: session.is_some_and(|s| s.dragged_index == index),
                drop_indicator: session
                    .and_then(|s| s.indicator)
                    .filter(|indicator| indicator.index == index)
                    .map(|indicator| indicator.direction),
            })
            .collect();

        let pending_persist = match model.reorder {
            ReorderState::Persisting { seq } => Some(seq),
            _ => None,
        };

        Self {
            is_authenticated: model.is_authenticated,
            requires_password_set: model.requires_password_set,
            lockout_remaining_seconds: model.lockout_remaining_seconds,
            is_loading: model.is_loading,
            error_message: model.error_message.clone(),
            success_message: model.success_message.clone(),
            hotspots,
            revision: model.revision,
            is_empty: model.hotspots.is_empty(),
            selected_count: model.selection.len(),
            drag_enabled: model.drag_enabled(),
            container_dragging: session.is_some(),
            pressing: matches!(model.reorder, ReorderState::Pressing(_)),
            long_press_ms: model.settings.long_press_ms,
            auto_scroll_active: session.is_some() && model.auto_scroll.active,
            scroll_to: model.auto_scroll.scroll_to,
            pending_persist,
            persist_timeout_ms: model.settings.persist_timeout_ms,
            is_reverting: model.reorder == ReorderState::Reverting,
            out_of_sync: model.reorder == ReorderState::OutOfSync,
            delete_confirmation: match model.deletion {
                DeletionState::Confirming { count } => Some(count),
                _ => None,
            },
            is_deleting: matches!(model.deletion, DeletionState::Deleting { .. }),
            relay_status: model.relay_status.as_ref().map(RelayStatusView::from),
            relay_confirming: match &model.relay_switch {
                RelaySwitchState::Confirming { target } => Some(target.name.clone()),
                _ => None,
            },
            relay_restart_seconds: match model.relay_switch {
                RelaySwitchState::Applying {
                    remaining_seconds, ..
                } => Some(remaining_seconds),
                _ => None,
            },
            wireless: model.wireless.clone(),
            wireless_confirming: matches!(
                model.wireless_save,
                WirelessSaveState::Confirming { .. }
            ),
            wireless_restart_seconds: match model.wireless_save {
                WirelessSaveState::Applying { remaining_seconds } => Some(remaining_seconds),
                _ => None,
            },
            wireless_refreshing: model.wireless_save == WirelessSaveState::Refreshing,
            auto_switch_running: model.auto_switch_running,
            auto_switch_log: model.auto_switch_log.clone(),
            auto_switch_log_text: model
                .auto_switch_log
                .iter()
                .map(|line| line.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Band, DragSession, DropIndicator, Encryption, HotspotEntry, LogLevel, PointerSample,
    };

    fn entry(name: &str, band: Band, encryption: Encryption) -> HotspotEntry {
        HotspotEntry {
            name: name.to_string(),
            password: String::new(),
            band,
            encryption,
        }
    }

    #[test]
    fn rows_carry_their_position_and_labels() {
        let model = Model {
            hotspots: vec![
                entry("Office", Band::FiveGhz, Encryption::Psk2),
                entry("Cafe", Band::TwoGhz, Encryption::None),
            ],
            is_authenticated: true,
            ..Default::default()
        };

        let view = ViewModel::from(&model);

        assert_eq!(view.hotspots[1].index, 1);
        assert_eq!(view.hotspots[0].band, "5G");
        assert_eq!(view.hotspots[0].encryption, "psk2");
        assert!(view.hotspots[0].requires_password);
        assert!(!view.hotspots[1].requires_password);
        assert!(view.drag_enabled);
    }

    #[test]
    fn only_the_indicated_row_shows_the_drop_marker() {
        let mut session = DragSession::new(0, &PointerSample::default());
        session.indicator = Some(DropIndicator {
            index: 2,
            direction: DropDirection::After,
        });
        let model = Model {
            hotspots: vec![
                entry("A", Band::TwoGhz, Encryption::None),
                entry("B", Band::TwoGhz, Encryption::None),
                entry("C", Band::TwoGhz, Encryption::None),
            ],
            reorder: ReorderState::Dragging(session),
            ..Default::default()
        };

        let view = ViewModel::from(&model);

        assert!(view.container_dragging);
        assert!(view.hotspots[0].dragging);
        assert_eq!(view.hotspots[1].drop_indicator, None);
        assert_eq!(view.hotspots[2].drop_indicator, Some(DropDirection::After));
        assert!(!view.drag_enabled);
    }

    #[test]
    fn persisting_exposes_the_pending_write() {
        let model = Model {
            reorder: ReorderState::Persisting { seq: 3 },
            ..Default::default()
        };

        let view = ViewModel::from(&model);

        assert_eq!(view.pending_persist, Some(3));
        assert!(!view.container_dragging);
        assert!(view.is_empty);
    }

    #[test]
    fn failed_rollback_is_flagged() {
        let model = Model {
            is_authenticated: true,
            hotspots: vec![entry("A", Band::TwoGhz, Encryption::None)],
            reorder: ReorderState::OutOfSync,
            ..Default::default()
        };

        let view = ViewModel::from(&model);

        assert!(view.out_of_sync);
        assert!(!view.is_reverting);
        assert!(!view.drag_enabled);
    }

    #[test]
    fn relay_status_is_summarised() {
        let model = Model {
            relay_status: Some(RelayStatus {
                ssid: "Office".into(),
                key: "secret123".into(),
                band: "5g".into(),
                interface: "wwan".into(),
                bridge_status: "连接成功 Office".into(),
                network_status: "连接失败".into(),
            }),
            relay_switch: RelaySwitchState::Applying {
                target: entry("Office", Band::FiveGhz, Encryption::Psk2),
                remaining_seconds: 42,
            },
            ..Default::default()
        };

        let view = ViewModel::from(&model);

        let status = view.relay_status.unwrap();
        assert_eq!(status.band, "5G");
        assert!(status.has_key);
        assert!(status.bridge_connected);
        assert!(!status.network_connected);
        assert_eq!(view.relay_restart_seconds, Some(42));
    }

    #[test]
    fn log_text_joins_the_lines() {
        let model = Model {
            auto_switch_log: vec![
                LogLine::new("first", LogLevel::Info),
                LogLine::new("second", LogLevel::Success),
            ],
            ..Default::default()
        };

        assert_eq!(ViewModel::from(&model).auto_switch_log_text, "first\nsecond");
    }
}
