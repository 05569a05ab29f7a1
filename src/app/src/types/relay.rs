use serde::{Deserialize, Serialize};

use super::hotspot::HotspotEntry;

/// Seconds the relay needs to restart its WiFi after a configuration change
pub const WIFI_RESTART_SECONDS: u32 = 60;

/// WiFi passwords are WPA passphrases
pub const MIN_WIFI_KEY_LENGTH: usize = 8;
pub const MAX_WIFI_KEY_LENGTH: usize = 63;

// `getconfig` reports its states in the backend's own wording
const MISSING_INTERFACE_MARKER: &str = "不存在";
const CONNECTED_MARKER: &str = "连接成功";

/// Response of `action=getconfig`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RelayStatus {
    pub ssid: String,
    pub key: String,
    pub band: String,
    pub interface: String,
    pub bridge_status: String,
    pub network_status: String,
}

impl RelayStatus {
    /// The relay has an upstream interface to configure
    pub fn interface_available(&self) -> bool {
        !self.interface.trim().is_empty() && !self.interface.contains(MISSING_INTERFACE_MARKER)
    }

    pub fn bridge_connected(&self) -> bool {
        self.bridge_status.contains(CONNECTED_MARKER)
    }

    pub fn network_connected(&self) -> bool {
        self.network_status == CONNECTED_MARKER
    }
}

/// Form body of `action=config`, which rewrites the UCI upstream section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayConfigForm {
    pub ssid: String,
    pub encryption: String,
    pub key: String,
    pub band: String,
}

impl From<&HotspotEntry> for RelayConfigForm {
    fn from(entry: &HotspotEntry) -> Self {
        Self {
            ssid: entry.name.clone(),
            encryption: entry.encryption.clone().into(),
            key: entry.password.clone(),
            band: entry.band.clone().into(),
        }
    }
}

/// Progress of switching the relay to another upstream hotspot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RelaySwitchState {
    #[default]
    Idle,
    Confirming {
        target: HotspotEntry,
    },
    /// Writes in flight while the relay restarts its WiFi
    Applying {
        target: HotspotEntry,
        remaining_seconds: u32,
    },
}

/// Check the hotspot the relay should join, returning the user-facing error
pub fn validate_relay_target(entry: &HotspotEntry) -> Result<(), String> {
    if entry.name.trim().is_empty() {
        return Err("Enter the WiFi name".to_string());
    }
    if entry.encryption.requires_password() {
        validate_wifi_key("WiFi", &entry.password)?;
    }
    Ok(())
}

/// Length rules of a WPA passphrase, `label` names the field in the message
pub fn validate_wifi_key(label: &str, key: &str) -> Result<(), String> {
    let length = key.chars().count();
    if key.trim().is_empty() {
        return Err(format!("Enter the {label} password"));
    }
    if length < MIN_WIFI_KEY_LENGTH {
        return Err(format!(
            "{label} password must be at least {MIN_WIFI_KEY_LENGTH} characters"
        ));
    }
    if length > MAX_WIFI_KEY_LENGTH {
        return Err(format!(
            "{label} password must be at most {MAX_WIFI_KEY_LENGTH} characters"
        ));
    }
    Ok(())
}
