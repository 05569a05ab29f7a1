use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_valid::Validate;

use super::relay::validate_wifi_key;

/// One radio of the relay's own access point
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RadioSettings {
    pub disabled: bool,
    #[validate(max_length = 32)]
    pub ssid: String,
    #[validate(max_length = 63)]
    pub key: String,
    pub channel: String,
    pub htmode: String,
    pub hidden: bool,
}

impl RadioSettings {
    /// Only an enabled radio has to be complete
    fn check(&self, label: &str) -> Result<(), String> {
        if self.disabled {
            return Ok(());
        }
        if self.ssid.trim().is_empty() {
            return Err(format!("Enter the {label} WiFi name"));
        }
        validate_wifi_key(&format!("{label} WiFi"), &self.key)?;
        if self.channel.is_empty() {
            return Err(format!("Select the {label} channel"));
        }
        if self.htmode.is_empty() {
            return Err(format!("Select the {label} bandwidth"));
        }
        self.validate()
            .map_err(|e| format!("Invalid {label} settings: {e}"))
    }

    fn collect_changes(&self, initial: &RadioSettings, suffix: &str, changes: &mut Map<String, Value>) {
        let mut note = |field: &str, changed: bool, value: Value| {
            if changed {
                changes.insert(format!("{field}_{suffix}"), value);
            }
        };
        note("disabled", self.disabled != initial.disabled, self.disabled.into());
        note("ssid", self.ssid != initial.ssid, self.ssid.clone().into());
        note("key", self.key != initial.key, self.key.clone().into());
        note("channel", self.channel != initial.channel, self.channel.clone().into());
        note("htmode", self.htmode != initial.htmode, self.htmode.clone().into());
        note("hidden", self.hidden != initial.hidden, self.hidden.into());
    }
}

/// Both radios of the access point
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WirelessSettings {
    pub radio_2g: RadioSettings,
    pub radio_5g: RadioSettings,
}

impl WirelessSettings {
    pub fn check(&self) -> Result<(), String> {
        if self.radio_2g.disabled && self.radio_5g.disabled {
            return Err("At least one radio must stay enabled".to_string());
        }
        self.radio_2g.check("2.4G")?;
        self.radio_5g.check("5G")
    }

    /// Body of `action=savewireless`: only the fields that differ from `initial`
    pub fn changes_from(&self, initial: &WirelessSettings) -> Map<String, Value> {
        let mut changes = Map::new();
        self.radio_2g.collect_changes(&initial.radio_2g, "2g", &mut changes);
        self.radio_5g.collect_changes(&initial.radio_5g, "5g", &mut changes);
        changes
    }
}

/// Response of `action=getwireless`; the flags arrive as `"true"` / `"false"`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WirelessSettingsResponse {
    pub disabled_2g: String,
    pub ssid_2g: String,
    pub key_2g: String,
    pub channel_2g: String,
    pub htmode_2g: String,
    pub hidden_2g: String,
    pub disabled_5g: String,
    pub ssid_5g: String,
    pub key_5g: String,
    pub channel_5g: String,
    pub htmode_5g: String,
    pub hidden_5g: String,
}

impl From<WirelessSettingsResponse> for WirelessSettings {
    fn from(wire: WirelessSettingsResponse) -> Self {
        Self {
            radio_2g: RadioSettings {
                disabled: wire.disabled_2g == "true",
                ssid: wire.ssid_2g,
                key: wire.key_2g,
                channel: wire.channel_2g,
                htmode: wire.htmode_2g,
                hidden: wire.hidden_2g == "true",
            },
            radio_5g: RadioSettings {
                disabled: wire.disabled_5g == "true",
                ssid: wire.ssid_5g,
                key: wire.key_5g,
                channel: wire.channel_5g,
                htmode: wire.htmode_5g,
                hidden: wire.hidden_5g == "true",
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum WirelessSaveState {
    #[default]
    Idle,
    Confirming {
        pending: WirelessSettings,
    },
    /// The write is in flight while the access point restarts
    Applying {
        remaining_seconds: u32,
    },
    /// Reading the settings back after the restart
    Refreshing,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radio(ssid: &str) -> RadioSettings {
        RadioSettings {
            disabled: false,
            ssid: ssid.into(),
            key: "secret123".into(),
            channel: "auto".into(),
            htmode: "HT20".into(),
            hidden: false,
        }
    }

    fn settings() -> WirelessSettings {
        WirelessSettings {
            radio_2g: radio("Relay"),
            radio_5g: radio("Relay_5G"),
        }
    }

    #[test]
    fn parses_string_flags() {
        let wire: WirelessSettingsResponse = serde_json::from_str(
            r#"{"disabled_2g":"false","ssid_2g":"Relay","key_2g":"secret123","channel_2g":"6",
                "htmode_2g":"HT40","hidden_2g":"true","disabled_5g":"true"}"#,
        )
        .unwrap();

        let settings = WirelessSettings::from(wire);

        assert!(!settings.radio_2g.disabled);
        assert!(settings.radio_2g.hidden);
        assert_eq!(settings.radio_2g.channel, "6");
        assert!(settings.radio_5g.disabled);
        assert_eq!(settings.radio_5g.ssid, "");
    }

    #[test]
    fn one_radio_must_stay_on() {
        let mut s = settings();
        s.radio_2g.disabled = true;
        s.radio_5g.disabled = true;

        assert_eq!(
            s.check(),
            Err("At least one radio must stay enabled".to_string())
        );
    }

    #[test]
    fn disabled_radio_is_not_checked() {
        let mut s = settings();
        s.radio_5g = RadioSettings {
            disabled: true,
            ..Default::default()
        };

        assert!(s.check().is_ok());
    }

    #[test]
    fn enabled_radio_must_be_complete() {
        let mut s = settings();
        s.radio_2g.ssid = " ".into();
        assert_eq!(s.check(), Err("Enter the 2.4G WiFi name".to_string()));

        let mut s = settings();
        s.radio_5g.key = "short".into();
        assert_eq!(
            s.check(),
            Err("5G WiFi password must be at least 8 characters".to_string())
        );

        let mut s = settings();
        s.radio_5g.htmode.clear();
        assert_eq!(s.check(), Err("Select the 5G bandwidth".to_string()));
    }

    #[test]
    fn overlong_ssid_is_rejected() {
        let mut s = settings();
        s.radio_2g.ssid = "x".repeat(33);

        assert!(s.check().is_err());
    }

    #[test]
    fn changes_hold_only_edited_fields() {
        let initial = settings();
        let mut edited = initial.clone();
        edited.radio_2g.channel = "11".into();
        edited.radio_5g.hidden = true;

        let changes = edited.changes_from(&initial);

        assert_eq!(changes.len(), 2);
        assert_eq!(changes["channel_2g"], Value::from("11"));
        assert_eq!(changes["hidden_5g"], Value::from(true));
        assert!(initial.changes_from(&initial).is_empty());
    }
}
