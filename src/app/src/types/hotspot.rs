use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::collections::HashSet;
use std::fmt;

/// Radio band of a known hotspot
///
/// The backend writes lowercase `2g` / `5g`. Anything else is kept verbatim so a
/// saved list always round-trips.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Band {
    #[default]
    TwoGhz,
    FiveGhz,
    Other(String),
}

impl From<String> for Band {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "2g" => Self::TwoGhz,
            "5g" => Self::FiveGhz,
            _ => Self::Other(value),
        }
    }
}

impl From<Band> for String {
    fn from(band: Band) -> Self {
        match band {
            Band::TwoGhz => "2g".to_string(),
            Band::FiveGhz => "5g".to_string(),
            Band::Other(value) => value,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoGhz => write!(f, "2G"),
            Self::FiveGhz => write!(f, "5G"),
            Self::Other(value) => write!(f, "{}", value.to_uppercase()),
        }
    }
}

/// Encryption mode as understood by UCI
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Encryption {
    #[default]
    None,
    Owe,
    Psk,
    Psk2,
    Sae,
    Other(String),
}

impl Encryption {
    /// Open and OWE networks are joined without a key
    pub fn requires_password(&self) -> bool {
        !matches!(self, Self::None | Self::Owe)
    }
}

impl From<String> for Encryption {
    fn from(value: String) -> Self {
        match value.as_str() {
            // an empty value is what the config form writes for "no encryption"
            "none" | "" => Self::None,
            "owe" => Self::Owe,
            "psk" => Self::Psk,
            "psk2" => Self::Psk2,
            "sae" => Self::Sae,
            _ => Self::Other(value),
        }
    }
}

impl From<Encryption> for String {
    fn from(encryption: Encryption) -> Self {
        match encryption {
            Encryption::None => "none".to_string(),
            Encryption::Owe => "owe".to_string(),
            Encryption::Psk => "psk".to_string(),
            Encryption::Psk2 => "psk2".to_string(),
            Encryption::Sae => "sae".to_string(),
            Encryption::Other(value) => value,
        }
    }
}

/// A saved WiFi network the relay can switch to
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct HotspotEntry {
    #[validate(min_length = 1)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub band: Band,
    #[serde(default)]
    pub encryption: Encryption,
}

/// Wire representation of the ordered hotspot list (`wifi-config.json`)
///
/// Position is priority: the first entry is tried first by auto-switch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct HotspotConfig {
    #[validate]
    #[serde(default)]
    pub wifi: Vec<HotspotEntry>,
}

impl HotspotConfig {
    /// Returns the first name that occurs more than once
    pub fn duplicate_name(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.wifi
            .iter()
            .map(|entry| entry.name.as_str())
            .find(|name| !seen.insert(*name))
    }
}

/// Request body for deleting known hotspots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteHotspotsRequest {
    pub names: Vec<String>,
}

/// Deletion flow of the "manage hotspots" view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum DeletionState {
    #[default]
    Idle,
    Confirming {
        count: usize,
    },
    Deleting {
        names: Vec<String>,
    },
}
