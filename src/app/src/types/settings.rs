use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Tunables of the drag engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct DragSettings {
    /// Distance from a container edge at which auto-scroll kicks in
    #[validate(exclusive_minimum = 0.0)]
    pub scroll_threshold_px: f64,
    /// Scroll speed at the very edge, in pixels per ideal frame
    #[validate(exclusive_minimum = 0.0)]
    pub scroll_base_speed: f64,
    /// Exponent of the edge falloff curve
    #[validate(minimum = 1.0)]
    pub scroll_acceleration: f64,
    #[validate(exclusive_minimum = 0.0)]
    pub ideal_frame_ms: f64,
    #[validate(minimum = 500)]
    pub long_press_ms: u32,
    #[validate(minimum = 0.0)]
    pub touch_jitter_px: f64,
    #[validate(minimum = 1)]
    pub persist_timeout_ms: u32,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 180.0,
            scroll_base_speed: 10.0,
            scroll_acceleration: 5.0,
            ideal_frame_ms: 16.0,
            long_press_ms: 1000,
            touch_jitter_px: 10.0,
            persist_timeout_ms: 60_000,
        }
    }
}
