use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

/// Auto-scroll state while a drag session is active
///
/// The shell runs its tick timer exactly while `active` is set. `scroll_to` is
/// the position computed by the latest tick; the shell applies it to the
/// container right after sending that tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScrollState {
    pub direction: ScrollDirection,
    /// Signed pixels per ideal frame, negative scrolls up
    pub speed: f64,
    pub active: bool,
    pub last_tick_ms: Option<f64>,
    pub scroll_to: Option<f64>,
}

impl ScrollState {
    /// Halt scrolling, keeping the final position of the last tick
    pub fn stop(&mut self) {
        *self = Self {
            scroll_to: self.scroll_to,
            ..Self::default()
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
