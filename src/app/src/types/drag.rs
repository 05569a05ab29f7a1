use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// One pointer position, built by the shell from a mouse drag event or a touch point
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub kind: PointerKind,
    /// `performance.now()` of the native event
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub fn distance_to(&self, other: &PointerSample) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Geometry of the scrollable list container at the time of an event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContainerMetrics {
    /// Viewport y of the container's top edge
    pub top: f64,
    /// Viewport y of the container's bottom edge
    pub bottom: f64,
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ContainerMetrics {
    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// Where the dragged item will land relative to the highlighted candidate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DropDirection {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DropIndicator {
    pub index: usize,
    pub direction: DropDirection,
}

/// A touch that may become a drag once the long-press delay has passed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PendingPress {
    pub index: usize,
    pub origin: PointerSample,
}

/// Transient state of one drag gesture
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DragSession {
    pub dragged_index: usize,
    pub current_target_index: Option<usize>,
    pub pointer_kind: PointerKind,
    pub last_pointer_y: f64,
    pub last_notified_candidate: Option<usize>,
    pub last_proposal_ms: Option<f64>,
    pub indicator: Option<DropIndicator>,
}

impl DragSession {
    pub fn new(dragged_index: usize, pointer: &PointerSample) -> Self {
        Self {
            dragged_index,
            current_target_index: None,
            pointer_kind: pointer.kind,
            last_pointer_y: pointer.y,
            last_notified_candidate: None,
            last_proposal_ms: None,
            indicator: None,
        }
    }
}

/// Lifecycle of one drag-reorder-persist cycle
///
/// `Committed` is not stored: a commit moves straight from `Dragging` to
/// `Persisting` within one update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ReorderState {
    #[default]
    Idle,
    Pressing(PendingPress),
    Dragging(DragSession),
    Persisting {
        seq: u64,
    },
    Reverting,
    /// The rollback re-fetch failed; the list may not match the relay until a
    /// reload succeeds
    OutOfSync,
}

impl ReorderState {
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// True while a gesture (pending press or drag) is alive
    pub fn is_gesture(&self) -> bool {
        matches!(self, Self::Pressing(_) | Self::Dragging(_))
    }
}
