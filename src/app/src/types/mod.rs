//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - auth: Login gate and password types
//! - autoswitch: Auto-switch log and timer
//! - hotspot: Known hotspot list and its wire format
//! - relay: Upstream connection status and switching
//! - wireless: The relay's own access point
//! - drag: Gesture and reorder state machine types
//! - scroll: Auto-scroll state
//! - settings: Drag engine tunables

pub mod auth;
pub mod autoswitch;
pub mod drag;
pub mod hotspot;
pub mod relay;
pub mod scroll;
pub mod settings;
pub mod wireless;

pub use auth::*;
pub use autoswitch::*;
pub use drag::*;
pub use hotspot::*;
pub use relay::*;
pub use scroll::*;
pub use settings::*;
pub use wireless::*;
