//! Haptic feedback command definitions.
//!
//! The Shell maps a [`HapticOperation`] onto `navigator.vibrate`. Feedback is
//! best effort: the Shell answers `Unsupported` when the platform cannot vibrate
//! and the Core never waits on it.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HapticIntensity {
    Light,
    Medium,
    Strong,
}

impl HapticIntensity {
    /// Vibration pattern in milliseconds (on, off, on, ...)
    pub fn pattern(self) -> Vec<u32> {
        match self {
            Self::Light => vec![40],
            Self::Medium => vec![80],
            Self::Strong => vec![50, 30, 50],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HapticOperation {
    pub pattern: Vec<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HapticOutput {
    Delivered,
    Unsupported,
}

impl Operation for HapticOperation {
    type Output = HapticOutput;
}

/// Command-based haptic API
pub struct Haptic<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Haptic<Effect, Event>
where
    Effect: Send + From<crux_core::Request<HapticOperation>> + 'static,
    Event: Send + 'static,
{
    pub fn pulse(intensity: HapticIntensity) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(HapticOperation {
            pattern: intensity.pattern(),
        })
    }
}

#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: HapticOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<HapticOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: HapticOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = HapticOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_pulse_is_a_double_buzz() {
        assert_eq!(HapticIntensity::Strong.pattern(), vec![50, 30, 50]);
        assert_eq!(HapticIntensity::Light.pattern(), vec![40]);
    }
}
