use crux_core::Command;
use serde_valid::Validate;

use crate::commands::haptic::HapticOutput;
use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Handle UI-related events (clear messages, settings, haptic results)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::ClearError => update_field!(model.error_message, None),
        UiEvent::ClearSuccess => update_field!(model.success_message, None),

        UiEvent::ApplySettings(settings) => match settings.validate() {
            Ok(()) => {
                log::info!("drag settings updated: {settings:?}");
                update_field!(model.settings, settings)
            }
            Err(e) => {
                log::warn!("rejected drag settings: {e}");
                model.set_error_and_render(format!("Invalid drag settings: {e}"))
            }
        },

        UiEvent::HapticFeedback(HapticOutput::Delivered) => Command::done(),
        UiEvent::HapticFeedback(HapticOutput::Unsupported) => {
            log::debug!("haptic feedback unsupported on this platform");
            Command::done()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DragSettings;

    #[test]
    fn invalid_settings_keep_previous_values() {
        let mut model = Model::default();
        let settings = DragSettings {
            scroll_base_speed: -3.0,
            ..Default::default()
        };

        let _ = handle(UiEvent::ApplySettings(settings), &mut model);

        assert_eq!(model.settings, DragSettings::default());
        assert!(model.error_message.is_some());
    }

    #[test]
    fn valid_settings_are_applied() {
        let mut model = Model::default();
        let settings = DragSettings {
            long_press_ms: 500,
            ..Default::default()
        };

        let _ = handle(UiEvent::ApplySettings(settings), &mut model);

        assert_eq!(model.settings.long_press_ms, 500);
        assert_eq!(model.error_message, None);
    }

    #[test]
    fn clear_success_drops_the_toast() {
        let mut model = Model {
            success_message: Some("Hotspot order saved".into()),
            ..Default::default()
        };

        let _ = handle(UiEvent::ClearSuccess, &mut model);

        assert_eq!(model.success_message, None);
    }
}
