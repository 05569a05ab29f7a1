use crux_core::Command;

use crate::events::{AuthEvent, Event};
use crate::handle_response;
use crate::haptic_pulse;
use crate::model::Model;
use crate::types::{
    validate_new_password, ChangePasswordRequest, PasswordRequest, PasswordSetStatus,
    ScriptResponse, ScriptStatus,
};
use crate::{script_get, script_post};
use crate::Effect;

/// Handle authentication-related events
pub fn handle(event: AuthEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        AuthEvent::CheckPasswordSet => {
            script_get!(Auth, AuthEvent, model, "checkPassword", CheckPasswordSetResponse, "Check password",
                expect_json: PasswordSetStatus
            )
        }

        AuthEvent::CheckPasswordSetResponse(result) => handle_response!(model, result, {
            on_success: |model, status| {
                model.requires_password_set = !status.password_set;
            },
        }),

        AuthEvent::Login {
            password,
            confirmation,
        } => {
            let pulse = haptic_pulse!(Strong);

            if model.lockout_remaining_seconds.is_some() {
                let message = lockout_message(model);
                return Command::all([pulse, model.set_error_and_render(message)]);
            }
            if password.is_empty() {
                return Command::all([
                    pulse,
                    model.set_error_and_render("Please enter the password".to_string()),
                ]);
            }

            let request = PasswordRequest { password };
            let login = if model.requires_password_set {
                if let Err(e) = validate_new_password(&request.password, &confirmation) {
                    model.set_error_and_render(e)
                } else {
                    script_post!(Auth, AuthEvent, model, "createPassword", CreatePasswordResponse, "Create password",
                        body_json: &request,
                        expect_json: ScriptResponse
                    )
                }
            } else {
                script_post!(Auth, AuthEvent, model, "verifyPassword", VerifyPasswordResponse, "Login",
                    body_json: &request,
                    expect_json: ScriptResponse
                )
            };
            Command::all([pulse, login])
        }

        AuthEvent::CreatePasswordResponse(result) => {
            handle_script_response(model, result, "Failed to create password", |model| {
                model.requires_password_set = false;
                model.is_authenticated = true;
                model.success_message = Some("Password created".to_string());
            })
        }

        AuthEvent::VerifyPasswordResponse(result) => {
            handle_script_response(model, result, "Wrong password", |model| {
                model.is_authenticated = true;
            })
        }

        AuthEvent::ChangePassword {
            old_password,
            new_password,
            confirmation,
        } => {
            if old_password.is_empty() || new_password.is_empty() || confirmation.is_empty() {
                return model.set_error_and_render("Please fill in all password fields".to_string());
            }
            if let Err(e) = validate_new_password(&new_password, &confirmation) {
                return model.set_error_and_render(e);
            }
            let request = ChangePasswordRequest {
                old_password,
                new_password,
            };
            script_post!(Auth, AuthEvent, model, "changePassword", ChangePasswordResponse, "Change password",
                body_json: &request,
                expect_json: ScriptResponse
            )
        }

        AuthEvent::ChangePasswordResponse(result) => {
            handle_script_response(model, result, "Failed to change password", |model| {
                model.success_message = Some("Password changed".to_string());
            })
        }

        AuthEvent::LockoutTick => match model.lockout_remaining_seconds {
            Some(remaining) if remaining > 1 => {
                model.lockout_remaining_seconds = Some(remaining - 1);
                crux_core::render::render()
            }
            Some(_) => {
                model.lockout_remaining_seconds = None;
                model.error_message = None;
                model.success_message =
                    Some("Lock released, please enter the password again".to_string());
                crux_core::render::render()
            }
            None => Command::done(),
        },
    }
}

/// Fold a `{status, message, remainingTime}` envelope into the model
fn handle_script_response(
    model: &mut Model,
    result: Result<ScriptResponse, String>,
    fallback_error: &str,
    on_success: impl FnOnce(&mut Model),
) -> Command<Effect, Event> {
    model.stop_loading();
    match result {
        Ok(ScriptResponse {
            status: ScriptStatus::Success,
            ..
        }) => on_success(model),
        Ok(ScriptResponse {
            status: ScriptStatus::Locked,
            remaining_time,
            ..
        }) => {
            let remaining = remaining_time.unwrap_or(0);
            log::warn!("login locked for {remaining}s");
            model.lockout_remaining_seconds = (remaining > 0).then_some(remaining);
            let message = lockout_message(model);
            model.set_error(message);
        }
        Ok(ScriptResponse { message, .. }) => {
            model.set_error(message.unwrap_or_else(|| fallback_error.to_string()));
        }
        Err(e) => model.set_error(e),
    }
    crux_core::render::render()
}

fn lockout_message(model: &Model) -> String {
    let remaining = model.lockout_remaining_seconds.unwrap_or(0);
    format!(
        "Too many failed attempts, wait {}m {}s before trying again",
        remaining / 60,
        remaining % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MIN_PASSWORD_LENGTH;

    fn response(status: ScriptStatus) -> ScriptResponse {
        ScriptResponse {
            status,
            message: None,
            remaining_time: None,
        }
    }

    #[test]
    fn check_response_requests_password_creation() {
        let mut model = Model::default();

        let _ = handle(
            AuthEvent::CheckPasswordSetResponse(Ok(PasswordSetStatus {
                password_set: false,
            })),
            &mut model,
        );

        assert!(model.requires_password_set);
        assert!(!model.is_loading);
    }

    #[test]
    fn first_login_validates_confirmation_before_sending() {
        let mut model = Model {
            requires_password_set: true,
            ..Default::default()
        };

        let _ = handle(
            AuthEvent::Login {
                password: "longenough".into(),
                confirmation: "different1".into(),
            },
            &mut model,
        );

        assert_eq!(model.error_message, Some("Passwords do not match".into()));
        assert!(!model.is_loading);
    }

    #[test]
    fn login_sets_loading() {
        let mut model = Model::default();

        let _ = handle(
            AuthEvent::Login {
                password: "secret".into(),
                confirmation: String::new(),
            },
            &mut model,
        );

        assert!(model.is_loading);
    }

    #[test]
    fn verify_success_authenticates() {
        let mut model = Model {
            is_loading: true,
            ..Default::default()
        };

        let _ = handle(
            AuthEvent::VerifyPasswordResponse(Ok(response(ScriptStatus::Success))),
            &mut model,
        );

        assert!(model.is_authenticated);
        assert!(!model.is_loading);
    }

    #[test]
    fn verify_error_shows_backend_message() {
        let mut model = Model::default();
        let mut reply = response(ScriptStatus::Error);
        reply.message = Some("Wrong password, 2 attempts left".into());

        let _ = handle(AuthEvent::VerifyPasswordResponse(Ok(reply)), &mut model);

        assert!(!model.is_authenticated);
        assert_eq!(
            model.error_message,
            Some("Wrong password, 2 attempts left".into())
        );
    }

    #[test]
    fn lockout_blocks_login_until_it_expires() {
        let mut model = Model::default();
        let mut reply = response(ScriptStatus::Locked);
        reply.remaining_time = Some(2);

        let _ = handle(AuthEvent::VerifyPasswordResponse(Ok(reply)), &mut model);
        assert_eq!(model.lockout_remaining_seconds, Some(2));

        let _ = handle(
            AuthEvent::Login {
                password: "secret".into(),
                confirmation: String::new(),
            },
            &mut model,
        );
        assert!(!model.is_loading);

        let _ = handle(AuthEvent::LockoutTick, &mut model);
        assert_eq!(model.lockout_remaining_seconds, Some(1));
        let _ = handle(AuthEvent::LockoutTick, &mut model);
        assert_eq!(model.lockout_remaining_seconds, None);
        assert!(model.success_message.is_some());

        let _ = handle(
            AuthEvent::Login {
                password: "secret".into(),
                confirmation: String::new(),
            },
            &mut model,
        );
        assert!(model.is_loading);
    }

    #[test]
    fn change_password_requires_all_fields() {
        let mut model = Model::default();

        let _ = handle(
            AuthEvent::ChangePassword {
                old_password: String::new(),
                new_password: "longenough".into(),
                confirmation: "longenough".into(),
            },
            &mut model,
        );

        assert_eq!(
            model.error_message,
            Some("Please fill in all password fields".into())
        );
    }

    #[test]
    fn change_password_rejects_short_new_password_before_sending() {
        let mut model = Model::default();

        let mut command = handle(
            AuthEvent::ChangePassword {
                old_password: "oldsecret".into(),
                new_password: "short12".into(),
                confirmation: "short12".into(),
            },
            &mut model,
        );

        assert!(!command.effects().any(|effect| matches!(effect, Effect::Http(_))));
        assert_eq!(
            model.error_message,
            Some(format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"))
        );
    }

    #[test]
    fn change_password_sends_both_passwords() {
        let mut model = Model::default();

        let mut command = handle(
            AuthEvent::ChangePassword {
                old_password: "oldsecret".into(),
                new_password: "newsecret".into(),
                confirmation: "newsecret".into(),
            },
            &mut model,
        );

        let body = command
            .effects()
            .find_map(|effect| match effect {
                Effect::Http(request) => Some(request.operation.body),
                _ => None,
            })
            .unwrap();
        let sent: ChangePasswordRequest = serde_json::from_slice(&body).unwrap();
        assert_eq!(sent.old_password, "oldsecret");
        assert_eq!(sent.new_password, "newsecret");
    }
}
