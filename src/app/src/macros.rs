/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.error_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.success_message, None;
///     model.error_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{
    action_url, build_url, check_response_status, extract_error_message, handle_request_error,
    is_response_success, map_http_error, parse_json_response, process_json_response,
    process_status_response, process_text_response, BASE_URL,
};

/// Macro for POST requests to an `integrated.sh` action with standard error handling.
/// Requires domain parameters for event wrapping.
///
/// # Patterns
///
/// Pattern 1: POST with JSON body expecting status only
/// ```ignore
/// script_post!(Hotspot, HotspotEvent, model, "delete", DeleteResponse, "Delete hotspots",
///     body_json: &request
/// )
/// ```
///
/// Pattern 2: POST with JSON body expecting JSON response
/// ```ignore
/// script_post!(Auth, AuthEvent, model, "verifyPassword", VerifyPasswordResponse, "Login",
///     body_json: &request,
///     expect_json: ScriptResponse
/// )
/// ```
#[macro_export]
macro_rules! script_post {
    // Pattern 1: POST with JSON body expecting status only
    ($domain:ident, $domain_event:ident, $model:expr, $action_name:expr, $response_event:ident, $action:expr, body_json: $body:expr) => {{
        $model.start_loading();
        match $crate::HttpCmd::post($crate::action_url($action_name))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result = $crate::process_status_response($action, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
            ]),
            Err(e) => $crate::handle_request_error($model, $action, e),
        }
    }};

    // Pattern 2: POST with JSON body expecting JSON response
    ($domain:ident, $domain_event:ident, $model:expr, $action_name:expr, $response_event:ident, $action:expr, body_json: $body:expr, expect_json: $response_type:ty) => {{
        $model.start_loading();
        match $crate::HttpCmd::post($crate::action_url($action_name))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result: Result<$response_type, String> =
                        $crate::process_json_response($action, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
            ]),
            Err(e) => $crate::handle_request_error($model, $action, e),
        }
    }};
}

/// Macro for GET requests to an `integrated.sh` action expecting a JSON response.
///
/// # Example
/// ```ignore
/// script_get!(Auth, AuthEvent, model, "checkPassword", CheckPasswordSetResponse, "Check password",
///     expect_json: PasswordSetStatus
/// )
/// ```
#[macro_export]
macro_rules! script_get {
    ($domain:ident, $domain_event:ident, $model:expr, $action_name:expr, $response_event:ident, $action:expr, expect_json: $response_type:ty) => {{
        $model.start_loading();
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::get($crate::action_url($action_name))
                .build()
                .then_send(|result| {
                    let event_result: Result<$response_type, String> =
                        $crate::process_json_response($action, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
        ])
    }};
}

/// Fire-and-forget haptic pulse.
///
/// # Example
/// ```ignore
/// haptic_pulse!(Light)
/// ```
#[macro_export]
macro_rules! haptic_pulse {
    ($intensity:ident) => {
        $crate::HapticCmd::pulse($crate::HapticIntensity::$intensity)
            .build()
            .then_send(|output| {
                $crate::events::Event::Ui($crate::events::UiEvent::HapticFeedback(output))
            })
    };
}

/// Macro for handling response events with standard loading state and error handling.
///
/// # Patterns
///
/// Pattern 1: Only success message (for `Result<(), String>`)
/// ```ignore
/// handle_response!(model, result, {
///     success_message: "Operation successful",
/// })
/// ```
///
/// Pattern 2: Custom success handling
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, value| {
///         m.some_field = value;
///     },
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    // Pattern 1: Only success message (for Result<(), String>)
    ($model:expr, $result:expr, {
        success_message: $msg:expr $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok(()) => {
                $model.success_message = Some($msg.to_string());
            }
            Err(e) => {
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};

    // Pattern 2: Only custom success handler
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok($value) => {
                #[allow(clippy::redundant_locals)]
                let $success_model = $model;
                $success_body
            }
            Err(e) => {
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};
}
