//! HTTP helper functions for Crux Core
//!
//! This module extracts common HTTP response handling logic from macros
//! into debuggable, testable functions.

use crux_http::Response;

/// Base URL for router endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires absolute
/// URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`.
pub const BASE_URL: &str = "https://relative";

/// Path of the CGI script that performs all relay operations
pub const INTEGRATED_SCRIPT_PATH: &str = "/cgi-bin/wx/integrated.sh";

/// Static file the backend keeps the known hotspot list in
pub const HOTSPOT_LIST_PATH: &str = "/wx/wifi-config.json";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use wifi_relay_ui_core::http_helpers::build_url;
/// let url = build_url("/wx/wifi-config.json");
/// assert_eq!(url, "https://relative/wx/wifi-config.json");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Constructs the address of an `integrated.sh` action.
///
/// # Example
/// ```
/// use wifi_relay_ui_core::http_helpers::action_url;
/// assert_eq!(
///     action_url("saveOrder"),
///     "https://relative/cgi-bin/wx/integrated.sh?action=saveOrder"
/// );
/// ```
pub fn action_url(action: &str) -> String {
    build_url(&format!("{INTEGRATED_SCRIPT_PATH}?action={action}"))
}

/// Validates HTTP response.
///
/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extracts error message from HTTP response.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) => {
            if body.is_empty() {
                format!("{action} failed: HTTP {status} (Empty body)")
            } else {
                match String::from_utf8(body) {
                    Ok(msg) => format!("{action} failed: {}", msg.trim()),
                    Err(e) => format!("{action} failed: HTTP {status} (Invalid UTF-8: {e})"),
                }
            }
        }
        None => format!("{action} failed: HTTP {status} (No body)"),
    }
}

/// Formats a transport-level error (network down, aborted request).
pub fn map_http_error(action: &str, error: impl std::fmt::Display) -> String {
    format!("{action} failed: {error}")
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Check response status only (no body parsing).
pub fn check_response_status(action: &str, response: &mut Response<Vec<u8>>) -> Result<(), String> {
    if is_response_success(response) {
        Ok(())
    } else {
        Err(extract_error_message(action, response))
    }
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), String> {
    match result {
        Ok(mut response) => check_response_status(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Read a script's plain text output
///
/// Invalid UTF-8 is replaced rather than rejected since the text is only shown.
pub fn parse_text_response(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<String, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    Ok(response
        .take_body()
        .map(|body| String::from_utf8_lossy(&body).into_owned())
        .unwrap_or_default())
}

/// Process HTTP response result and read the body as text
pub fn process_text_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<String, String> {
    match result {
        Ok(mut response) => parse_text_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Handle request creation error - sets error message and returns render command
///
/// This is used when building an HTTP request fails (e.g., JSON serialization error).
pub fn handle_request_error<M, E>(
    model: &mut M,
    action: &str,
    error: impl std::fmt::Display,
) -> crux_core::Command<crate::Effect, E>
where
    M: crate::model::ModelErrorHandler,
    E: Send + 'static,
{
    model.set_error(format!("Failed to create {action} request: {error}"));
    crux_core::render::render()
}
