use crate::models::failure::InitializationFailure;
use crate::models::responses::{RemoteResponse, ResponseStatus};

pub const GENERIC_MESSAGE: &str = "initialization failed";
pub const STANDARD_INIT_ERROR: &str = "STANDARD_INIT_ERROR";
pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";

/// Turns a decoded gateway answer into the hosted payment link.
///
/// Only `status: "success"` with a non-empty `data.link` succeeds. Anything
/// else, including a success without a link, becomes an
/// [`InitializationFailure`] carrying the gateway's message, code, error id
/// and field errors.
pub fn interpret(response: RemoteResponse) -> Result<String, InitializationFailure> {
    let RemoteResponse {
        status,
        message,
        error_id,
        code,
        errors,
        data,
    } = response;

    let link = data.and_then(|d| d.link).filter(|link| !link.is_empty());
    let is_success = status == Some(ResponseStatus::Success);

    if let (true, Some(link)) = (is_success, link) {
        return Ok(link);
    }

    let fallback_code = if is_success {
        MALFORMED_RESPONSE
    } else {
        STANDARD_INIT_ERROR
    };
    let code = non_empty(code)
        .or_else(|| non_empty(error_id.clone()))
        .unwrap_or_else(|| fallback_code.to_string());
    let message = non_empty(message).unwrap_or_else(|| GENERIC_MESSAGE.to_string());

    Err(InitializationFailure::new(message, code)
        .with_error_id(error_id)
        .with_field_errors(errors.unwrap_or_default()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
