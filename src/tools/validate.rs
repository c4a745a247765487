use serde_json::Value;

use super::types::{ValidateRequest, ValidateResponse};
use crate::error::AppError;
use crate::shared::is_ipv4;

/// Classifies the `ip` field of a raw request body.
///
/// Only `application/json` bodies are parsed. Any other content type, an
/// empty body, or a JSON value that is not an object reads as `{}`.
/// `status` is true only for IPv4; an IPv6 address is a valid request that
/// answers `false`.
pub fn validate_ip(content_type: Option<&str>, body: &[u8]) -> Result<ValidateResponse, AppError> {
    let request = if is_json(content_type) && !body.iter().all(u8::is_ascii_whitespace) {
        parse_request(body)?
    } else {
        ValidateRequest::default()
    };

    let status = match request.ip {
        None => return Err(missing_ip()),
        Some(ref ip) if is_falsy(ip) => return Err(missing_ip()),
        Some(Value::String(ip)) => is_ipv4(&ip),
        Some(_) => false,
    };

    Ok(ValidateResponse { status })
}

fn parse_request(body: &[u8]) -> Result<ValidateRequest, AppError> {
    let malformed = |_| AppError::Validation("Malformed JSON in request body.");

    match serde_json::from_slice::<Value>(body).map_err(malformed)? {
        value @ Value::Object(_) => serde_json::from_value(value).map_err(malformed),
        _ => Ok(ValidateRequest::default()),
    }
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

fn missing_ip() -> AppError {
    AppError::Validation("Missing required 'ip' in request body.")
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}
