use serde::{Deserialize, Serialize};

/// Query string of `GET /v1/tools/lookup`.
#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    pub domain: Option<String>,
}

/// Body of `POST /v1/tools/validate`.
///
/// `ip` is kept as raw JSON so non-string values can be classified instead
/// of rejected by deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub ip: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ValidateResponse {
    pub status: bool,
}
