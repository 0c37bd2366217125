use super::failure::FieldError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
    /// Any status string the gateway may add later; never a success.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: Option<String>,
}

/// Body of the gateway's answer to an initialization call.
///
/// Decoding never fails on the shape of individual fields: a field of an
/// unexpected type reads as absent, so the gateway's message and code still
/// reach the caller when some other part of the body is off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<ResponseStatus>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub error_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_field_errors")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<ResponseData>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

// Accept either string or number, e.g. `"code": 400`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Keeps every usable entry: objects with missing keys default them, bare
/// strings become messages without a field, anything else is skipped.
fn lenient_field_errors<'de, D>(deserializer: D) -> Result<Option<Vec<FieldError>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(entries)) = value else {
        return Ok(None);
    };
    let errors = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(message) => Some(FieldError {
                field: String::new(),
                message,
            }),
            other => serde_json::from_value::<FieldError>(other).ok(),
        })
        .collect();
    Ok(Some(errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_success_body() {
        let response: RemoteResponse = serde_json::from_value(json!({
            "status": "success",
            "message": "Hosted Link",
            "data": { "link": "https://pay.example/abc" }
        }))
        .unwrap();
        assert_eq!(response.status, Some(ResponseStatus::Success));
        assert_eq!(
            response.data.and_then(|d| d.link).as_deref(),
            Some("https://pay.example/abc")
        );
    }

    #[test]
    fn tolerates_missing_and_unknown_fields() {
        let response: RemoteResponse = serde_json::from_value(json!({
            "status": "pending",
            "data": null,
            "extra": true
        }))
        .unwrap();
        assert_eq!(response.status, Some(ResponseStatus::Unknown));
        assert!(response.message.is_none());
        assert!(response.data.is_none());

        let empty: RemoteResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, RemoteResponse::default());
    }

    #[test]
    fn decodes_field_errors() {
        let response: RemoteResponse = serde_json::from_value(json!({
            "status": "error",
            "message": "Validation failed",
            "error_id": "N/F:1",
            "errors": [{ "field": "tx_ref", "message": "tx_ref is required" }]
        }))
        .unwrap();
        assert_eq!(response.error_id.as_deref(), Some("N/F:1"));
        assert_eq!(response.errors.map(|e| e.len()), Some(1));
    }

    #[test]
    fn field_error_without_message_keeps_the_rest() {
        let response: RemoteResponse = serde_json::from_value(json!({
            "status": "error",
            "message": "Invalid amount",
            "code": "INVALID_AMOUNT",
            "errors": [
                { "field": "amount" },
                "tx_ref is required",
                42,
                { "field": "customer.email", "message": "email is invalid" }
            ]
        }))
        .unwrap();
        assert_eq!(response.message.as_deref(), Some("Invalid amount"));
        assert_eq!(response.code.as_deref(), Some("INVALID_AMOUNT"));
        assert_eq!(
            response.errors.unwrap(),
            vec![
                FieldError {
                    field: "amount".to_string(),
                    message: String::new(),
                },
                FieldError {
                    field: String::new(),
                    message: "tx_ref is required".to_string(),
                },
                FieldError {
                    field: "customer.email".to_string(),
                    message: "email is invalid".to_string(),
                },
            ]
        );
    }

    #[test]
    fn numeric_code_and_error_id_read_as_strings() {
        let response: RemoteResponse = serde_json::from_value(json!({
            "status": "error",
            "message": "Bad request",
            "code": 400,
            "error_id": 1234
        }))
        .unwrap();
        assert_eq!(response.code.as_deref(), Some("400"));
        assert_eq!(response.error_id.as_deref(), Some("1234"));
    }

    #[test]
    fn odd_shapes_read_as_absent() {
        let response: RemoteResponse = serde_json::from_value(json!({
            "status": 1,
            "message": "still here",
            "code": { "nested": true },
            "errors": "not a list",
            "data": "nope"
        }))
        .unwrap();
        assert!(response.status.is_none());
        assert_eq!(response.message.as_deref(), Some("still here"));
        assert!(response.code.is_none());
        assert!(response.errors.is_none());
        assert!(response.data.is_none());
    }
}
