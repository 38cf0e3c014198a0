// Response envelope handling.
//
// Every catalog backend response is wrapped in `{status, message, data}`.
// `unwrap_envelope` is the single place the envelope is stripped; all
// endpoint methods see the inner payload or a classified `Error`. It is
// pure and synchronous -- transport has already happened by the time it
// runs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// The `{status, message, data}` wrapper on every backend response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Envelope `status` value signalling success.
pub const STATUS_SUCCESS: &str = "Success";

/// Strip the envelope from a response, classifying failures.
///
/// - HTTP failure whose `data` is a field→message object: the field
///   messages are joined with `"; "` into [`Error::Validation`].
/// - Any other HTTP failure: [`Error::Request`] with the envelope
///   message, or a synthesized `"HTTP error! status: {status}"`.
/// - HTTP success with a non-`"Success"` status or an absent/null
///   payload: [`Error::Operation`]. Backends that report errors inside
///   a 200 land here instead of leaking a bogus payload.
/// - Otherwise the payload is returned unchanged.
pub fn unwrap_envelope(http_status: u16, envelope: Envelope<Value>) -> Result<Value, Error> {
    let ok = (200..300).contains(&http_status);

    if !ok {
        if let Some(message) = field_error_message(envelope.data.as_ref()) {
            return Err(Error::Validation {
                status: http_status,
                message,
            });
        }
        let message = match envelope.message {
            Some(m) if !m.is_empty() => m,
            _ => format!("HTTP error! status: {http_status}"),
        };
        return Err(Error::Request {
            status: http_status,
            message,
        });
    }

    match envelope.data {
        Some(data) if envelope.status == STATUS_SUCCESS && !is_falsy(&data) => Ok(data),
        _ => Err(Error::Operation),
    }
}

/// Join the values of a validation-style field-error map.
///
/// Returns `None` unless `data` is a non-empty JSON object -- scalar or
/// array payloads on failure responses are not field errors.
fn field_error_message(data: Option<&Value>) -> Option<String> {
    let map = data?.as_object()?;
    if map.is_empty() {
        return None;
    }
    let joined = map
        .values()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ");
    Some(joined)
}

/// JSON counterpart of a falsy payload: null, `false`, zero, `""`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// ── Pagination ───────────────────────────────────────────────────────

/// One page of a paginated list response.
///
/// The backend is not uniform about the item-array field (`listResult`,
/// `data`, `list`, `users`, `industryCodes`, depending on endpoint) nor
/// about `currentPage` vs `pageCurrent`; serde aliases absorb the
/// variance so consumers see one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "currentPage", alias = "pageCurrent", default = "first_page")]
    pub current_page: u32,
    #[serde(rename = "totalPages", alias = "totalPage", default)]
    pub total_pages: u32,
    #[serde(
        rename = "items",
        alias = "data",
        alias = "listResult",
        alias = "list",
        alias = "users",
        alias = "industryCodes",
        default = "Vec::new"
    )]
    pub items: Vec<T>,
}

fn first_page() -> u32 {
    1
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            items: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Map the items while keeping the page position.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            current_page: self.current_page,
            total_pages: self.total_pages,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn envelope(v: Value) -> Envelope<Value> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn success_returns_data() {
        let env = envelope(json!({
            "status": "Success",
            "message": "",
            "data": [{"id": "1", "name": "Acme"}]
        }));
        let data = unwrap_envelope(200, env).unwrap();
        assert_eq!(data, json!([{"id": "1", "name": "Acme"}]));
    }

    #[test]
    fn http_failure_with_field_map_joins_messages() {
        let env = envelope(json!({
            "status": "Error",
            "data": {"name": "Name is required"}
        }));
        let err = unwrap_envelope(422, env).unwrap_err();
        match err {
            Error::Validation { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "Name is required");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn field_map_joins_multiple_fields_with_semicolons() {
        let env = envelope(json!({
            "status": "Error",
            "data": {"email": "Email is invalid", "name": "Name is required"}
        }));
        let err = unwrap_envelope(400, env).unwrap_err();
        // serde_json objects iterate in key order, so the join is stable.
        assert_eq!(err.to_string(), "Email is invalid; Name is required");
    }

    #[test]
    fn http_failure_without_data_uses_envelope_message() {
        let env = envelope(json!({"status": "Error", "message": "Method not found"}));
        let err = unwrap_envelope(404, env).unwrap_err();
        match err {
            Error::Request { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Method not found");
            }
            other => panic!("expected Request, got {other:?}"),
        }
    }

    #[test]
    fn http_failure_without_message_synthesizes_one() {
        let env = envelope(json!({"status": "Error"}));
        let err = unwrap_envelope(503, env).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn http_success_with_error_status_is_operation_failure() {
        let env = envelope(json!({
            "status": "Error",
            "message": "internal state invalid",
            "data": {"id": "1"}
        }));
        assert!(matches!(
            unwrap_envelope(200, env).unwrap_err(),
            Error::Operation
        ));
    }

    #[test]
    fn http_success_with_null_data_is_operation_failure() {
        let env = envelope(json!({"status": "Success", "data": null}));
        assert!(matches!(
            unwrap_envelope(200, env).unwrap_err(),
            Error::Operation
        ));
    }

    #[test]
    fn http_success_with_falsy_data_is_operation_failure() {
        for data in [json!(false), json!(0), json!("")] {
            let env = envelope(json!({"status": "Success", "data": data}));
            assert!(matches!(
                unwrap_envelope(200, env).unwrap_err(),
                Error::Operation
            ));
        }
    }

    #[test]
    fn empty_array_payload_is_still_success() {
        // An empty list is a meaningful payload, not a missing one.
        let env = envelope(json!({"status": "Success", "data": []}));
        assert_eq!(unwrap_envelope(200, env).unwrap(), json!([]));
    }

    #[test]
    fn validation_wins_over_scalar_message_on_failure() {
        let env = envelope(json!({
            "status": "Error",
            "message": "Validation failed",
            "data": {"unitGroupId": "Unit group does not exist"}
        }));
        assert_eq!(
            unwrap_envelope(422, env).unwrap_err().to_string(),
            "Unit group does not exist"
        );
    }

    // ── Page alias coverage ──────────────────────────────────────────

    #[test]
    fn page_parses_list_result_variant() {
        let page: Page<Value> = serde_json::from_value(json!({
            "currentPage": 2,
            "totalPage": 7,
            "listResult": [{"id": "a"}]
        }))
        .unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 7);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn page_parses_page_current_and_users_variant() {
        let page: Page<Value> = serde_json::from_value(json!({
            "pageCurrent": 1,
            "totalPage": 3,
            "users": [{"id": "u1"}, {"id": "u2"}]
        }))
        .unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn page_parses_industry_codes_variant() {
        let page: Page<Value> = serde_json::from_value(json!({
            "currentPage": 1,
            "totalPage": 0,
            "industryCodes": []
        }))
        .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn page_defaults_when_fields_missing() {
        let page: Page<Value> = serde_json::from_value(json!({"list": []})).unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 0);
    }
}
