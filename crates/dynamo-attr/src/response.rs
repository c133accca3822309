//! Two-field response envelope for request handlers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: String,
}

/// Wraps `body` with a status code. String bodies pass through unchanged;
/// anything else is serialized as JSON.
pub fn respond(status_code: u16, body: &Value) -> ResponseEnvelope {
    let body = match body {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    ResponseEnvelope { status_code, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_body_passes_through() {
        let res = respond(200, &json!("ok"));
        assert_eq!(res.body, "ok");
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({"statusCode": 200, "body": "ok"})
        );
    }

    #[test]
    fn other_bodies_are_serialized() {
        assert_eq!(respond(400, &json!({"error": "bad"})).body, r#"{"error":"bad"}"#);
        assert_eq!(respond(204, &json!(null)).body, "null");
    }
}
