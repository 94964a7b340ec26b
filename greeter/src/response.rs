// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! This module contains the [`ResponseBody`] record built once per
//! invocation and the proxy-style [`Response`] envelope it is serialized
//! into.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The fixed error payload returned when the response body cannot be
/// encoded.
pub const MARSHAL_FAILURE_BODY: &str = r#"{"error": "Failed to marshal response"}"#;

/// The structured payload serialized into the outgoing response's body
/// field. Constructed fresh per call; no shared mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    /// The greeting message.
    pub message: String,
    /// The configured function name, echoed verbatim.
    pub function_name: String,
    /// The request identifier for this invocation.
    pub request_id: String,
}

impl ResponseBody {
    /// Returns a new response body.
    pub fn new(message: String, function_name: String, request_id: String) -> Self {
        Self {
            message,
            function_name,
            request_id,
        }
    }
}

/// The response record handed back to the invoking runtime. Exactly one is
/// produced per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP-style status code: 200 on success, 500 on marshal failure.
    pub status_code: i64,
    /// The serialized [`ResponseBody`], or the fixed error payload.
    pub body: String,
    /// Response headers; present on success only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl Response {
    /// Returns a 200-status response carrying `body` and the single
    /// content-type header.
    pub fn ok(body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code: 200,
            body,
            headers: Some(headers),
        }
    }

    /// Returns the 500-status response produced when the body cannot be
    /// serialized. No headers are attached.
    pub fn marshal_failure() -> Self {
        Self {
            status_code: 500,
            body: MARSHAL_FAILURE_BODY.to_string(),
            headers: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn ok_wire_shape() {
        let response = Response::ok(r#"{"message": "hi"}"#.to_string());
        let encoded = serde_json::to_string(&response).unwrap();

        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(200, value["statusCode"]);
        assert_eq!(r#"{"message": "hi"}"#, value["body"]);
        assert_eq!("application/json", value["headers"]["Content-Type"]);
    }

    #[test]
    fn marshal_failure_wire_shape() {
        let response = Response::marshal_failure();
        assert_eq!(500, response.status_code);
        assert_eq!(MARSHAL_FAILURE_BODY, response.body);

        // The error payload itself must be valid JSON with the fixed text.
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!("Failed to marshal response", body["error"]);

        // Headers are absent on failure, both in the record and on the wire.
        assert!(response.headers.is_none());
        let encoded = serde_json::to_string(&response).unwrap();
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert!(value.get("headers").is_none());
    }

    #[test]
    fn response_round_trip() {
        let response = Response::ok("{}".to_string());
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: Response = serde_json::from_str(&encoded).unwrap();
        assert_eq!(response, decoded);
    }

    #[test]
    fn body_field_names() {
        let body = ResponseBody::new(
            "Hello!".to_string(),
            "test-function".to_string(),
            "test-request-id".to_string(),
        );
        let value = serde_json::to_value(&body).unwrap();
        let fields = value.as_object().unwrap();
        assert_eq!(3, fields.len());
        assert_eq!("Hello!", fields["message"]);
        assert_eq!("test-function", fields["function_name"]);
        assert_eq!("test-request-id", fields["request_id"]);
    }
}
