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

//! The greeting function handler: one invocation in, one response out.

use crate::config::{ConfigProvider, FUNCTION_NAME_KEY, GREETING_KEY};
use crate::error::{GreeterError, Result};
use crate::request_id::RequestIdSource;
use crate::response::{Response, ResponseBody};
use lambda_runtime::Context;
use log::{error, info};
use serde_json::Value;

/// The greeting function handler.
///
/// Configuration access and the request identifier lookup path are injected
/// at construction time; `handle` itself is a pure mapping from one event to
/// one response. The hosting runtime may run many instances concurrently,
/// but a single invocation is strictly sequential.
pub struct Greeter {
    config: Box<dyn ConfigProvider>,
    request_id_source: RequestIdSource,
    default_greeting: String,
}

impl Greeter {
    /// Returns a new handler.
    ///
    /// `default_greeting` is the fixed literal substituted when the
    /// [`GREETING_KEY`] configuration value is absent or empty.
    pub fn new(
        config: Box<dyn ConfigProvider>,
        request_id_source: RequestIdSource,
        default_greeting: &str,
    ) -> Self {
        Self {
            config,
            request_id_source,
            default_greeting: default_greeting.to_string(),
        }
    }

    /// Handles one invocation: builds the response record and serializes it.
    ///
    /// The only failure mode is serialization failure of the response body.
    /// In that case the returned error carries the 500-status fallback
    /// response, so the caller can hand the failure to the runtime while the
    /// fallback record is still observable. The event itself is never
    /// validated; it is logged and otherwise ignored.
    pub fn handle(&self, event: &Value, context: &Context) -> Result<Response> {
        info!("Rust Lambda function invoked");
        info!("Event: {}", event);

        let function_name = self.config.get(FUNCTION_NAME_KEY).unwrap_or_default();
        let request_id = self.request_id_source.resolve(self.config.as_ref(), context);

        info!("Function name: {}", function_name);
        info!("Request ID: {}", request_id);

        let greeting = self
            .config
            .get(GREETING_KEY)
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| self.default_greeting.clone());

        let body = ResponseBody::new(greeting, function_name, request_id);
        let body = match serde_json::to_string(&body) {
            Ok(encoded) => encoded,
            Err(e) => {
                let response = Response::marshal_failure();
                error!("Response: {}", response.body);
                return Err(GreeterError::ResponseMarshal {
                    response,
                    source: e,
                });
            }
        };

        let response = Response::ok(body);
        info!("Response: {:?}", response);
        Ok(response)
    }
}
