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

//! Greeter error types

use crate::response::Response;

use std::error;
use std::fmt::{Display, Formatter};
use std::result;

/// Result type for operations that could result in a [GreeterError]
pub type Result<T> = result::Result<T, GreeterError>;

/// Greeter error
#[derive(Debug)]
pub enum GreeterError {
    /// Error returned when the response body cannot be encoded to JSON.
    /// The 500-status fallback response is carried alongside the underlying
    /// encoder error so that the invocation boundary can report the failure
    /// to the runtime while still observing the fallback record.
    ResponseMarshal {
        /// The 500-status response produced in place of the real one.
        response: Response,
        /// The underlying serde_json error.
        source: serde_json::Error,
    },
    /// Error associated to Lambda runtime execution.
    Lambda(Box<dyn error::Error + Send + Sync>),
}

impl From<Box<dyn error::Error + Send + Sync>> for GreeterError {
    fn from(e: Box<dyn error::Error + Send + Sync>) -> Self {
        GreeterError::Lambda(e)
    }
}

impl Display for GreeterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            GreeterError::ResponseMarshal { ref source, .. } => {
                write!(f, "Response marshal error: {}", source)
            }
            GreeterError::Lambda(ref desc) => write!(f, "Lambda error: {}", desc),
        }
    }
}

impl error::Error for GreeterError {}
