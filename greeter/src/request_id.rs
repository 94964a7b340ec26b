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

//! The request identifier can be obtained two different ways, and both are
//! valid deployments of the greeting function. [`RequestIdSource`] fixes the
//! lookup path at handler construction time so that the per-invocation code
//! never branches on the call shape.

use crate::config::{ConfigProvider, REQUEST_ID_KEY};
use lambda_runtime::Context;

/// Where the handler obtains the request identifier echoed into the
/// response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestIdSource {
    /// Read the identifier from process-wide configuration
    /// ([`REQUEST_ID_KEY`]).
    Configuration,
    /// Read the identifier from the per-call invocation context supplied by
    /// the Lambda runtime.
    InvocationContext,
}

impl RequestIdSource {
    /// Resolves the request identifier for one invocation. An unset source
    /// yields the empty string.
    pub fn resolve(&self, config: &dyn ConfigProvider, context: &Context) -> String {
        match self {
            RequestIdSource::Configuration => config.get(REQUEST_ID_KEY).unwrap_or_default(),
            RequestIdSource::InvocationContext => context.request_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticProvider;

    #[test]
    fn configuration_source() {
        let config = StaticProvider::new(&[(REQUEST_ID_KEY, "test-request-id")]);
        let context = Context::default();
        assert_eq!(
            "test-request-id",
            RequestIdSource::Configuration.resolve(&config, &context)
        );
    }

    #[test]
    fn configuration_source_unset() {
        let config = StaticProvider::default();
        let context = Context::default();
        assert_eq!("", RequestIdSource::Configuration.resolve(&config, &context));
    }

    #[test]
    fn invocation_context_source() {
        let config = StaticProvider::new(&[(REQUEST_ID_KEY, "ignored")]);
        let mut context = Context::default();
        context.request_id = "ctx-request-id".to_string();
        assert_eq!(
            "ctx-request-id",
            RequestIdSource::InvocationContext.resolve(&config, &context)
        );
    }
}
