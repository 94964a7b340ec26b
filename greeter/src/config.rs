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

//! Process-wide configuration for the greeting functions. The handler never
//! reads the environment directly; it is handed a [`ConfigProvider`] at
//! construction time so that tests can substitute a fixed key/value map.

use std::collections::HashMap;
use std::env;

/// The configuration key whose value is echoed into the response as the
/// function name.
pub const FUNCTION_NAME_KEY: &str = "FUNCTION_NAME";

/// The configuration key consulted for the request identifier when the
/// handler sources it from configuration rather than from the invocation
/// context.
pub const REQUEST_ID_KEY: &str = "REQUEST_ID";

/// The configuration key that overrides the default greeting message.
pub const GREETING_KEY: &str = "GREETING";

/// A key/value lookup for process-wide configuration.
///
/// A missing or malformed value reads as `None`, never as a failure.
pub trait ConfigProvider: Send + Sync {
    /// Returns the value for `key`, or `None` if the key is unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// The production provider, backed by the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvironmentProvider;

impl ConfigProvider for EnvironmentProvider {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// A fixed in-memory provider for deterministic tests and local runs.
#[derive(Debug, Default, Clone)]
pub struct StaticProvider {
    values: HashMap<String, String>,
}

impl StaticProvider {
    /// Returns a provider holding exactly the given key/value pairs.
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl ConfigProvider for StaticProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_provider_lookup() {
        let config = StaticProvider::new(&[(FUNCTION_NAME_KEY, "test-function")]);
        assert_eq!(
            Some("test-function".to_string()),
            config.get(FUNCTION_NAME_KEY)
        );
        assert_eq!(None, config.get(GREETING_KEY));
    }

    #[test]
    fn environment_provider_lookup() {
        // A key unique to this test to keep it independent of the process
        // environment shared with other tests.
        let key = "GREETER_CONFIG_LOOKUP_TEST";
        env::set_var(key, "from-env");
        assert_eq!(Some("from-env".to_string()), EnvironmentProvider.get(key));
        env::remove_var(key);
        assert_eq!(None, EnvironmentProvider.get(key));
    }
}
