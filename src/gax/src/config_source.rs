// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! External configuration sources.
//!
//! Clients can be configured from an external source of properties, such as
//! the process environment. The properties for a service use the
//! `<SERVICE_NAME>_<PROPERTY>` naming convention, for example `PROJECT_URL` or
//! `PROJECT_APIKEY` for a service named `project`.
//!
//! Tests should use a `HashMap` as the configuration source, this avoids any
//! changes to the process environment.
//!
//! # Example
//! ```
//! # use platform_services_gax::config_source::ConfigSource;
//! use std::collections::HashMap;
//! let source = HashMap::from([
//!     ("PROJECT_URL".to_string(), "https://example.com".to_string()),
//! ]);
//! assert_eq!(source.property("project", "URL").as_deref(), Some("https://example.com"));
//! assert_eq!(source.property("project", "APIKEY"), None);
//! ```

use std::collections::{BTreeMap, HashMap};

/// A source of configuration properties.
pub trait ConfigSource: std::fmt::Debug + Send + Sync {
    /// Returns the value of `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the value of `property` for the service named `service_name`.
    ///
    /// The key is the service name in uppercase, with `-` replaced by `_`,
    /// followed by `_` and the property name. Empty values are treated as
    /// missing.
    fn property(&self, service_name: &str, property: &str) -> Option<String> {
        self.get(&property_key(service_name, property))
            .filter(|v| !v.is_empty())
    }
}

/// Computes the key for a service property.
pub fn property_key(service_name: &str, property: &str) -> String {
    let prefix = service_name.to_uppercase().replace('-', "_");
    format!("{prefix}_{property}")
}

/// Reads properties from the process environment.
#[derive(Clone, Debug, Default)]
pub struct Environment;

impl ConfigSource for Environment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("project", "URL", "PROJECT_URL")]
    #[test_case("my-service", "APIKEY", "MY_SERVICE_APIKEY")]
    #[test_case("Project", "AUTH_TYPE", "PROJECT_AUTH_TYPE")]
    fn key(service: &str, property: &str, want: &str) {
        assert_eq!(property_key(service, property), want);
    }

    #[test]
    fn maps() {
        let map = HashMap::from([
            ("PROJECT_URL".to_string(), "https://example.com".to_string()),
            ("PROJECT_APIKEY".to_string(), String::new()),
        ]);
        assert_eq!(
            map.property("project", "URL").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(map.property("project", "APIKEY"), None);
        assert_eq!(map.property("other", "URL"), None);

        let map = BTreeMap::from([("OTHER_URL".to_string(), "https://other".to_string())]);
        assert_eq!(map.property("other", "URL").as_deref(), Some("https://other"));
    }

    #[test]
    fn environment() {
        // Only read variables, never modify the environment in tests.
        let got = Environment.get("PLATFORM_SERVICES_TEST_ONLY_UNSET_VARIABLE");
        assert_eq!(got, None);
    }
}
