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

//! Create credentials from external configuration.
//!
//! Applications typically configure the credentials with environment
//! variables. For a service named `project` the relevant properties are:
//!
//! | Property                      | Description                                   |
//! |-------------------------------|-----------------------------------------------|
//! | `PROJECT_AUTH_TYPE`           | `iam`, `bearertoken`, `basic`, or `noauth`    |
//! | `PROJECT_APIKEY`              | the API key, for `iam` credentials            |
//! | `PROJECT_AUTH_URL`            | the IAM token service, for `iam` credentials  |
//! | `PROJECT_CLIENT_ID`           | optional client id, for `iam` credentials     |
//! | `PROJECT_CLIENT_SECRET`       | optional client secret, for `iam` credentials |
//! | `PROJECT_SCOPE`               | optional scope, for `iam` credentials         |
//! | `PROJECT_BEARER_TOKEN`        | the token, for `bearertoken` credentials      |
//! | `PROJECT_USERNAME`            | the username, for `basic` credentials         |
//! | `PROJECT_PASSWORD`            | the password, for `basic` credentials         |
//!
//! If `<NAME>_AUTH_TYPE` is not set, the credentials default to `iam` when an
//! API key is present.
//!
//! # Example
//! ```
//! # use platform_services_auth::config::from_source;
//! use std::collections::HashMap;
//! let source = HashMap::from([
//!     ("PROJECT_AUTH_TYPE".to_string(), "bearertoken".to_string()),
//!     ("PROJECT_BEARER_TOKEN".to_string(), "my-access-token".to_string()),
//! ]);
//! let credentials = from_source("project", &source)?;
//! # Ok::<(), platform_services_auth::build_errors::Error>(())
//! ```

use crate::build_errors::Error as BuildError;
use crate::constants::{
    AUTH_TYPE_BASIC, AUTH_TYPE_BEARER_TOKEN, AUTH_TYPE_IAM, AUTH_TYPE_NO_AUTH,
};
use crate::credentials::{Credentials, anonymous, basic, bearer_token, iam};
use gax::config_source::property_key;

pub use gax::config_source::{ConfigSource, Environment};

/// The result of building credentials from a configuration source.
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// Creates the credentials for `service_name` using the properties in
/// `source`.
pub fn from_source(service_name: &str, source: &dyn ConfigSource) -> BuildResult<Credentials> {
    let required = |property: &str| {
        source
            .property(service_name, property)
            .ok_or_else(|| BuildError::missing_field(property_key(service_name, property)))
    };

    let auth_type = match source.property(service_name, "AUTH_TYPE") {
        Some(t) => t.to_lowercase(),
        None if source.property(service_name, "APIKEY").is_some() => AUTH_TYPE_IAM.to_string(),
        None => return Err(BuildError::missing_field(property_key(service_name, "AUTH_TYPE"))),
    };

    match auth_type.as_str() {
        AUTH_TYPE_IAM => {
            let mut builder = iam::Builder::new(required("APIKEY")?);
            if let Some(url) = source.property(service_name, "AUTH_URL") {
                builder = builder.with_url(url);
            }
            match (
                source.property(service_name, "CLIENT_ID"),
                source.property(service_name, "CLIENT_SECRET"),
            ) {
                (Some(id), Some(secret)) => builder = builder.with_client_id_and_secret(id, secret),
                (None, None) => {}
                _ => {
                    return Err(BuildError::invalid_value(format!(
                        "{} and {} must be set together",
                        property_key(service_name, "CLIENT_ID"),
                        property_key(service_name, "CLIENT_SECRET")
                    )));
                }
            }
            if let Some(scope) = source.property(service_name, "SCOPE") {
                builder = builder.with_scope(scope);
            }
            Ok(builder.build())
        }
        AUTH_TYPE_BEARER_TOKEN => Ok(bearer_token::Builder::new(required("BEARER_TOKEN")?).build()),
        AUTH_TYPE_BASIC => {
            Ok(basic::Builder::new(required("USERNAME")?, required("PASSWORD")?).build())
        }
        AUTH_TYPE_NO_AUTH => Ok(anonymous::Builder::new().build()),
        unknown => Err(BuildError::unknown_type(format!(
            "{unknown}, expected one of {AUTH_TYPE_IAM}, {AUTH_TYPE_BEARER_TOKEN}, {AUTH_TYPE_BASIC} or {AUTH_TYPE_NO_AUTH}"
        ))),
    }
}
