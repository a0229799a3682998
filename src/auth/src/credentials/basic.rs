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

//! Credentials using HTTP basic authentication.

use crate::Result;
use crate::credentials::{Credentials, CredentialsProvider, authorization_value};
use base64::Engine;
use http::HeaderMap;
use http::header::AUTHORIZATION;

struct BasicCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

/// A builder for credentials using a username and password.
///
/// # Example
/// ```
/// # use platform_services_auth::credentials::basic::Builder;
/// let credentials = Builder::new("my-user", "my-password").build();
/// ```
#[derive(Debug)]
pub struct Builder {
    username: String,
    password: String,
}

impl Builder {
    /// Creates a new builder with the given username and password.
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials::from(BasicCredentials {
            username: self.username,
            password: self.password,
        })
    }
}

impl CredentialsProvider for BasicCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        let plain = format!("{}:{}", self.username, self.password);
        let encoded = base64::engine::general_purpose::STANDARD.encode(plain);
        let value = authorization_value("Basic", &encoded)?;
        Ok(HeaderMap::from_iter([(AUTHORIZATION, value)]))
    }
}
