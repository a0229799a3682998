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

//! Credentials using a static bearer token.
//!
//! The application is responsible for obtaining the token, and for creating
//! new credentials when the token expires.

use crate::Result;
use crate::credentials::{Credentials, CredentialsProvider, authorization_value};
use http::HeaderMap;
use http::header::AUTHORIZATION;

struct BearerTokenCredentials {
    token: String,
}

impl std::fmt::Debug for BearerTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenCredentials")
            .field("token", &"[censored]")
            .finish()
    }
}

/// A builder for credentials that send a fixed bearer token.
///
/// # Example
/// ```
/// # use platform_services_auth::credentials::bearer_token::Builder;
/// let credentials = Builder::new("my-access-token").build();
/// ```
#[derive(Debug)]
pub struct Builder {
    token: String,
}

impl Builder {
    /// Creates a new builder with the given token.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials::from(BearerTokenCredentials { token: self.token })
    }
}

impl CredentialsProvider for BearerTokenCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        let value = authorization_value("Bearer", &self.token)?;
        Ok(HeaderMap::from_iter([(AUTHORIZATION, value)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[tokio::test]
    async fn headers() {
        let creds = Builder::new("test-token").build();
        let headers = creds.headers().await.unwrap();
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
    }

    #[test]
    fn debug() {
        let creds = Builder::new("super-secret-token").build();
        let fmt = format!("{creds:?}");
        assert!(!fmt.contains("super-secret-token"), "{fmt}");
        assert!(fmt.contains("[censored]"), "{fmt}");
    }
}
