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

//! Credentials exchanging an API key for IAM access tokens.
//!
//! The API key is sent to the IAM token service, which returns a short-lived
//! access token. The token is cached and reused until shortly before it
//! expires.

use crate::Result;
use crate::constants::{DEFAULT_IAM_URL, IAM_APIKEY_GRANT_TYPE, IAM_TOKEN_PATH};
use crate::credentials::{Credentials, CredentialsProvider, authorization_value};
use crate::errors::{CredentialsError, is_retryable};
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use base64::Engine;
use http::HeaderMap;
use http::header::AUTHORIZATION;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// A builder for credentials using an IAM API key.
///
/// # Example
/// ```
/// # use platform_services_auth::credentials::iam::Builder;
/// let credentials = Builder::new("my-api-key")
///     .with_url("https://iam.test.cloud.ibm.com")
///     .build();
/// ```
pub struct Builder {
    api_key: String,
    url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("api_key", &"[censored]")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[censored]"))
            .field("scope", &self.scope)
            .finish()
    }
}

impl Builder {
    /// Creates a new builder with the given API key.
    pub fn new<T: Into<String>>(api_key: T) -> Self {
        Self {
            api_key: api_key.into(),
            url: None,
            client_id: None,
            client_secret: None,
            scope: None,
        }
    }

    /// Sets the URL of the IAM token service.
    ///
    /// Defaults to `https://iam.cloud.ibm.com`. The `/identity/token` path is
    /// appended unless the URL already includes it.
    pub fn with_url<T: Into<String>>(mut self, v: T) -> Self {
        self.url = Some(v.into());
        self
    }

    /// Sets the client id and secret sent to the token service using basic
    /// authentication.
    pub fn with_client_id_and_secret<I: Into<String>, S: Into<String>>(
        mut self,
        client_id: I,
        client_secret: S,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Sets the scope requested in the token exchange.
    pub fn with_scope<T: Into<String>>(mut self, v: T) -> Self {
        self.scope = Some(v.into());
        self
    }

    fn build_token_provider(self) -> IamTokenProvider {
        let url = self.url.unwrap_or_else(|| DEFAULT_IAM_URL.to_string());
        let url = url.trim_end_matches('/');
        let url = if url.ends_with(IAM_TOKEN_PATH) {
            url.to_string()
        } else {
            format!("{url}{IAM_TOKEN_PATH}")
        };
        let client_auth = self.client_id.zip(self.client_secret);
        IamTokenProvider {
            client: reqwest::Client::new(),
            url,
            api_key: self.api_key,
            client_auth,
            scope: self.scope,
        }
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials::from(IamCredentials {
            token_provider: TokenCache::new(self.build_token_provider()),
        })
    }
}

struct IamTokenProvider {
    client: reqwest::Client,
    url: String,
    api_key: String,
    client_auth: Option<(String, String)>,
    scope: Option<String>,
}

impl std::fmt::Debug for IamTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamTokenProvider")
            .field("url", &self.url)
            .field("api_key", &"[censored]")
            .field("client_auth", &self.client_auth.as_ref().map(|_| "[censored]"))
            .field("scope", &self.scope)
            .finish()
    }
}

/// The response from the IAM token service.
#[derive(serde::Deserialize, Default, PartialEq, Debug)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[async_trait::async_trait]
impl TokenProvider for IamTokenProvider {
    async fn token(&self) -> Result<Token> {
        let mut params: HashMap<&str, String> = HashMap::new();
        params.insert("grant_type", IAM_APIKEY_GRANT_TYPE.to_string());
        params.insert("apikey", self.api_key.clone());
        params.insert("response_type", "cloud_iam".to_string());
        if let Some(scope) = &self.scope {
            params.insert("scope", scope.clone());
        }

        let mut builder = self
            .client
            .post(&self.url)
            .header(http::header::ACCEPT, "application/json")
            .form(&params);
        if let Some((id, secret)) = &self.client_auth {
            let encoded =
                base64::engine::general_purpose::STANDARD.encode(format!("{id}:{secret}"));
            builder = builder.header(AUTHORIZATION, authorization_value("Basic", &encoded)?);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CredentialsError::from_source(true, e))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CredentialsError::from_msg(
                is_retryable(status),
                format!("error requesting token, failed with status {status}: {body}"),
            ));
        }
        let response = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| CredentialsError::from_source(false, e))?;
        Ok(Token {
            token: response.access_token,
            token_type: response.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_at: response
                .expires_in
                .map(|s| Instant::now() + Duration::from_secs(s)),
        })
    }
}

#[derive(Debug)]
struct IamCredentials<T>
where
    T: TokenProvider,
{
    token_provider: TokenCache<T>,
}

impl<T> CredentialsProvider for IamCredentials<T>
where
    T: TokenProvider + 'static,
{
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.token().await?;
        let value = authorization_value("Bearer", &token.token)?;
        Ok(HeaderMap::from_iter([(AUTHORIZATION, value)]))
    }
}
