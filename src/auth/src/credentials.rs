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

//! Types and functions to work with authentication credentials.
//!
//! [Credentials] create the authentication headers attached to each request.
//! Use one of the builders in the submodules to create credentials for a
//! specific authentication scheme, or [crate::config::from_source] to select
//! the scheme from external configuration.

use crate::Result;
use http::HeaderMap;
use std::sync::Arc;

pub mod anonymous;
pub mod basic;
pub mod bearer_token;
pub mod iam;

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
///
/// `Credentials` are cheap to clone, all the clones share the same
/// implementation, including any cached tokens.
///
/// # Example
/// ```
/// # use platform_services_auth::credentials::bearer_token;
/// # tokio_test::block_on(async {
/// let credentials = bearer_token::Builder::new("my-access-token").build();
/// let headers = credentials.headers().await?;
/// assert!(headers.contains_key(http::header::AUTHORIZATION));
/// # Ok::<(), platform_services_auth::errors::CredentialsError>(())
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct Credentials {
    // We use an `Arc` to hold the inner implementation.
    //
    // Credentials may be shared across threads (`Send + Sync`), so an `Rc`
    // will not do.
    //
    // They also need to derive `Clone`, as the client libraries hold copies
    // of the credentials.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: dynamic::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers used to authenticate a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// An implementation of [Credentials].
///
/// Applications may implement this trait to provide custom credentials.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Builds the `Authorization` header value for a token, marked as sensitive.
pub(crate) fn authorization_value(scheme: &str, token: &str) -> Result<http::HeaderValue> {
    let mut value = http::HeaderValue::from_str(&format!("{scheme} {token}")).map_err(|e| {
        crate::errors::CredentialsError::from_source(false, e)
    })?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::CredentialsError;
    use http::HeaderValue;

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self) -> Result<HeaderMap>;
        }
    }

    #[tokio::test]
    async fn custom_provider() {
        let mut mock = MockCredentials::new();
        mock.expect_headers().times(1).returning(|| {
            let mut headers = HeaderMap::new();
            headers.insert("x-test-header", HeaderValue::from_static("test-value"));
            Ok(headers)
        });
        let credentials = Credentials::from(mock);
        let headers = credentials.headers().await.unwrap();
        assert_eq!(
            headers.get("x-test-header"),
            Some(&HeaderValue::from_static("test-value"))
        );
    }

    #[tokio::test]
    async fn custom_provider_error() {
        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .times(1)
            .returning(|| Err(CredentialsError::from_msg(true, "try-again")));
        let credentials = Credentials::from(mock);
        let err = credentials.headers().await.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
    }

    #[test]
    fn authorization_value_is_sensitive() {
        let value = authorization_value("Bearer", "test-token").unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
    }

    #[test]
    fn authorization_value_invalid() {
        let err = authorization_value("Bearer", "bad\ntoken").unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
    }
}
