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

use crate::Result;
use crate::constants::TOKEN_EXPIRY_SLACK;
use crate::token::{Token, TokenProvider};
use std::sync::{Arc, Mutex};
use std::time::Duration;
// Using tokio's wrapper makes the cache testable without relying on clock times.
use tokio::time::Instant;

/// Caches the token returned by a [TokenProvider].
///
/// The cached token is used until shortly before it expires. Errors are never
/// cached, the next call refreshes the token again. The lock is never held
/// while the inner provider runs, two concurrent callers may both refresh an
/// expired token.
#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    token: Arc<Mutex<Option<Token>>>,
    slack: Duration,
    inner: Arc<T>,
}

// Only `Arc<T>` is cloned, `T` need not be `Clone`.
impl<T: TokenProvider> Clone for TokenCache<T> {
    fn clone(&self) -> TokenCache<T> {
        TokenCache {
            token: self.token.clone(),
            slack: self.slack,
            inner: self.inner.clone(),
        }
    }
}

impl<T: TokenProvider> TokenCache<T> {
    pub fn new(inner: T) -> TokenCache<T> {
        Self::with_slack(inner, TOKEN_EXPIRY_SLACK)
    }

    pub fn with_slack(inner: T, slack: Duration) -> TokenCache<T> {
        TokenCache {
            token: Arc::new(Mutex::new(None)),
            slack,
            inner: Arc::new(inner),
        }
    }

    fn current_token(&self) -> Option<Token> {
        let guard = match self.token.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard
            .as_ref()
            .filter(|t| valid(t, self.slack))
            .cloned()
    }

    fn store(&self, token: &Token) {
        let mut guard = match self.token.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(token.clone());
    }
}

// Returns true if the token does not expire within `slack`.
fn valid(token: &Token, slack: Duration) -> bool {
    token
        .expires_at
        .is_none_or(|e| e > Instant::now() + slack)
}

#[async_trait::async_trait]
impl<T: TokenProvider + 'static> TokenProvider for TokenCache<T> {
    async fn token(&self) -> Result<Token> {
        if let Some(token) = self.current_token() {
            return Ok(token);
        }
        tracing::debug!("refreshing access token");
        let token = self.inner.token().await?;
        self.store(&token);
        Ok(token)
    }
}
