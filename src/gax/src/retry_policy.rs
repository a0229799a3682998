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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries retry requests when they fail due to transient errors
//! **and** the request is idempotent, that is, it is safe to send the request
//! more than once. Retries are disabled unless the application configures a
//! retry policy, either in the client or for a single request.
//!
//! Applications may override the default behavior and retry operations that,
//! while not safe in general, may be safe given how the application manages
//! resources.
//!
//! # Example
//! ```
//! # use platform_services_gax::retry_policy::*;
//! // Retry transient errors, up to 5 attempts (4 retries).
//! let policy = TransientErrors.with_attempt_limit(5);
//! ```

use crate::error::{CredentialsError, Error};
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method called after the first attempt, so the value is
    ///   always non-zero.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many more
    ///   errors are retryable on idempotent operations.
    /// * `error` - the last error when attempting the request.
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next attempt
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
    ) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T: RetryPolicy + 'static> From<T> for RetryPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// # Example
    /// ```
    /// # use platform_services_gax::retry_policy::*;
    /// use std::time::Duration;
    /// let policy = TransientErrors.with_time_limit(Duration::from_secs(10));
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// The initial attempt counts towards the limit, `with_attempt_limit(1)`
    /// never retries.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// Retries transient errors on idempotent operations.
///
/// This policy treats the following errors as transient:
/// - network errors, where the request may or may not have reached the
///   service,
/// - HTTP `429 Too Many Requests`,
/// - any HTTP `5xx` status code other than `501 Not Implemented`.
///
/// These errors are only retried if the operation is idempotent. The
/// exception is a transient failure creating the authentication headers,
/// the request was never sent and it is always safe to try again.
///
/// Timeouts are never retried: the deadline for the request has expired.
///
/// This policy should be decorated to limit the number of retry attempts or
/// the duration of the retry loop.
#[derive(Clone, Debug)]
pub struct TransientErrors;

impl TransientErrors {
    fn is_transient_status(code: u16) -> bool {
        code == 429 || ((500..600).contains(&code) && code != 501)
    }
}

impl RetryPolicy for TransientErrors {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if error.is_authentication() {
            return match error.as_inner::<CredentialsError>() {
                Some(e) if e.is_transient() => RetryResult::Continue(error),
                _ => RetryResult::Permanent(error),
            };
        }
        if !idempotent {
            return RetryResult::Permanent(error);
        }
        if error.is_io() {
            return RetryResult::Continue(error);
        }
        match error.http_status_code() {
            Some(code) if Self::is_transient_status(code) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that never retries.
///
/// This is the policy used when retries are disabled.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. Once the loop exceeds its duration limit, this policy returns
/// [Exhausted][RetryResult::Exhausted] for retryable errors. Before the
/// limit is reached, the policy returns the result of `P::on_error()`.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [TransientErrors].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: TransientErrors,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn on_error_now(
        &self,
        now: std::time::Instant,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if now >= loop_start + self.maximum_duration => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time_now(
        &self,
        now: std::time::Instant,
        loop_start: std::time::Instant,
        attempt_count: u32,
    ) -> Option<Duration> {
        let deadline = loop_start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(now);
        if let Some(inner) = self.inner.remaining_time(loop_start, attempt_count) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        self.on_error_now(
            std::time::Instant::now(),
            loop_start,
            attempt_count,
            idempotent,
            error,
        )
    }

    fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration> {
        self.remaining_time_now(std::time::Instant::now(), loop_start, attempt_count)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// This policy decorates an inner policy and limits the total number of
/// attempts, including the initial attempt. Once the maximum number of
/// attempts is reached this policy returns [Exhausted][RetryResult::Exhausted]
/// for retryable errors. Before the maximum is reached, the policy returns the
/// result of `P::on_error()`.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [TransientErrors].
#[derive(Debug)]
pub struct LimitedAttemptCount<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    ///
    /// # Example
    /// ```
    /// # use platform_services_gax::retry_policy::*;
    /// let policy = LimitedAttemptCount::new(5);
    /// assert_eq!(policy.maximum_attempts(), 5);
    /// ```
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: TransientErrors,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }

    /// The maximum number of attempts, including the initial attempt.
    pub fn maximum_attempts(&self) -> u32 {
        self.maximum_attempts
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;
    use std::time::Instant;
    use test_case::test_case;

    fn from_status(code: u16) -> Error {
        Error::http(code, HeaderMap::new(), bytes::Bytes::new())
    }

    fn io_error() -> Error {
        Error::io("connection reset")
    }

    #[test_case(429)]
    #[test_case(500)]
    #[test_case(502)]
    #[test_case(503)]
    #[test_case(504)]
    fn transient_status(code: u16) {
        let p = TransientErrors;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, from_status(code)).is_continue());
        assert!(p.on_error(now, 1, false, from_status(code)).is_permanent());
    }

    #[test_case(400)]
    #[test_case(401)]
    #[test_case(403)]
    #[test_case(404)]
    #[test_case(409)]
    #[test_case(501)]
    fn permanent_status(code: u16) {
        let p = TransientErrors;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, from_status(code)).is_permanent());
        assert!(p.on_error(now, 1, false, from_status(code)).is_permanent());
    }

    #[test]
    fn transient_errors_io_and_timeout() {
        let p = TransientErrors;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, io_error()).is_continue());
        assert!(p.on_error(now, 1, false, io_error()).is_permanent());

        let timeout = Error::timeout("deadline exceeded");
        assert!(p.on_error(now, 1, true, timeout).is_permanent());
    }

    #[test]
    fn transient_errors_validation() {
        let p = TransientErrors;
        let now = Instant::now();
        let r = p.on_error(now, 1, true, Error::validation("missing field"));
        assert!(r.is_permanent(), "{r:?}");
        let r = p.on_error(now, 1, true, Error::deser("bad json"));
        assert!(r.is_permanent(), "{r:?}");
    }

    #[test_case(true)]
    #[test_case(false)]
    fn transient_errors_authentication(idempotent: bool) {
        let p = TransientErrors;
        let now = Instant::now();
        let transient = Error::authentication(CredentialsError::from_msg(true, "try-again"));
        assert!(p.on_error(now, 1, idempotent, transient).is_continue());
        let permanent = Error::authentication(CredentialsError::from_msg(false, "bad-key"));
        assert!(p.on_error(now, 1, idempotent, permanent).is_permanent());
    }

    #[test]
    fn never_retry() {
        let p = NeverRetry;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, from_status(503)).is_exhausted());
        assert!(p.remaining_time(now, 1).is_none());
    }

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, loop_start: std::time::Instant, attempt_count: u32, idempotent: bool, error: Error) -> RetryResult;
            fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    #[test]
    fn limited_attempt_count() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let policy = LimitedAttemptCount::custom(mock, 3);
        let now = Instant::now();
        assert!(policy.on_error(now, 1, true, io_error()).is_continue());
        assert!(policy.on_error(now, 2, true, io_error()).is_continue());
        assert!(policy.on_error(now, 3, true, io_error()).is_exhausted());
        assert!(policy.on_error(now, 4, true, io_error()).is_exhausted());
    }

    #[test]
    fn limited_attempt_count_inner_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(2)
            .returning(|_, _, _, e| RetryResult::Permanent(e));

        let policy = LimitedAttemptCount::custom(mock, 2);
        let now = Instant::now();
        assert!(policy.on_error(now, 1, false, io_error()).is_permanent());
        assert!(policy.on_error(now, 2, false, io_error()).is_permanent());
    }

    #[test]
    fn limited_attempt_count_remaining_time() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(123)));
        let policy = LimitedAttemptCount::custom(mock, 3);
        assert_eq!(
            policy.remaining_time(Instant::now(), 1),
            Some(Duration::from_secs(123))
        );
    }

    #[test]
    fn limited_time_inner_continues() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let rf = policy.on_error_now(now + Duration::from_secs(10), now, 1, true, io_error());
        assert!(rf.is_continue(), "{rf:?}");

        let rf = policy.on_error_now(now + Duration::from_secs(70), now, 1, true, io_error());
        assert!(rf.is_exhausted(), "{rf:?}");
    }

    #[test]
    fn limited_time_inner_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(2)
            .returning(|_, _, _, e| RetryResult::Permanent(e));

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let rf = policy.on_error_now(now + Duration::from_secs(10), now, 1, true, io_error());
        assert!(rf.is_permanent(), "{rf:?}");
        let rf = policy.on_error_now(now + Duration::from_secs(70), now, 1, true, io_error());
        assert!(rf.is_permanent(), "{rf:?}");
    }

    #[test_case(Some(Duration::from_secs(50)), Some(Duration::from_secs(10)))]
    #[test_case(Some(Duration::from_secs(5)), Some(Duration::from_secs(5)))]
    #[test_case(None, Some(Duration::from_secs(10)))]
    fn limited_time_remaining(inner: Option<Duration>, want: Option<Duration>) {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(move |_, _| inner);

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let got = policy.remaining_time_now(now + Duration::from_secs(50), now, 1);
        assert_eq!(got, want);
    }

    #[test]
    fn extension_trait() {
        let policy = TransientErrors.with_attempt_limit(5);
        assert_eq!(policy.maximum_attempts(), 5);
        let now = Instant::now();
        let policy = TransientErrors.with_time_limit(Duration::from_secs(10));
        assert!(policy.remaining_time(now, 1).is_some());
    }

    #[test]
    fn retry_policy_arg() {
        let arg = RetryPolicyArg::from(LimitedAttemptCount::new(3));
        let policy: Arc<dyn RetryPolicy> = arg.into();
        let r = policy.on_error(Instant::now(), 3, true, from_status(503));
        assert!(r.is_exhausted(), "{r:?}");
    }
}
