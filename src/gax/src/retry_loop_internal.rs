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

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::error::Error;
use super::retry_policy::RetryPolicy;
use super::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

enum RetryLoopAttempt {
    // The first attempt
    Initial,
    // (Attempt count, backoff delay, previous error)
    Retry(u32, Duration, Error),
}

impl RetryLoopAttempt {
    fn count(&self) -> u32 {
        match self {
            RetryLoopAttempt::Initial => 0,
            RetryLoopAttempt::Retry(count, _, _) => *count,
        }
    }
}

/// Runs the retry loop for a given function.
///
/// This functions calls an inner function as long as (1) the retry policy has
/// not expired, (2) the inner function has not returned a successful response,
/// and (3) the overall `deadline` has not elapsed.
///
/// In between calls the function waits the amount of time prescribed by the
/// backoff policy, using `sleep` to implement any sleep. If the last error is
/// a 429 or 503 response with a `Retry-After` header, that delay is used
/// instead, capped by the maximum delay of the backoff policy.
///
/// The inner function receives the time remaining before the retry policy or
/// the deadline expire, whichever is earlier.
pub async fn retry_loop<F, S, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    deadline: Option<Duration>,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let start = tokio::time::Instant::now();
    let loop_start = start.into_std();
    let mut attempt_state = RetryLoopAttempt::Initial;
    loop {
        let mut attempt_count = attempt_state.count();
        let policy_remaining = retry_policy.remaining_time(loop_start, attempt_count);

        if let RetryLoopAttempt::Retry(attempt_count, delay, prev_error) = attempt_state {
            let deadline_remaining = deadline.map(|d| d.saturating_sub(start.elapsed()));
            if deadline_remaining.is_some_and(|remaining| remaining <= delay) {
                return Err(Error::timeout(prev_error));
            }
            if policy_remaining.is_some_and(|remaining| remaining < delay) {
                return Err(Error::exhausted(prev_error));
            }
            tracing::warn!(
                attempt_count,
                ?delay,
                error = %prev_error,
                "retrying request after transient error"
            );
            sleep(delay).await;
        }

        let deadline_remaining = deadline.map(|d| d.saturating_sub(start.elapsed()));
        if deadline_remaining.is_some_and(|remaining| remaining.is_zero()) {
            return Err(Error::timeout("deadline exceeded before the request was sent"));
        }
        let remaining_time = min_remaining(policy_remaining, deadline_remaining);

        attempt_count += 1;
        tracing::debug!(attempt_count, ?remaining_time, "starting attempt");
        match inner(remaining_time).await {
            Ok(r) => return Ok(r),
            Err(e) => {
                let retry_after = match e.http_status_code() {
                    Some(429 | 503) => e.retry_after(),
                    _ => None,
                };
                let flow = retry_policy.on_error(loop_start, attempt_count, idempotent, e);
                match flow {
                    RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
                    RetryResult::Continue(e) => {
                        let delay = match (retry_after, backoff_policy.maximum_delay()) {
                            (Some(d), Some(max)) => std::cmp::min(d, max),
                            (Some(d), None) => d,
                            (None, _) => backoff_policy.on_failure(loop_start, attempt_count),
                        };
                        attempt_state = RetryLoopAttempt::Retry(attempt_count, delay, e);
                    }
                }
            }
        };
    }
}

fn min_remaining(a: Option<Duration>, b: Option<Duration>) -> Option<Duration> {
    match (a, b) {
        (Some(a), Some(b)) => Some(std::cmp::min(a, b)),
        (a, b) => a.or(b),
    }
}

/// A helper to compute the time remaining in a retry loop, given the attempt
/// timeout and the overall timeout.
pub fn effective_timeout(
    options: &crate::options::RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    min_remaining(*options.attempt_timeout(), remaining_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(None, None, None)]
    #[test_case(Some(Duration::from_secs(4)), Some(Duration::from_secs(4)), None)]
    #[test_case(Some(Duration::from_secs(4)), None, Some(Duration::from_secs(4)))]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4))
    )]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4)),
        Some(Duration::from_secs(2))
    )]
    fn effective_timeouts(
        want: Option<Duration>,
        remaining: Option<Duration>,
        request: Option<Duration>,
    ) {
        let options = crate::options::RequestOptions::default();
        let options = request.into_iter().fold(options, |mut o, t| {
            o.set_attempt_timeout(t);
            o
        });
        let got = effective_timeout(&options, remaining);
        assert_eq!(want, got);
    }

    #[tokio::test]
    async fn immediate_success() -> anyhow::Result<()> {
        // This test simulates a server immediately returning a successful
        // response.
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| success());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .return_const(None);
        let backoff_policy = MockBackoffPolicy::new();
        let sleep = MockSleep::new();

        let backoff = async move |d| sleep.sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            None,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test]
    async fn immediate_failure() -> anyhow::Result<()> {
        // This test simulates a server responding with an immediate and
        // permanent error.
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| permanent());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Permanent(e));
        let backoff_policy = MockBackoffPolicy::new();
        let sleep = MockSleep::new();

        let backoff = async move |d| sleep.sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            None,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        assert_eq!(err.http_status_code(), Some(403), "{err:?}");
        Ok(())
    }

    #[test_case(true)]
    #[test_case(false)]
    #[tokio::test]
    async fn retry_success(expected_idempotency: bool) -> anyhow::Result<()> {
        // This test simulates a server responding with two transient errors and
        // then with a successful response.
        let mut call_seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .withf(|got| got == &Some(Duration::from_secs(3)))
            .returning(|_| transient());
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .withf(|got| got == &Some(Duration::from_secs(2)))
            .returning(|_| transient());
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .withf(|got| got == &Some(Duration::from_secs(1)))
            .returning(|_| success());
        let inner = async move |d| call.call(d);

        // Take the opportunity to verify the right values are provided to the
        // backoff policy and the remaining time.
        let mut retry_seq = mockall::Sequence::new();
        let mut retry_policy = MockRetryPolicy::new();
        for s in [3, 2, 1] {
            retry_policy
                .expect_remaining_time()
                .once()
                .in_sequence(&mut retry_seq)
                .return_const(Some(Duration::from_secs(s)));
        }
        retry_policy
            .expect_on_error()
            .times(2)
            .withf(move |_, _, idempotent, _| idempotent == &expected_idempotency)
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let mut backoff_seq = mockall::Sequence::new();
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy.expect_maximum_delay().return_const(None);
        let mut sleep_seq = mockall::Sequence::new();
        let mut sleep = MockSleep::new();

        for d in 1..=2 {
            backoff_policy
                .expect_on_failure()
                .once()
                .in_sequence(&mut backoff_seq)
                .withf(move |_, count| *count == d as u32)
                .return_const(Duration::from_millis(d));
            sleep
                .expect_sleep()
                .once()
                .in_sequence(&mut sleep_seq)
                .withf(move |got| got == &Duration::from_millis(d))
                .returning(|_| Box::pin(async {}));
        }

        let backoff = async move |d| sleep.sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            expected_idempotency,
            None,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        assert!(matches!(&response, Ok(s) if s == "success"), "{response:?}");
        Ok(())
    }

    #[tokio::test]
    async fn too_many_transients() -> anyhow::Result<()> {
        // This test simulates a server responding with transient errors and
        // the retry policy stops after the third attempt.
        const ERRORS: u32 = 3;
        let mut call = MockCall::new();
        call.expect_call()
            .times(ERRORS as usize)
            .withf(|d| d.is_none())
            .returning(|_| transient());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().return_const(None);
        retry_policy
            .expect_on_error()
            .times(ERRORS as usize)
            .returning(|_, count, _, e| {
                if count < ERRORS {
                    RetryResult::Continue(e)
                } else {
                    RetryResult::Exhausted(e)
                }
            });

        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy.expect_maximum_delay().return_const(None);
        backoff_policy
            .expect_on_failure()
            .times(ERRORS as usize - 1)
            .return_const(Duration::from_millis(1));
        let mut sleep = MockSleep::new();
        sleep
            .expect_sleep()
            .times(ERRORS as usize - 1)
            .returning(|_| Box::pin(async {}));

        let backoff = async move |d| sleep.sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            None,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[test_case(Some(Duration::from_secs(30)), Duration::from_secs(7); "capped by maximum")]
    #[test_case(None, Duration::from_secs(7); "no maximum")]
    #[test_case(Some(Duration::from_secs(2)), Duration::from_secs(2); "capped")]
    #[tokio::test]
    async fn retry_after_overrides_backoff(
        maximum: Option<Duration>,
        want: Duration,
    ) -> anyhow::Result<()> {
        let mut call_seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .returning(|_| retry_after(429, "7"));
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .returning(|_| success());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy.expect_maximum_delay().return_const(maximum);
        backoff_policy.expect_on_failure().never();
        let mut sleep = MockSleep::new();
        sleep
            .expect_sleep()
            .once()
            .withf(move |got| got == &want)
            .returning(|_| Box::pin(async {}));

        let backoff = async move |d| sleep.sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            None,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[test_case(429, Duration::from_secs(7); "too many requests")]
    #[test_case(503, Duration::from_secs(7); "unavailable")]
    #[test_case(500, Duration::from_millis(250); "internal")]
    #[test_case(502, Duration::from_millis(250); "bad gateway")]
    #[tokio::test]
    async fn retry_after_status(status: u16, want: Duration) -> anyhow::Result<()> {
        let mut call_seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .returning(move |_| retry_after(status, "7"));
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .returning(|_| success());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_maximum_delay()
            .return_const(Some(Duration::from_secs(30)));
        backoff_policy
            .expect_on_failure()
            .return_const(Duration::from_millis(250));
        let mut sleep = MockSleep::new();
        sleep
            .expect_sleep()
            .once()
            .withf(move |got| got == &want)
            .returning(|_| Box::pin(async {}));

        let backoff = async move |d| sleep.sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            None,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test]
    async fn no_sleep_past_policy_remaining_time() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| transient());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .return_const(Some(Duration::from_millis(10)));
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy.expect_maximum_delay().return_const(None);
        backoff_policy
            .expect_on_failure()
            .once()
            .return_const(Duration::from_secs(10));
        let mut sleep = MockSleep::new();
        sleep.expect_sleep().never();

        let backoff = async move |d| sleep.sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            None,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        let inner = err.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(inner, Some(e) if e.http_status_code() == Some(503)),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn no_sleep_past_deadline() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .withf(|d| d == &Some(Duration::from_secs(5)))
            .returning(|_| transient());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy.expect_maximum_delay().return_const(None);
        backoff_policy
            .expect_on_failure()
            .once()
            .return_const(Duration::from_secs(10));
        let mut sleep = MockSleep::new();
        sleep.expect_sleep().never();

        let backoff = async move |d| sleep.sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            Some(Duration::from_secs(5)),
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_shrinks_remaining_time() -> anyhow::Result<()> {
        let mut call_seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .withf(|d| d == &Some(Duration::from_secs(10)))
            .returning(|_| transient());
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .withf(|d| d == &Some(Duration::from_secs(8)))
            .returning(|_| success());
        let inner = async move |d| call.call(d);

        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy.expect_maximum_delay().return_const(None);
        backoff_policy
            .expect_on_failure()
            .once()
            .return_const(Duration::from_secs(2));

        let response = retry_loop(
            inner,
            async |d| tokio::time::sleep(d).await,
            true,
            Some(Duration::from_secs(10)),
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    fn success() -> Result<String> {
        Ok("success".into())
    }

    fn transient() -> Result<String> {
        Err(Error::http(503, HeaderMap::new(), bytes::Bytes::from_static(b"try-again")))
    }

    fn retry_after(status: u16, seconds: &'static str) -> Result<String> {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::RETRY_AFTER, HeaderValue::from_static(seconds));
        Err(Error::http(status, headers, bytes::Bytes::from_static(b"slow-down")))
    }

    fn permanent() -> Result<String> {
        Err(Error::http(403, HeaderMap::new(), bytes::Bytes::from_static(b"uh-oh")))
    }

    fn to_retry_policy(mock: MockRetryPolicy) -> Arc<dyn RetryPolicy> {
        Arc::new(mock)
    }

    fn to_backoff_policy(mock: MockBackoffPolicy) -> Arc<dyn BackoffPolicy> {
        Arc::new(mock)
    }

    trait Call {
        fn call(&self, d: Option<Duration>) -> Result<String>;
    }

    mockall::mock! {
        Call {}
        impl Call for Call {
            fn call(&self, d: Option<Duration>) -> Result<String>;
        }
    }

    trait Sleep {
        fn sleep(&self, d: Duration) -> impl Future<Output = ()>;
    }

    mockall::mock! {
        Sleep {}
        impl Sleep for Sleep {
            fn sleep(&self, d: Duration) -> impl Future<Output = ()> + Send;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, loop_start: std::time::Instant, attempt_count: u32, idempotent: bool, error: Error) -> RetryResult;
            fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        BackoffPolicy {}
        impl BackoffPolicy for BackoffPolicy {
            fn on_failure(&self, loop_start: std::time::Instant, attempt_count: u32) -> Duration;
            fn maximum_delay(&self) -> Option<Duration>;
        }
    }
}
