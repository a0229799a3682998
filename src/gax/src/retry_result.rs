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

//! The decision a retry policy makes after a failed attempt.
//!
//! The HTTP client asks the retry policy what to do with each error: stop
//! with a non-retryable error (say a 403 from the service), stop because the
//! policy ran out of attempts or time, or send the request again (say after a
//! 503). Only applications writing their own [RetryPolicy] use these types.
//!
//! [RetryPolicy]: crate::retry_policy::RetryPolicy

use crate::error::Error;

/// What the retry loop does after a failed attempt.
///
/// # Example
///
/// ```
/// # use platform_services_gax::{error::Error, retry_policy::RetryPolicy};
/// # use platform_services_gax::retry_result::RetryResult;
/// // Retries "429 Too Many Requests" responses, up to 5 attempts.
/// #[derive(Debug)]
/// struct RateLimitOnly;
/// impl RetryPolicy for RateLimitOnly {
///     fn on_error(
///         &self,
///         _loop_start: std::time::Instant,
///         attempt_count: u32,
///         _idempotent: bool,
///         error: Error) -> RetryResult
///     {
///         match error.http_status_code() {
///             Some(429) if attempt_count >= 5 => RetryResult::Exhausted(error),
///             Some(429) => RetryResult::Continue(error),
///             _ => RetryResult::Permanent(error),
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub enum RetryResult {
    /// The error cannot be fixed by sending the request again.
    Permanent(Error),

    /// The error is retryable, but the policy has no attempts or time left.
    Exhausted(Error),

    /// Send the request again, after the backoff delay.
    Continue(Error),
}

impl RetryResult {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn response(status: u16) -> Error {
        Error::http(status, http::HeaderMap::new(), bytes::Bytes::new())
    }

    #[test_case(RetryResult::Permanent(response(403)), (true, false, false); "forbidden")]
    #[test_case(RetryResult::Permanent(Error::validation("missing id")), (true, false, false); "validation")]
    #[test_case(RetryResult::Exhausted(response(503)), (false, true, false); "out of attempts")]
    #[test_case(RetryResult::Continue(response(503)), (false, false, true); "unavailable")]
    #[test_case(RetryResult::Continue(response(429)), (false, false, true); "rate limited")]
    fn predicates(result: RetryResult, want: (bool, bool, bool)) {
        let got = (result.is_permanent(), result.is_exhausted(), result.is_continue());
        assert_eq!(got, want, "{result:?}");
    }
}
