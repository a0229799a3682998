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

use super::CredentialsError;
use http::HeaderMap;
use std::error::Error as StdError;
use std::time::Duration;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. The request may
/// be missing required fields, the client may be missing its service URL, the
/// transport may be unable to connect, the request may exceed its deadline, or
/// the service may return an unsuccessful HTTP status code.
///
/// Most applications will just return the error or log it. Applications that
/// need more details can use the predicates to determine the error kind, and
/// the accessors to query the HTTP status code, headers, and payload returned
/// by the service.
///
/// # Example
/// ```
/// use platform_services_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_operation() => {
///         println!("service error {e}, status = {:?}", e.http_status_code());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing a request with missing or invalid fields.
    ///
    /// # Example
    /// ```
    /// use platform_services_gax::error::Error;
    /// let error = Error::validation("missing required field `id`");
    /// assert!(error.is_validation());
    /// ```
    pub fn validation<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Validation,
            source: Some(source.into()),
        }
    }

    /// The request is missing required fields, or some fields have invalid
    /// values.
    ///
    /// This is always a client-side generated error, detected before any
    /// request is sent to the service.
    ///
    /// # Troubleshooting
    ///
    /// Set the missing fields in the request builder. The error message names
    /// the field.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    /// Creates an error representing a misconfigured client.
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Configuration,
            source: Some(source.into()),
        }
    }

    /// The client configuration is incomplete or invalid.
    ///
    /// The most common example is a client without a service URL. No request
    /// is sent to the service.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::Configuration)
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use platform_services_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.is_transport());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value to handle temporary latency
    /// increases too.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted policy or iterator.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use platform_services_gax::error::Error;
    /// let error = Error::exhausted("too many retry attempts");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The retry policy expired, or a pager has no more results.
    ///
    /// This is always a client-side generated error.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use platform_services_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// The service returned a successful status code, but the payload is not
    /// valid JSON, or does not match the expected schema. The error is
    /// reported as-is, it is never retried.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured API key, or missing
    /// credentials in the configuration source. Very rarely, this may indicate
    /// a failure to contact the token service.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a connection that cannot be established, or a broken
    /// connection after the request is sent.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// A problem reading or writing to the network.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// The request did not complete because of a network problem or a
    /// deadline.
    ///
    /// Use [is_timeout][Error::is_timeout] to distinguish deadlines from other
    /// transport errors.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Io | ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// The service returned an unsuccessful HTTP status code.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = OperationDetails {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Operation(Box::new(details)),
            source: None,
        }
    }

    /// The service returned an unsuccessful HTTP status code.
    ///
    /// # Troubleshooting
    ///
    /// As this error type is created by the service, troubleshooting typically
    /// involves reading the service documentation. The payload usually
    /// includes a human-readable message describing the problem.
    pub fn is_operation(&self) -> bool {
        matches!(self.kind, ErrorKind::Operation(_))
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use platform_services_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Operation(d) => Some(d.status_code),
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, e.g. errors detected before
    /// the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Operation(d) => Some(&d.headers),
            _ => None,
        }
    }

    /// The raw payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Operation(d) => Some(&d.payload),
            _ => None,
        }
    }

    /// The delay requested by the service before trying again, if any.
    ///
    /// Only the delta-seconds form of the `Retry-After` header is supported.
    pub fn retry_after(&self) -> Option<Duration> {
        self.http_headers()?
            .get(http::header::RETRY_AFTER)?
            .to_str()
            .ok()?
            .trim()
            .parse::<u64>()
            .ok()
            .map(Duration::from_secs)
    }

    /// Returns the source of the error, if it has the expected type.
    ///
    /// # Example
    /// ```
    /// use platform_services_gax::error::{CredentialsError, Error};
    /// let error = Error::authentication(CredentialsError::from_msg(false, "bad key"));
    /// let inner = error.as_inner::<CredentialsError>();
    /// assert!(matches!(inner, Some(e) if !e.is_transient()));
    /// ```
    pub fn as_inner<T: StdError + 'static>(&self) -> Option<&T> {
        self.source.as_ref()?.downcast_ref::<T>()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Validation, Some(e)) => write!(f, "the request is invalid: {e}"),
            (ErrorKind::Configuration, Some(e)) => {
                write!(f, "the client configuration is invalid: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Io, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (ErrorKind::Operation(d), _) => d.display(f),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn StdError)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Validation,
    Configuration,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Io,
    Operation(Box<OperationDetails>),
}

#[derive(Debug)]
struct OperationDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

impl OperationDetails {
    fn display(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.status_code;
        if let Some(message) = service_message(&self.payload) {
            return write!(f, "the service reports a [{code}] error: {message}");
        }
        match std::str::from_utf8(self.payload.as_ref()) {
            Ok("") => write!(f, "the service reports a [{code}] error"),
            Ok(message) => write!(f, "the service reports a [{code}] error: {message}"),
            Err(_) => write!(
                f,
                "the service reports a [{code}] error: {:?}",
                self.payload
            ),
        }
    }
}

/// Finds the human-readable message in the common error payload shapes.
fn service_message(payload: &bytes::Bytes) -> Option<String> {
    let value = serde_json::from_slice::<serde_json::Value>(payload).ok()?;
    let first_error = value
        .get("errors")
        .and_then(|e| e.get(0))
        .and_then(|e| e.get("message"));
    [
        first_error,
        value.get("error"),
        value.get("message"),
        value.get("errorMessage"),
    ]
    .into_iter()
    .flatten()
    .find_map(|v| v.as_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use test_case::test_case;

    #[derive(Debug, thiserror::Error)]
    #[error("test-only-error")]
    struct TestError;

    fn check_no_http(error: &Error) {
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.retry_after().is_none(), "{error:?}");
    }

    #[test]
    fn validation() {
        let error = Error::validation(TestError);
        assert!(error.is_validation(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.as_inner::<TestError>().is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only-error"), "{error}");
        check_no_http(&error);
    }

    #[test]
    fn configuration() {
        let error = Error::configuration("service URL missing");
        assert!(error.is_configuration(), "{error:?}");
        assert!(error.to_string().contains("service URL missing"), "{error}");
        check_no_http(&error);
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(TestError);
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.as_inner::<TestError>().is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only-error"), "{error}");
        check_no_http(&error);
    }

    #[test]
    fn exhausted() {
        let error = Error::exhausted(TestError);
        assert!(error.is_exhausted(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert_eq!(error.to_string(), "test-only-error");
        check_no_http(&error);
    }

    #[test]
    fn io() {
        let error = Error::io(TestError);
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert!(error.to_string().contains("test-only-error"), "{error}");
        check_no_http(&error);
    }

    #[test]
    fn serialization() {
        let error = Error::ser(TestError);
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("test-only-error"), "{error}");

        let error = Error::deser(TestError);
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("test-only-error"), "{error}");
        check_no_http(&error);
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg(true, "test-only-auth"));
        assert!(error.is_authentication(), "{error:?}");
        let inner = error.as_inner::<CredentialsError>();
        assert!(matches!(inner, Some(e) if e.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-only-auth"), "{error}");
        check_no_http(&error);
    }

    #[test]
    fn operation() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let payload = bytes::Bytes::from_static(b"{\"message\": \"NOT FOUND\"}");
        let error = Error::http(404, headers.clone(), payload.clone());
        assert!(error.is_operation(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert_eq!(
            error.to_string(),
            "the service reports a [404] error: NOT FOUND"
        );
    }

    #[test_case(r#"{"errors": [{"code": "not_found", "message": "from-errors"}]}"#, "from-errors")]
    #[test_case(r#"{"error": "from-error"}"#, "from-error")]
    #[test_case(r#"{"message": "from-message"}"#, "from-message")]
    #[test_case(r#"{"errorMessage": "from-error-message"}"#, "from-error-message")]
    #[test_case("plain text", "plain text")]
    fn operation_message(payload: &'static str, want: &str) {
        let error = Error::http(400, HeaderMap::new(), bytes::Bytes::from_static(payload.as_bytes()));
        let got = error.to_string();
        assert!(got.contains(want), "{got}");
        assert!(got.contains("[400]"), "{got}");
    }

    #[test]
    fn operation_empty_payload() {
        let error = Error::http(503, HeaderMap::new(), bytes::Bytes::new());
        assert_eq!(error.to_string(), "the service reports a [503] error");
    }

    #[test_case("30", Some(Duration::from_secs(30)))]
    #[test_case(" 5 ", Some(Duration::from_secs(5)))]
    #[test_case("Wed, 21 Oct 2015 07:28:00 GMT", None)]
    fn retry_after(value: &'static str, want: Option<Duration>) {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::RETRY_AFTER, HeaderValue::from_static(value));
        let error = Error::http(429, headers, bytes::Bytes::new());
        assert_eq!(error.retry_after(), want);
    }
}
