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

//! Response types.
//!
//! This module contains the `Response` type returned by every service
//! operation. The response exposes the HTTP status code and headers, and the
//! decoded body, if the service returned one.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use platform_services_gax::Result;
//! # use platform_services_gax::response::Response;
//! // A type representing a service resource, for example, a project.
//! struct Resource {
//!   // ...
//! }
//!
//! async fn make_service_request(project_id: &str) -> Result<Response<Resource>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = make_service_request("my-project").await?;
//! if let Some(date) = response.headers().get("Date") {
//!     // do something with the date
//! }
//! match response.body() {
//!     Some(resource) => { /* do something with the resource */ },
//!     None => println!("empty response, status = {}", response.status_code()),
//! }
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use platform_services_gax::Result;
//! # use platform_services_gax::response::Response;
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents a service response.
///
/// A response consists of an optional body, and some metadata: the HTTP
/// status code and the response headers.
///
/// Some operations never return a body, they return `Response<()>` and the
/// body is always `None`. Other operations return a body on success, but the
/// service may still send an empty payload. In that case the body is `None`
/// and the status code and headers are still available.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: Option<T>,
}

impl<T> Response<T> {
    /// Creates a successful response from the body.
    ///
    /// # Example
    /// ```
    /// # use platform_services_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.status_code(), 200);
    /// assert_eq!(response.body().map(String::as_str), Some("test"));
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body: Some(body),
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use platform_services_gax::response::{Parts, Response};
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
    /// let response : Response<String> = Response::from_parts(
    ///     Parts::new().set_status_code(204_u16).set_headers(headers), None);
    /// assert!(response.body().is_none());
    /// assert_eq!(response.status_code(), 204);
    /// ```
    pub fn from_parts(parts: Parts, body: Option<T>) -> Self {
        Self { parts, body }
    }

    /// Returns the HTTP status code of the response.
    pub fn status_code(&self) -> u16 {
        self.parts.status_code
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response, if any.
    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, Option<T>) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    ///
    /// # Example
    /// ```
    /// # use platform_services_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// let body = response.into_body();
    /// assert_eq!(body.as_deref(), Some("test"));
    /// ```
    pub fn into_body(self) -> Option<T> {
        self.body
    }

    /// Changes the type of the body, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: self.body.map(f),
        }
    }
}

/// Component parts of a response.
///
/// # Example
/// ```
/// # use platform_services_gax::response::Parts;
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
/// let parts = Parts::new().set_status_code(201_u16).set_headers(headers);
///
/// assert_eq!(parts.status_code, 201);
/// assert_eq!(
///     parts.headers.get(http::header::CONTENT_TYPE),
///     Some(&http::HeaderValue::from_static("application/json"))
/// );
/// ```
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status_code: u16,
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Default for Parts {
    fn default() -> Self {
        Self {
            status_code: http::StatusCode::OK.as_u16(),
            headers: http::HeaderMap::new(),
        }
    }
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status_code<V: Into<u16>>(mut self, v: V) -> Self {
        self.status_code = v.into();
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}
