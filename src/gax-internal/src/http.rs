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

use crate::options::{ClientConfig, DEFAULT_MAX_RETRIES, DEFAULT_MAX_RETRY_INTERVAL};
use crate::sdk_header::USER_AGENT;
use auth::credentials::Credentials;
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::config_source::{ConfigSource, Environment};
use gax::error::Error;
use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use gax::response::{Parts, Response};
use gax::retry_policy::{LimitedAttemptCount, NeverRetry, RetryPolicy};
use http::HeaderMap;
use http::header::{ACCEPT, CONTENT_ENCODING, CONTENT_TYPE, HeaderName, HeaderValue};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

const JSON: &str = "application/json";
const JSON_PATCH: &str = "application/json-patch+json";

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    default_headers: HeaderMap,
    gzip_compression: bool,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl ReqwestClient {
    /// Creates a client using the resolved configuration.
    ///
    /// Any setting not present in `config` is read from the configuration
    /// source, using `default_service_name` unless the configuration overrides
    /// the service name. Credentials fall back to the process environment
    /// when no configuration source is set.
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
        default_service_name: &str,
    ) -> gax::client_builder::Result<Self> {
        let service_name = config
            .service_name
            .clone()
            .unwrap_or_else(|| default_service_name.to_string());
        let cred = Self::make_credentials(&config, &service_name)?;
        let source = config.config_source.clone();
        let endpoint = config
            .endpoint
            .or_else(|| source.as_ref().and_then(|s| s.property(&service_name, "URL")))
            .unwrap_or_else(|| default_endpoint.to_string());
        let (retry_policy, backoff_policy) = match (config.retry_policy, source.as_deref()) {
            (Some(p), _) => (Some(p), config.backoff_policy),
            (None, Some(s)) => match retries_from_source(s, &service_name)? {
                Some((p, b)) => (Some(p), config.backoff_policy.or(Some(b))),
                None => (None, config.backoff_policy),
            },
            (None, None) => (None, config.backoff_policy),
        };
        let default_headers = to_header_map(&config.default_headers)
            .map_err(BuilderError::configuration)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            endpoint,
            default_headers,
            gzip_compression: config.gzip_compression,
            retry_policy,
            backoff_policy,
        })
    }

    fn make_credentials(
        config: &ClientConfig,
        service_name: &str,
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        match config.config_source.as_deref() {
            Some(source) => auth::config::from_source(service_name, source),
            None => auth::config::from_source(service_name, &Environment),
        }
        .map_err(BuilderError::cred)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn set_endpoint<T: Into<String>>(&mut self, v: T) {
        self.endpoint = v.into();
    }

    pub fn set_default_headers(&mut self, v: HeaderMap) {
        self.default_headers = v;
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn set_gzip_compression(&mut self, v: bool) {
        self.gzip_compression = v;
    }

    pub fn gzip_compression(&self) -> bool {
        self.gzip_compression
    }

    /// Retries idempotent requests up to `max_retries` times, waiting at most
    /// `max_retry_interval` between attempts.
    pub fn enable_retries(&mut self, max_retries: u32, max_retry_interval: Duration) {
        let (policy, backoff) = retry_settings(max_retries, max_retry_interval);
        self.retry_policy = Some(policy);
        self.backoff_policy = Some(backoff);
    }

    pub fn disable_retries(&mut self) {
        self.retry_policy = None;
        self.backoff_policy = None;
    }

    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Starts a request for `path`, relative to the service URL.
    pub fn builder(&self, method: reqwest::Method, path: String) -> Result<reqwest::RequestBuilder> {
        if self.endpoint.is_empty() {
            return Err(Error::configuration("service URL missing"));
        }
        let endpoint = self.endpoint.trim_end_matches('/');
        Ok(self.inner.request(method, format!("{endpoint}{path}")))
    }

    /// Sends the request and decodes the JSON response, if any.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: gax::options::RequestOptions,
    ) -> Result<Response<O>> {
        let response = self.execute_raw(builder, body, JSON, options).await?;
        to_http_response(response).await
    }

    /// Sends a JSON patch document and decodes the JSON response, if any.
    ///
    /// The body is sent with `Content-Type: application/json-patch+json`.
    pub async fn execute_json_patch<I: serde::ser::Serialize, O: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        body: I,
        options: gax::options::RequestOptions,
    ) -> Result<Response<O>> {
        let response = self
            .execute_raw(builder, Some(body), JSON_PATCH, options)
            .await?;
        to_http_response(response).await
    }

    /// Sends the request, ignoring any response body.
    pub async fn execute_no_content<I: serde::ser::Serialize>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let response = self.execute_raw(builder, body, JSON, options).await?;
        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        Ok(Response::from_parts(
            Parts::new()
                .set_status_code(status_code)
                .set_headers(headers),
            None,
        ))
    }

    async fn execute_raw<I: serde::ser::Serialize>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        content_type: &'static str,
        options: gax::options::RequestOptions,
    ) -> Result<reqwest::Response> {
        let user_agent = options.user_agent().as_deref().unwrap_or(USER_AGENT.as_str());
        builder = builder
            .header(ACCEPT, HeaderValue::from_static(JSON))
            .header(
                reqwest::header::USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            )
            .headers(self.default_headers.clone())
            .headers(to_header_map(options.headers()).map_err(Error::ser)?);
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder.header(CONTENT_TYPE, HeaderValue::from_static(content_type));
            builder = if self.gzip_compression {
                builder
                    .header(CONTENT_ENCODING, HeaderValue::from_static("gzip"))
                    .body(gzip(&payload).map_err(Error::ser)?)
            } else {
                builder.body(payload)
            };
        }
        let retry_policy = self.get_retry_policy(&options);
        let backoff = self.get_backoff_policy(&options);
        let idempotent = options.idempotent().unwrap_or(false);
        let deadline = *options.timeout();
        let this = self.clone();
        let inner = async move |remaining| {
            let builder = builder
                .try_clone()
                .expect("client libraries only create builders where `try_clone()` succeeds");
            this.request_attempt(builder, &options, remaining).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(
            inner,
            sleep,
            idempotent,
            deadline,
            retry_policy,
            backoff,
        )
        .await
    }

    async fn request_attempt(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &gax::options::RequestOptions,
        remaining_time: Option<Duration>,
    ) -> Result<reqwest::Response> {
        builder = gax::retry_loop_internal::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        let request = builder.headers(auth_headers).build().map_err(Self::map_send_error)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        Ok(response)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e if e.is_builder() => Error::configuration(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(&self, options: &gax::options::RequestOptions) -> Arc<dyn RetryPolicy> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
            .unwrap_or_else(|| Arc::new(NeverRetry))
    }

    fn get_backoff_policy(&self, options: &gax::options::RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

/// The retry and backoff policies used by `enable_retries()`.
///
/// A `max_retries` of `0` selects the default number of retries, and a zero
/// `max_retry_interval` selects the default maximum interval.
pub fn retry_settings(
    max_retries: u32,
    max_retry_interval: Duration,
) -> (Arc<dyn RetryPolicy>, Arc<dyn BackoffPolicy>) {
    let max_retries = match max_retries {
        0 => DEFAULT_MAX_RETRIES,
        n => n,
    };
    let max_retry_interval = match max_retry_interval {
        d if d.is_zero() => DEFAULT_MAX_RETRY_INTERVAL,
        d => d,
    };
    let policy = LimitedAttemptCount::new(max_retries.saturating_add(1));
    let backoff = ExponentialBackoffBuilder::new()
        .with_initial_delay(std::cmp::min(Duration::from_secs(1), max_retry_interval))
        .with_maximum_delay(max_retry_interval)
        .with_scaling(2.0)
        .clamp();
    (Arc::new(policy), Arc::new(backoff))
}

// Reads `<NAME>_ENABLE_RETRIES`, `<NAME>_MAX_RETRIES` and
// `<NAME>_RETRY_INTERVAL` (in seconds).
fn retries_from_source(
    source: &dyn ConfigSource,
    service_name: &str,
) -> gax::client_builder::Result<Option<(Arc<dyn RetryPolicy>, Arc<dyn BackoffPolicy>)>> {
    let enabled = source
        .property(service_name, "ENABLE_RETRIES")
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));
    if !enabled {
        return Ok(None);
    }
    let max_retries = source
        .property(service_name, "MAX_RETRIES")
        .map(|v| v.parse::<u32>())
        .transpose()
        .map_err(BuilderError::configuration)?
        .unwrap_or(0);
    let interval = source
        .property(service_name, "RETRY_INTERVAL")
        .map(|v| v.parse::<u64>())
        .transpose()
        .map_err(BuilderError::configuration)?
        .unwrap_or(0);
    Ok(Some(retry_settings(
        max_retries,
        Duration::from_secs(interval),
    )))
}

fn to_header_map(headers: &HashMap<String, String>) -> std::result::Result<HeaderMap, http::Error> {
    headers
        .iter()
        .map(|(k, v)| -> std::result::Result<(HeaderName, HeaderValue), http::Error> {
            let name = HeaderName::try_from(k.as_str())?;
            let value = HeaderValue::try_from(v.as_str())?;
            Ok((name, value))
        })
        .collect()
}

fn gzip(payload: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(payload)?;
    encoder.finish()
}

/// The request body type for operations that send no body.
#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    Err(Error::http(status_code, parts.headers, body))
}

async fn to_http_response<O: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    // An empty body (for example, on 202 or 204) has no result.
    let body = match body {
        content if content.is_empty() => None,
        content => Some(serde_json::from_slice::<O>(&content).map_err(Error::deser)?),
    };

    Ok(Response::from_parts(
        Parts::new()
            .set_status_code(status_code)
            .set_headers(parts.headers),
        body,
    ))
}
