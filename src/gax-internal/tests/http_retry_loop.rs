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

//! These tests verify the HTTP client uses the retry and backoff policies as
//! expected. They do not test the policy implementations, that is done in the
//! unit tests.
//!
//! The tests use an HTTP server that returns a sequence of responses. The
//! sequence is specific to each test, intended to drive the retry loop as
//! needed for that test.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::backoff_policy::BackoffPolicy;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::*;
    use gax::retry_policy::{RetryPolicyExt, TransientErrors};
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use platform_services_gax_internal::http::ReqwestClient;
    use platform_services_gax_internal::options::ClientConfig;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    #[tokio::test]
    async fn no_retry_by_default() -> Result<()> {
        let server = start(vec![transient()]);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test]
    async fn retry_success() -> Result<()> {
        // We create a server that will return two transient errors and then succeed.
        let server = start(vec![transient(), transient(), success()]);
        let mut client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        client.enable_retries(3, Duration::from_millis(1));
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await?;
        assert_eq!(response.into_body(), Some(json!({"status": "done"})));
        Ok(())
    }

    #[tokio::test]
    async fn retry_too_many_requests() -> Result<()> {
        let server = start(vec![too_many_requests(), success()]);
        let mut client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        client.enable_retries(1, Duration::from_millis(1));
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await?;
        assert_eq!(response.into_body(), Some(json!({"status": "done"})));
        Ok(())
    }

    #[tokio::test]
    async fn retry_exhausted() -> Result<()> {
        let server = start(vec![transient(), transient(), transient()]);
        let mut client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        client.enable_retries(2, Duration::from_millis(1));
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn permanent_error() -> Result<()> {
        let server = start(vec![permanent()]);
        let mut client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        client.enable_retries(3, Duration::from_millis(1));
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert!(err.to_string().contains("uh-oh"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn non_idempotent_is_not_retried() -> Result<()> {
        let server = start(vec![transient()]);
        let mut client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        client.enable_retries(3, Duration::from_millis(1));
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let mut options = RequestOptions::default();
        options.set_idempotency(false);
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test]
    async fn disable_retries() -> Result<()> {
        let server = start(vec![transient()]);
        let mut client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        client.enable_retries(3, Duration::from_millis(1));
        client.disable_retries();
        assert!(client.retry_policy().is_none());
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test]
    async fn request_policy_overrides_client() -> Result<()> {
        let server = start(vec![transient(), success()]);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let mut options = idempotent();
        options.set_retry_policy(TransientErrors.with_attempt_limit(2));
        options.set_backoff_policy(test_backoff());
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await?;
        assert_eq!(response.into_body(), Some(json!({"status": "done"})));
        Ok(())
    }

    #[tokio::test]
    async fn retry_after_is_capped() -> Result<()> {
        // The server asks for a long delay, the maximum interval caps it.
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/retry"))
                .times(2)
                .respond_with(cycle(vec![
                    Box::new(status_code(503).insert_header("retry-after", "3600"))
                        as Box<dyn Responder>,
                    Box::new(json_encoded(json!({"status": "done"}))),
                ])),
        );
        let mut client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        client.enable_retries(1, Duration::from_millis(10));
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let start = std::time::Instant::now();
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await?;
        assert!(start.elapsed() < Duration::from_secs(60), "{:?}", start.elapsed());
        assert_eq!(response.into_body(), Some(json!({"status": "done"})));
        Ok(())
    }

    #[tokio::test]
    async fn retries_from_config_source() -> Result<()> {
        let server = start(vec![transient(), success()]);
        let mut config = test_config();
        config.config_source = Some(Arc::new(std::collections::HashMap::from([
            ("TEST_ENABLE_RETRIES".to_string(), "true".to_string()),
            ("TEST_MAX_RETRIES".to_string(), "1".to_string()),
            ("TEST_RETRY_INTERVAL".to_string(), "1".to_string()),
        ])));
        let client = ReqwestClient::new(config, &endpoint(&server), "test").await?;
        assert!(client.retry_policy().is_some());
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await?;
        assert_eq!(response.into_body(), Some(json!({"status": "done"})));
        Ok(())
    }

    #[tokio::test]
    async fn retry_is_logged() -> Result<()> {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = {
            let buffer = buffer.clone();
            move || CaptureWriter(buffer.clone())
        };
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = start(vec![transient(), success()]);
        let mut client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        client.enable_retries(1, Duration::from_millis(1));
        let builder = client.builder(reqwest::Method::GET, "/retry".into())?;
        client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await?;

        let logs = String::from_utf8(buffer.lock().expect("not poisoned").clone())?;
        assert!(logs.contains("retrying request after transient error"), "{logs}");
        assert!(logs.contains("sending request"), "{logs}");
        Ok(())
    }

    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("not poisoned").extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn idempotent() -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        options
    }

    fn success() -> (StatusCode, String) {
        let response = json!({
            "status": "done"
        });
        (StatusCode::OK, response.to_string())
    }

    fn transient() -> (StatusCode, String) {
        let status = json!({"errors": [{
            "code": "service_unavailable",
            "message": "try-again",
        }]});
        (StatusCode::SERVICE_UNAVAILABLE, status.to_string())
    }

    fn too_many_requests() -> (StatusCode, String) {
        let status = json!({"errors": [{
            "code": "too_many_requests",
            "message": "slow-down",
        }]});
        (StatusCode::TOO_MANY_REQUESTS, status.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let status = json!({"errors": [{
            "code": "bad_request",
            "message": "uh-oh",
        }]});
        (StatusCode::BAD_REQUEST, status.to_string())
    }

    fn endpoint(server: &Server) -> String {
        format!("http://{}", server.addr())
    }

    fn test_config() -> ClientConfig {
        use auth::credentials::anonymous::Builder as Anonymous;
        let mut config = ClientConfig::default();
        config.cred = Anonymous::new().build().into();
        config
    }

    fn test_backoff() -> impl BackoffPolicy {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/retry"))
                .times(responses.len())
                .respond_with(cycle(
                    responses
                        .into_iter()
                        .map(|(status, body)| to_responder(status, body))
                        .collect(),
                )),
        );
        server
    }

    fn to_responder(status: StatusCode, response: String) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(response.to_string()),
        )
    }
}
