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

//! Verify the HTTP client honors the request deadline.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::options::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use platform_services_gax_internal::http::ReqwestClient;
    use platform_services_gax_internal::options::ClientConfig;
    use serde_json::json;
    use std::time::Duration;
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    const SERVER_DELAY: Duration = Duration::from_millis(1000);

    #[tokio::test]
    async fn timeout_does_not_expire() -> Result<()> {
        let server = start(Duration::from_millis(10));
        let client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        let builder = client.builder(reqwest::Method::GET, "/delay".into())?;
        let mut options = RequestOptions::default();
        options.set_timeout(Duration::from_secs(5));
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await?;
        assert_eq!(response.into_body(), Some(json!({"status": "done"})));
        Ok(())
    }

    #[test_case(false; "without retries")]
    #[test_case(true; "with retries")]
    #[tokio::test]
    async fn deadline_exceeded(retries: bool) -> Result<()> {
        let server = start(SERVER_DELAY);
        let mut client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        if retries {
            client.enable_retries(3, Duration::from_millis(10));
        }
        let builder = client.builder(reqwest::Method::GET, "/delay".into())?;
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        options.set_timeout(Duration::from_millis(100));
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout() -> Result<()> {
        let server = start(SERVER_DELAY);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        let builder = client.builder(reqwest::Method::GET, "/delay".into())?;
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn deadline_exceeded_during_backoff() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/delay"))
                .times(1)
                .respond_with(status_code(503)),
        );
        let mut client = ReqwestClient::new(test_config(), &endpoint(&server), "test").await?;
        // The first retry waits at least one second.
        client.enable_retries(3, Duration::from_secs(30));
        let builder = client.builder(reqwest::Method::GET, "/delay".into())?;
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        options.set_timeout(Duration::from_millis(300));
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    fn start(delay: Duration) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/delay"))
                .times(1)
                .respond_with(delay_and_then(
                    delay,
                    json_encoded(json!({"status": "done"})),
                )),
        );
        server
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
}
