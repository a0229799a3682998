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

//! Verify the client configuration.

#[cfg(test)]
mod tests {
    use auth::credentials::{anonymous, basic};
    use gax::options::RequestOptionsBuilder;
    use gax::retry_policy::LimitedAttemptCount;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use platform_services_project_v1::client::ProjectService;
    use platform_services_project_v1::{
        DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL, builder, get_service_url_for_region,
    };
    use serde_json::json;
    use static_assertions::assert_impl_all;
    use std::collections::HashMap;

    type Result<T> = anyhow::Result<T>;

    assert_impl_all!(ProjectService: Clone, std::fmt::Debug, Send, Sync);
    assert_impl_all!(builder::project_service::GetProject: Clone, std::fmt::Debug, Send, Sync);
    assert_impl_all!(builder::project_service::ListProjects: Clone, std::fmt::Debug, Send, Sync);

    fn endpoint(server: &Server) -> String {
        format!("http://{}", server.addr())
    }

    fn source<const N: usize>(pairs: [(&str, &str); N]) -> HashMap<String, String> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn expect_health(server: &Server, header: (&'static str, String)) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/health"),
                request::headers(contains(header)),
            ])
            .respond_with(json_encoded(json!({"name": "projects"}))),
        );
    }

    #[tokio::test]
    async fn defaults() -> Result<()> {
        let client = ProjectService::builder()
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        assert_eq!(client.service_url(), DEFAULT_SERVICE_URL);
        assert_eq!(DEFAULT_SERVICE_NAME, "project");
        assert!(!client.enable_gzip_compression());
        assert!(!client.retries_enabled());
        assert!(client.default_headers().is_empty());
        Ok(())
    }

    #[test]
    fn regional_urls() {
        let err = get_service_url_for_region("us-south").unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        assert!(
            err.to_string()
                .contains("service does not support regional URLs"),
            "{err}"
        );
    }

    #[tokio::test]
    async fn clone_is_independent() -> Result<()> {
        let client = ProjectService::builder()
            .with_endpoint("https://projects.example.com")
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let mut copy = client.clone();
        copy.set_service_url("https://private.projects.example.com");
        copy.set_enable_gzip_compression(true);
        copy.enable_retries(2, std::time::Duration::from_secs(5));
        assert_eq!(client.service_url(), "https://projects.example.com");
        assert!(!client.enable_gzip_compression());
        assert!(!client.retries_enabled());
        assert_eq!(copy.service_url(), "https://private.projects.example.com");
        assert!(copy.enable_gzip_compression());
        assert!(copy.retries_enabled());
        Ok(())
    }

    #[tokio::test]
    async fn request_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/health"),
                request::headers(contains(("x-builder-default", "b"))),
                request::headers(contains(("x-client-default", "c"))),
                request::headers(contains(("x-per-request", "r"))),
                request::headers(contains(("user-agent", "my-app/1.0"))),
            ])
            .respond_with(json_encoded(json!({"name": "projects"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects/p-1"),
                request::headers(contains((
                    "user-agent",
                    matches("^platform-services-rust-sdk/.*lang=rust"),
                ))),
            ])
            .respond_with(json_encoded(json!({"id": "p-1"}))),
        );

        let mut client = ProjectService::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous::Builder::new().build())
            .with_default_headers([("x-builder-default", "b")])
            .build()
            .await?;
        let mut headers = client.default_headers().clone();
        headers.insert("x-client-default", http::HeaderValue::from_static("c"));
        client.set_default_headers(headers);

        client
            .get_health()
            .with_header("x-per-request", "r")
            .with_user_agent("my-app/1.0")
            .send()
            .await?;
        client.get_project().set_id("p-1").send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn gzip_compression() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p-1/event"),
                request::headers(contains(("content-encoding", "gzip"))),
                request::headers(contains(("content-type", "application/json"))),
            ])
            .respond_with(json_encoded(json!({"notifications": []}))),
        );
        let mut client = ProjectService::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        client.set_enable_gzip_compression(true);
        let response = client
            .post_notification()
            .set_id("p-1")
            .send()
            .await?;
        assert_eq!(response.status_code(), 200);
        Ok(())
    }

    #[tokio::test]
    async fn basic_credentials() -> Result<()> {
        let server = Server::run();
        // "user:pass" in base64.
        expect_health(&server, ("authorization", "Basic dXNlcjpwYXNz".to_string()));
        let client = ProjectService::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(basic::Builder::new("user", "pass").build())
            .build()
            .await?;
        client.get_health().send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn config_source() -> Result<()> {
        let server = Server::run();
        expect_health(&server, ("authorization", "Bearer from-source".to_string()));
        let url = endpoint(&server);
        let client = ProjectService::builder()
            .with_config_source(source([
                ("PROJECT_URL", url.as_str()),
                ("PROJECT_AUTH_TYPE", "bearerToken"),
                ("PROJECT_BEARER_TOKEN", "from-source"),
                ("PROJECT_ENABLE_RETRIES", "true"),
                ("PROJECT_MAX_RETRIES", "2"),
            ]))
            .build()
            .await?;
        assert_eq!(client.service_url(), url);
        assert!(client.retries_enabled());
        client.get_health().send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn config_source_endpoint_override() -> Result<()> {
        let client = ProjectService::builder()
            .with_endpoint("https://explicit.example.com")
            .with_config_source(source([
                ("PROJECT_URL", "https://from-source.example.com"),
                ("PROJECT_AUTH_TYPE", "noAuth"),
            ]))
            .build()
            .await?;
        assert_eq!(client.service_url(), "https://explicit.example.com");
        assert!(!client.retries_enabled());
        Ok(())
    }

    #[tokio::test]
    async fn config_source_service_name() -> Result<()> {
        let client = ProjectService::builder()
            .with_service_name("projects-private")
            .with_config_source(source([
                ("PROJECTS_PRIVATE_URL", "https://private.example.com"),
                ("PROJECTS_PRIVATE_AUTH_TYPE", "noauth"),
                ("PROJECT_URL", "https://ignored.example.com"),
            ]))
            .build()
            .await?;
        assert_eq!(client.service_url(), "https://private.example.com");
        Ok(())
    }

    #[tokio::test]
    async fn config_source_missing_credentials() -> Result<()> {
        let err = ProjectService::builder()
            .with_config_source(source([("PROJECT_URL", "https://projects.example.com")]))
            .build()
            .await
            .unwrap_err();
        assert!(err.is_credentials(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn builder_retry_policy() -> Result<()> {
        let client = ProjectService::builder()
            .with_credentials(anonymous::Builder::new().build())
            .with_retry_policy(LimitedAttemptCount::new(3))
            .build()
            .await?;
        assert!(client.retries_enabled());
        Ok(())
    }
}
