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

//! Verify the client reports errors and applies the retry and timeout
//! settings.

#[cfg(test)]
mod tests {
    use auth::credentials::anonymous;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptionsBuilder;
    use gax::retry_policy::LimitedAttemptCount;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use platform_services_project_v1::client::ProjectService;
    use serde_json::json;
    use std::time::Duration;
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    async fn client(server: &Server) -> Result<ProjectService> {
        let client = ProjectService::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn missing_required_fields() -> Result<()> {
        // The server has no expectations, any request fails the test.
        let server = Server::run();
        let client = client(&server).await?;

        let err = client.get_project().send().await.unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert!(err.to_string().contains("id"), "{err}");

        let err = client.create_project().send().await.unwrap_err();
        assert!(err.is_validation(), "{err:?}");

        let err = client
            .create_config()
            .set_id("p-1")
            .set_new_name("cfg")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert!(err.to_string().contains("locator_id"), "{err}");

        let err = client
            .get_config()
            .set_id("p-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert!(err.to_string().contains("config_id"), "{err}");

        let err = client
            .create_draft_action()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");

        let err = client
            .update_project()
            .set_id("p-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");

        let err = client
            .receive_pulsar_catalog_events()
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");

        let err = client
            .delete_service_instance()
            .set_instance_id("inst-1")
            .set_plan_id("plan-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert!(err.to_string().contains("service_id"), "{err}");

        let err = client
            .replace_service_instance_state()
            .set_instance_id("inst-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert!(err.to_string().contains("enabled"), "{err}");

        let err = client
            .post_event_notifications_integration()
            .set_id("p-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn service_url_missing() -> Result<()> {
        let server = Server::run();
        let mut client = client(&server).await?;
        client.set_service_url("");
        assert_eq!(client.service_url(), "");

        let err = client.get_health().send().await.unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        assert!(err.to_string().contains("service URL missing"), "{err}");

        let err = client
            .list_projects()
            .set_limit(10)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        assert!(err.to_string().contains("service URL missing"), "{err}");

        let err = client
            .delete_project()
            .set_id("p-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        Ok(())
    }

    #[test_case(false; "without retries")]
    #[test_case(true; "with retries")]
    #[tokio::test]
    async fn invalid_json(retries: bool) -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/projects/p-1"))
                .times(1)
                .respond_with(
                    status_code(200)
                        .insert_header("content-type", "application/json")
                        .body("{\"id\": \"p-1\", "),
                ),
        );
        let mut client = client(&server).await?;
        if retries {
            client.enable_retries(3, Duration::from_millis(10));
        }
        let err = client
            .get_project()
            .set_id("p-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(!err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn malformed_config_definition() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/projects/p-1/configs/cfg-1"))
                .respond_with(json_encoded(json!({
                    "id": "cfg-1",
                    "name": "vpc",
                    "locator_id": "1082e7d2.5e2f0d4f-version",
                    "type": "terraform_template",
                    "input": "not-an-array"
                }))),
        );
        let client = client(&server).await?;
        let err = client
            .get_config()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn empty_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/projects/p-1"))
                .respond_with(status_code(202).insert_header("x-request-id", "r-1")),
        );
        let client = client(&server).await?;
        let response = client.get_project().set_id("p-1").send().await?;
        assert_eq!(response.status_code(), 202);
        assert_eq!(
            response.headers().get("x-request-id").map(|v| v.as_bytes()),
            Some("r-1".as_bytes())
        );
        assert!(response.body().is_none(), "{response:?}");
        Ok(())
    }

    #[tokio::test]
    async fn http_error() -> Result<()> {
        let server = Server::run();
        let payload = json!({"errors": [{"code": "not_found", "message": "project not found"}]});
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/projects/missing"))
                .respond_with(
                    status_code(404)
                        .insert_header("content-type", "application/json")
                        .insert_header("x-correlation-id", "c-1")
                        .body(payload.to_string()),
                ),
        );
        let client = client(&server).await?;
        let err = client
            .get_project()
            .set_id("missing")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_operation(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        let correlation = err.http_headers().and_then(|h| h.get("x-correlation-id"));
        assert_eq!(correlation.map(|v| v.as_bytes()), Some("c-1".as_bytes()));
        let got = err
            .http_payload()
            .map(|p| serde_json::from_slice::<serde_json::Value>(p))
            .transpose()?;
        assert_eq!(got, Some(payload));
        Ok(())
    }

    #[test_case(false; "without retries")]
    #[test_case(true; "with retries")]
    #[tokio::test]
    async fn deadline_exceeded(retries: bool) -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/health"))
                .times(1)
                .respond_with(delay_and_then(
                    Duration::from_secs(2),
                    json_encoded(json!({"name": "projects"})),
                )),
        );
        let mut client = client(&server).await?;
        if retries {
            client.enable_retries(3, Duration::from_millis(10));
        }
        let err = client
            .get_health()
            .with_timeout(Duration::from_millis(200))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn retries_idempotent_operations() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/projects/p-1"))
                .times(3)
                .respond_with(cycle(vec![
                    Box::new(status_code(503)) as Box<dyn Responder>,
                    Box::new(status_code(429)),
                    Box::new(json_encoded(json!({"id": "p-1", "name": "p"}))),
                ])),
        );
        let mut client = client(&server).await?;
        client.enable_retries(4, Duration::from_millis(10));
        assert!(client.retries_enabled());
        let response = client.get_project().set_id("p-1").send().await?;
        assert_eq!(response.body().map(|p| p.name.as_str()), Some("p"));
        Ok(())
    }

    #[tokio::test]
    async fn does_not_retry_non_idempotent_operations() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/projects"))
                .times(1)
                .respond_with(status_code(503)),
        );
        let mut client = client(&server).await?;
        client.enable_retries(4, Duration::from_millis(10));
        let err = client
            .create_project()
            .set_name("p")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn idempotency_override() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/v1/projects"))
                .times(2)
                .respond_with(cycle(vec![
                    Box::new(status_code(503)) as Box<dyn Responder>,
                    Box::new(
                        status_code(201)
                            .insert_header("content-type", "application/json")
                            .body(json!({"id": "p-1", "name": "p"}).to_string()),
                    ),
                ])),
        );
        let client = client(&server).await?;
        let response = client
            .create_project()
            .set_name("p")
            .with_idempotency(true)
            .with_retry_policy(LimitedAttemptCount::new(3))
            .with_backoff_policy(
                ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(5))
                    .clamp(),
            )
            .send()
            .await?;
        assert_eq!(response.status_code(), 201);
        Ok(())
    }

    #[tokio::test]
    async fn disable_retries() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/projects/p-1/event"))
                .times(1)
                .respond_with(status_code(500)),
        );
        let mut client = client(&server).await?;
        client.enable_retries(0, Duration::ZERO);
        client.disable_retries();
        assert!(!client.retries_enabled());
        let err = client
            .delete_notification()
            .set_id("p-1")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(500), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn authentication_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                request::body(url_decoded(contains(("apikey", "bad-key")))),
            ])
            .respond_with(status_code(400).body("{\"errorCode\": \"BXNIM0415E\"}")),
        );
        let client = ProjectService::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(
                auth::credentials::iam::Builder::new("bad-key")
                    .with_url(format!("http://{}", server.addr()))
                    .build(),
            )
            .build()
            .await?;
        let err = client.get_health().send().await.unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        Ok(())
    }
}
