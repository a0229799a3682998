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

//! Verify each operation sends the expected request and decodes the response.

#[cfg(test)]
mod tests {
    use auth::credentials::bearer_token;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use platform_services_project_v1::client::ProjectService;
    use platform_services_project_v1::model;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const ANALYTICS: &str = "x-ibmcloud-sdk-analytics";

    fn analytics(operation_id: &str) -> String {
        format!("service_name=project;service_version=V1;operation_id={operation_id}")
    }

    async fn client(server: &Server) -> Result<ProjectService> {
        let client = ProjectService::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(bearer_token::Builder::new("test-token").build())
            .build()
            .await?;
        Ok(client)
    }

    fn created(body: serde_json::Value) -> impl Responder {
        status_code(201)
            .insert_header("content-type", "application/json")
            .body(body.to_string())
    }

    #[tokio::test]
    async fn create_project() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects"),
                request::query(url_decoded(contains(("resource_group", "Default")))),
                request::query(url_decoded(contains(("location", "us-south")))),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains((ANALYTICS, analytics("CreateProject")))),
                request::body(json_decoded(eq(json!({
                    "name": "acme-project",
                    "description": "A sample project",
                    "configs": [{
                        "name": "common-variables",
                        "locator_id": "1082e7d2-5e2f-0a11.018edf04",
                        "input": [{"name": "app_repo_name"}]
                    }]
                })))),
            ])
            .respond_with(created(json!({
                "id": "acme-1",
                "name": "acme-project",
                "crn": "crn:v1:acme-1",
                "metadata": {"state": "ready", "location": "us-south"}
            }))),
        );

        let client = client(&server).await?;
        let response = client
            .create_project()
            .set_name("acme-project")
            .set_description("A sample project")
            .set_resource_group("Default")
            .set_location("us-south")
            .set_configs([model::ProjectConfigInput::new()
                .set_name("common-variables")
                .set_locator_id("1082e7d2-5e2f-0a11.018edf04")
                .set_input([model::InputVariableInput::new().set_name("app_repo_name")])])
            .send()
            .await?;
        assert_eq!(response.status_code(), 201);
        let project = response.into_body().unwrap_or_default();
        assert_eq!(project.id.as_deref(), Some("acme-1"));
        assert_eq!(project.name, "acme-project");
        let state = project.metadata.and_then(|m| m.state);
        assert_eq!(state.as_deref(), Some("ready"));
        Ok(())
    }

    #[tokio::test]
    async fn list_projects() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects"),
                request::query(url_decoded(contains(("start", "cursor-1")))),
                request::query(url_decoded(contains(("limit", "10")))),
                request::query(url_decoded(contains(("complete", "true")))),
                request::headers(contains((ANALYTICS, analytics("ListProjects")))),
            ])
            .respond_with(json_encoded(json!({
                "limit": 10,
                "total_count": 11,
                "first": {"href": "https://projects.example.com/v1/projects?limit=10"},
                "next": {"href": "https://projects.example.com/v1/projects?limit=10&start=cursor-2", "start": "cursor-2"},
                "projects": [{"id": "p-1", "name": "one"}]
            }))),
        );

        let client = client(&server).await?;
        let response = client
            .list_projects()
            .set_start("cursor-1")
            .set_limit(10)
            .set_complete(true)
            .send()
            .await?;
        let page = response.into_body().unwrap_or_default();
        assert_eq!(page.total_count, 11);
        assert_eq!(page.get_next_start().as_deref(), Some("cursor-2"));
        assert_eq!(page.projects.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn get_project_encodes_path() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects/my%20project%2F1"),
                request::query(url_decoded(contains(("exclude_configs", "false")))),
                request::headers(contains((ANALYTICS, analytics("GetProject")))),
            ])
            .respond_with(json_encoded(json!({"id": "my project/1", "name": "p"}))),
        );

        let client = client(&server).await?;
        let response = client
            .get_project()
            .set_id("my project/1")
            .set_exclude_configs(false)
            .send()
            .await?;
        assert_eq!(response.status_code(), 200);
        assert_eq!(
            response.body().and_then(|p| p.id.as_deref()),
            Some("my project/1")
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_project() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v1/projects/p-1"),
                request::headers(contains(("content-type", "application/json-patch+json"))),
                request::body(json_decoded(eq(json!([
                    {"op": "replace", "path": "/name", "value": "renamed"}
                ])))),
            ])
            .respond_with(json_encoded(json!({"name": "renamed"}))),
        );

        let client = client(&server).await?;
        let patch = model::JsonPatchOperation::new()
            .set_op(model::json_patch_op::REPLACE)
            .set_path("/name")
            .set_value("renamed");
        let response = client
            .update_project()
            .set_id("p-1")
            .set_json_patch_operation([patch])
            .send()
            .await?;
        let want = model::ProjectUpdate::new().set_name("renamed");
        assert_eq!(response.into_body(), Some(want));
        Ok(())
    }

    #[tokio::test]
    async fn delete_project() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v1/projects/p-1"),
                request::query(url_decoded(contains(("destroy", "true")))),
                request::headers(contains((ANALYTICS, analytics("DeleteProject")))),
            ])
            .respond_with(status_code(204)),
        );

        let client = client(&server).await?;
        let response = client
            .delete_project()
            .set_id("p-1")
            .set_destroy(true)
            .send()
            .await?;
        assert_eq!(response.status_code(), 204);
        assert_eq!(response.body(), None);
        Ok(())
    }

    #[tokio::test]
    async fn create_config() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p-1/configs"),
                request::body(json_decoded(eq(json!({
                    "name": "env-stage",
                    "locator_id": "1082e7d2-5e2f-0a11.018edf04",
                    "labels": ["env:stage"],
                    "input": [{"name": "account_id"}],
                    "setting": [{"name": "IBMCLOUD_TOOLCHAIN_ENDPOINT", "value": "https://api.us-south.devops.dev.cloud.ibm.com"}]
                })))),
            ])
            .respond_with(created(json!({
                "id": "cfg-1",
                "name": "env-stage",
                "locator_id": "1082e7d2-5e2f-0a11.018edf04",
                "type": "terraform_template",
                "input": [{"name": "account_id", "type": "string"}]
            }))),
        );

        let client = client(&server).await?;
        let response = client
            .create_config()
            .set_id("p-1")
            .set_new_name("env-stage")
            .set_new_locator_id("1082e7d2-5e2f-0a11.018edf04")
            .set_new_labels(["env:stage"])
            .set_new_input([model::InputVariableInput::new().set_name("account_id")])
            .set_new_setting([model::ConfigSettingItems::new()
                .set_name("IBMCLOUD_TOOLCHAIN_ENDPOINT")
                .set_value("https://api.us-south.devops.dev.cloud.ibm.com")])
            .send()
            .await?;
        let config = response.into_body().unwrap_or_default();
        assert_eq!(config.id.as_deref(), Some("cfg-1"));
        let input = config.definition.as_ref().map(|d| d.input().to_vec());
        let want = model::InputVariable::new()
            .set_name("account_id")
            .set_type(model::input_variable_type::STRING);
        assert_eq!(input, Some(vec![want]));
        Ok(())
    }

    #[tokio::test]
    async fn list_and_get_configs() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects/p-1/configs"),
                request::query(url_decoded(contains(("version", "draft")))),
            ])
            .respond_with(json_encoded(json!({"configs": [{"id": "cfg-1", "name": "a", "type": "manual"}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects/p-1/configs/cfg-1"),
                request::query(url_decoded(contains(("version", "active")))),
                request::query(url_decoded(contains(("complete", "false")))),
                request::headers(contains((ANALYTICS, analytics("GetConfig")))),
            ])
            .respond_with(json_encoded(json!({"id": "cfg-1", "name": "a", "type": "manual"}))),
        );

        let client = client(&server).await?;
        let list = client
            .list_configs()
            .set_id("p-1")
            .set_version(model::config_version::DRAFT)
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(list.configs.len(), 1);
        let config = client
            .get_config()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .set_version(model::config_version::ACTIVE)
            .set_complete(false)
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(config.definition, Some(model::ConfigDefinition::Manual));
        assert_eq!(list.configs[0], config);
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_config() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v1/projects/p-1/configs/cfg-1"),
                request::headers(contains(("content-type", "application/json-patch+json"))),
                request::query(url_decoded(contains(("complete", "true")))),
                request::body(json_decoded(eq(json!([
                    {"op": "add", "path": "/description", "value": "updated"}
                ])))),
            ])
            .respond_with(json_encoded(json!({"id": "cfg-1", "name": "a", "description": "updated"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v1/projects/p-1/configs/cfg-1"),
                request::query(url_decoded(contains(("draft_only", "true")))),
                request::query(url_decoded(contains(("destroy", "false")))),
            ])
            .respond_with(json_encoded(json!({"id": "cfg-1", "name": "a"}))),
        );

        let client = client(&server).await?;
        let patch = model::ProjectConfig::new().set_description("updated").to_patch()?;
        let updated = client
            .update_config()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .set_project_config(patch)
            .set_complete(true)
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(updated.description.as_deref(), Some("updated"));

        let deleted = client
            .delete_config()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .set_draft_only(true)
            .set_destroy(false)
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        let want = model::DeleteProjectConfigResponse::new()
            .set_id("cfg-1")
            .set_name("a");
        assert_eq!(deleted, want);
        Ok(())
    }

    #[tokio::test]
    async fn draft_actions() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p-1/configs/cfg-1/draft/merge"),
                request::body(json_decoded(eq(json!({"comment": "approved"})))),
                request::headers(contains((ANALYTICS, analytics("CreateDraftAction")))),
            ])
            .respond_with(created(json!({"id": "cfg-1", "name": "a"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p-1/configs/cfg-1/draft/force_merge"),
                request::query(url_decoded(contains(("complete", "true")))),
                request::body(json_decoded(eq(json!({"comment": "urgent fix"})))),
            ])
            .respond_with(created(json!({"id": "cfg-1", "name": "a"}))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/projects/p-1/configs/cfg-1/diff",
            ))
            .respond_with(json_encoded(json!({
                "added": {"input": [{"name": "region", "type": "string"}]},
                "removed": {"input": []}
            }))),
        );

        let client = client(&server).await?;
        let merged = client
            .create_draft_action()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .set_action(model::draft_action::MERGE)
            .set_comment("approved")
            .send()
            .await?;
        assert_eq!(merged.status_code(), 201);
        let forced = client
            .force_merge()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .set_comment("urgent fix")
            .set_complete(true)
            .send()
            .await?;
        assert_eq!(forced.body().map(|c| c.name.as_str()), Some("a"));
        let diff = client
            .get_config_diff()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        let added = diff.added.map(|e| e.input).unwrap_or_default();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].name, "region");
        assert_eq!(diff.changed, None);
        Ok(())
    }

    #[tokio::test]
    async fn config_lifecycle() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p-1/configs/cfg-1/check"),
                request::headers(contains(("x-auth-refresh-token", "refresh-token"))),
                request::query(url_decoded(contains(("version", "draft")))),
                request::headers(contains((ANALYTICS, analytics("CheckConfig")))),
            ])
            .respond_with(created(json!({"id": "cfg-1", "name": "a"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p-1/configs/cfg-1/install"),
                request::headers(not(contains(key("content-type")))),
            ])
            .respond_with(status_code(202).insert_header("content-type", "application/json").body(
                json!({"id": "cfg-1", "name": "a"}).to_string(),
            )),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/v1/projects/p-1/configs/cfg-1/uninstall",
            ))
            .respond_with(status_code(204)),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects/p-1/configs/cfg-1/job/plan"),
                request::query(url_decoded(contains(("since", "1700000000")))),
            ])
            .respond_with(json_encoded(json!({"id": "job-1"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects/p-1/configs/cfg-1/cost_estimate"),
                request::query(url_decoded(contains(("version", "active")))),
            ])
            .respond_with(json_encoded(json!({"totalMonthlyCost": "42.00", "currency": "USD"}))),
        );

        let client = client(&server).await?;
        let checked = client
            .check_config()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .set_x_auth_refresh_token("refresh-token")
            .set_version(model::config_version::DRAFT)
            .send()
            .await?;
        assert_eq!(checked.status_code(), 201);
        let installed = client
            .install_config()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .send()
            .await?;
        assert_eq!(installed.status_code(), 202);
        let uninstalled = client
            .uninstall_config()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .send()
            .await?;
        assert_eq!(uninstalled.status_code(), 204);
        let job = client
            .get_schematics_job()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .set_action(model::job_action::PLAN)
            .set_since(1_700_000_000)
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(job.id.as_deref(), Some("job-1"));
        let estimate = client
            .get_cost_estimate()
            .set_id("p-1")
            .set_config_id("cfg-1")
            .set_version(model::config_version::ACTIVE)
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(estimate.get_property("currency"), Some(&json!("USD")));
        Ok(())
    }

    #[tokio::test]
    async fn notifications() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p-1/event"),
                request::body(json_decoded(eq(json!({
                    "notifications": [{"event": "project.create.failed", "target": "p-1", "data": {"k": "v"}}]
                })))),
            ])
            .respond_with(json_encoded(json!({
                "notifications": [{"event": "project.create.failed", "target": "p-1", "id": "n-1", "status": "success"}]
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/projects/p-1/event"))
                .respond_with(json_encoded(json!({
                    "notifications": [{"event": "project.create.failed", "target": "p-1", "id": "n-1"}]
                }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v1/projects/p-1/event"),
                request::headers(contains((ANALYTICS, analytics("DeleteNotification")))),
            ])
            .respond_with(status_code(204)),
        );

        let client = client(&server).await?;
        let data = model::JsonObject::from_iter([("k".to_string(), json!("v"))]);
        let posted = client
            .post_notification()
            .set_id("p-1")
            .set_notifications([model::NotificationEvent::new()
                .set_event("project.create.failed")
                .set_target("p-1")
                .set_data(data)])
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(posted.notifications[0].status.as_deref(), Some("success"));
        let got = client
            .get_notifications()
            .set_id("p-1")
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(got.notifications[0].id, "n-1");
        let deleted = client.delete_notification().set_id("p-1").send().await?;
        assert_eq!(deleted.status_code(), 204);
        Ok(())
    }

    #[tokio::test]
    async fn event_notifications_integration() -> Result<()> {
        let server = Server::run();
        let path = "/v1/projects/p-1/integrations/event_notifications";
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", path),
                request::body(json_decoded(eq(json!({
                    "instance_crn": "crn:v1:en-1",
                    "description": "project events",
                    "event_notifications_source_name": "my-project",
                    "enabled": true
                })))),
            ])
            .respond_with(created(json!({"id": "src-1", "name": "my-project", "enabled": true}))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", path)).respond_with(json_encoded(
                json!({"id": "src-1", "topic_count": 2, "topic_names": ["a", "b"]}),
            )),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v1/projects/p-1/integrations/event_notifications/test",
                ),
                request::body(json_decoded(eq(json!({"ibmendefaultshort": "test"})))),
            ])
            .respond_with(created(json!({"id": "evt-1", "source": "crn:v1:p-1"}))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", path))
                .respond_with(status_code(204)),
        );

        let client = client(&server).await?;
        let created = client
            .post_event_notifications_integration()
            .set_id("p-1")
            .set_instance_crn("crn:v1:en-1")
            .set_description("project events")
            .set_event_notifications_source_name("my-project")
            .set_enabled(true)
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(created.enabled, Some(true));
        let got = client
            .get_event_notifications_integration()
            .set_id("p-1")
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(got.topic_count, Some(2));
        assert_eq!(got.topic_names, vec!["a", "b"]);
        let test_event = client
            .post_test_event_notification()
            .set_id("p-1")
            .set_ibmendefaultshort("test")
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(test_event.id, "evt-1");
        let deleted = client
            .delete_event_notifications_integration()
            .set_id("p-1")
            .send()
            .await?;
        assert_eq!(deleted.status_code(), 204);
        Ok(())
    }

    #[tokio::test]
    async fn pulsar_events_and_health() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/pulsar/catalog_events"),
                request::body(json_decoded(eq(json!([{
                    "event_type": "create",
                    "timestamp": "2024-05-01T00:00:00Z",
                    "publisher": "catalog",
                    "account_id": "acct-1",
                    "version": "v1",
                    "event_properties": {"offering": "o-1"},
                    "region": "us-south"
                }])))),
            ])
            .respond_with(status_code(202)),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/health"),
                request::query(url_decoded(contains(("info", "true")))),
                request::headers(contains((ANALYTICS, analytics("GetHealth")))),
            ])
            .respond_with(json_encoded(json!({"name": "projects", "version": "1.0", "dependencies": {"db": "ok"}}))),
        );

        let client = client(&server).await?;
        let event = model::PulsarEventItems::new()
            .set_event_type("create")
            .set_timestamp("2024-05-01T00:00:00Z")
            .set_publisher("catalog")
            .set_account_id("acct-1")
            .set_version("v1")
            .set_event_properties(model::JsonObject::from_iter([(
                "offering".to_string(),
                json!("o-1"),
            )]))
            .set_property("region", "us-south");
        let response = client
            .receive_pulsar_catalog_events()
            .set_pulsar_catalog_events([event])
            .send()
            .await?;
        assert_eq!(response.status_code(), 202);
        assert_eq!(response.body(), None);

        let health = client
            .get_health()
            .set_info(true)
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(health.name.as_deref(), Some("projects"));
        let db = health.dependencies.as_ref().and_then(|d| d.get("db"));
        assert_eq!(db, Some(&json!("ok")));
        Ok(())
    }

    #[tokio::test]
    async fn service_broker() -> Result<()> {
        let server = Server::run();
        let path = "/v2/service_instances/inst-1";
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", path),
                request::query(url_decoded(contains(("accepts_incomplete", "false")))),
                request::headers(contains(("x-broker-api-version", "1.0"))),
                request::headers(contains(("x-broker-api-originating-identity", "ibmcloud dXNlcg=="))),
                request::body(json_decoded(eq(json!({
                    "service_id": "svc-1",
                    "plan_id": "plan-1",
                    "parameters": {"profile": "standard"}
                })))),
            ])
            .respond_with(created(json!({"dashboard_url": "https://dashboard.example.com", "operation": "op-1"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", path),
                request::query(url_decoded(contains(("plan_id", "plan-1")))),
                request::query(url_decoded(contains(("service_id", "svc-1")))),
                request::headers(contains((ANALYTICS, analytics("DeleteServiceInstance")))),
            ])
            .respond_with(json_encoded(json!({"operation": "op-2"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", path),
                request::headers(contains(("content-type", "application/json-patch+json"))),
                request::body(json_decoded(eq(json!([{"op": "add", "path": "/plan_id", "value": "plan-2"}])))),
            ])
            .respond_with(json_encoded(json!({"operation": "op-3"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/service_instances/inst-1/last_operation"),
                request::query(url_decoded(contains(("operation", "op-3")))),
            ])
            .respond_with(json_encoded(json!({"state": "in progress"}))),
        );

        let client = client(&server).await?;
        let provisioned = client
            .replace_service_instance()
            .set_instance_id("inst-1")
            .set_service_id("svc-1")
            .set_plan_id("plan-1")
            .set_parameters(model::JsonObject::from_iter([(
                "profile".to_string(),
                json!("standard"),
            )]))
            .set_accepts_incomplete(false)
            .set_x_broker_api_version("1.0")
            .set_x_broker_api_originating_identity("ibmcloud dXNlcg==")
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(provisioned.operation.as_deref(), Some("op-1"));

        let deleted = client
            .delete_service_instance()
            .set_instance_id("inst-1")
            .set_plan_id("plan-1")
            .set_service_id("svc-1")
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(deleted.get_property("operation"), Some(&json!("op-2")));

        let patch = model::UpdateResult::new()
            .set_property("plan_id", "plan-2")
            .to_patch();
        let updated = client
            .update_service_instance()
            .set_instance_id("inst-1")
            .set_json_patch_operation(patch)
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(updated.get_property("operation"), Some(&json!("op-3")));

        let last = client
            .get_last_operation()
            .set_instance_id("inst-1")
            .set_operation("op-3")
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(last.state.as_deref(), Some("in progress"));
        Ok(())
    }

    #[tokio::test]
    async fn service_instance_state_and_catalog() -> Result<()> {
        let server = Server::run();
        let path = "/bluemix_v1/service_instances/inst-1";
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", path),
                request::headers(contains(("x-broker-api-version", "1.0"))),
                request::body(json_decoded(eq(json!({
                    "enabled": false,
                    "initiator_id": "user-1",
                    "reason_code": {"code": "suspended"}
                })))),
            ])
            .respond_with(json_encoded(json!({"active": "true", "enabled": "false"}))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", path)).respond_with(json_encoded(
                json!({"active": "true", "enabled": "true", "last_active": "1700000000"}),
            )),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/catalog"),
                request::headers(contains((ANALYTICS, analytics("GetCatalog")))),
            ])
            .respond_with(json_encoded(json!({
                "services": [{
                    "id": "svc-1",
                    "name": "projects",
                    "bindable": false,
                    "metadata": {"displayName": "ignored", "display_name": "Projects"},
                    "plans": [{"id": "plan-1", "name": "standard", "free": true}]
                }]
            }))),
        );

        let client = client(&server).await?;
        let state = client
            .replace_service_instance_state()
            .set_instance_id("inst-1")
            .set_enabled(false)
            .set_initiator_id("user-1")
            .set_reason_code(model::JsonObject::from_iter([(
                "code".to_string(),
                json!("suspended"),
            )]))
            .set_x_broker_api_version("1.0")
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(state.enabled.as_deref(), Some("false"));

        let instance = client
            .get_service_instance()
            .set_instance_id("inst-1")
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        assert_eq!(instance.last_active.as_deref(), Some("1700000000"));

        let catalog = client
            .get_catalog()
            .send()
            .await?
            .into_body()
            .unwrap_or_default();
        let service = &catalog.services[0];
        assert_eq!(service.plans[0].free, Some(true));
        let display_name = service
            .metadata
            .as_ref()
            .and_then(|m| m.display_name.as_deref());
        assert_eq!(display_name, Some("Projects"));
        Ok(())
    }
}
