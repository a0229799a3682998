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

//! The HTTP transport for [ProjectService][crate::client::ProjectService].

use crate::Result;
use gax::response::Response;
use gaxi::http::NoBody;
use gaxi::path_parameter;
use gaxi::query_parameter::QueryParameter;
use gaxi::sdk_header::SDK_ANALYTICS_HEADER;

/// Implements [ProjectService](crate::client::ProjectService) using a
/// [reqwest::Client].
#[derive(Clone, Debug)]
pub(crate) struct ProjectService {
    inner: gaxi::http::ReqwestClient,
}

impl ProjectService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(
            config,
            crate::DEFAULT_SERVICE_URL,
            crate::DEFAULT_SERVICE_NAME,
        )
        .await?;
        Ok(Self { inner })
    }

    pub fn service_url(&self) -> &str {
        self.inner.endpoint()
    }

    pub fn set_service_url<T: Into<String>>(&mut self, v: T) {
        self.inner.set_endpoint(v);
    }

    pub fn set_default_headers(&mut self, v: http::HeaderMap) {
        self.inner.set_default_headers(v);
    }

    pub fn default_headers(&self) -> &http::HeaderMap {
        self.inner.default_headers()
    }

    pub fn set_enable_gzip_compression(&mut self, v: bool) {
        self.inner.set_gzip_compression(v);
    }

    pub fn enable_gzip_compression(&self) -> bool {
        self.inner.gzip_compression()
    }

    pub fn enable_retries(&mut self, max_retries: u32, max_retry_interval: std::time::Duration) {
        self.inner.enable_retries(max_retries, max_retry_interval);
    }

    pub fn disable_retries(&mut self) {
        self.inner.disable_retries();
    }

    pub fn retries_enabled(&self) -> bool {
        self.inner.retry_policy().is_some()
    }

    fn builder(
        &self,
        method: reqwest::Method,
        path: String,
        operation_id: &str,
    ) -> Result<reqwest::RequestBuilder> {
        let builder = self.inner.builder(method, path)?;
        Ok(builder.header(
            SDK_ANALYTICS_HEADER,
            crate::SDK_ANALYTICS.header_value(operation_id),
        ))
    }

    pub async fn create_project(
        &self,
        req: crate::model::CreateProjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::GetProjectResponse>> {
        if req.name.is_empty() {
            return Err(path_parameter::missing("name"));
        }
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            "/v1/projects".to_string(),
            "CreateProject",
        )?;
        let builder = QueryParameter::add(req.resource_group.as_deref(), builder, "resource_group");
        let builder = QueryParameter::add(req.location.as_deref(), builder, "location");
        self.inner.execute(builder, Some(req), options).await
    }

    pub async fn list_projects(
        &self,
        req: crate::model::ListProjectsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectListResponseSchema>> {
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            "/v1/projects".to_string(),
            "ListProjects",
        )?;
        let builder = QueryParameter::add(req.start.as_deref(), builder, "start");
        let builder = QueryParameter::add(req.limit, builder, "limit");
        let builder = QueryParameter::add(req.complete, builder, "complete");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn get_project(
        &self,
        req: crate::model::GetProjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::GetProjectResponse>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            format!("/v1/projects/{id}"),
            "GetProject",
        )?;
        let builder = QueryParameter::add(req.exclude_configs, builder, "exclude_configs");
        let builder = QueryParameter::add(req.complete, builder, "complete");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn update_project(
        &self,
        req: crate::model::UpdateProjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectUpdate>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        if req.json_patch_operation.is_empty() {
            return Err(path_parameter::missing("json_patch_operation"));
        }
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::PATCH,
            format!("/v1/projects/{id}"),
            "UpdateProject",
        )?;
        self.inner.execute_json_patch(builder, req.json_patch_operation, options).await
    }

    pub async fn delete_project(
        &self,
        req: crate::model::DeleteProjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::DELETE,
            format!("/v1/projects/{id}"),
            "DeleteProject",
        )?;
        let builder = QueryParameter::add(req.destroy, builder, "destroy");
        self.inner.execute_no_content(builder, None::<NoBody>, options).await
    }

    pub async fn create_config(
        &self,
        req: crate::model::CreateConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectConfig>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        if req.new_name.is_empty() {
            return Err(path_parameter::missing("new_name"));
        }
        if req.new_locator_id.is_empty() {
            return Err(path_parameter::missing("new_locator_id"));
        }
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            format!("/v1/projects/{id}/configs"),
            "CreateConfig",
        )?;
        self.inner.execute(builder, Some(req), options).await
    }

    pub async fn list_configs(
        &self,
        req: crate::model::ListConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectConfigList>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            format!("/v1/projects/{id}/configs"),
            "ListConfigs",
        )?;
        let builder = QueryParameter::add(req.version.as_deref(), builder, "version");
        let builder = QueryParameter::add(req.complete, builder, "complete");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn get_config(
        &self,
        req: crate::model::GetConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectConfig>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            format!("/v1/projects/{id}/configs/{config_id}"),
            "GetConfig",
        )?;
        let builder = QueryParameter::add(req.version.as_deref(), builder, "version");
        let builder = QueryParameter::add(req.complete, builder, "complete");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn update_config(
        &self,
        req: crate::model::UpdateConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectConfig>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        if req.project_config.is_empty() {
            return Err(path_parameter::missing("project_config"));
        }
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::PATCH,
            format!("/v1/projects/{id}/configs/{config_id}"),
            "UpdateConfig",
        )?;
        let builder = QueryParameter::add(req.complete, builder, "complete");
        self.inner.execute_json_patch(builder, req.project_config, options).await
    }

    pub async fn delete_config(
        &self,
        req: crate::model::DeleteConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::DeleteProjectConfigResponse>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::DELETE,
            format!("/v1/projects/{id}/configs/{config_id}"),
            "DeleteConfig",
        )?;
        let builder = QueryParameter::add(req.draft_only, builder, "draft_only");
        let builder = QueryParameter::add(req.destroy, builder, "destroy");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn get_config_diff(
        &self,
        req: crate::model::GetConfigDiffRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectConfigDiff>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            format!("/v1/projects/{id}/configs/{config_id}/diff"),
            "GetConfigDiff",
        )?;
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn force_merge(
        &self,
        req: crate::model::ForceMergeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectConfig>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            format!("/v1/projects/{id}/configs/{config_id}/draft/force_merge"),
            "ForceMerge",
        )?;
        let builder = QueryParameter::add(req.complete, builder, "complete");
        self.inner.execute(builder, Some(req), options).await
    }

    pub async fn create_draft_action(
        &self,
        req: crate::model::CreateDraftActionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectConfig>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        let action = path_parameter::required("action", Some(req.action.as_str()))?;
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            format!("/v1/projects/{id}/configs/{config_id}/draft/{action}"),
            "CreateDraftAction",
        )?;
        let builder = QueryParameter::add(req.complete, builder, "complete");
        self.inner.execute(builder, Some(req), options).await
    }

    pub async fn check_config(
        &self,
        req: crate::model::CheckConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectConfig>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            format!("/v1/projects/{id}/configs/{config_id}/check"),
            "CheckConfig",
        )?;
        let builder = QueryParameter::add(req.version.as_deref(), builder, "version");
        let builder = QueryParameter::add(req.complete, builder, "complete");
        let builder = add_header(
            builder,
            "X-Auth-Refresh-Token",
            req.x_auth_refresh_token.as_deref(),
        );
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn install_config(
        &self,
        req: crate::model::InstallConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectConfig>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            format!("/v1/projects/{id}/configs/{config_id}/install"),
            "InstallConfig",
        )?;
        let builder = QueryParameter::add(req.complete, builder, "complete");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn uninstall_config(
        &self,
        req: crate::model::UninstallConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            format!("/v1/projects/{id}/configs/{config_id}/uninstall"),
            "UninstallConfig",
        )?;
        self.inner.execute_no_content(builder, None::<NoBody>, options).await
    }

    pub async fn get_schematics_job(
        &self,
        req: crate::model::GetSchematicsJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::GetActionJobResponse>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        let action = path_parameter::required("action", Some(req.action.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            format!("/v1/projects/{id}/configs/{config_id}/job/{action}"),
            "GetSchematicsJob",
        )?;
        let builder = QueryParameter::add(req.since, builder, "since");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn get_cost_estimate(
        &self,
        req: crate::model::GetCostEstimateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::GetCostEstimateResponse>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let config_id = path_parameter::required("config_id", Some(req.config_id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            format!("/v1/projects/{id}/configs/{config_id}/cost_estimate"),
            "GetCostEstimate",
        )?;
        let builder = QueryParameter::add(req.version.as_deref(), builder, "version");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn post_notification(
        &self,
        req: crate::model::PostNotificationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::PostNotificationsResponse>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            format!("/v1/projects/{id}/event"),
            "PostNotification",
        )?;
        self.inner.execute(builder, Some(req), options).await
    }

    pub async fn get_notifications(
        &self,
        req: crate::model::GetNotificationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::GetNotificationsResponse>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            format!("/v1/projects/{id}/event"),
            "GetNotifications",
        )?;
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn delete_notification(
        &self,
        req: crate::model::DeleteNotificationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::DELETE,
            format!("/v1/projects/{id}/event"),
            "DeleteNotification",
        )?;
        self.inner.execute_no_content(builder, None::<NoBody>, options).await
    }

    pub async fn receive_pulsar_catalog_events(
        &self,
        req: crate::model::ReceivePulsarCatalogEventsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        if req.pulsar_catalog_events.is_empty() {
            return Err(path_parameter::missing("pulsar_catalog_events"));
        }
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            "/v1/pulsar/catalog_events".to_string(),
            "ReceivePulsarCatalogEvents",
        )?;
        self.inner.execute_no_content(builder, Some(req.pulsar_catalog_events), options).await
    }

    pub async fn get_health(
        &self,
        req: crate::model::GetHealthRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Health>> {
        let options = options.set_default_idempotency(true);
        let builder = self.builder(reqwest::Method::GET, "/v1/health".to_string(), "GetHealth")?;
        let builder = QueryParameter::add(req.info, builder, "info");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn replace_service_instance(
        &self,
        req: crate::model::ReplaceServiceInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::CreateResult>> {
        let instance_id = path_parameter::required("instance_id", Some(req.instance_id.as_str()))?;
        if req.service_id.is_empty() {
            return Err(path_parameter::missing("service_id"));
        }
        if req.plan_id.is_empty() {
            return Err(path_parameter::missing("plan_id"));
        }
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::PUT,
            format!("/v2/service_instances/{instance_id}"),
            "ReplaceServiceInstance",
        )?;
        let builder = QueryParameter::add(req.accepts_incomplete, builder, "accepts_incomplete");
        let builder = add_header(
            builder,
            "X-Broker-Api-Version",
            req.x_broker_api_version.as_deref(),
        );
        let builder = add_header(
            builder,
            "X-Broker-Api-Originating-Identity",
            req.x_broker_api_originating_identity.as_deref(),
        );
        self.inner.execute(builder, Some(req), options).await
    }

    pub async fn delete_service_instance(
        &self,
        req: crate::model::DeleteServiceInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::DeleteResult>> {
        let instance_id = path_parameter::required("instance_id", Some(req.instance_id.as_str()))?;
        if req.plan_id.is_empty() {
            return Err(path_parameter::missing("plan_id"));
        }
        if req.service_id.is_empty() {
            return Err(path_parameter::missing("service_id"));
        }
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::DELETE,
            format!("/v2/service_instances/{instance_id}"),
            "DeleteServiceInstance",
        )?;
        let builder = QueryParameter::add(req.plan_id.as_str(), builder, "plan_id");
        let builder = QueryParameter::add(req.service_id.as_str(), builder, "service_id");
        let builder = QueryParameter::add(req.accepts_incomplete, builder, "accepts_incomplete");
        let builder = add_header(
            builder,
            "X-Broker-Api-Version",
            req.x_broker_api_version.as_deref(),
        );
        let builder = add_header(
            builder,
            "X-Broker-Api-Originating-Identity",
            req.x_broker_api_originating_identity.as_deref(),
        );
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn update_service_instance(
        &self,
        req: crate::model::UpdateServiceInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::UpdateResult>> {
        let instance_id = path_parameter::required("instance_id", Some(req.instance_id.as_str()))?;
        if req.json_patch_operation.is_empty() {
            return Err(path_parameter::missing("json_patch_operation"));
        }
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::PATCH,
            format!("/v2/service_instances/{instance_id}"),
            "UpdateServiceInstance",
        )?;
        let builder = QueryParameter::add(req.accepts_incomplete, builder, "accepts_incomplete");
        let builder = add_header(
            builder,
            "X-Broker-Api-Version",
            req.x_broker_api_version.as_deref(),
        );
        let builder = add_header(
            builder,
            "X-Broker-Api-Originating-Identity",
            req.x_broker_api_originating_identity.as_deref(),
        );
        self.inner.execute_json_patch(builder, req.json_patch_operation, options).await
    }

    pub async fn get_last_operation(
        &self,
        req: crate::model::GetLastOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::GetLastOperationResult>> {
        let instance_id = path_parameter::required("instance_id", Some(req.instance_id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            format!("/v2/service_instances/{instance_id}/last_operation"),
            "GetLastOperation",
        )?;
        let builder = QueryParameter::add(req.operation.as_deref(), builder, "operation");
        let builder = QueryParameter::add(req.plan_id.as_deref(), builder, "plan_id");
        let builder = QueryParameter::add(req.service_id.as_deref(), builder, "service_id");
        let builder = add_header(
            builder,
            "X-Broker-Api-Version",
            req.x_broker_api_version.as_deref(),
        );
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn replace_service_instance_state(
        &self,
        req: crate::model::ReplaceServiceInstanceStateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::BrokerResult>> {
        let instance_id = path_parameter::required("instance_id", Some(req.instance_id.as_str()))?;
        if req.enabled.is_none() {
            return Err(path_parameter::missing("enabled"));
        }
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::PUT,
            format!("/bluemix_v1/service_instances/{instance_id}"),
            "ReplaceServiceInstanceState",
        )?;
        let builder = add_header(
            builder,
            "X-Broker-Api-Version",
            req.x_broker_api_version.as_deref(),
        );
        self.inner.execute(builder, Some(req), options).await
    }

    pub async fn get_service_instance(
        &self,
        req: crate::model::GetServiceInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::BrokerResult>> {
        let instance_id = path_parameter::required("instance_id", Some(req.instance_id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            format!("/bluemix_v1/service_instances/{instance_id}"),
            "GetServiceInstance",
        )?;
        let builder = add_header(
            builder,
            "X-Broker-Api-Version",
            req.x_broker_api_version.as_deref(),
        );
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn get_catalog(
        &self,
        req: crate::model::GetCatalogRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::CatalogResponse>> {
        let options = options.set_default_idempotency(true);
        let builder = self.builder(reqwest::Method::GET, "/v2/catalog".to_string(), "GetCatalog")?;
        let builder = add_header(
            builder,
            "X-Broker-Api-Version",
            req.x_broker_api_version.as_deref(),
        );
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn post_event_notifications_integration(
        &self,
        req: crate::model::PostEventNotificationsIntegrationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::PostEventNotificationsIntegrationResponse>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        if req.instance_crn.is_empty() {
            return Err(path_parameter::missing("instance_crn"));
        }
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            format!("/v1/projects/{id}/integrations/event_notifications"),
            "PostEventNotificationsIntegration",
        )?;
        self.inner.execute(builder, Some(req), options).await
    }

    pub async fn get_event_notifications_integration(
        &self,
        req: crate::model::GetEventNotificationsIntegrationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::GetEventNotificationsIntegrationResponse>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::GET,
            format!("/v1/projects/{id}/integrations/event_notifications"),
            "GetEventNotificationsIntegration",
        )?;
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    pub async fn delete_event_notifications_integration(
        &self,
        req: crate::model::DeleteEventNotificationsIntegrationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let options = options.set_default_idempotency(true);
        let builder = self.builder(
            reqwest::Method::DELETE,
            format!("/v1/projects/{id}/integrations/event_notifications"),
            "DeleteEventNotificationsIntegration",
        )?;
        self.inner.execute_no_content(builder, None::<NoBody>, options).await
    }

    pub async fn post_test_event_notification(
        &self,
        req: crate::model::PostTestEventNotificationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::PostTestEventNotificationResponse>> {
        let id = path_parameter::required("id", Some(req.id.as_str()))?;
        let options = options.set_default_idempotency(false);
        let builder = self.builder(
            reqwest::Method::POST,
            format!("/v1/projects/{id}/integrations/event_notifications/test"),
            "PostTestEventNotification",
        )?;
        self.inner.execute(builder, Some(req), options).await
    }
}

fn add_header(
    builder: reqwest::RequestBuilder,
    name: &'static str,
    value: Option<&str>,
) -> reqwest::RequestBuilder {
    match value {
        Some(v) => builder.header(name, v),
        None => builder,
    }
}
