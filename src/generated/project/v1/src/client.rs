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

//! The client for the Projects API.

use std::sync::Arc;
use std::time::Duration;

/// Implements a client for the Projects API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use platform_services_project_v1::client::ProjectService;
/// let client = ProjectService::builder()
///     .with_credentials(auth::credentials::bearer_token::Builder::new("my-token").build())
///     .build()
///     .await?;
/// # let _ = client;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Projects group the configurations used to deploy and manage infrastructure
/// as code. The service also acts as a service broker for the platform
/// catalog, the broker operations are included in this client.
///
/// # Configuration
///
/// To configure `ProjectService` use the `with_*` methods in the type returned
/// by [builder()][ProjectService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the service URL
///   `https://projects.api.test.cloud.ibm.com`. Applications can override the
///   URL, for example, to use a private endpoint.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment, using the `PROJECT_` prefix for the property names.
/// * [with_config_source()]: reads the service URL, the credentials, and the
///   retry settings from an application-provided source.
///
/// [with_endpoint()]: super::builder::project_service::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::project_service::ClientBuilder::with_credentials
/// [with_config_source()]: super::builder::project_service::ClientBuilder::with_config_source
///
/// # Pooling and Cloning
///
/// `ProjectService` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `ProjectService` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally. Changes made with the `set_*` and `*_retries` methods only
/// affect the client they are made on, and the requests started after the
/// change.
#[derive(Clone, Debug)]
pub struct ProjectService {
    inner: Arc<crate::transport::ProjectService>,
}

impl ProjectService {
    /// Returns a builder for [ProjectService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use platform_services_project_v1::client::ProjectService;
    /// let client = ProjectService::builder()
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::project_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::project_service::client::Factory,
        )
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = crate::transport::ProjectService::new(config).await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// The URL prefix used for all requests.
    pub fn service_url(&self) -> &str {
        self.inner.service_url()
    }

    /// Changes the URL prefix used for all requests.
    ///
    /// Requests fail with a [configuration][crate::Error::is_configuration]
    /// error while the URL is empty.
    pub fn set_service_url<T: Into<String>>(&mut self, v: T) {
        Arc::make_mut(&mut self.inner).set_service_url(v);
    }

    /// The headers included in every request.
    pub fn default_headers(&self) -> &http::HeaderMap {
        self.inner.default_headers()
    }

    /// Replaces the headers included in every request.
    pub fn set_default_headers(&mut self, v: http::HeaderMap) {
        Arc::make_mut(&mut self.inner).set_default_headers(v);
    }

    /// Returns `true` if request bodies are gzip-compressed.
    pub fn enable_gzip_compression(&self) -> bool {
        self.inner.enable_gzip_compression()
    }

    /// Enables or disables gzip compression of the request bodies.
    pub fn set_enable_gzip_compression(&mut self, v: bool) {
        Arc::make_mut(&mut self.inner).set_enable_gzip_compression(v);
    }

    /// Retries failed idempotent requests.
    ///
    /// Requests are retried up to `max_retries` times, on transport errors and
    /// on `429` or `5xx` responses, waiting at most `max_retry_interval`
    /// between attempts. Zero values select the defaults, 4 retries and 30
    /// seconds. Individual requests can override the policies with
    /// [with_retry_policy()][gax::options::RequestOptionsBuilder::with_retry_policy]
    /// and [with_backoff_policy()][gax::options::RequestOptionsBuilder::with_backoff_policy].
    pub fn enable_retries(&mut self, max_retries: u32, max_retry_interval: Duration) {
        Arc::make_mut(&mut self.inner).enable_retries(max_retries, max_retry_interval);
    }

    /// Stops retrying failed requests.
    pub fn disable_retries(&mut self) {
        Arc::make_mut(&mut self.inner).disable_retries();
    }

    /// Returns `true` if [enable_retries()][Self::enable_retries] is in effect.
    pub fn retries_enabled(&self) -> bool {
        self.inner.retries_enabled()
    }

    /// Creates a project.
    pub fn create_project(&self) -> super::builder::project_service::CreateProject {
        super::builder::project_service::CreateProject::new(self.inner.clone())
    }

    /// Lists the projects in the account.
    ///
    /// Use [by_page][super::builder::project_service::ListProjects::by_page] to
    /// iterate over all the pages.
    pub fn list_projects(&self) -> super::builder::project_service::ListProjects {
        super::builder::project_service::ListProjects::new(self.inner.clone())
    }

    /// Gets a project.
    pub fn get_project(&self) -> super::builder::project_service::GetProject {
        super::builder::project_service::GetProject::new(self.inner.clone())
    }

    /// Updates a project with a JSON patch.
    pub fn update_project(&self) -> super::builder::project_service::UpdateProject {
        super::builder::project_service::UpdateProject::new(self.inner.clone())
    }

    /// Deletes a project.
    pub fn delete_project(&self) -> super::builder::project_service::DeleteProject {
        super::builder::project_service::DeleteProject::new(self.inner.clone())
    }

    /// Adds a configuration to a project.
    pub fn create_config(&self) -> super::builder::project_service::CreateConfig {
        super::builder::project_service::CreateConfig::new(self.inner.clone())
    }

    /// Lists the configurations of a project.
    pub fn list_configs(&self) -> super::builder::project_service::ListConfigs {
        super::builder::project_service::ListConfigs::new(self.inner.clone())
    }

    /// Gets a project configuration.
    pub fn get_config(&self) -> super::builder::project_service::GetConfig {
        super::builder::project_service::GetConfig::new(self.inner.clone())
    }

    /// Updates a project configuration with a JSON patch.
    pub fn update_config(&self) -> super::builder::project_service::UpdateConfig {
        super::builder::project_service::UpdateConfig::new(self.inner.clone())
    }

    /// Deletes a project configuration.
    pub fn delete_config(&self) -> super::builder::project_service::DeleteConfig {
        super::builder::project_service::DeleteConfig::new(self.inner.clone())
    }

    /// Compares the draft and the active version of a configuration.
    pub fn get_config_diff(&self) -> super::builder::project_service::GetConfigDiff {
        super::builder::project_service::GetConfigDiff::new(self.inner.clone())
    }

    /// Merges the draft of a configuration without waiting for the checks to finish.
    pub fn force_merge(&self) -> super::builder::project_service::ForceMerge {
        super::builder::project_service::ForceMerge::new(self.inner.clone())
    }

    /// Merges or discards the draft of a configuration.
    pub fn create_draft_action(&self) -> super::builder::project_service::CreateDraftAction {
        super::builder::project_service::CreateDraftAction::new(self.inner.clone())
    }

    /// Runs a validation check on a configuration.
    pub fn check_config(&self) -> super::builder::project_service::CheckConfig {
        super::builder::project_service::CheckConfig::new(self.inner.clone())
    }

    /// Deploys the resources of a configuration.
    pub fn install_config(&self) -> super::builder::project_service::InstallConfig {
        super::builder::project_service::InstallConfig::new(self.inner.clone())
    }

    /// Destroys the resources deployed by a configuration.
    pub fn uninstall_config(&self) -> super::builder::project_service::UninstallConfig {
        super::builder::project_service::UninstallConfig::new(self.inner.clone())
    }

    /// Gets the Schematics job for an action on a configuration.
    pub fn get_schematics_job(&self) -> super::builder::project_service::GetSchematicsJob {
        super::builder::project_service::GetSchematicsJob::new(self.inner.clone())
    }

    /// Gets the cost estimate of a configuration.
    pub fn get_cost_estimate(&self) -> super::builder::project_service::GetCostEstimate {
        super::builder::project_service::GetCostEstimate::new(self.inner.clone())
    }

    /// Posts notifications to a project.
    pub fn post_notification(&self) -> super::builder::project_service::PostNotification {
        super::builder::project_service::PostNotification::new(self.inner.clone())
    }

    /// Gets the notifications of a project.
    pub fn get_notifications(&self) -> super::builder::project_service::GetNotifications {
        super::builder::project_service::GetNotifications::new(self.inner.clone())
    }

    /// Deletes the notifications of a project.
    pub fn delete_notification(&self) -> super::builder::project_service::DeleteNotification {
        super::builder::project_service::DeleteNotification::new(self.inner.clone())
    }

    /// Delivers catalog events to the service.
    pub fn receive_pulsar_catalog_events(&self) -> super::builder::project_service::ReceivePulsarCatalogEvents {
        super::builder::project_service::ReceivePulsarCatalogEvents::new(self.inner.clone())
    }

    /// Gets the health of the service.
    pub fn get_health(&self) -> super::builder::project_service::GetHealth {
        super::builder::project_service::GetHealth::new(self.inner.clone())
    }

    /// Provisions a service instance.
    pub fn replace_service_instance(&self) -> super::builder::project_service::ReplaceServiceInstance {
        super::builder::project_service::ReplaceServiceInstance::new(self.inner.clone())
    }

    /// Deprovisions a service instance.
    pub fn delete_service_instance(&self) -> super::builder::project_service::DeleteServiceInstance {
        super::builder::project_service::DeleteServiceInstance::new(self.inner.clone())
    }

    /// Updates a service instance with a JSON patch.
    pub fn update_service_instance(&self) -> super::builder::project_service::UpdateServiceInstance {
        super::builder::project_service::UpdateServiceInstance::new(self.inner.clone())
    }

    /// Gets the state of the last operation on a service instance.
    pub fn get_last_operation(&self) -> super::builder::project_service::GetLastOperation {
        super::builder::project_service::GetLastOperation::new(self.inner.clone())
    }

    /// Enables or disables a service instance.
    pub fn replace_service_instance_state(&self) -> super::builder::project_service::ReplaceServiceInstanceState {
        super::builder::project_service::ReplaceServiceInstanceState::new(self.inner.clone())
    }

    /// Gets the state of a service instance.
    pub fn get_service_instance(&self) -> super::builder::project_service::GetServiceInstance {
        super::builder::project_service::GetServiceInstance::new(self.inner.clone())
    }

    /// Gets the service broker catalog.
    pub fn get_catalog(&self) -> super::builder::project_service::GetCatalog {
        super::builder::project_service::GetCatalog::new(self.inner.clone())
    }

    /// Connects a project to an Event Notifications instance.
    pub fn post_event_notifications_integration(&self) -> super::builder::project_service::PostEventNotificationsIntegration {
        super::builder::project_service::PostEventNotificationsIntegration::new(self.inner.clone())
    }

    /// Gets the Event Notifications integration of a project.
    pub fn get_event_notifications_integration(&self) -> super::builder::project_service::GetEventNotificationsIntegration {
        super::builder::project_service::GetEventNotificationsIntegration::new(self.inner.clone())
    }

    /// Removes the Event Notifications integration of a project.
    pub fn delete_event_notifications_integration(&self) -> super::builder::project_service::DeleteEventNotificationsIntegration {
        super::builder::project_service::DeleteEventNotificationsIntegration::new(self.inner.clone())
    }

    /// Sends a test event to the Event Notifications integration of a project.
    pub fn post_test_event_notification(&self) -> super::builder::project_service::PostTestEventNotification {
        super::builder::project_service::PostTestEventNotification::new(self.inner.clone())
    }
}
