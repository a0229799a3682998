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

pub mod project_service {
    use crate::Result;

    /// A builder for [ProjectService][crate::client::ProjectService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use platform_services_project_v1::*;
    /// # use builder::project_service::ClientBuilder;
    /// # use client::ProjectService;
    /// let builder : ClientBuilder = ProjectService::builder();
    /// let client = builder
    ///     .with_endpoint("https://projects.api.cloud.ibm.com")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::ProjectService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ProjectService;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::ProjectService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<crate::transport::ProjectService>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [ProjectService::create_project][crate::client::ProjectService::create_project] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::CreateProject;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateProject {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateProject(RequestBuilder<crate::model::CreateProjectRequest>);

    impl CreateProject {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateProjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::GetProjectResponse>> {
            self.0.stub.create_project(self.0.request, self.0.options).await
        }

        /// Sets the value of [name][crate::model::CreateProjectRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [description][crate::model::CreateProjectRequest::description].
        pub fn set_description<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::CreateProjectRequest::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [configs][crate::model::CreateProjectRequest::configs].
        pub fn set_configs<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::ProjectConfigInput>,
        {
            use std::iter::Iterator;
            self.0.request.configs = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [resource_group][crate::model::CreateProjectRequest::resource_group].
        pub fn set_resource_group<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_group = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_group][crate::model::CreateProjectRequest::resource_group].
        pub fn set_or_clear_resource_group<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_group = v.map(|x| x.into());
            self
        }

        /// Sets the value of [location][crate::model::CreateProjectRequest::location].
        pub fn set_location<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.location = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [location][crate::model::CreateProjectRequest::location].
        pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.location = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for CreateProject {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::list_projects][crate::client::ProjectService::list_projects] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::ListProjects;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListProjects {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListProjects(RequestBuilder<crate::model::ListProjectsRequest>);

    impl ListProjects {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListProjectsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ProjectListResponseSchema>> {
            self.0.stub.list_projects(self.0.request, self.0.options).await
        }

        /// Returns a pager over the pages of projects.
        ///
        /// Fails if the `start` cursor is already set, the pager manages the
        /// cursor.
        pub fn by_page(self) -> Result<crate::pager::ProjectsPager> {
            crate::pager::ProjectsPager::new(self)
        }

        pub(crate) fn with_cursor(mut self, v: std::option::Option<std::string::String>) -> Self {
            self.0.request.start = v;
            self
        }

        pub(crate) fn cursor(&self) -> std::option::Option<&str> {
            self.0.request.start.as_deref()
        }

        /// Sets the value of [start][crate::model::ListProjectsRequest::start].
        pub fn set_start<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.start = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListProjectsRequest::start].
        pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.start = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListProjectsRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListProjectsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [complete][crate::model::ListProjectsRequest::complete].
        pub fn set_complete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [complete][crate::model::ListProjectsRequest::complete].
        pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for ListProjects {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_project][crate::client::ProjectService::get_project] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetProject;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetProject {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetProject(RequestBuilder<crate::model::GetProjectRequest>);

    impl GetProject {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetProjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::GetProjectResponse>> {
            self.0.stub.get_project(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::GetProjectRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [exclude_configs][crate::model::GetProjectRequest::exclude_configs].
        pub fn set_exclude_configs<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.exclude_configs = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [exclude_configs][crate::model::GetProjectRequest::exclude_configs].
        pub fn set_or_clear_exclude_configs<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.exclude_configs = v.map(|x| x.into());
            self
        }

        /// Sets the value of [complete][crate::model::GetProjectRequest::complete].
        pub fn set_complete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [complete][crate::model::GetProjectRequest::complete].
        pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetProject {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::update_project][crate::client::ProjectService::update_project] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::UpdateProject;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateProject {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateProject(RequestBuilder<crate::model::UpdateProjectRequest>);

    impl UpdateProject {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateProjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProjectUpdate>> {
            self.0.stub.update_project(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::UpdateProjectRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [json_patch_operation][crate::model::UpdateProjectRequest::json_patch_operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_json_patch_operation<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::JsonPatchOperation>,
        {
            use std::iter::Iterator;
            self.0.request.json_patch_operation = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for UpdateProject {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::delete_project][crate::client::ProjectService::delete_project] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::DeleteProject;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteProject {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteProject(RequestBuilder<crate::model::DeleteProjectRequest>);

    impl DeleteProject {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteProjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            self.0.stub.delete_project(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::DeleteProjectRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [destroy][crate::model::DeleteProjectRequest::destroy].
        pub fn set_destroy<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.destroy = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [destroy][crate::model::DeleteProjectRequest::destroy].
        pub fn set_or_clear_destroy<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.destroy = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for DeleteProject {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::create_config][crate::client::ProjectService::create_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::CreateConfig;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateConfig(RequestBuilder<crate::model::CreateConfigRequest>);

    impl CreateConfig {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProjectConfig>> {
            self.0.stub.create_config(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::CreateConfigRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [new_name][crate::model::CreateConfigRequest::new_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_new_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.new_name = v.into();
            self
        }

        /// Sets the value of [new_locator_id][crate::model::CreateConfigRequest::new_locator_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_new_locator_id<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.new_locator_id = v.into();
            self
        }

        /// Sets the value of [new_id][crate::model::CreateConfigRequest::new_id].
        pub fn set_new_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.new_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [new_id][crate::model::CreateConfigRequest::new_id].
        pub fn set_or_clear_new_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.new_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [new_labels][crate::model::CreateConfigRequest::new_labels].
        pub fn set_new_labels<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.new_labels = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [new_description][crate::model::CreateConfigRequest::new_description].
        pub fn set_new_description<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.new_description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [new_description][crate::model::CreateConfigRequest::new_description].
        pub fn set_or_clear_new_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.new_description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [new_input][crate::model::CreateConfigRequest::new_input].
        pub fn set_new_input<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::InputVariableInput>,
        {
            use std::iter::Iterator;
            self.0.request.new_input = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [new_setting][crate::model::CreateConfigRequest::new_setting].
        pub fn set_new_setting<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::ConfigSettingItems>,
        {
            use std::iter::Iterator;
            self.0.request.new_setting = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for CreateConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::list_configs][crate::client::ProjectService::list_configs] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::ListConfigs;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListConfigs {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListConfigs(RequestBuilder<crate::model::ListConfigsRequest>);

    impl ListConfigs {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListConfigsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ProjectConfigList>> {
            self.0.stub.list_configs(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::ListConfigsRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [version][crate::model::ListConfigsRequest::version].
        pub fn set_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [version][crate::model::ListConfigsRequest::version].
        pub fn set_or_clear_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.version = v.map(|x| x.into());
            self
        }

        /// Sets the value of [complete][crate::model::ListConfigsRequest::complete].
        pub fn set_complete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [complete][crate::model::ListConfigsRequest::complete].
        pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for ListConfigs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_config][crate::client::ProjectService::get_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetConfig;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetConfig(RequestBuilder<crate::model::GetConfigRequest>);

    impl GetConfig {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProjectConfig>> {
            self.0.stub.get_config(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::GetConfigRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::GetConfigRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }

        /// Sets the value of [version][crate::model::GetConfigRequest::version].
        pub fn set_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [version][crate::model::GetConfigRequest::version].
        pub fn set_or_clear_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.version = v.map(|x| x.into());
            self
        }

        /// Sets the value of [complete][crate::model::GetConfigRequest::complete].
        pub fn set_complete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [complete][crate::model::GetConfigRequest::complete].
        pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::update_config][crate::client::ProjectService::update_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::UpdateConfig;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateConfig(RequestBuilder<crate::model::UpdateConfigRequest>);

    impl UpdateConfig {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProjectConfig>> {
            self.0.stub.update_config(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::UpdateConfigRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::UpdateConfigRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }

        /// Sets the value of [project_config][crate::model::UpdateConfigRequest::project_config].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_config<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::JsonPatchOperation>,
        {
            use std::iter::Iterator;
            self.0.request.project_config = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [complete][crate::model::UpdateConfigRequest::complete].
        pub fn set_complete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [complete][crate::model::UpdateConfigRequest::complete].
        pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for UpdateConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::delete_config][crate::client::ProjectService::delete_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::DeleteConfig;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteConfig(RequestBuilder<crate::model::DeleteConfigRequest>);

    impl DeleteConfig {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::DeleteProjectConfigResponse>> {
            self.0.stub.delete_config(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::DeleteConfigRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::DeleteConfigRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }

        /// Sets the value of [draft_only][crate::model::DeleteConfigRequest::draft_only].
        pub fn set_draft_only<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.draft_only = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [draft_only][crate::model::DeleteConfigRequest::draft_only].
        pub fn set_or_clear_draft_only<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.draft_only = v.map(|x| x.into());
            self
        }

        /// Sets the value of [destroy][crate::model::DeleteConfigRequest::destroy].
        pub fn set_destroy<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.destroy = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [destroy][crate::model::DeleteConfigRequest::destroy].
        pub fn set_or_clear_destroy<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.destroy = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for DeleteConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_config_diff][crate::client::ProjectService::get_config_diff] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetConfigDiff;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetConfigDiff {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetConfigDiff(RequestBuilder<crate::model::GetConfigDiffRequest>);

    impl GetConfigDiff {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetConfigDiffRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ProjectConfigDiff>> {
            self.0.stub.get_config_diff(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::GetConfigDiffRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::GetConfigDiffRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetConfigDiff {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::force_merge][crate::client::ProjectService::force_merge] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::ForceMerge;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ForceMerge {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ForceMerge(RequestBuilder<crate::model::ForceMergeRequest>);

    impl ForceMerge {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ForceMergeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProjectConfig>> {
            self.0.stub.force_merge(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::ForceMergeRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::ForceMergeRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }

        /// Sets the value of [comment][crate::model::ForceMergeRequest::comment].
        pub fn set_comment<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.comment = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [comment][crate::model::ForceMergeRequest::comment].
        pub fn set_or_clear_comment<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.comment = v.map(|x| x.into());
            self
        }

        /// Sets the value of [complete][crate::model::ForceMergeRequest::complete].
        pub fn set_complete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [complete][crate::model::ForceMergeRequest::complete].
        pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for ForceMerge {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::create_draft_action][crate::client::ProjectService::create_draft_action] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::CreateDraftAction;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateDraftAction {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateDraftAction(RequestBuilder<crate::model::CreateDraftActionRequest>);

    impl CreateDraftAction {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDraftActionRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProjectConfig>> {
            self.0.stub.create_draft_action(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::CreateDraftActionRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::CreateDraftActionRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }

        /// Sets the value of [action][crate::model::CreateDraftActionRequest::action].
        ///
        /// This is a **required** field for requests.
        pub fn set_action<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.action = v.into();
            self
        }

        /// Sets the value of [comment][crate::model::CreateDraftActionRequest::comment].
        pub fn set_comment<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.comment = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [comment][crate::model::CreateDraftActionRequest::comment].
        pub fn set_or_clear_comment<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.comment = v.map(|x| x.into());
            self
        }

        /// Sets the value of [complete][crate::model::CreateDraftActionRequest::complete].
        pub fn set_complete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [complete][crate::model::CreateDraftActionRequest::complete].
        pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for CreateDraftAction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::check_config][crate::client::ProjectService::check_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::CheckConfig;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CheckConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CheckConfig(RequestBuilder<crate::model::CheckConfigRequest>);

    impl CheckConfig {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CheckConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProjectConfig>> {
            self.0.stub.check_config(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::CheckConfigRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::CheckConfigRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }

        /// Sets the value of [x_auth_refresh_token][crate::model::CheckConfigRequest::x_auth_refresh_token].
        pub fn set_x_auth_refresh_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_auth_refresh_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_auth_refresh_token][crate::model::CheckConfigRequest::x_auth_refresh_token].
        pub fn set_or_clear_x_auth_refresh_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_auth_refresh_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [version][crate::model::CheckConfigRequest::version].
        pub fn set_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [version][crate::model::CheckConfigRequest::version].
        pub fn set_or_clear_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.version = v.map(|x| x.into());
            self
        }

        /// Sets the value of [complete][crate::model::CheckConfigRequest::complete].
        pub fn set_complete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [complete][crate::model::CheckConfigRequest::complete].
        pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for CheckConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::install_config][crate::client::ProjectService::install_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::InstallConfig;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> InstallConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct InstallConfig(RequestBuilder<crate::model::InstallConfigRequest>);

    impl InstallConfig {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::InstallConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProjectConfig>> {
            self.0.stub.install_config(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::InstallConfigRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::InstallConfigRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }

        /// Sets the value of [complete][crate::model::InstallConfigRequest::complete].
        pub fn set_complete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [complete][crate::model::InstallConfigRequest::complete].
        pub fn set_or_clear_complete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.complete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for InstallConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::uninstall_config][crate::client::ProjectService::uninstall_config] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::UninstallConfig;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UninstallConfig {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UninstallConfig(RequestBuilder<crate::model::UninstallConfigRequest>);

    impl UninstallConfig {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UninstallConfigRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            self.0.stub.uninstall_config(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::UninstallConfigRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::UninstallConfigRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for UninstallConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_schematics_job][crate::client::ProjectService::get_schematics_job] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetSchematicsJob;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetSchematicsJob {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetSchematicsJob(RequestBuilder<crate::model::GetSchematicsJobRequest>);

    impl GetSchematicsJob {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSchematicsJobRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::GetActionJobResponse>> {
            self.0.stub.get_schematics_job(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::GetSchematicsJobRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::GetSchematicsJobRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }

        /// Sets the value of [action][crate::model::GetSchematicsJobRequest::action].
        ///
        /// This is a **required** field for requests.
        pub fn set_action<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.action = v.into();
            self
        }

        /// Sets the value of [since][crate::model::GetSchematicsJobRequest::since].
        pub fn set_since<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.since = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [since][crate::model::GetSchematicsJobRequest::since].
        pub fn set_or_clear_since<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.since = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetSchematicsJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_cost_estimate][crate::client::ProjectService::get_cost_estimate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetCostEstimate;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetCostEstimate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetCostEstimate(RequestBuilder<crate::model::GetCostEstimateRequest>);

    impl GetCostEstimate {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetCostEstimateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::GetCostEstimateResponse>> {
            self.0.stub.get_cost_estimate(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::GetCostEstimateRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::GetCostEstimateRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }

        /// Sets the value of [version][crate::model::GetCostEstimateRequest::version].
        pub fn set_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [version][crate::model::GetCostEstimateRequest::version].
        pub fn set_or_clear_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.version = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetCostEstimate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::post_notification][crate::client::ProjectService::post_notification] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::PostNotification;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> PostNotification {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct PostNotification(RequestBuilder<crate::model::PostNotificationRequest>);

    impl PostNotification {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PostNotificationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::PostNotificationsResponse>> {
            self.0.stub.post_notification(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::PostNotificationRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [notifications][crate::model::PostNotificationRequest::notifications].
        pub fn set_notifications<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::NotificationEvent>,
        {
            use std::iter::Iterator;
            self.0.request.notifications = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for PostNotification {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_notifications][crate::client::ProjectService::get_notifications] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetNotifications;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetNotifications {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetNotifications(RequestBuilder<crate::model::GetNotificationsRequest>);

    impl GetNotifications {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetNotificationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::GetNotificationsResponse>> {
            self.0.stub.get_notifications(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::GetNotificationsRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetNotifications {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::delete_notification][crate::client::ProjectService::delete_notification] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::DeleteNotification;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteNotification {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteNotification(RequestBuilder<crate::model::DeleteNotificationRequest>);

    impl DeleteNotification {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteNotificationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            self.0.stub.delete_notification(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::DeleteNotificationRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for DeleteNotification {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::receive_pulsar_catalog_events][crate::client::ProjectService::receive_pulsar_catalog_events] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::ReceivePulsarCatalogEvents;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ReceivePulsarCatalogEvents {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ReceivePulsarCatalogEvents(
        RequestBuilder<crate::model::ReceivePulsarCatalogEventsRequest>,
    );

    impl ReceivePulsarCatalogEvents {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReceivePulsarCatalogEventsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            self.0.stub.receive_pulsar_catalog_events(self.0.request, self.0.options).await
        }

        /// Sets the value of [pulsar_catalog_events][crate::model::ReceivePulsarCatalogEventsRequest::pulsar_catalog_events].
        ///
        /// This is a **required** field for requests.
        pub fn set_pulsar_catalog_events<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::PulsarEventItems>,
        {
            use std::iter::Iterator;
            self.0.request.pulsar_catalog_events = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for ReceivePulsarCatalogEvents {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_health][crate::client::ProjectService::get_health] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetHealth;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetHealth {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetHealth(RequestBuilder<crate::model::GetHealthRequest>);

    impl GetHealth {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetHealthRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Health>> {
            self.0.stub.get_health(self.0.request, self.0.options).await
        }

        /// Sets the value of [info][crate::model::GetHealthRequest::info].
        pub fn set_info<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.info = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [info][crate::model::GetHealthRequest::info].
        pub fn set_or_clear_info<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.info = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetHealth {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::replace_service_instance][crate::client::ProjectService::replace_service_instance] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::ReplaceServiceInstance;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ReplaceServiceInstance {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ReplaceServiceInstance(RequestBuilder<crate::model::ReplaceServiceInstanceRequest>);

    impl ReplaceServiceInstance {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReplaceServiceInstanceRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::CreateResult>> {
            self.0.stub.replace_service_instance(self.0.request, self.0.options).await
        }

        /// Sets the value of [instance_id][crate::model::ReplaceServiceInstanceRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [service_id][crate::model::ReplaceServiceInstanceRequest::service_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.service_id = v.into();
            self
        }

        /// Sets the value of [plan_id][crate::model::ReplaceServiceInstanceRequest::plan_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_plan_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.plan_id = v.into();
            self
        }

        /// Sets the value of [context][crate::model::ReplaceServiceInstanceRequest::context].
        pub fn set_context<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.context = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [parameters][crate::model::ReplaceServiceInstanceRequest::parameters].
        pub fn set_parameters<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::JsonObject>,
        {
            self.0.request.parameters = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parameters][crate::model::ReplaceServiceInstanceRequest::parameters].
        pub fn set_or_clear_parameters<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::JsonObject>,
        {
            self.0.request.parameters = v.map(|x| x.into());
            self
        }

        /// Sets the value of [previous_values][crate::model::ReplaceServiceInstanceRequest::previous_values].
        pub fn set_previous_values<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.previous_values = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [x_broker_api_version][crate::model::ReplaceServiceInstanceRequest::x_broker_api_version].
        pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_broker_api_version][crate::model::ReplaceServiceInstanceRequest::x_broker_api_version].
        pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = v.map(|x| x.into());
            self
        }

        /// Sets the value of [x_broker_api_originating_identity][crate::model::ReplaceServiceInstanceRequest::x_broker_api_originating_identity].
        pub fn set_x_broker_api_originating_identity<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_originating_identity = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_broker_api_originating_identity][crate::model::ReplaceServiceInstanceRequest::x_broker_api_originating_identity].
        pub fn set_or_clear_x_broker_api_originating_identity<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_originating_identity = v.map(|x| x.into());
            self
        }

        /// Sets the value of [accepts_incomplete][crate::model::ReplaceServiceInstanceRequest::accepts_incomplete].
        pub fn set_accepts_incomplete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.accepts_incomplete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [accepts_incomplete][crate::model::ReplaceServiceInstanceRequest::accepts_incomplete].
        pub fn set_or_clear_accepts_incomplete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.accepts_incomplete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for ReplaceServiceInstance {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::delete_service_instance][crate::client::ProjectService::delete_service_instance] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::DeleteServiceInstance;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteServiceInstance {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteServiceInstance(RequestBuilder<crate::model::DeleteServiceInstanceRequest>);

    impl DeleteServiceInstance {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteServiceInstanceRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::DeleteResult>> {
            self.0.stub.delete_service_instance(self.0.request, self.0.options).await
        }

        /// Sets the value of [instance_id][crate::model::DeleteServiceInstanceRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [plan_id][crate::model::DeleteServiceInstanceRequest::plan_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_plan_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.plan_id = v.into();
            self
        }

        /// Sets the value of [service_id][crate::model::DeleteServiceInstanceRequest::service_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.service_id = v.into();
            self
        }

        /// Sets the value of [x_broker_api_version][crate::model::DeleteServiceInstanceRequest::x_broker_api_version].
        pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_broker_api_version][crate::model::DeleteServiceInstanceRequest::x_broker_api_version].
        pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = v.map(|x| x.into());
            self
        }

        /// Sets the value of [x_broker_api_originating_identity][crate::model::DeleteServiceInstanceRequest::x_broker_api_originating_identity].
        pub fn set_x_broker_api_originating_identity<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_originating_identity = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_broker_api_originating_identity][crate::model::DeleteServiceInstanceRequest::x_broker_api_originating_identity].
        pub fn set_or_clear_x_broker_api_originating_identity<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_originating_identity = v.map(|x| x.into());
            self
        }

        /// Sets the value of [accepts_incomplete][crate::model::DeleteServiceInstanceRequest::accepts_incomplete].
        pub fn set_accepts_incomplete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.accepts_incomplete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [accepts_incomplete][crate::model::DeleteServiceInstanceRequest::accepts_incomplete].
        pub fn set_or_clear_accepts_incomplete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.accepts_incomplete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for DeleteServiceInstance {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::update_service_instance][crate::client::ProjectService::update_service_instance] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::UpdateServiceInstance;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateServiceInstance {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateServiceInstance(RequestBuilder<crate::model::UpdateServiceInstanceRequest>);

    impl UpdateServiceInstance {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateServiceInstanceRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::UpdateResult>> {
            self.0.stub.update_service_instance(self.0.request, self.0.options).await
        }

        /// Sets the value of [instance_id][crate::model::UpdateServiceInstanceRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [json_patch_operation][crate::model::UpdateServiceInstanceRequest::json_patch_operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_json_patch_operation<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::JsonPatchOperation>,
        {
            use std::iter::Iterator;
            self.0.request.json_patch_operation = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [x_broker_api_version][crate::model::UpdateServiceInstanceRequest::x_broker_api_version].
        pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_broker_api_version][crate::model::UpdateServiceInstanceRequest::x_broker_api_version].
        pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = v.map(|x| x.into());
            self
        }

        /// Sets the value of [x_broker_api_originating_identity][crate::model::UpdateServiceInstanceRequest::x_broker_api_originating_identity].
        pub fn set_x_broker_api_originating_identity<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_originating_identity = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_broker_api_originating_identity][crate::model::UpdateServiceInstanceRequest::x_broker_api_originating_identity].
        pub fn set_or_clear_x_broker_api_originating_identity<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_originating_identity = v.map(|x| x.into());
            self
        }

        /// Sets the value of [accepts_incomplete][crate::model::UpdateServiceInstanceRequest::accepts_incomplete].
        pub fn set_accepts_incomplete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.accepts_incomplete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [accepts_incomplete][crate::model::UpdateServiceInstanceRequest::accepts_incomplete].
        pub fn set_or_clear_accepts_incomplete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.accepts_incomplete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for UpdateServiceInstance {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_last_operation][crate::client::ProjectService::get_last_operation] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetLastOperation;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLastOperation {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLastOperation(RequestBuilder<crate::model::GetLastOperationRequest>);

    impl GetLastOperation {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLastOperationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::GetLastOperationResult>> {
            self.0.stub.get_last_operation(self.0.request, self.0.options).await
        }

        /// Sets the value of [instance_id][crate::model::GetLastOperationRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [x_broker_api_version][crate::model::GetLastOperationRequest::x_broker_api_version].
        pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_broker_api_version][crate::model::GetLastOperationRequest::x_broker_api_version].
        pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = v.map(|x| x.into());
            self
        }

        /// Sets the value of [operation][crate::model::GetLastOperationRequest::operation].
        pub fn set_operation<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.operation = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [operation][crate::model::GetLastOperationRequest::operation].
        pub fn set_or_clear_operation<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.operation = v.map(|x| x.into());
            self
        }

        /// Sets the value of [plan_id][crate::model::GetLastOperationRequest::plan_id].
        pub fn set_plan_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.plan_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [plan_id][crate::model::GetLastOperationRequest::plan_id].
        pub fn set_or_clear_plan_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.plan_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [service_id][crate::model::GetLastOperationRequest::service_id].
        pub fn set_service_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.service_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_id][crate::model::GetLastOperationRequest::service_id].
        pub fn set_or_clear_service_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.service_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetLastOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::replace_service_instance_state][crate::client::ProjectService::replace_service_instance_state] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::ReplaceServiceInstanceState;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ReplaceServiceInstanceState {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ReplaceServiceInstanceState(
        RequestBuilder<crate::model::ReplaceServiceInstanceStateRequest>,
    );

    impl ReplaceServiceInstanceState {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReplaceServiceInstanceStateRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::BrokerResult>> {
            self.0.stub.replace_service_instance_state(self.0.request, self.0.options).await
        }

        /// Sets the value of [instance_id][crate::model::ReplaceServiceInstanceStateRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [enabled][crate::model::ReplaceServiceInstanceStateRequest::enabled].
        ///
        /// This is a **required** field for requests.
        pub fn set_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [enabled][crate::model::ReplaceServiceInstanceStateRequest::enabled].
        pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [initiator_id][crate::model::ReplaceServiceInstanceStateRequest::initiator_id].
        pub fn set_initiator_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.initiator_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [initiator_id][crate::model::ReplaceServiceInstanceStateRequest::initiator_id].
        pub fn set_or_clear_initiator_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.initiator_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [reason_code][crate::model::ReplaceServiceInstanceStateRequest::reason_code].
        pub fn set_reason_code<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::JsonObject>,
        {
            self.0.request.reason_code = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [reason_code][crate::model::ReplaceServiceInstanceStateRequest::reason_code].
        pub fn set_or_clear_reason_code<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::JsonObject>,
        {
            self.0.request.reason_code = v.map(|x| x.into());
            self
        }

        /// Sets the value of [plan_id][crate::model::ReplaceServiceInstanceStateRequest::plan_id].
        pub fn set_plan_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.plan_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [plan_id][crate::model::ReplaceServiceInstanceStateRequest::plan_id].
        pub fn set_or_clear_plan_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.plan_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [previous_values][crate::model::ReplaceServiceInstanceStateRequest::previous_values].
        pub fn set_previous_values<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.previous_values = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [x_broker_api_version][crate::model::ReplaceServiceInstanceStateRequest::x_broker_api_version].
        pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_broker_api_version][crate::model::ReplaceServiceInstanceStateRequest::x_broker_api_version].
        pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for ReplaceServiceInstanceState {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_service_instance][crate::client::ProjectService::get_service_instance] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetServiceInstance;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetServiceInstance {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetServiceInstance(RequestBuilder<crate::model::GetServiceInstanceRequest>);

    impl GetServiceInstance {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetServiceInstanceRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::BrokerResult>> {
            self.0.stub.get_service_instance(self.0.request, self.0.options).await
        }

        /// Sets the value of [instance_id][crate::model::GetServiceInstanceRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [x_broker_api_version][crate::model::GetServiceInstanceRequest::x_broker_api_version].
        pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_broker_api_version][crate::model::GetServiceInstanceRequest::x_broker_api_version].
        pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetServiceInstance {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_catalog][crate::client::ProjectService::get_catalog] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetCatalog;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetCatalog {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetCatalog(RequestBuilder<crate::model::GetCatalogRequest>);

    impl GetCatalog {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetCatalogRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::CatalogResponse>> {
            self.0.stub.get_catalog(self.0.request, self.0.options).await
        }

        /// Sets the value of [x_broker_api_version][crate::model::GetCatalogRequest::x_broker_api_version].
        pub fn set_x_broker_api_version<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_broker_api_version][crate::model::GetCatalogRequest::x_broker_api_version].
        pub fn set_or_clear_x_broker_api_version<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_broker_api_version = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetCatalog {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::post_event_notifications_integration][crate::client::ProjectService::post_event_notifications_integration] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::PostEventNotificationsIntegration;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> PostEventNotificationsIntegration {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct PostEventNotificationsIntegration(
        RequestBuilder<crate::model::PostEventNotificationsIntegrationRequest>,
    );

    impl PostEventNotificationsIntegration {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PostEventNotificationsIntegrationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::PostEventNotificationsIntegrationResponse>> {
            self.0.stub.post_event_notifications_integration(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::PostEventNotificationsIntegrationRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [instance_crn][crate::model::PostEventNotificationsIntegrationRequest::instance_crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_crn<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.instance_crn = v.into();
            self
        }

        /// Sets the value of [description][crate::model::PostEventNotificationsIntegrationRequest::description].
        pub fn set_description<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::PostEventNotificationsIntegrationRequest::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [event_notifications_source_name][crate::model::PostEventNotificationsIntegrationRequest::event_notifications_source_name].
        pub fn set_event_notifications_source_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.event_notifications_source_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [event_notifications_source_name][crate::model::PostEventNotificationsIntegrationRequest::event_notifications_source_name].
        pub fn set_or_clear_event_notifications_source_name<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.event_notifications_source_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [enabled][crate::model::PostEventNotificationsIntegrationRequest::enabled].
        pub fn set_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [enabled][crate::model::PostEventNotificationsIntegrationRequest::enabled].
        pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.enabled = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for PostEventNotificationsIntegration {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::get_event_notifications_integration][crate::client::ProjectService::get_event_notifications_integration] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::GetEventNotificationsIntegration;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetEventNotificationsIntegration {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetEventNotificationsIntegration(
        RequestBuilder<crate::model::GetEventNotificationsIntegrationRequest>,
    );

    impl GetEventNotificationsIntegration {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetEventNotificationsIntegrationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::GetEventNotificationsIntegrationResponse>> {
            self.0.stub.get_event_notifications_integration(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::GetEventNotificationsIntegrationRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for GetEventNotificationsIntegration {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::delete_event_notifications_integration][crate::client::ProjectService::delete_event_notifications_integration] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::DeleteEventNotificationsIntegration;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteEventNotificationsIntegration {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteEventNotificationsIntegration(
        RequestBuilder<crate::model::DeleteEventNotificationsIntegrationRequest>,
    );

    impl DeleteEventNotificationsIntegration {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteEventNotificationsIntegrationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            self.0.stub.delete_event_notifications_integration(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::DeleteEventNotificationsIntegrationRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for DeleteEventNotificationsIntegration {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProjectService::post_test_event_notification][crate::client::ProjectService::post_test_event_notification] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_project_v1::builder;
    /// use builder::project_service::PostTestEventNotification;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # platform_services_project_v1::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> PostTestEventNotification {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct PostTestEventNotification(
        RequestBuilder<crate::model::PostTestEventNotificationRequest>,
    );

    impl PostTestEventNotification {
        pub(crate) fn new(stub: std::sync::Arc<crate::transport::ProjectService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PostTestEventNotificationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::PostTestEventNotificationResponse>> {
            self.0.stub.post_test_event_notification(self.0.request, self.0.options).await
        }

        /// Sets the value of [id][crate::model::PostTestEventNotificationRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [ibmendefaultlong][crate::model::PostTestEventNotificationRequest::ibmendefaultlong].
        pub fn set_ibmendefaultlong<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ibmendefaultlong = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ibmendefaultlong][crate::model::PostTestEventNotificationRequest::ibmendefaultlong].
        pub fn set_or_clear_ibmendefaultlong<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ibmendefaultlong = v.map(|x| x.into());
            self
        }

        /// Sets the value of [ibmendefaultshort][crate::model::PostTestEventNotificationRequest::ibmendefaultshort].
        pub fn set_ibmendefaultshort<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ibmendefaultshort = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ibmendefaultshort][crate::model::PostTestEventNotificationRequest::ibmendefaultshort].
        pub fn set_or_clear_ibmendefaultshort<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ibmendefaultshort = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::RequestBuilder for PostTestEventNotification {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
