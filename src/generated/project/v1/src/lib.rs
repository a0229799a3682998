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

//! Platform Services SDK for Rust - Projects API
//!
//! This crate contains the client for the Projects API, including the service
//! broker operations offered by the same service.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use platform_services_project_v1::client::ProjectService;
//! use gax::options::RequestOptionsBuilder;
//! use std::time::Duration;
//!
//! let client = ProjectService::builder().build().await?;
//! let response = client
//!     .get_project()
//!     .set_id("my-project-id")
//!     .with_timeout(Duration::from_secs(30))
//!     .send()
//!     .await?;
//! if let Some(project) = response.body() {
//!     println!("{project:?}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(()) });
//! ```
//!
//! Every operation returns a [gax::response::Response]. The body is `None` when
//! the service responds with an empty body.

pub use gax::Result;
pub use gax::error::Error;

/// Request builders.
pub mod builder;

/// The client to interact with the Projects API.
pub mod client;

/// The messages and enums that are part of this client library.
pub mod model;

/// Iterate over the pages of results returned by "list" operations.
pub mod pager;

pub(crate) mod transport;

/// The service URL used when the configuration does not provide one.
pub const DEFAULT_SERVICE_URL: &str = "https://projects.api.test.cloud.ibm.com";

/// The prefix for the configuration properties of this service.
///
/// For example, the credentials are read from `PROJECT_AUTH_TYPE`,
/// `PROJECT_APIKEY` and related properties.
pub const DEFAULT_SERVICE_NAME: &str = "project";

pub(crate) static SDK_ANALYTICS: gaxi::sdk_header::SdkAnalytics =
    gaxi::sdk_header::SdkAnalytics {
        service_name: "project",
        service_version: "V1",
    };

/// Returns the service URL for `region`.
///
/// The service does not have regional endpoints, this always fails with a
/// [configuration][Error::is_configuration] error.
pub fn get_service_url_for_region(region: &str) -> Result<String> {
    tracing::debug!(region, "regional service URL requested");
    Err(Error::configuration("service does not support regional URLs"))
}
