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

//! Telemetry header helpers.

use lazy_static::lazy_static;

/// The name of the analytics header.
pub const SDK_ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";

mod build_info {
    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

lazy_static! {
    /// The default `User-Agent` header value.
    pub static ref USER_AGENT: String = format!(
        "platform-services-rust-sdk/{} (lang=rust; arch={}; os={})",
        build_info::PKG_VERSION,
        std::env::consts::ARCH,
        std::env::consts::OS
    );
}

/// Generated libraries create one static instance of this struct and use it
/// to format the analytics header for each operation.
#[derive(Debug, PartialEq)]
pub struct SdkAnalytics {
    pub service_name: &'static str,
    pub service_version: &'static str,
}

impl SdkAnalytics {
    /// Format the analytics header value for `operation_id`.
    pub fn header_value(&self, operation_id: &str) -> String {
        format!(
            "service_name={};service_version={};operation_id={operation_id}",
            self.service_name, self.service_version
        )
    }
}
