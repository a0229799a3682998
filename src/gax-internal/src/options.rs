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

pub use auth::credentials::Credentials;

// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

/// The number of retries used when `enable_retries()` receives `0`.
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// The maximum retry interval used when `enable_retries()` receives a zero
/// interval.
pub const DEFAULT_MAX_RETRY_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);
