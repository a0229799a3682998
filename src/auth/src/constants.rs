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

/// The default IAM token service.
pub(crate) const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";
/// The path of the token exchange operation in the IAM token service.
pub(crate) const IAM_TOKEN_PATH: &str = "/identity/token";
/// Grant type to exchange an API key for an access token.
pub(crate) const IAM_APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
/// Tokens are refreshed this long before they expire.
pub(crate) const TOKEN_EXPIRY_SLACK: std::time::Duration = std::time::Duration::from_secs(60);

pub(crate) const AUTH_TYPE_IAM: &str = "iam";
pub(crate) const AUTH_TYPE_BEARER_TOKEN: &str = "bearertoken";
pub(crate) const AUTH_TYPE_BASIC: &str = "basic";
pub(crate) const AUTH_TYPE_NO_AUTH: &str = "noauth";
