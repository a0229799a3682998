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

//! Authentication for the Platform Services client libraries.
//!
//! The client libraries attach authentication headers to every request. The
//! headers are created by a [Credentials][credentials::Credentials] object.
//! This crate provides credentials for the common authentication schemes:
//!
//! * [anonymous][credentials::anonymous]: no authentication headers.
//! * [bearer_token][credentials::bearer_token]: a static access token.
//! * [basic][credentials::basic]: a username and password.
//! * [iam][credentials::iam]: an API key exchanged for short-lived access
//!   tokens with the IAM token service.
//!
//! Most applications use [config::from_source] to select the credentials
//! based on the process environment, or on some other source of configuration
//! properties.

pub mod build_errors;
pub mod config;
pub mod credentials;
pub mod errors;

pub(crate) mod constants;
pub(crate) mod token;
pub(crate) mod token_cache;

/// A `Result` alias where the `Err` case is
/// [CredentialsError][errors::CredentialsError].
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;
