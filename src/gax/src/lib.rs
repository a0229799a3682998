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

//! Platform Services SDK runtime helpers.
//!
//! This crate contains the types and functions shared by all the service
//! crates in the Platform Services SDK for Rust: the error type, the response
//! wrapper, per-request options, retry and backoff policies, the retry loop,
//! client builders, and the paginator used by list operations.
//!
//! Applications rarely depend on this crate directly. The service crates
//! re-export the types an application needs.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping API operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Responses returned by the service operations.
pub mod response;

/// Per-request options and the traits to set them from request builders.
pub mod options;

/// Generic builder for clients.
pub mod client_builder;
pub mod config_source;

/// Adapts the "list" operations into pagers and streams.
pub mod paginator;

pub mod backoff_policy;
pub mod exponential_backoff;
pub mod retry_policy;
pub mod retry_result;

/// The retry loop used by the transport implementation.
///
/// Not part of the public API, subject to change without notice.
#[doc(hidden)]
pub mod retry_loop_internal;
