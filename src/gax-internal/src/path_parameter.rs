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

//! Handling of path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required and cannot be empty. A small helper function validates and encodes
//! them, this makes the generated code easier to read.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Characters that are safe in a single path segment. Anything else, including
// `/`, is escaped.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::validation(Error::MissingRequiredParameter(name.to_string()))
}

/// Validates a required path parameter and encodes it as a single segment.
///
/// # Example
/// ```
/// # use platform_services_gax_internal::path_parameter::required;
/// let p = required("id", Some("my project/1"));
/// assert_eq!(p.unwrap(), "my%20project%2F1");
/// ```
pub fn required(name: &str, value: Option<&str>) -> gax::Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(utf8_percent_encode(v, SEGMENT).to_string()),
        _ => Err(missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("abc-123", "abc-123")]
    #[test_case("a.b_c~d", "a.b_c~d")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a b", "a%20b")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    #[test_case("crn:v1:bluemix", "crn%3Av1%3Abluemix")]
    fn required(input: &str, want: &str) {
        let got = super::required("id", Some(input));
        assert_eq!(got.ok().as_deref(), Some(want));
    }

    #[test_case(None)]
    #[test_case(Some(""))]
    fn required_missing(input: Option<&str>) {
        let e = super::required("config_id", input).unwrap_err();
        assert!(e.is_validation(), "{e:?}");
        assert!(format!("{e}").contains("config_id"), "{e}");
    }

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }
}
