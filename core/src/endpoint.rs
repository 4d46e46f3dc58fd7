// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{Error, Result};
use http::Uri;

/// Endpoint describes where api requests are posted to.
///
/// It combines the base uri (`https://cmq-queue-gz.api.qcloud.com`) with the
/// fixed api path (`/v2/index.php`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    host: String,
    path: String,
}

impl Endpoint {
    /// Build an endpoint from a base uri and an api path.
    pub fn new(endpoint: &str, path: &str) -> Result<Self> {
        let endpoint = endpoint.trim().trim_end_matches('/');
        let host = strip_scheme(endpoint);
        if host.is_empty() || host.contains('/') {
            return Err(Error::config_invalid(format!(
                "endpoint must be scheme and host only, got: {endpoint}"
            )));
        }

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let url = format!("{endpoint}{path}");
        // Reject anything http can't send before the first call.
        let uri: Uri = url.parse()?;
        if uri.scheme().is_none() {
            return Err(Error::config_invalid(format!(
                "endpoint must start with http:// or https://, got: {endpoint}"
            )));
        }

        Ok(Self {
            url,
            host: host.to_string(),
            path,
        })
    }

    /// Full request url: `endpoint + path`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host (with port if present) used in the canonical string.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Api path used in the canonical string.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Strip a leading `http://` or `https://` by prefix match.
///
/// Input without a known scheme is returned unchanged.
pub fn strip_scheme(endpoint: &str) -> &str {
    endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .unwrap_or(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("http://cmq-queue-gz.api.qcloud.com"; "http")]
    #[test_case("https://cmq-queue-gz.api.qcloud.com"; "https")]
    #[test_case("https://cmq-queue-gz.api.qcloud.com/"; "trailing slash")]
    fn test_host_is_scheme_independent(input: &str) {
        let ep = Endpoint::new(input, "/v2/index.php").expect("must be valid");
        assert_eq!(ep.host(), "cmq-queue-gz.api.qcloud.com");
        assert_eq!(ep.path(), "/v2/index.php");
    }

    #[test]
    fn test_url() {
        let ep = Endpoint::new("https://cmq-queue-gz.api.qcloud.com", "v2/index.php").unwrap();
        assert_eq!(ep.url(), "https://cmq-queue-gz.api.qcloud.com/v2/index.php");
        assert_eq!(ep.path(), "/v2/index.php");
    }

    #[test]
    fn test_port_is_kept() {
        let ep = Endpoint::new("http://127.0.0.1:8080", "/v2/index.php").unwrap();
        assert_eq!(ep.host(), "127.0.0.1:8080");
    }

    #[test_case(""; "empty")]
    #[test_case("cmq-queue-gz.api.qcloud.com"; "no scheme")]
    #[test_case("https://host/with/path"; "path in endpoint")]
    fn test_invalid_endpoint(input: &str) {
        let err = Endpoint::new(input, "/v2/index.php").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("http://a.b"), "a.b");
        assert_eq!(strip_scheme("https://a.b"), "a.b");
        assert_eq!(strip_scheme("a.b"), "a.b");
    }
}
