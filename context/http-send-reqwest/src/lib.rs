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

//! Reqwest-based HTTP sender for the CMQ client.
//!
//! `ReqwestHttpSend` owns one pooled [`reqwest::Client`] and implements
//! [`HttpSend`]. The pool is shared by every call; the deadline of a single
//! call is read from its [`RequestTimeout`] extension and applied to that
//! request only.
//!
//! ## Example
//!
//! ```no_run
//! use cmq_core::{ConnectionConfig, Context};
//! use cmq_http_send_reqwest::ReqwestHttpSend;
//!
//! # fn example() -> cmq_core::Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::from_config(&ConnectionConfig::default())?);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use cmq_core::{ConnectionConfig, Error, HttpSend, RequestTimeout, Result};
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};

/// Pooled http sender backed by reqwest.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build the pooled client from connection settings.
    ///
    /// The dial and TLS handshake budgets are applied together as the
    /// connect timeout, since reqwest does not split them.
    pub fn from_config(cfg: &ConnectionConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(cfg.max_idle_per_host)
            .pool_idle_timeout(cfg.idle_timeout)
            .tcp_keepalive(cfg.tcp_keepalive)
            .connect_timeout(cfg.connect_timeout + cfg.handshake_timeout)
            .build()
            .map_err(|e| Error::config_invalid("failed to build http client").with_source(e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let timeout = RequestTimeout::of(&req);

        let mut req = Request::try_from(req)
            .map_err(|e| Error::unexpected("failed to convert request").with_source(e))?;
        *req.timeout_mut() = timeout;
        debug!("sending {} {} with timeout {:?}", req.method(), req.url(), timeout);

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| {
                let msg = if e.is_timeout() {
                    "request timed out"
                } else {
                    "failed to execute request"
                };
                Error::transport(msg).with_source(e)
            })?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
