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

use crate::constants::*;
use crate::{Config, Credential};
use bytes::Bytes;
use cmq_core::envelope::decode_response;
use cmq_core::time::now;
use cmq_core::{
    ConnectionConfig, Context, Endpoint, Params, RequestSigner, RequestTimeout, Result,
    SIGNATURE_METHOD_HMAC_SHA1,
};
use http::header::CONTENT_TYPE;
use http::Method;
use log::debug;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::sync::Arc;
use std::time::Duration;

/// Client is the transport shared by every CMQ handle.
///
/// It signs each call, posts it as a form body and decodes the response
/// envelope. Cloning is cheap and all clones share one connection pool, so
/// a single client can serve many concurrent producers and consumers.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    ctx: Context,
    endpoint: Endpoint,
    credential: Credential,
    connection: ConnectionConfig,
    signer: RequestSigner,
}

impl Client {
    /// Create a client that sends through `ctx`.
    pub fn new(ctx: Context, config: &Config) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ClientInner {
                endpoint: config.endpoint()?,
                credential: config.credential()?,
                connection: config.connection.clone(),
                signer: RequestSigner::new(),
                ctx,
            }),
        })
    }

    /// Create a client with a pooled reqwest sender built from `config`.
    #[cfg(feature = "default-context")]
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = cmq_http_send_reqwest::ReqwestHttpSend::from_config(&config.connection)?;
        let ctx = Context::new()
            .with_http_send(http)
            .with_env(cmq_core::OsEnv);
        Self::new(ctx, config)
    }

    /// The endpoint requests are posted to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.inner.endpoint
    }

    /// Call `action` and decode the payload as `T`.
    pub async fn call<T: DeserializeOwned>(&self, action: &str, params: Params) -> Result<T> {
        self.send(action, params, None).await
    }

    /// Call `action` that long polls server side for up to `wait`.
    ///
    /// `wait` only extends this call's deadline. It is not an api parameter
    /// and is never signed or sent.
    pub async fn call_with_wait<T: DeserializeOwned>(
        &self,
        action: &str,
        params: Params,
        wait: Duration,
    ) -> Result<T> {
        self.send(action, params, Some(wait)).await
    }

    /// Call `action` and only check the envelope.
    pub async fn call_without_result(&self, action: &str, params: Params) -> Result<()> {
        self.call::<IgnoredAny>(action, params).await.map(|_| ())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        action: &str,
        params: Params,
        wait: Option<Duration>,
    ) -> Result<T> {
        let params = self.signed_params(action, params, now().timestamp(), rand::random());
        let timeout = self.inner.connection.call_timeout(wait);

        let mut req = http::Request::builder()
            .method(Method::POST)
            .uri(self.inner.endpoint.url())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Bytes::from(params.to_form_body()))?;
        req.extensions_mut().insert(RequestTimeout(timeout));

        debug!("calling {action} with timeout {timeout:?}");
        let resp = self.inner.ctx.http_send(req).await?;
        debug!("{action} responded with status {}", resp.status());

        decode_response(resp)
    }

    /// Merge system parameters into `params` and sign them.
    ///
    /// System parameters always win over caller supplied ones.
    pub(crate) fn signed_params(
        &self,
        action: &str,
        mut params: Params,
        timestamp: i64,
        nonce: u32,
    ) -> Params {
        let inner = &self.inner;

        params.insert(ACTION, action);
        params.insert(NONCE, nonce);
        params.insert(SECRET_ID, &inner.credential.secret_id);
        params.insert(TIMESTAMP, timestamp);
        params.insert(REQUEST_CLIENT_KEY, REQUEST_CLIENT);
        params.insert(SIGNATURE_METHOD, SIGNATURE_METHOD_HMAC_SHA1);

        inner.signer.sign(
            &inner.credential.secret_key,
            &Method::POST,
            inner.endpoint.host(),
            inner.endpoint.path(),
            &mut params,
        );
        params
    }
}
