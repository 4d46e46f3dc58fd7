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
use crate::Credential;
use cmq_core::utils::Redact;
use cmq_core::{ConnectionConfig, Context, Endpoint, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config for a CMQ client.
#[derive(Clone, Default)]
pub struct Config {
    /// Base uri of the service, like `https://cmq-queue-gz.api.qcloud.com`.
    pub endpoint: Option<String>,
    /// Api path, defaults to `/v2/index.php`.
    pub path: Option<String>,
    /// Secret ID
    pub secret_id: Option<String>,
    /// Secret Key
    pub secret_key: Option<String>,
    /// Pool level connection settings.
    pub connection: ConnectionConfig,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("path", &self.path)
            .field("secret_id", &Redact::from(&self.secret_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("connection", &self.connection)
            .finish()
    }
}

impl Config {
    /// Create a config with endpoint and credentials.
    pub fn new(
        endpoint: impl Into<String>,
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            secret_id: Some(secret_id.into()),
            secret_key: Some(secret_key.into()),
            ..Default::default()
        }
    }

    /// Load config from environment variables.
    ///
    /// - `CMQ_ENDPOINT`
    /// - `CMQ_PATH`
    /// - `CMQ_SECRET_ID` or `TENCENTCLOUD_SECRET_ID`
    /// - `CMQ_SECRET_KEY` or `TENCENTCLOUD_SECRET_KEY`
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            endpoint: ctx.env_var(CMQ_ENDPOINT),
            path: ctx.env_var(CMQ_PATH),
            secret_id: ctx
                .env_var(CMQ_SECRET_ID)
                .or_else(|| ctx.env_var(TENCENTCLOUD_SECRET_ID)),
            secret_key: ctx
                .env_var(CMQ_SECRET_KEY)
                .or_else(|| ctx.env_var(TENCENTCLOUD_SECRET_KEY)),
            connection: ConnectionConfig::default(),
        }
    }

    /// Set the api path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Replace the connection settings.
    pub fn with_connection(mut self, connection: ConnectionConfig) -> Self {
        self.connection = connection;
        self
    }

    pub(crate) fn endpoint(&self) -> Result<Endpoint> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::config_invalid("endpoint is required"))?;
        Endpoint::new(endpoint, self.path.as_deref().unwrap_or(DEFAULT_PATH))
    }

    pub(crate) fn credential(&self) -> Result<Credential> {
        let cred = Credential::new(
            self.secret_id.clone().unwrap_or_default(),
            self.secret_key.clone().unwrap_or_default(),
        );
        if !cred.is_valid() {
            return Err(Error::config_invalid(
                "secret_id and secret_key are required",
            ));
        }
        Ok(cred)
    }
}
