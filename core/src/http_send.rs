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

use crate::Result;
use bytes::Bytes;
use std::fmt::Debug;
use std::time::Duration;

/// HttpSend is used to send the signed api request.
///
/// Implementations must be safe to share between concurrent calls, and must
/// honour a [`RequestTimeout`] found in the request extensions.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// RequestTimeout is the deadline of a single request.
///
/// It is carried in [`http::Extensions`] so that every call owns its own
/// timeout instead of mutating the shared client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(pub Duration);

impl RequestTimeout {
    /// Read the timeout attached to the request, if any.
    pub fn of<B>(req: &http::Request<B>) -> Option<Duration> {
        req.extensions().get::<RequestTimeout>().map(|v| v.0)
    }
}
