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

//! Test helpers: a recording `HttpSend` with canned responses.

use crate::{Client, Config};
use async_trait::async_trait;
use bytes::Bytes;
use cmq_core::{Context, HttpSend, Params, RequestTimeout, Result};
use http::header::CONTENT_TYPE;
use http::{Method, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const OK_BODY: &str = r#"{"code":0,"message":"","requestId":"mock"}"#;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: String,
    pub content_type: Option<String>,
    pub body: String,
    pub params: Params,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Default)]
struct State {
    responses: VecDeque<(StatusCode, String)>,
    requests: Vec<Recorded>,
}

/// Records every request and answers with queued responses.
///
/// Falls back to an empty success envelope once the queue is drained.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    state: Arc<Mutex<State>>,
}

impl MockHttpSend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.state.lock().unwrap().responses.push_back((
            StatusCode::from_u16(status).unwrap(),
            body.to_string(),
        ));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let body = String::from_utf8_lossy(req.body()).to_string();
        let recorded = Recorded {
            method: req.method().clone(),
            uri: req.uri().to_string(),
            content_type: req
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            params: form_urlencoded::parse(body.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
            body,
            timeout: RequestTimeout::of(&req),
        };

        let mut state = self.state.lock().unwrap();
        state.requests.push(recorded);
        let (status, body) = state
            .responses
            .pop_front()
            .unwrap_or((StatusCode::OK, OK_BODY.to_string()));

        Ok(http::Response::builder()
            .status(status)
            .body(Bytes::from(body))?)
    }
}

pub fn mock_client() -> (Client, MockHttpSend) {
    let mock = MockHttpSend::new();
    let ctx = Context::new().with_http_send(mock.clone());
    let cfg = Config::new(
        "https://cmq-queue-gz.api.qcloud.com",
        "test_secret_id",
        "test_secret_key",
    );
    (Client::new(ctx, &cfg).unwrap(), mock)
}
