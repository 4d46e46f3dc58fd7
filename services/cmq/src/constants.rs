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

use std::time::Duration;

// Env values used in cmq.
pub const CMQ_ENDPOINT: &str = "CMQ_ENDPOINT";
pub const CMQ_PATH: &str = "CMQ_PATH";
pub const CMQ_SECRET_ID: &str = "CMQ_SECRET_ID";
pub const CMQ_SECRET_KEY: &str = "CMQ_SECRET_KEY";
pub const TENCENTCLOUD_SECRET_ID: &str = "TENCENTCLOUD_SECRET_ID";
pub const TENCENTCLOUD_SECRET_KEY: &str = "TENCENTCLOUD_SECRET_KEY";

/// Api path used when none is configured.
pub const DEFAULT_PATH: &str = "/v2/index.php";

/// Value of `RequestClient` sent with every request.
pub const REQUEST_CLIENT: &str = concat!("SDK_RUST_", env!("CARGO_PKG_VERSION"));

// System parameters injected into every request.
pub const ACTION: &str = "Action";
pub const NONCE: &str = "Nonce";
pub const SECRET_ID: &str = "SecretId";
pub const TIMESTAMP: &str = "Timestamp";
pub const REQUEST_CLIENT_KEY: &str = "RequestClient";
pub const SIGNATURE_METHOD: &str = "SignatureMethod";

/// Retry strategy used by [`crate::Account::create_subscribe`].
pub const NOTIFY_STRATEGY_DEFAULT: &str = "BACKOFF_RETRY";

/// Most messages a single batch call accepts.
pub const MAX_BATCH_SIZE: usize = 16;

/// Lower bound of a topic's `maxMsgSize`, in bytes.
pub const MIN_MSG_SIZE: u32 = 1024;
/// Upper bound of a topic's `maxMsgSize`, in bytes.
pub const MAX_MSG_SIZE: u32 = 1_048_576;

/// Extra client side wait of a receive call without an explicit
/// `pollingWaitSeconds`; the queue's own setting applies server side.
pub const DEFAULT_LONG_POLL_WAIT: Duration = Duration::from_millis(30_000);
