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

//! Core components of the CMQ client.
//!
//! This crate holds the protocol core shared by every api call:
//!
//! - [`Params`]: the flat parameter set and its canonical/wire encodings
//! - [`RequestSigner`]: canonical string and HMAC-SHA1 signature
//! - [`envelope`]: the `code`/`message`/`requestId` response envelope
//! - [`Context`] and [`HttpSend`]: the seam used to send requests
//!
//! ## Example
//!
//! ```
//! use cmq_core::{Endpoint, Params, RequestSigner};
//! use http::Method;
//!
//! let endpoint = Endpoint::new("https://cmq-queue-gz.api.qcloud.com", "/v2/index.php")?;
//! let mut params = Params::new()
//!     .with("Action", "CreateQueue")
//!     .with("queueName", "q1");
//!
//! RequestSigner::new().sign(
//!     "my-secret-key",
//!     &Method::POST,
//!     endpoint.host(),
//!     endpoint.path(),
//!     &mut params,
//! );
//! assert!(params.contains_key("Signature"));
//! # Ok::<(), cmq_core::Error>(())
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod envelope;
pub mod hash;
pub mod time;
pub mod utils;

mod config;
pub use config::ConnectionConfig;
mod context;
pub use context::{Context, Env, NoopHttpSend, OsEnv, StaticEnv};
mod endpoint;
pub use endpoint::{strip_scheme, Endpoint};
mod error;
pub use error::{Error, ErrorKind, RemoteError, Result};
mod http_send;
pub use http_send::{HttpSend, RequestTimeout};
mod params;
pub use params::Params;
mod sign;
pub use sign::{RequestSigner, SIGNATURE, SIGNATURE_METHOD_HMAC_SHA1};
