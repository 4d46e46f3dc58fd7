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

//! Client for Tencent Cloud Message Queue (CMQ).
//!
//! Every call is a signed form POST against a single endpoint. The
//! [`Client`] handles signing, per call deadlines and response envelopes,
//! while [`Account`], [`Queue`], [`Topic`] and [`Subscription`] expose the
//! api actions.
//!
//! ## Example
//!
//! ```no_run
//! use cmq::{Account, Config};
//! use cmq::Context;
//!
//! # async fn example() -> cmq::Result<()> {
//! // Reads CMQ_ENDPOINT, CMQ_SECRET_ID and CMQ_SECRET_KEY.
//! let config = Config::from_env(&Context::new().with_env(cmq::OsEnv));
//! let account = Account::new(&config)?;
//!
//! let topic = account.topic("events");
//! let id = topic.publish_message("user signed up", &["signup"]).await?;
//! println!("published {id}");
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod account;
pub use account::Account;
mod client;
pub use client::Client;
mod config;
pub use config::Config;
mod constants;
pub use constants::{DEFAULT_PATH, MAX_BATCH_SIZE, NOTIFY_STRATEGY_DEFAULT, REQUEST_CLIENT};
mod credential;
pub use credential::Credential;
mod message;
pub use message::Message;
mod queue;
pub use queue::{Queue, QueueMeta};
mod subscription;
pub use subscription::{Subscription, SubscriptionMeta};
mod topic;
pub use topic::{Topic, TopicMeta};
mod validate;

#[cfg(test)]
mod testing;

pub use cmq_core::{
    ConnectionConfig, Context, Error, ErrorKind, OsEnv, Params, RemoteError, Result, StaticEnv,
};
