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

use cmq_core::envelope::null_as_default;
use cmq_core::time::{from_timestamp_millis, DateTime};
use serde::Deserialize;

/// A message received from a queue.
///
/// Each receive hands out a fresh `receipt_handle` and bumps
/// `dequeue_count` and `next_visible_time`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    /// Message id assigned by the service.
    pub msg_id: String,
    /// One-time handle of this delivery, required to delete it.
    pub receipt_handle: String,
    /// Message body.
    pub msg_body: String,
    /// Enqueue time, in milliseconds since the unix epoch.
    pub enqueue_time: i64,
    /// Next time the message becomes visible, in milliseconds since the unix epoch.
    pub next_visible_time: i64,
    /// First dequeue time, in milliseconds since the unix epoch.
    pub first_dequeue_time: i64,
    /// How many times the message has been received.
    pub dequeue_count: u64,
    /// Tags attached when the message was published to a topic.
    #[serde(deserialize_with = "null_as_default")]
    pub msg_tag: Vec<String>,
}

impl Message {
    /// Enqueue time as a datetime.
    pub fn enqueued_at(&self) -> Option<DateTime> {
        from_timestamp_millis(self.enqueue_time)
    }

    /// Next visible time as a datetime.
    pub fn next_visible_at(&self) -> Option<DateTime> {
        from_timestamp_millis(self.next_visible_time)
    }

    /// First dequeue time, `None` if the service reported none.
    pub fn first_dequeued_at(&self) -> Option<DateTime> {
        if self.first_dequeue_time == 0 {
            return None;
        }
        from_timestamp_millis(self.first_dequeue_time)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MsgId {
    pub msg_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MsgIdList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub msg_list: Vec<MsgId>,
}

impl MsgIdList {
    pub fn into_ids(self) -> Vec<String> {
        self.msg_list.into_iter().map(|v| v.msg_id).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MsgInfoList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub msg_info_list: Vec<Message>,
}
