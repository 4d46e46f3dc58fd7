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

use crate::constants::DEFAULT_LONG_POLL_WAIT;
use crate::message::{MsgId, MsgIdList, MsgInfoList};
use crate::validate;
use crate::{Client, Message};
use cmq_core::time::{from_timestamp, DateTime};
use cmq_core::{Params, Result};
use serde::Deserialize;
use std::time::Duration;

/// Attributes of a queue.
///
/// When used to create or update a queue, only positive values are sent;
/// zero leaves the service default or current value untouched. The count
/// and time fields are read only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueueMeta {
    /// Max number of messages kept in the queue.
    pub max_msg_heap_num: u64,
    /// Long polling wait of a receive, in seconds.
    pub polling_wait_seconds: u32,
    /// Visibility timeout of a received message, in seconds.
    pub visibility_timeout: u32,
    /// Max message size, in bytes.
    pub max_msg_size: u32,
    /// Message retention period, in seconds.
    pub msg_retention_seconds: u32,
    /// Queue creation time.
    pub create_time: i64,
    /// Last time the attributes were modified.
    pub last_modify_time: i64,
    /// Messages in active state.
    pub active_msg_num: u64,
    /// Messages in inactive state.
    pub inactive_msg_num: u64,
    /// Deleted messages still kept for rewinding.
    #[serde(alias = "rewindmsgNum")]
    pub rewind_msg_num: u64,
    /// Min unconsumed message time.
    pub min_msg_time: i64,
    /// Delayed messages.
    pub delay_msg_num: u64,
    /// Rewind retention, in seconds.
    pub rewind_seconds: u32,
}

impl QueueMeta {
    /// Creation time as a datetime.
    pub fn created_at(&self) -> Option<DateTime> {
        from_timestamp(self.create_time)
    }

    pub(crate) fn write_params(&self, params: &mut Params) {
        let writable = [
            ("maxMsgHeapNum", self.max_msg_heap_num),
            ("pollingWaitSeconds", self.polling_wait_seconds.into()),
            ("visibilityTimeout", self.visibility_timeout.into()),
            ("maxMsgSize", self.max_msg_size.into()),
            ("msgRetentionSeconds", self.msg_retention_seconds.into()),
            ("rewindSeconds", self.rewind_seconds.into()),
        ];
        for (key, value) in writable {
            if value > 0 {
                params.insert(key, value);
            }
        }
    }
}

/// Queue is the handle of a single queue.
#[derive(Debug, Clone)]
pub struct Queue {
    name: String,
    client: Client,
}

impl Queue {
    /// Create a handle of queue `name`.
    pub fn new(name: impl Into<String>, client: Client) -> Self {
        Self {
            name: name.into(),
            client,
        }
    }

    /// Name of this queue.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn params(&self) -> Params {
        Params::new().with("queueName", &self.name)
    }

    /// Update the queue attributes that are set to positive values.
    pub async fn set_attributes(&self, meta: &QueueMeta) -> Result<()> {
        let mut params = self.params();
        meta.write_params(&mut params);

        self.client
            .call_without_result("SetQueueAttributes", params)
            .await
    }

    /// Fetch the queue attributes.
    pub async fn get_attributes(&self) -> Result<QueueMeta> {
        self.client.call("GetQueueAttributes", self.params()).await
    }

    /// Send a message and return its id.
    pub async fn send_message(&self, body: &str) -> Result<String> {
        self.send_delay_message(body, 0).await
    }

    /// Send a message that becomes visible after `delay_seconds`.
    pub async fn send_delay_message(&self, body: &str, delay_seconds: u32) -> Result<String> {
        let params = self
            .params()
            .with("msgBody", body)
            .with("delaySeconds", delay_seconds);

        let resp: MsgId = self.client.call("SendMessage", params).await?;
        Ok(resp.msg_id)
    }

    /// Send up to 16 messages in one call and return their ids.
    pub async fn batch_send_message(&self, bodies: &[&str]) -> Result<Vec<String>> {
        self.batch_send_delay_message(bodies, 0).await
    }

    /// Batch flavor of [`Queue::send_delay_message`].
    pub async fn batch_send_delay_message(
        &self,
        bodies: &[&str],
        delay_seconds: u32,
    ) -> Result<Vec<String>> {
        validate::batch_size("batchSendMessage", "msgBody", bodies.len())?;

        let mut params = self.params().with("delaySeconds", delay_seconds);
        params.insert_indexed("msgBody", bodies);

        let resp: MsgIdList = self.client.call("BatchSendMessage", params).await?;
        Ok(resp.into_ids())
    }

    /// Receive one message.
    ///
    /// With `Some(seconds)` the service holds the call up to that long
    /// waiting for a message. With `None` the queue's own
    /// `pollingWaitSeconds` applies.
    pub async fn receive_message(&self, polling_wait_seconds: Option<u32>) -> Result<Message> {
        let mut params = self.params();
        let wait = long_poll(&mut params, polling_wait_seconds);

        self.client
            .call_with_wait("ReceiveMessage", params, wait)
            .await
    }

    /// Receive up to `num_of_msg` (1..=16) messages.
    pub async fn batch_receive_message(
        &self,
        num_of_msg: usize,
        polling_wait_seconds: Option<u32>,
    ) -> Result<Vec<Message>> {
        validate::batch_size("batchReceiveMessage", "numOfMsg", num_of_msg)?;

        let mut params = self.params().with("numOfMsg", num_of_msg);
        let wait = long_poll(&mut params, polling_wait_seconds);

        let resp: MsgInfoList = self
            .client
            .call_with_wait("BatchReceiveMessage", params, wait)
            .await?;
        Ok(resp.msg_info_list)
    }

    /// Delete a received message by its delivery handle.
    pub async fn delete_message(&self, receipt_handle: &str) -> Result<()> {
        validate::require("deleteMessage", "receiptHandle", receipt_handle)?;

        let params = self.params().with("receiptHandle", receipt_handle);
        self.client
            .call_without_result("DeleteMessage", params)
            .await
    }

    /// Delete up to 16 received messages. An empty list does nothing.
    pub async fn batch_delete_message(&self, receipt_handles: &[&str]) -> Result<()> {
        if receipt_handles.is_empty() {
            return Ok(());
        }
        validate::batch_size("batchDeleteMessage", "receiptHandle", receipt_handles.len())?;

        let mut params = self.params();
        params.insert_indexed("receiptHandle", receipt_handles);
        self.client
            .call_without_result("BatchDeleteMessage", params)
            .await
    }

    /// Rewind consumption to `start_consume_time` (unix seconds).
    ///
    /// A non-positive time does nothing.
    pub async fn rewind_queue(&self, start_consume_time: i64) -> Result<()> {
        if start_consume_time <= 0 {
            return Ok(());
        }

        let params = self.params().with("startConsumeTime", start_consume_time);
        self.client.call_without_result("RewindQueue", params).await
    }
}

/// Put `pollingWaitSeconds` into `params` and return the extra client wait.
fn long_poll(params: &mut Params, polling_wait_seconds: Option<u32>) -> Duration {
    match polling_wait_seconds {
        Some(seconds) => {
            params.insert("pollingWaitSeconds", seconds);
            Duration::from_secs(seconds.into())
        }
        None => DEFAULT_LONG_POLL_WAIT,
    }
}
