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

use crate::constants::NOTIFY_STRATEGY_DEFAULT;
use crate::validate;
use crate::{Client, Queue, QueueMeta, Subscription, SubscriptionMeta, Topic};
use cmq_core::envelope::null_as_default;
use cmq_core::{Params, Result};
use serde::Deserialize;

/// One page of a list call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Page<T> {
    #[serde(default)]
    total_count: u64,
    #[serde(
        default = "Vec::new",
        deserialize_with = "null_as_default",
        bound(deserialize = "T: Deserialize<'de>"),
        alias = "queueList",
        alias = "topicList",
        alias = "subscriptionList"
    )]
    list: Vec<T>,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> (u64, Vec<U>) {
        (self.total_count, self.list.into_iter().map(f).collect())
    }
}

pub(crate) fn paging(
    params: &mut Params,
    search_word: &str,
    offset: Option<u32>,
    limit: Option<u32>,
) {
    params.insert_non_empty("searchWord", search_word);
    if let Some(offset) = offset {
        params.insert("offset", offset);
    }
    if let Some(limit) = limit.filter(|v| *v > 0) {
        params.insert("limit", limit);
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueueName {
    queue_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopicName {
    topic_name: String,
}

/// Account is the entry point of the CMQ api.
///
/// It manages queues, topics and subscriptions and hands out handles
/// sharing its client.
///
/// ## Example
///
/// ```no_run
/// use cmq::{Account, Config, QueueMeta};
///
/// # async fn example() -> cmq::Result<()> {
/// let account = Account::new(&Config::new(
///     "https://cmq-queue-gz.api.qcloud.com",
///     "my-secret-id",
///     "my-secret-key",
/// ))?;
///
/// account.create_queue("orders", &QueueMeta::default()).await?;
/// let queue = account.queue("orders");
/// queue.send_message("hello").await?;
///
/// let msg = queue.receive_message(Some(10)).await?;
/// queue.delete_message(&msg.receipt_handle).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Account {
    client: Client,
}

impl Account {
    /// Create an account backed by a pooled reqwest client.
    #[cfg(feature = "default-context")]
    pub fn new(config: &crate::Config) -> Result<Self> {
        Ok(Self::with_client(Client::from_config(config)?))
    }

    /// Create an account on top of an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Handle of queue `name`.
    pub fn queue(&self, name: impl Into<String>) -> Queue {
        Queue::new(name, self.client.clone())
    }

    /// Handle of topic `name`.
    pub fn topic(&self, name: impl Into<String>) -> Topic {
        Topic::new(name, self.client.clone())
    }

    /// Handle of subscription `name` on `topic_name`.
    pub fn subscription(
        &self,
        topic_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Subscription {
        Subscription::new(topic_name, name, self.client.clone())
    }

    /// Create a queue. Only positive attributes of `meta` are sent.
    pub async fn create_queue(&self, name: &str, meta: &QueueMeta) -> Result<()> {
        validate::require("createQueue", "queueName", name)?;

        let mut params = Params::new().with("queueName", name);
        meta.write_params(&mut params);
        self.client.call_without_result("CreateQueue", params).await
    }

    /// Delete a queue.
    pub async fn delete_queue(&self, name: &str) -> Result<()> {
        validate::require("deleteQueue", "queueName", name)?;

        let params = Params::new().with("queueName", name);
        self.client.call_without_result("DeleteQueue", params).await
    }

    /// List queues whose name contains `search_word`.
    ///
    /// Returns the total count and the names on this page.
    pub async fn list_queue(
        &self,
        search_word: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<(u64, Vec<String>)> {
        let mut params = Params::new();
        paging(&mut params, search_word, offset, limit);

        let page: Page<QueueName> = self.client.call("ListQueue", params).await?;
        Ok(page.map(|v| v.queue_name))
    }

    /// Create a topic with tag filtering.
    pub async fn create_topic(&self, name: &str, max_msg_size: u32) -> Result<()> {
        validate::require("createTopic", "topicName", name)?;
        validate::max_msg_size("createTopic", max_msg_size)?;

        let params = Params::new()
            .with("topicName", name)
            .with("filterType", 1)
            .with("maxMsgSize", max_msg_size);
        self.client.call_without_result("CreateTopic", params).await
    }

    /// Delete a topic.
    pub async fn delete_topic(&self, name: &str) -> Result<()> {
        validate::require("deleteTopic", "topicName", name)?;

        let params = Params::new().with("topicName", name);
        self.client.call_without_result("DeleteTopic", params).await
    }

    /// List topics whose name contains `search_word`.
    pub async fn list_topic(
        &self,
        search_word: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<(u64, Vec<String>)> {
        let mut params = Params::new();
        paging(&mut params, search_word, offset, limit);

        let page: Page<TopicName> = self.client.call("ListTopic", params).await?;
        Ok(page.map(|v| v.topic_name))
    }

    /// Subscribe `endpoint` to a topic with the default retry strategy.
    pub async fn create_subscribe(
        &self,
        topic_name: &str,
        subscription_name: &str,
        endpoint: &str,
        protocol: &str,
        notify_content_format: &str,
    ) -> Result<()> {
        let meta = SubscriptionMeta {
            endpoint: endpoint.to_string(),
            protocol: protocol.to_string(),
            notify_strategy: NOTIFY_STRATEGY_DEFAULT.to_string(),
            notify_content_format: notify_content_format.to_string(),
            ..Default::default()
        };
        self.create_subscribe_with_meta(topic_name, subscription_name, &meta)
            .await
    }

    /// Subscribe with full control over filter tags, binding keys and strategy.
    ///
    /// `endpoint`, `protocol`, `notify_strategy` and `notify_content_format`
    /// must be set; the read only fields of `meta` are ignored.
    pub async fn create_subscribe_with_meta(
        &self,
        topic_name: &str,
        subscription_name: &str,
        meta: &SubscriptionMeta,
    ) -> Result<()> {
        const OP: &str = "createSubscribe";
        validate::require(OP, "topicName", topic_name)?;
        validate::require(OP, "subscriptionName", subscription_name)?;
        validate::require(OP, "endpoint", &meta.endpoint)?;
        validate::require(OP, "protocol", &meta.protocol)?;
        validate::require(OP, "notifyStrategy", &meta.notify_strategy)?;
        validate::require(OP, "notifyContentFormat", &meta.notify_content_format)?;

        let mut params = Params::new()
            .with("topicName", topic_name)
            .with("subscriptionName", subscription_name)
            .with("endpoint", &meta.endpoint)
            .with("protocol", &meta.protocol);
        meta.write_params(&mut params);

        self.client.call_without_result("Subscribe", params).await
    }

    /// Remove a subscription.
    pub async fn delete_subscribe(&self, topic_name: &str, subscription_name: &str) -> Result<()> {
        const OP: &str = "deleteSubscribe";
        validate::require(OP, "topicName", topic_name)?;
        validate::require(OP, "subscriptionName", subscription_name)?;

        let params = Params::new()
            .with("topicName", topic_name)
            .with("subscriptionName", subscription_name);
        self.client.call_without_result("Unsubscribe", params).await
    }
}
