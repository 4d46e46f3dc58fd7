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

use crate::account::{paging, Page};
use crate::message::{MsgId, MsgIdList};
use crate::validate;
use crate::Client;
use cmq_core::{Params, Result};
use serde::Deserialize;

/// Attributes of a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TopicMeta {
    /// Messages currently held by the topic.
    pub msg_count: u64,
    /// Max message size, 1024..=1048576 bytes.
    pub max_msg_size: u32,
    /// Message retention, fixed to one day by the service.
    pub msg_retention_seconds: u32,
    /// Topic creation time.
    pub create_time: i64,
    /// Last time the attributes were modified.
    pub last_modify_time: i64,
    /// Whether logging is enabled.
    pub logging_enabled: i32,
    /// Filter type chosen at creation.
    pub filter_type: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubscriptionName {
    subscription_name: String,
}

/// Topic is the handle of a single topic.
#[derive(Debug, Clone)]
pub struct Topic {
    name: String,
    client: Client,
}

impl Topic {
    /// Create a handle of topic `name`.
    pub fn new(name: impl Into<String>, client: Client) -> Self {
        Self {
            name: name.into(),
            client,
        }
    }

    /// Name of this topic.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn params(&self) -> Params {
        Params::new().with("topicName", &self.name)
    }

    /// Update the max message size of this topic.
    pub async fn set_attributes(&self, max_msg_size: u32) -> Result<()> {
        validate::max_msg_size("setTopicAttributes", max_msg_size)?;

        let params = self.params().with("maxMsgSize", max_msg_size);
        self.client
            .call_without_result("SetTopicAttributes", params)
            .await
    }

    /// Fetch the topic attributes.
    pub async fn get_attributes(&self) -> Result<TopicMeta> {
        self.client.call("GetTopicAttributes", self.params()).await
    }

    /// Publish a message with tags and return its id.
    pub async fn publish_message(&self, body: &str, tags: &[&str]) -> Result<String> {
        self.publish_message_with_routing_key(body, tags, "")
            .await
    }

    /// Publish a message with tags and a routing key.
    ///
    /// An empty routing key is not sent.
    pub async fn publish_message_with_routing_key(
        &self,
        body: &str,
        tags: &[&str],
        routing_key: &str,
    ) -> Result<String> {
        let mut params = self.params().with("msgBody", body);
        params.insert_non_empty("routingKey", routing_key);
        params.insert_indexed("msgTag", tags);

        let resp: MsgId = self.client.call("PublishMessage", params).await?;
        Ok(resp.msg_id)
    }

    /// Publish up to 16 messages in one call and return their ids.
    pub async fn batch_publish_message(&self, bodies: &[&str]) -> Result<Vec<String>> {
        self.batch_publish_message_with_routing_key(bodies, &[], "")
            .await
    }

    /// Batch flavor of [`Topic::publish_message_with_routing_key`].
    ///
    /// The tags and routing key apply to every message of the batch.
    pub async fn batch_publish_message_with_routing_key(
        &self,
        bodies: &[&str],
        tags: &[&str],
        routing_key: &str,
    ) -> Result<Vec<String>> {
        validate::batch_size("batchPublishMessage", "msgBody", bodies.len())?;

        let mut params = self.params();
        params.insert_non_empty("routingKey", routing_key);
        params.insert_indexed("msgBody", bodies);
        params.insert_indexed("msgTag", tags);

        let resp: MsgIdList = self.client.call("BatchPublishMessage", params).await?;
        Ok(resp.into_ids())
    }

    /// List subscriptions of this topic.
    ///
    /// Returns the total count and the names on this page.
    pub async fn list_subscription(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
        search_word: &str,
    ) -> Result<(u64, Vec<String>)> {
        let mut params = self.params();
        paging(&mut params, search_word, offset, limit);

        let page: Page<SubscriptionName> = self
            .client
            .call("ListSubscriptionByTopic", params)
            .await?;
        Ok(page.map(|v| v.subscription_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mock_client, MockHttpSend};
    use cmq_core::ErrorKind;
    use pretty_assertions::assert_eq;

    fn topic() -> (Topic, MockHttpSend) {
        let (client, mock) = mock_client();
        (Topic::new("t1", client), mock)
    }

    #[tokio::test]
    async fn test_set_attributes() {
        let (topic, mock) = topic();
        topic.set_attributes(65536).await.unwrap();

        let req = mock.last();
        assert_eq!(req.params.get("Action"), Some("SetTopicAttributes"));
        assert_eq!(req.params.get("topicName"), Some("t1"));
        assert_eq!(req.params.get("maxMsgSize"), Some("65536"));

        let err = topic.set_attributes(100).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_get_attributes() {
        let (topic, mock) = topic();
        mock.respond(
            200,
            r#"{"code":0,"message":"","requestId":"r","msgCount":4,"maxMsgSize":65536,
                "msgRetentionSeconds":86400,"createTime":1,"lastModifyTime":2,
                "loggingEnabled":0,"filterType":1}"#,
        );

        let meta = topic.get_attributes().await.unwrap();
        assert_eq!(meta.msg_count, 4);
        assert_eq!(meta.msg_retention_seconds, 86400);
        assert_eq!(meta.filter_type, 1);
    }

    #[tokio::test]
    async fn test_publish_message() {
        let (topic, mock) = topic();
        mock.respond(200, r#"{"code":0,"message":"","requestId":"r","msgId":"m"}"#);

        let id = topic.publish_message("hello", &["a", "b"]).await.unwrap();
        assert_eq!(id, "m");

        let req = mock.last();
        assert_eq!(req.params.get("Action"), Some("PublishMessage"));
        assert_eq!(req.params.get("msgBody"), Some("hello"));
        assert_eq!(req.params.get("msgTag.1"), Some("a"));
        assert_eq!(req.params.get("msgTag.2"), Some("b"));
        assert!(!req.params.contains_key("routingKey"));
    }

    #[tokio::test]
    async fn test_publish_message_with_routing_key() {
        let (topic, mock) = topic();
        mock.respond(200, r#"{"code":0,"message":"","requestId":"r","msgId":"m"}"#);

        topic
            .publish_message_with_routing_key("hello", &[], "order.created")
            .await
            .unwrap();
        assert_eq!(
            mock.last().params.get("routingKey"),
            Some("order.created")
        );
    }

    #[tokio::test]
    async fn test_batch_publish_message() {
        let (topic, mock) = topic();
        mock.respond(
            200,
            r#"{"code":0,"message":"","requestId":"r","msgList":[{"msgId":"a"},{"msgId":"b"}]}"#,
        );

        let ids = topic.batch_publish_message(&["x", "y"]).await.unwrap();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(mock.last().params.get("msgBody.2"), Some("y"));

        let err = topic.batch_publish_message(&[]).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_list_subscription() {
        let (topic, mock) = topic();
        mock.respond(
            200,
            r#"{"code":0,"message":"","requestId":"r","totalCount":2,
                "subscriptionList":[{"subscriptionId":"s-a","subscriptionName":"a"},
                {"subscriptionId":"s-b","subscriptionName":"b"}]}"#,
        );

        let (total, names) = topic
            .list_subscription(Some(0), Some(20), "")
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);

        let req = mock.last();
        assert_eq!(req.params.get("Action"), Some("ListSubscriptionByTopic"));
        assert_eq!(req.params.get("offset"), Some("0"));
        assert_eq!(req.params.get("limit"), Some("20"));
        assert!(!req.params.contains_key("searchWord"));
    }
}
