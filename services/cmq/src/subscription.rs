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

use crate::Client;
use cmq_core::envelope::null_as_default;
use cmq_core::time::{from_timestamp, DateTime};
use cmq_core::{Params, Result};
use serde::Deserialize;

/// Attributes of a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscriptionMeta {
    /// App id of the topic owner.
    pub topic_owner: String,
    /// Push endpoint.
    pub endpoint: String,
    /// Push protocol, `http` or `queue`.
    pub protocol: String,
    /// Retry strategy on push failure, `BACKOFF_RETRY` or `EXPONENTIAL_DECAY_RETRY`.
    pub notify_strategy: String,
    /// Pushed content format, `JSON` or `SIMPLIFIED`.
    pub notify_content_format: String,
    /// Only messages carrying one of these tags are pushed.
    #[serde(deserialize_with = "null_as_default")]
    pub filter_tag: Vec<String>,
    /// Routing keys bound to this subscription.
    #[serde(deserialize_with = "null_as_default")]
    pub binding_key: Vec<String>,
    /// Subscription creation time, in unix seconds.
    pub create_time: i64,
    /// Last time the attributes were modified, in unix seconds.
    pub last_modify_time: i64,
    /// Messages waiting to be pushed.
    pub msg_count: u64,
}

impl SubscriptionMeta {
    /// Creation time as a datetime.
    pub fn created_at(&self) -> Option<DateTime> {
        from_timestamp(self.create_time)
    }

    /// Write the non-empty mutable attributes.
    pub(crate) fn write_params(&self, params: &mut Params) {
        params.insert_non_empty("notifyStrategy", &self.notify_strategy);
        params.insert_non_empty("notifyContentFormat", &self.notify_content_format);
        params.insert_indexed("filterTag", &self.filter_tag);
        params.insert_indexed("bindingKey", &self.binding_key);
    }
}

/// Subscription is the handle of a single subscription of a topic.
#[derive(Debug, Clone)]
pub struct Subscription {
    topic_name: String,
    name: String,
    client: Client,
}

impl Subscription {
    /// Create a handle of subscription `name` on `topic_name`.
    pub fn new(topic_name: impl Into<String>, name: impl Into<String>, client: Client) -> Self {
        Self {
            topic_name: topic_name.into(),
            name: name.into(),
            client,
        }
    }

    /// Name of the subscribed topic.
    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    /// Name of this subscription.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn params(&self) -> Params {
        Params::new()
            .with("topicName", &self.topic_name)
            .with("subscriptionName", &self.name)
    }

    /// Remove every filter tag of this subscription.
    pub async fn clear_filter_tags(&self) -> Result<()> {
        self.client
            .call_without_result("ClearSubscriptionFilterTags", self.params())
            .await
    }

    /// Update strategy, content format, filter tags and binding keys.
    ///
    /// Empty strings and lists are left untouched.
    pub async fn set_attributes(&self, meta: &SubscriptionMeta) -> Result<()> {
        let mut params = self.params();
        meta.write_params(&mut params);

        self.client
            .call_without_result("SetSubscriptionAttributes", params)
            .await
    }

    /// Fetch the subscription attributes.
    pub async fn get_attributes(&self) -> Result<SubscriptionMeta> {
        self.client
            .call("GetSubscriptionAttributes", self.params())
            .await
    }
}
