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

//! Response envelope decoding.
//!
//! Every response body is a flat json object carrying `code`, `message` and
//! `requestId`, with the action specific fields at the same level:
//!
//! ```json
//! {"code":0,"message":"","requestId":"14534664555","msgId":"123345346"}
//! ```

use crate::{Error, Result};
use bytes::Bytes;
use http::StatusCode;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// The fields shared by every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Zero means success.
    pub code: i64,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Correlation id of this request.
    #[serde(default)]
    pub request_id: String,
}

impl Envelope {
    /// Returns true if the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Turn a failed envelope into a remote error.
    pub fn into_result(self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::remote_error(self.code, self.message, self.request_id))
        }
    }
}

/// Decode a http response into the payload `T`.
///
/// - Non-200 status is a transport error; the body is never decoded.
/// - A body that is not a json object with `code` is a transport error.
/// - A non-zero `code` is a remote error.
/// - Otherwise the same object is decoded again as `T`.
pub fn decode_response<T: DeserializeOwned>(resp: http::Response<Bytes>) -> Result<T> {
    let (parts, body) = resp.into_parts();
    decode(parts.status, &body)
}

/// Decode a status and body into the payload `T`.
///
/// See [`decode_response`].
pub fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status != StatusCode::OK {
        return Err(Error::transport(format!(
            "http error code {}: {}",
            status.as_u16(),
            String::from_utf8_lossy(&body[..body.len().min(256)])
        )));
    }

    let value: serde_json::Value = serde_json::from_slice(body)?;
    let envelope = Envelope::deserialize(&value)?;
    debug!(
        "response envelope: code={} request_id={}",
        envelope.code, envelope.request_id
    );
    envelope.into_result()?;

    Ok(serde_json::from_value(value)?)
}

/// Deserialize an explicit `null` as `T::default()`.
///
/// The service sends `null` for empty lists. Pair with `#[serde(default)]`
/// to also cover a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde::de::IgnoredAny;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct SendMessage {
        msg_id: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct QueueName {
        queue_name: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct ListQueue {
        total_count: u64,
        queue_list: Vec<QueueName>,
    }

    #[test]
    fn test_decode_success() {
        let body = br#"{"code":0,"message":"","requestId":"14534664555","msgId":"123345346"}"#;
        let v: SendMessage = decode(StatusCode::OK, body).expect("must decode");
        assert_eq!(
            v,
            SendMessage {
                msg_id: "123345346".to_string()
            }
        );
    }

    #[test]
    fn test_decode_list() {
        let body = br#"{"code":0,"message":"","requestId":"1","totalCount":2,
            "queueList":[{"queueId":"queue-a","queueName":"a"},{"queueId":"queue-b","queueName":"b"}]}"#;
        let v: ListQueue = decode(StatusCode::OK, body).expect("must decode");
        assert_eq!(v.total_count, 2);
        assert_eq!(v.queue_list[1].queue_name, "b");
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Tags {
        #[serde(default, deserialize_with = "null_as_default")]
        filter_tag: Vec<String>,
    }

    #[test]
    fn test_null_as_default() {
        let body = br#"{"code":0,"message":"","requestId":"r","filterTag":null}"#;
        let v: Tags = decode(StatusCode::OK, body).expect("null list must decode");
        assert!(v.filter_tag.is_empty());

        let body = br#"{"code":0,"message":"","requestId":"r"}"#;
        let v: Tags = decode(StatusCode::OK, body).expect("missing list must decode");
        assert!(v.filter_tag.is_empty());

        let body = br#"{"code":0,"message":"","requestId":"r","filterTag":["a"]}"#;
        let v: Tags = decode(StatusCode::OK, body).unwrap();
        assert_eq!(v.filter_tag, vec!["a".to_string()]);
    }

    #[test]
    fn test_decode_remote_error() {
        let body = br#"{"code":1000,"message":"(10420)secretId is not exist","requestId":"abc-123"}"#;
        let err = decode::<SendMessage>(StatusCode::OK, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Remote);

        let remote = err.remote().expect("remote details");
        assert_eq!(remote.code, 1000);
        assert_eq!(remote.message, "(10420)secretId is not exist");
        assert_eq!(remote.request_id, "abc-123");
    }

    #[test]
    fn test_remote_error_wins_over_missing_payload() {
        // Failed responses carry no payload; the envelope must be checked first.
        let body = br#"{"code":4440,"message":"queue is not exist","requestId":"r"}"#;
        let err = decode::<ListQueue>(StatusCode::OK, body).unwrap_err();
        assert!(err.is_remote());
    }

    #[test]
    fn test_decode_non_200_is_transport() {
        let err = decode::<IgnoredAny>(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_decode_non_200_with_success_body_is_transport() {
        let body = br#"{"code":0,"message":"","requestId":"r"}"#;
        let err = decode::<IgnoredAny>(StatusCode::BAD_GATEWAY, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_decode_malformed_json_is_transport() {
        let err = decode::<IgnoredAny>(StatusCode::OK, b"{\"code\":0,").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_decode_missing_code_is_transport() {
        let err = decode::<IgnoredAny>(StatusCode::OK, br#"{"message":"x"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_decode_ignoring_payload() {
        let body = br#"{"code":0,"message":"","requestId":"r","queueId":"queue-1"}"#;
        assert!(decode::<IgnoredAny>(StatusCode::OK, body).is_ok());
    }

    #[test]
    fn test_decode_response() {
        let resp = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(br#"{"code":0,"requestId":"r","msgId":"m"}"#))
            .unwrap();
        let v: SendMessage = decode_response(resp).unwrap();
        assert_eq!(v.msg_id, "m");
    }
}
