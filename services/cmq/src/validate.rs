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

//! Client side parameter checks, run before any request is sent.

use crate::constants::{MAX_BATCH_SIZE, MAX_MSG_SIZE, MIN_MSG_SIZE};
use cmq_core::{Error, Result};

pub(crate) fn require(op: &str, field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation(format!("{op} failed: {field} is empty")));
    }
    Ok(())
}

pub(crate) fn max_msg_size(op: &str, size: u32) -> Result<()> {
    if !(MIN_MSG_SIZE..=MAX_MSG_SIZE).contains(&size) {
        return Err(Error::validation(format!(
            "{op} failed: maxMsgSize must be within {MIN_MSG_SIZE}..={MAX_MSG_SIZE}, got {size}"
        )));
    }
    Ok(())
}

pub(crate) fn batch_size(op: &str, field: &str, len: usize) -> Result<()> {
    if len == 0 || len > MAX_BATCH_SIZE {
        return Err(Error::validation(format!(
            "{op} failed: {field} must hold 1..={MAX_BATCH_SIZE} items, got {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmq_core::ErrorKind;
    use test_case::test_case;

    #[test]
    fn test_require() {
        assert!(require("createQueue", "queueName", "q").is_ok());
        let err = require("createQueue", "queueName", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "createQueue failed: queueName is empty");
    }

    #[test_case(1023, false; "below min")]
    #[test_case(1024, true; "min")]
    #[test_case(65536, true; "middle")]
    #[test_case(1_048_576, true; "max")]
    #[test_case(1_048_577, false; "above max")]
    fn test_max_msg_size(size: u32, ok: bool) {
        assert_eq!(max_msg_size("createTopic", size).is_ok(), ok);
    }

    #[test_case(0, false; "empty")]
    #[test_case(1, true; "one")]
    #[test_case(16, true; "full")]
    #[test_case(17, false; "too many")]
    fn test_batch_size(len: usize, ok: bool) {
        assert_eq!(batch_size("batchSendMessage", "msgBody", len).is_ok(), ok);
    }
}
