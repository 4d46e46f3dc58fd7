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

//! Time related utils.

use chrono::{TimeZone, Utc};

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Build a datetime from unix seconds.
///
/// Returns `None` if the input is out of range.
pub fn from_timestamp(secs: i64) -> Option<DateTime> {
    Utc.timestamp_opt(secs, 0).single()
}

/// Build a datetime from milliseconds since the unix epoch.
///
/// The service reports message times in this unit.
pub fn from_timestamp_millis(millis: i64) -> Option<DateTime> {
    Utc.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_timestamp() {
        let t = from_timestamp(1_700_000_000).expect("must be valid");
        assert_eq!(t.timestamp(), 1_700_000_000);
        assert_eq!(t.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_from_timestamp_millis() {
        let t = from_timestamp_millis(1_700_000_000_123).expect("must be valid");
        assert_eq!(t.timestamp(), 1_700_000_000);
        assert_eq!(t.timestamp_subsec_millis(), 123);
    }
}
