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

use std::time::Duration;

/// Pool level connection settings.
///
/// These are fixed when the http sender is built and shared by every call.
/// Per call deadlines are computed from `base_timeout` and travel with each
/// request instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Deadline of a call without long polling. Defaults to 3s.
    pub base_timeout: Duration,
    /// Max idle connections kept per host. Defaults to 100.
    pub max_idle_per_host: usize,
    /// How long an idle connection is kept. Defaults to 90s.
    pub idle_timeout: Duration,
    /// TCP keep-alive interval. Defaults to 30s.
    pub tcp_keepalive: Duration,
    /// Budget for dialing a new connection. Defaults to 30s.
    pub connect_timeout: Duration,
    /// Budget for the TLS handshake on a new connection. Defaults to 10s.
    pub handshake_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_timeout: Duration::from_millis(3000),
            max_idle_per_host: 100,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(30),
            handshake_timeout: Duration::from_secs(10),
        }
    }
}

impl ConnectionConfig {
    /// Set the base timeout of every call.
    pub fn with_base_timeout(mut self, timeout: Duration) -> Self {
        self.base_timeout = timeout;
        self
    }

    /// Set the max idle connections per host.
    pub fn with_max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    /// Set the idle connection timeout.
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Set the TCP keep-alive interval.
    pub fn with_tcp_keepalive(mut self, keepalive: Duration) -> Self {
        self.tcp_keepalive = keepalive;
        self
    }

    /// Set the dial timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the TLS handshake timeout.
    pub fn with_handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout = timeout;
        self
    }

    /// Deadline of a call that long polls for `wait`.
    ///
    /// The base timeout is the margin the client keeps over the server side
    /// wait.
    pub fn call_timeout(&self, wait: Option<Duration>) -> Duration {
        self.base_timeout + wait.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_timeout() {
        let cfg = ConnectionConfig::default();
        assert_eq!(cfg.call_timeout(None), Duration::from_millis(3000));
        assert_eq!(
            cfg.call_timeout(Some(Duration::from_secs(30))),
            Duration::from_millis(33000)
        );
    }

    #[test]
    fn test_builder() {
        let cfg = ConnectionConfig::default()
            .with_base_timeout(Duration::from_secs(1))
            .with_max_idle_per_host(8);
        assert_eq!(cfg.base_timeout, Duration::from_secs(1));
        assert_eq!(cfg.max_idle_per_host, 8);
        assert_eq!(cfg.idle_timeout, Duration::from_secs(90));
    }
}
