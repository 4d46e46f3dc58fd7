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

use std::collections::BTreeMap;
use std::fmt::Display;

/// Params is the flat, string keyed parameter set of an api call.
///
/// Keys are case-sensitive and always iterated in ascending byte order,
/// which is the order required by the canonical string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    inner: BTreeMap<String, String>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.inner.insert(key.into(), value.to_string());
    }

    /// Builder flavor of [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert only if the value is a non-empty string.
    pub fn insert_non_empty(&mut self, key: impl Into<String>, value: &str) {
        if !value.is_empty() {
            self.insert(key, value);
        }
    }

    /// Insert an ordered sequence as indexed keys: `prefix.1`, `prefix.2`, ...
    ///
    /// Indexes are 1-based and follow the iteration order of `values`.
    pub fn insert_indexed<I, V>(&mut self, prefix: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        for (i, v) in values.into_iter().enumerate() {
            self.insert(format!("{prefix}.{}", i + 1), v);
        }
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Remove a parameter and return its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.inner.remove(key)
    }

    /// Check whether a parameter is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate parameters in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Join the raw, unencoded pairs as `k1=v1&k2=v2` in key order.
    ///
    /// This is the query part of the canonical string.
    pub fn to_raw_query(&self) -> String {
        let mut s = String::with_capacity(
            self.inner
                .iter()
                .map(|(k, v)| k.len() + v.len() + 2)
                .sum::<usize>(),
        );
        for (i, (k, v)) in self.inner.iter().enumerate() {
            if i > 0 {
                s.push('&');
            }
            s.push_str(k);
            s.push('=');
            s.push_str(v);
        }
        s
    }

    /// Encode all pairs as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.inner.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Params {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.inner
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sorted_by_byte_value() {
        let params = Params::from_iter([("queueName", "q"), ("Action", "A"), ("Zeta", "z")]);
        // Upper case sorts before lower case.
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Action", "Zeta", "queueName"]);
    }

    #[test]
    fn test_insert_indexed() {
        let mut params = Params::new();
        params.insert_indexed("filterTag", ["a", "b", "c"]);
        assert_eq!(params.get("filterTag.1"), Some("a"));
        assert_eq!(params.get("filterTag.2"), Some("b"));
        assert_eq!(params.get("filterTag.3"), Some("c"));
        assert!(!params.contains_key("filterTag.0"));
        assert!(!params.contains_key("filterTag.4"));
    }

    #[test]
    fn test_insert_indexed_empty() {
        let mut params = Params::new();
        params.insert_indexed("msgBody", Vec::<String>::new());
        assert!(params.is_empty());
    }

    #[test]
    fn test_insert_non_empty() {
        let mut params = Params::new();
        params.insert_non_empty("searchWord", "");
        assert!(params.is_empty());
        params.insert_non_empty("searchWord", "q");
        assert_eq!(params.get("searchWord"), Some("q"));
    }

    #[test]
    fn test_raw_query_is_not_encoded() {
        let params = Params::new()
            .with("msgBody", "hello world&more=1")
            .with("Action", "SendMessage");
        assert_eq!(
            params.to_raw_query(),
            "Action=SendMessage&msgBody=hello world&more=1"
        );
    }

    #[test]
    fn test_form_body_is_encoded() {
        let params = Params::new()
            .with("msgBody", "hello world&more=1")
            .with("Signature", "ab+c/d=");
        assert_eq!(
            params.to_form_body(),
            "Signature=ab%2Bc%2Fd%3D&msgBody=hello+world%26more%3D1"
        );
    }

    #[test]
    fn test_display_values() {
        let params = Params::new().with("delaySeconds", 0).with("limit", 20u32);
        assert_eq!(params.to_raw_query(), "delaySeconds=0&limit=20");
    }
}
