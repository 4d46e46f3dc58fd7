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

//! Request signing.
//!
//! The canonical string is
//!
//! ```text
//! METHOD + HOST + PATH + "?" + k1=v1&k2=v2&...
//! ```
//!
//! with keys sorted by byte value and keys/values taken verbatim. Encoding
//! for the wire happens after signing, on the full set including
//! `Signature`.
//!
//! - [CMQ Signature](https://cloud.tencent.com/document/product/406/5903)

use crate::hash::base64_hmac_sha1;
use crate::Params;
use http::Method;
use log::debug;

/// Parameter key of the computed signature.
pub const SIGNATURE: &str = "Signature";

/// Value of `SignatureMethod` sent with every request.
pub const SIGNATURE_METHOD_HMAC_SHA1: &str = "HmacSHA1";

/// RequestSigner computes CMQ api signatures.
///
/// It holds no state: every call is a pure function of its inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self
    }

    /// Build the canonical string for `params`.
    pub fn canonical_string(
        &self,
        method: &Method,
        host: &str,
        path: &str,
        params: &Params,
    ) -> String {
        let query = params.to_raw_query();

        let mut s = String::with_capacity(
            method.as_str().len() + host.len() + path.len() + query.len() + 1,
        );
        s.push_str(method.as_str());
        s.push_str(host);
        s.push_str(path);
        s.push('?');
        s.push_str(&query);
        s
    }

    /// Compute the base64 HMAC-SHA1 signature of `params`.
    pub fn signature(
        &self,
        secret_key: &str,
        method: &Method,
        host: &str,
        path: &str,
        params: &Params,
    ) -> String {
        let string_to_sign = self.canonical_string(method, host, path, params);
        debug!("string to sign: {string_to_sign}");

        base64_hmac_sha1(secret_key.as_bytes(), string_to_sign.as_bytes())
    }

    /// Sign `params` in place by inserting `Signature`.
    ///
    /// A stale `Signature` entry is dropped before signing so that re-signing
    /// the same set is idempotent.
    pub fn sign(
        &self,
        secret_key: &str,
        method: &Method,
        host: &str,
        path: &str,
        params: &mut Params,
    ) {
        params.remove(SIGNATURE);
        let signature = self.signature(secret_key, method, host, path, params);
        params.insert(SIGNATURE, signature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HOST: &str = "cmq-queue-gz.api.qcloud.com";
    const PATH: &str = "/v2/index.php";
    const SECRET_KEY: &str = "Gu5t9xGARNpq86cd98joQYCN3EXAMPLE";

    fn fixed_params() -> Params {
        Params::new()
            .with("Action", "CreateQueue")
            .with("queueName", "q1")
            .with("Nonce", 11886)
            .with("SecretId", "AKIDz8krbsJ5yKBZQpn74WFkmLPx3EXAMPLE")
            .with("Timestamp", 1465185768)
            .with("RequestClient", "SDK_RUST_0.1.0")
            .with("SignatureMethod", SIGNATURE_METHOD_HMAC_SHA1)
    }

    #[test]
    fn test_canonical_string() {
        let s =
            RequestSigner::new().canonical_string(&Method::POST, HOST, PATH, &fixed_params());
        assert_eq!(
            s,
            "POSTcmq-queue-gz.api.qcloud.com/v2/index.php?Action=CreateQueue\
             &Nonce=11886&RequestClient=SDK_RUST_0.1.0\
             &SecretId=AKIDz8krbsJ5yKBZQpn74WFkmLPx3EXAMPLE\
             &SignatureMethod=HmacSHA1&Timestamp=1465185768&queueName=q1"
        );
    }

    #[test]
    fn test_signature_regression() {
        let sig = RequestSigner::new().signature(
            SECRET_KEY,
            &Method::POST,
            HOST,
            PATH,
            &fixed_params(),
        );
        assert_eq!(sig, "M2GjxANXIBStOQ7RQmovsHPLVs0=");
    }

    #[test]
    fn test_signature_is_deterministic() {
        let signer = RequestSigner::new();
        let a = signer.signature(SECRET_KEY, &Method::POST, HOST, PATH, &fixed_params());
        let b = signer.signature(SECRET_KEY, &Method::POST, HOST, PATH, &fixed_params());
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_ignores_insertion_order() {
        let forward = fixed_params();
        let mut pairs: Vec<_> = forward
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        pairs.reverse();
        let backward = Params::from_iter(pairs);

        let signer = RequestSigner::new();
        assert_eq!(
            signer.signature(SECRET_KEY, &Method::POST, HOST, PATH, &forward),
            signer.signature(SECRET_KEY, &Method::POST, HOST, PATH, &backward),
        );
    }

    #[test]
    fn test_signature_depends_on_key() {
        let signer = RequestSigner::new();
        assert_ne!(
            signer.signature(SECRET_KEY, &Method::POST, HOST, PATH, &fixed_params()),
            signer.signature("another", &Method::POST, HOST, PATH, &fixed_params()),
        );
    }

    #[test]
    fn test_sign_empty_params() {
        let mut params = Params::new();
        RequestSigner::new().sign(SECRET_KEY, &Method::POST, HOST, PATH, &mut params);
        assert_eq!(params.len(), 1);
        assert!(params.get(SIGNATURE).is_some_and(|v| !v.is_empty()));
    }

    #[test]
    fn test_sign_is_idempotent() {
        let signer = RequestSigner::new();
        let mut params = fixed_params();
        signer.sign(SECRET_KEY, &Method::POST, HOST, PATH, &mut params);
        let first = params.get(SIGNATURE).map(str::to_string);
        signer.sign(SECRET_KEY, &Method::POST, HOST, PATH, &mut params);
        assert_eq!(params.get(SIGNATURE).map(str::to_string), first);
    }
}
