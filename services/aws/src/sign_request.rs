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

use std::collections::HashSet;

use awssign_core::time::{format_http_date, now, DateTime};
use awssign_core::Result;
use http::header::{AUTHORIZATION, HOST};
use http::HeaderValue;
use log::debug;
use once_cell::sync::Lazy;

use crate::constants::*;
use crate::endpoint::resolve_host;
use crate::sign::sign;
use crate::string_to_sign::{RequestDescriptor, SubResource};
use crate::Credential;

/// RequestSigner signs requests of one service with one credential.
///
/// It owns its credential and never mutates it, share it freely between
/// threads.
///
/// - [Signing and Authenticating REST Requests](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    credential: Credential,
    bucket: Option<String>,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer for `service`, like `s3` or `sns`.
    pub fn new(service: &str, credential: Credential) -> Self {
        Self {
            service: service.to_string(),
            credential,
            bucket: None,
            time: None,
        }
    }

    /// Address requests to `bucket` with virtual hosted style.
    pub fn with_bucket(mut self, bucket: &str) -> Self {
        self.bucket = Some(bucket.to_string());
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Credential used by this signer.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Host requests should be sent to.
    pub fn host(&self) -> String {
        let host = resolve_host(&self.service, self.credential.region());
        match &self.bucket {
            Some(bucket) => format!("{bucket}.{host}"),
            None => host,
        }
    }

    /// Build the string to sign of `req`.
    pub fn string_to_sign(&self, req: &RequestDescriptor) -> String {
        req.string_to_sign()
    }

    /// Compute the signature of `req`.
    pub fn signature(&self, req: &RequestDescriptor) -> Result<String> {
        sign(self.credential.secret_access_key(), &req.string_to_sign())
    }

    /// Compute the `Authorization` header value of `req`: `AWS <AccessKeyId>:<Signature>`.
    pub fn authorization(&self, req: &RequestDescriptor) -> Result<String> {
        let signature = self.signature(req)?;
        Ok(format!(
            "AWS {}:{}",
            self.credential.access_key_id(),
            signature
        ))
    }

    /// Sign the request in place.
    ///
    /// `Host` is always replaced, `Date` is only filled when missing so callers
    /// can sign with their own timestamp.
    pub fn sign_request(&self, parts: &mut http::request::Parts) -> Result<()> {
        let host = self.host();
        debug!("resolved host: {host}");
        parts.headers.insert(HOST, host.parse()?);
        if !parts.headers.contains_key(DATE) {
            let now = self.time.unwrap_or_else(now);
            parts
                .headers
                .insert(http::header::DATE, format_http_date(now).parse()?);
        }

        let req = self.build_descriptor(parts)?;
        parts.headers.insert(AUTHORIZATION, {
            let mut value: HeaderValue = self.authorization(&req)?.parse()?;
            value.set_sensitive(true);

            value
        });

        Ok(())
    }

    fn build_descriptor(&self, parts: &http::request::Parts) -> Result<RequestDescriptor> {
        let mut req = RequestDescriptor::new(parts.method.as_str(), parts.uri.path());
        if let Some(bucket) = &self.bucket {
            req = req.with_bucket(bucket);
        }

        for key in [CONTENT_MD5, CONTENT_TYPE, DATE] {
            if let Some(value) = parts.headers.get(key) {
                req = req.with_header(key, value.to_str()?);
            }
        }

        if let Some(query) = parts.uri.query() {
            for (name, value) in form_urlencoded::parse(query.as_bytes()) {
                if !is_sub_resource(&name) {
                    continue;
                }
                req = req.with_subresource(if value.is_empty() {
                    SubResource::new(name)
                } else {
                    SubResource::with_value(name, value)
                });
            }
        }

        Ok(req)
    }
}

fn is_sub_resource(param: &str) -> bool {
    SUBRESOURCES.contains(param)
}

// Please attention: the subresources are case sensitive.
static SUBRESOURCES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "acl",
        "cors",
        "delete",
        "lifecycle",
        "location",
        "logging",
        "notification",
        "partNumber",
        "policy",
        "requestPayment",
        "response-cache-control",
        "response-content-disposition",
        "response-content-encoding",
        "response-content-language",
        "response-content-type",
        "response-expires",
        "restore",
        "tagging",
        "torrent",
        "uploadId",
        "uploads",
        "versionId",
        "versioning",
        "versions",
        "website",
    ])
});
