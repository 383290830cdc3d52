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

use std::collections::HashMap;

use log::debug;

use crate::constants::*;

/// SubResource is a query modifier folded into the canonicalized resource,
/// like `?versioning` or `?partNumber=1`.
///
/// Values are kept literal, percent-encode them before construction if needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubResource {
    /// Name of the subresource. Entries without a name are skipped.
    pub name: Option<String>,
    /// Optional value, rendered as `name=value`.
    pub value: Option<String>,
}

impl SubResource {
    /// Create a subresource without value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: None,
        }
    }

    /// Create a subresource carrying a value.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// RequestDescriptor holds the security relevant parts of a single request.
///
/// Header keys are matched case sensitively against `Content-MD5`,
/// `Content-Type` and `Date`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method verb, like `GET`.
    pub method: String,
    /// Resource path, starting with `/`.
    pub path: String,
    /// Bucket or namespace qualifier.
    pub bucket: Option<String>,
    /// Path inside the bucket, replaces `path` when a bucket is set.
    pub sub_path: Option<String>,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Subresources of the request.
    pub subresources: Vec<SubResource>,
}

impl RequestDescriptor {
    /// Create a descriptor for `method` on `path`.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the bucket qualifier.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the path inside the bucket.
    pub fn with_sub_path(mut self, sub_path: impl Into<String>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a subresource.
    pub fn with_subresource(mut self, subresource: SubResource) -> Self {
        self.subresources.push(subresource);
        self
    }

    /// Build the string to sign of this request.
    pub fn string_to_sign(&self) -> String {
        build_string_to_sign(
            self.bucket.as_deref(),
            self.sub_path.as_deref(),
            &self.method,
            &self.path,
            &self.headers,
            &self.subresources,
        )
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// CanonicalizedResource;
/// ```
///
/// The output is byte exact: the remote service computes the same string and
/// compares signatures, so any difference only shows up as a rejected request.
pub fn build_string_to_sign(
    bucket: Option<&str>,
    sub_path: Option<&str>,
    method: &str,
    path: &str,
    headers: &HashMap<String, String>,
    subresources: &[SubResource],
) -> String {
    let header = |key: &str| headers.get(key).map(String::as_str).unwrap_or_default();

    let mut s = String::new();
    s.push_str(method);
    s.push('\n');
    s.push_str(header(CONTENT_MD5));
    s.push('\n');
    s.push_str(header(CONTENT_TYPE));
    s.push('\n');
    s.push_str(header(DATE));
    s.push('\n');
    s.push_str(&canonicalize_resource(bucket, sub_path, path));
    s.push_str(&canonicalize_subresources(subresources));

    debug!("string to sign: {}", &s);
    s
}

fn canonicalize_resource(bucket: Option<&str>, sub_path: Option<&str>, path: &str) -> String {
    let strip = |p: &str| p.strip_prefix('/').unwrap_or(p).to_string();

    match bucket.filter(|b| !b.is_empty()) {
        Some(bucket) => {
            let rest = match sub_path.filter(|p| !p.is_empty()) {
                Some(sub_path) => strip(sub_path),
                None => strip(path),
            };
            format!("/{bucket}/{rest}")
        }
        None => format!("/{}", strip(path)),
    }
}

/// Sorted by name (then value) and joined by `&` behind a single `?`.
fn canonicalize_subresources(subresources: &[SubResource]) -> String {
    let mut params: Vec<(&str, Option<&str>)> = subresources
        .iter()
        .filter_map(|sr| sr.name.as_deref().map(|name| (name, sr.value.as_deref())))
        .collect();
    if params.is_empty() {
        return String::new();
    }
    params.sort_unstable();

    let joined = params
        .into_iter()
        .map(|(name, value)| match value {
            Some(value) => format!("{name}={value}"),
            None => name.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}
