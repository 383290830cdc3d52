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

//! Signing AWS REST API requests without effort.
//!
//! This crate re-exports [`awssign_core`] and, behind the default `aws`
//! feature, the AWS service signer.
//!
//! ```no_run
//! # fn main() -> awssign::Result<()> {
//! // Reads AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_ACCOUNT_ID and AWS_REGION.
//! let signer = awssign::aws::default_signer("s3")?;
//!
//! let mut parts = http::Request::get("https://s3.amazonaws.com/")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//! signer.sign_request(&mut parts)?;
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use awssign_core::*;

/// Create a context reading the process environment.
pub fn default_context() -> Context {
    Context::new().with_env(OsEnv)
}

#[cfg(feature = "aws")]
pub mod aws;
