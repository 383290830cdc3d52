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

//! Endpoint resolution and REST request signing for AWS services.
//!
//! ## Example
//!
//! ```
//! use awssign_aws::{Credential, Region, RequestDescriptor, RequestSigner, SubResource};
//!
//! # fn main() -> awssign_core::Result<()> {
//! let cred = Credential::new("access_key_id", "secret_access_key", None, Region::UsWest1)?;
//! let signer = RequestSigner::new("s3", cred);
//! assert_eq!(signer.host(), "s3.us-west-1.amazonaws.com");
//!
//! let req = RequestDescriptor::new("GET", "/")
//!     .with_bucket("bulk")
//!     .with_header("Date", "Tue, 25 Oct 2011 03:09:21 UTC")
//!     .with_subresource(SubResource::new("versioning"));
//! assert_eq!(
//!     signer.authorization(&req)?,
//!     "AWS access_key_id:zxmJifiGCl8WgMu2XLaiEx0o5Wo="
//! );
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod region;
pub use region::{resolve as resolve_region, Region, RegionInfo};

mod credential;
pub use credential::Credential;

mod config;
pub use config::Config;

mod endpoint;
pub use endpoint::{resolve_host, resolve_host_for};

mod string_to_sign;
pub use string_to_sign::{build_string_to_sign, RequestDescriptor, SubResource};

mod sign;
pub use sign::sign;

mod sign_request;
pub use sign_request::RequestSigner;
