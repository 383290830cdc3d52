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

//! Core components for signing AWS REST API requests.
//!
//! This crate provides the foundational types shared by the awssign service crates.
//!
//! ## Overview
//!
//! - **Error**: A single error type with an [`ErrorKind`] describing which validation failed
//! - **Context**: A container holding the [`Env`] implementation used to load configuration
//! - **Utilities**: Hashing, http date formatting and secret redaction helpers
//!
//! ## Example
//!
//! ```
//! use awssign_core::hash::base64_hmac_sha1;
//! use awssign_core::{Context, StaticEnv};
//! use std::collections::HashMap;
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from([("AWS_REGION".to_string(), "us-west-1".to_string())]),
//! });
//! assert_eq!(ctx.env_var("AWS_REGION").as_deref(), Some("us-west-1"));
//!
//! let signature = base64_hmac_sha1(b"secret", b"GET\n\n\n\n/");
//! assert_eq!(signature.len(), 28);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
