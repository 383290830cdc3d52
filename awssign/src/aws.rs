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

//! AWS service support with convenience APIs

// Re-export all AWS signing types
pub use awssign_aws::*;

use crate::{default_context, Context, Result};

/// Create a signer for `service` with credentials from the process environment.
pub fn default_signer(service: &str) -> Result<RequestSigner> {
    signer_from_context(&default_context(), service)
}

/// Create a signer for `service` with credentials loaded through `ctx`.
pub fn signer_from_context(ctx: &Context, service: &str) -> Result<RequestSigner> {
    let cred = Credential::try_from(Config::new().from_env(ctx))?;
    Ok(RequestSigner::new(service, cred))
}
