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

use awssign_core::hash::base64_hmac_sha1;
use awssign_core::{Error, Result};

/// Sign the string to sign with the secret access key.
///
/// The signature is a base64 encoded HMAC-SHA1, identical inputs always
/// produce an identical signature.
///
/// Fails with [`ErrorKind::SigningFailed`](awssign_core::ErrorKind::SigningFailed)
/// if the secret key is empty.
pub fn sign(secret_access_key: &str, string_to_sign: &str) -> Result<String> {
    if secret_access_key.is_empty() {
        return Err(Error::signing_failed("secret access key is empty"));
    }

    Ok(base64_hmac_sha1(
        secret_access_key.as_bytes(),
        string_to_sign.as_bytes(),
    ))
}
