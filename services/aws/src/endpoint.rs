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

use awssign_core::Result;

use crate::constants::AMAZONAWS_DOMAIN;
use crate::Region;

/// Resolve the host serving `service` in `region`.
///
/// - default region: `<service>.amazonaws.com`
/// - others: `<service>.<region>.amazonaws.com`
///
/// No network access happens here, this only computes a name.
pub fn resolve_host(service: &str, region: Region) -> String {
    match region.dns_fragment() {
        "" => format!("{service}.{AMAZONAWS_DOMAIN}"),
        fragment => format!("{service}.{fragment}.{AMAZONAWS_DOMAIN}"),
    }
}

/// Resolve the host serving `service` in the region named by `region_id`.
///
/// Fails with [`ErrorKind::UnknownRegion`](awssign_core::ErrorKind::UnknownRegion)
/// if the region is not in the table.
pub fn resolve_host_for(service: &str, region_id: &str) -> Result<String> {
    Ok(resolve_host(service, region_id.parse()?))
}
