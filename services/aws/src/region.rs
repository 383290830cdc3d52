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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use awssign_core::{Error, Result};

/// Region is a geographic deployment of AWS services.
///
/// The table is fixed at build time. Every region maps to exactly one DNS
/// fragment; the default region [`Region::UsEast1`] maps to an empty one so that
/// its hosts are bare service names like `s3.amazonaws.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// US East (Northern Virginia), the default region.
    #[default]
    UsEast1,
    /// US West (Northern California)
    UsWest1,
    /// US West (Oregon)
    UsWest2,
    /// EU (Ireland)
    EuWest1,
    /// Asia Pacific (Singapore)
    ApSoutheast1,
    /// Asia Pacific (Tokyo)
    ApNortheast1,
    /// South America (Sao Paulo)
    SaEast1,
}

/// RegionInfo is the resolved table entry of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInfo {
    /// Fragment inserted between the service name and the domain, empty for
    /// the default region.
    pub dns_fragment: &'static str,
    /// Human readable name.
    pub display_name: &'static str,
}

impl Region {
    /// All supported regions.
    pub const ALL: [Region; 7] = [
        Region::UsEast1,
        Region::UsWest1,
        Region::UsWest2,
        Region::EuWest1,
        Region::ApSoutheast1,
        Region::ApNortheast1,
        Region::SaEast1,
    ];

    /// Region identifier, for example `us-west-1`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::UsEast1 => "us-east-1",
            Region::UsWest1 => "us-west-1",
            Region::UsWest2 => "us-west-2",
            Region::EuWest1 => "eu-west-1",
            Region::ApSoutheast1 => "ap-southeast-1",
            Region::ApNortheast1 => "ap-northeast-1",
            Region::SaEast1 => "sa-east-1",
        }
    }

    /// DNS fragment used to build regional hosts.
    pub fn dns_fragment(&self) -> &'static str {
        match self {
            Region::UsEast1 => "",
            region => region.as_str(),
        }
    }

    /// Human readable name of this region.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::UsEast1 => "Virginia",
            Region::UsWest1 => "California",
            Region::UsWest2 => "Oregon",
            Region::EuWest1 => "Ireland",
            Region::ApSoutheast1 => "Singapore",
            Region::ApNortheast1 => "Tokyo",
            Region::SaEast1 => "Sao Paulo",
        }
    }

    /// Table entry of this region.
    pub fn info(&self) -> RegionInfo {
        RegionInfo {
            dns_fragment: self.dns_fragment(),
            display_name: self.display_name(),
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::unknown_region(format!("region {s:?} is not supported")))
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a region identifier into its DNS fragment and display name.
pub fn resolve(region_id: &str) -> Result<RegionInfo> {
    region_id.parse::<Region>().map(|r| r.info())
}

#[cfg(test)]
mod tests {
    use super::*;
    use awssign_core::ErrorKind;
    use test_case::test_case;

    #[test_case("us-east-1", "", "Virginia")]
    #[test_case("us-west-1", "us-west-1", "California")]
    #[test_case("us-west-2", "us-west-2", "Oregon")]
    #[test_case("eu-west-1", "eu-west-1", "Ireland")]
    #[test_case("ap-southeast-1", "ap-southeast-1", "Singapore")]
    #[test_case("ap-northeast-1", "ap-northeast-1", "Tokyo")]
    #[test_case("sa-east-1", "sa-east-1", "Sao Paulo")]
    fn test_resolve(id: &str, fragment: &str, name: &str) {
        let info = resolve(id).expect("region must be known");
        assert_eq!(info.dns_fragment, fragment);
        assert_eq!(info.display_name, name);
    }

    #[test_case("mars-north-1")]
    #[test_case("US-EAST-1")]
    #[test_case("")]
    fn test_resolve_unknown(id: &str) {
        let err = resolve(id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownRegion);
    }

    #[test]
    fn test_round_trip_identifier() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn test_only_default_region_has_empty_fragment() {
        let empty: Vec<_> = Region::ALL
            .into_iter()
            .filter(|r| r.dns_fragment().is_empty())
            .collect();
        assert_eq!(empty, vec![Region::default()]);
    }
}
