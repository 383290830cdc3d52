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

use std::fmt::{Debug, Formatter};

use awssign_core::utils::Redact;
use awssign_core::{Context, Error, Result};
use log::debug;

use crate::constants::*;
use crate::{Credential, Region};

/// Config carries all the configuration for AWS services.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`], then [`ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`], then [`SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `account_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCOUNT_ID`]
    pub account_id: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`], then [`AWS_DEFAULT_REGION`]
    ///
    /// Falls back to `us-east-1` when unset everywhere.
    pub region: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Set account_id
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Set region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Load config from env.
    ///
    /// Values that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let first = |keys: &[&str]| keys.iter().find_map(|k| ctx.env_var(k));

        if self.access_key_id.is_none() {
            self.access_key_id = first(&[AWS_ACCESS_KEY_ID, ACCESS_KEY_ID]);
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = first(&[AWS_SECRET_ACCESS_KEY, SECRET_ACCESS_KEY]);
        }
        if self.account_id.is_none() {
            self.account_id = first(&[AWS_ACCOUNT_ID]);
        }
        if self.region.is_none() {
            self.region = first(&[AWS_REGION, AWS_DEFAULT_REGION]);
        }

        debug!("config loaded from env: {self:?}");
        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id.as_ref().map(Redact::from))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(Redact::from),
            )
            .field("account_id", &self.account_id)
            .field("region", &self.region)
            .finish()
    }
}

impl TryFrom<Config> for Credential {
    type Error = Error;

    fn try_from(cfg: Config) -> Result<Self> {
        let region = match cfg.region.as_deref() {
            Some(region) => region.parse()?,
            None => Region::default(),
        };
        let access_key_id = cfg
            .access_key_id
            .ok_or_else(|| Error::credential_invalid("access key id is not configured"))?;
        let secret_access_key = cfg
            .secret_access_key
            .ok_or_else(|| Error::credential_invalid("secret access key is not configured"))?;

        Credential::new(access_key_id, secret_access_key, cfg.account_id, region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awssign_core::{ErrorKind, StaticEnv};
    use std::collections::HashMap;

    fn ctx_with(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_config_from_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = ctx_with(&[
            (AWS_ACCESS_KEY_ID, "env_ak"),
            (AWS_SECRET_ACCESS_KEY, "env_sk"),
            (AWS_ACCOUNT_ID, "123456789012"),
            (AWS_REGION, "ap-northeast-1"),
        ]);

        let cred = Credential::try_from(Config::new().from_env(&ctx)).unwrap();
        assert_eq!(cred.access_key_id(), "env_ak");
        assert_eq!(cred.secret_access_key(), "env_sk");
        assert_eq!(cred.account_id(), Some("123456789012"));
        assert_eq!(cred.region(), Region::ApNortheast1);
    }

    #[test]
    fn test_config_legacy_env_names() {
        let ctx = ctx_with(&[
            (ACCESS_KEY_ID, "legacy_ak"),
            (SECRET_ACCESS_KEY, "legacy_sk"),
            (AWS_DEFAULT_REGION, "eu-west-1"),
        ]);

        let cfg = Config::new().from_env(&ctx);
        assert_eq!(cfg.access_key_id.as_deref(), Some("legacy_ak"));
        assert_eq!(cfg.secret_access_key.as_deref(), Some("legacy_sk"));
        assert_eq!(cfg.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_config_explicit_values_win() {
        let ctx = ctx_with(&[
            (AWS_ACCESS_KEY_ID, "env_ak"),
            (AWS_SECRET_ACCESS_KEY, "env_sk"),
            (AWS_REGION, "eu-west-1"),
        ]);

        let cfg = Config::new()
            .with_access_key_id("explicit_ak")
            .with_region("us-west-1")
            .from_env(&ctx);
        assert_eq!(cfg.access_key_id.as_deref(), Some("explicit_ak"));
        assert_eq!(cfg.secret_access_key.as_deref(), Some("env_sk"));
        assert_eq!(cfg.region.as_deref(), Some("us-west-1"));
    }

    #[test]
    fn test_config_default_region() {
        let cfg = Config::new()
            .with_access_key_id("ak")
            .with_secret_access_key("sk");

        let cred = Credential::try_from(cfg).unwrap();
        assert_eq!(cred.region(), Region::UsEast1);
    }

    #[test]
    fn test_config_invalid() {
        let missing_secret = Config::new().with_access_key_id("ak");
        assert_eq!(
            Credential::try_from(missing_secret).unwrap_err().kind(),
            ErrorKind::CredentialInvalid
        );

        let empty_key = Config::new()
            .with_access_key_id("")
            .with_secret_access_key("sk");
        assert_eq!(
            Credential::try_from(empty_key).unwrap_err().kind(),
            ErrorKind::CredentialInvalid
        );

        let unknown_region = Config::new()
            .with_access_key_id("ak")
            .with_secret_access_key("sk")
            .with_region("moon-1");
        assert_eq!(
            Credential::try_from(unknown_region).unwrap_err().kind(),
            ErrorKind::UnknownRegion
        );
    }

    #[test]
    fn test_config_debug_is_redacted() {
        let cfg = Config::new().with_secret_access_key("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
        let output = format!("{cfg:?}");
        assert!(output.contains("wJa***KEY"));
        assert!(!output.contains("K7MDENG"));
    }
}
