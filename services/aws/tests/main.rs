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
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use awssign_aws::{
    build_string_to_sign, resolve_host, sign, Config, Credential, Region, RequestDescriptor,
    RequestSigner, SubResource,
};
use awssign_core::{Context, ErrorKind, StaticEnv};
use pretty_assertions::assert_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_create_client() -> Result<()> {
    init();

    let cred = Credential::new(
        "access_key_id",
        "secret_access_key",
        Some("aws_account_id".to_string()),
        Region::UsWest1,
    )?;
    let signer = RequestSigner::new("s3", cred);

    assert_eq!(signer.credential().access_key_id(), "access_key_id");
    assert_eq!(signer.credential().secret_access_key(), "secret_access_key");
    assert_eq!(signer.credential().account_id(), Some("aws_account_id"));
    assert_eq!(signer.credential().region_name(), "California");
    Ok(())
}

#[test]
fn test_all_endpoints() -> Result<()> {
    init();

    let cases = vec![
        (Region::UsEast1, "s3.amazonaws.com"),
        (Region::UsWest1, "s3.us-west-1.amazonaws.com"),
        (Region::EuWest1, "s3.eu-west-1.amazonaws.com"),
        (Region::ApSoutheast1, "s3.ap-southeast-1.amazonaws.com"),
        (Region::ApNortheast1, "s3.ap-northeast-1.amazonaws.com"),
    ];

    for (region, expected) in cases {
        let cred = Credential::new("access_key_id", "secret_access_key", None, region)?;
        assert_eq!(RequestSigner::new("s3", cred).host(), expected);
        assert_eq!(resolve_host("s3", region), expected);
    }
    Ok(())
}

#[test]
fn test_string_to_sign_then_sign() -> Result<()> {
    init();

    let headers = HashMap::from([(
        "Date".to_string(),
        "Mon, 26 Oct 2011 16:07:36 Z".to_string(),
    )]);

    let empty = build_string_to_sign(None, None, "GET", "/", &HashMap::new(), &[]);
    assert_eq!(empty, "GET\n\n\n\n/");

    let common = build_string_to_sign(Some("bulk"), None, "POST", "/", &headers, &[]);
    assert_eq!(common, "POST\n\n\nMon, 26 Oct 2011 16:07:36 Z\n/bulk/");

    let versioning = build_string_to_sign(
        Some("bulk"),
        None,
        "POST",
        "/",
        &headers,
        &[SubResource::new("versioning")],
    );
    assert_eq!(
        versioning,
        "POST\n\n\nMon, 26 Oct 2011 16:07:36 Z\n/bulk/?versioning"
    );

    for s in [empty, common, versioning] {
        assert_eq!(
            sign("secret_access_key", &s)?,
            sign("secret_access_key", &s)?
        );
    }
    Ok(())
}

#[test]
fn test_signer_from_env() -> Result<()> {
    init();

    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            ("ACCESS_KEY_ID".to_string(), "access_key_id".to_string()),
            ("SECRET_ACCESS_KEY".to_string(), "secret_access_key".to_string()),
            ("AWS_ACCOUNT_ID".to_string(), "aws_account_id".to_string()),
        ]),
    });

    let cred = Credential::try_from(Config::new().from_env(&ctx))?;
    let signer = RequestSigner::new("sns", cred);
    assert_eq!(signer.host(), "sns.amazonaws.com");

    let req = RequestDescriptor::new("GET", "/")
        .with_header("Date", "Tue, 25 Oct 2011 03:09:21 UTC");
    assert_eq!(signer.signature(&req)?, "OFs3nLlSvlN6EaeNy/IluZpS+E8=");
    Ok(())
}

#[test]
fn test_failures_happen_before_sending() {
    init();

    let err = Credential::new("", "secret_access_key", None, Region::UsEast1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);

    let err = "eu-central-9".parse::<Region>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownRegion);

    let err = sign("", "GET\n\n\n\n/").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SigningFailed);
}

#[test]
fn test_concurrent_signing() -> Result<()> {
    init();

    let cred = Credential::new("access_key_id", "secret_access_key", None, Region::UsWest1)?;
    let signer = Arc::new(RequestSigner::new("s3", cred));
    let req = RequestDescriptor::new("GET", "/")
        .with_bucket("bulk")
        .with_header("Date", "Tue, 25 Oct 2011 03:09:21 UTC")
        .with_subresource(SubResource::new("versioning"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let signer = signer.clone();
            let req = req.clone();
            thread::spawn(move || signer.signature(&req).map_err(anyhow::Error::from))
        })
        .collect();

    for handle in handles {
        let sig = handle.join().expect("signing thread must not panic")?;
        assert_eq!(sig, "zxmJifiGCl8WgMu2XLaiEx0o5Wo=");
    }
    Ok(())
}
