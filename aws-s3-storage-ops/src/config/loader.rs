/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::Region;
use aws_credential_types::Credentials;

use crate::config::Builder;
use crate::Config;

/// Load storage operations [`Config`] from the environment.
///
/// By default the standard AWS environment (profile, environment variables,
/// IMDS) supplies region and credentials. S3-compatible deployments such as
/// MinIO can override the endpoint and supply static credentials:
///
/// ```no_run
/// # async fn example() {
/// let config = aws_s3_storage_ops::from_env()
///     .endpoint_url("http://localhost:9000")
///     .region("us-east-1")
///     .credentials("minioadmin", "minioadmin")
///     .force_path_style(true)
///     .load()
///     .await;
/// # }
/// ```
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    endpoint_url: Option<String>,
    region: Option<String>,
    credentials: Option<Credentials>,
    force_path_style: bool,
}

impl ConfigLoader {
    /// Override the service endpoint (e.g. `http://localhost:9000` for MinIO).
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Override the service region (e.g. `us-east-1`).
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Use static credentials instead of the default provider chain.
    pub fn credentials(mut self, access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(
            access_key.into(),
            secret_key.into(),
            None,
            None,
            "aws-s3-storage-ops",
        ));
        self
    }

    /// Address buckets by path rather than virtual host. Most S3-compatible
    /// deployments behind a single hostname require this.
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the
    /// override values will be used. Otherwise, the default values for each
    /// field will be provided.
    pub async fn load(self) -> Config {
        let shared_config = aws_config::from_env().load().await;

        let mut s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(self.force_path_style);
        if let Some(endpoint_url) = self.endpoint_url {
            s3_config = s3_config.endpoint_url(endpoint_url);
        }
        if let Some(region) = self.region {
            s3_config = s3_config.region(Region::new(region));
        }
        if let Some(credentials) = self.credentials {
            s3_config = s3_config.credentials_provider(credentials);
        }

        let client = aws_sdk_s3::Client::from_conf(s3_config.build());
        self.builder.client(client).build()
    }
}
