/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};

/// Server-side copy with `CopyObject`. No object data moves through this
/// process.
pub(crate) async fn copy_file(
    client: &aws_sdk_s3::Client,
    source_bucket: &str,
    source_key: &str,
    dest_bucket: &str,
    dest_key: &str,
) -> Result<(), Error> {
    let source = format!("{source_bucket}/{source_key}");
    client
        .copy_object()
        .copy_source(&source)
        .bucket(dest_bucket)
        .key(dest_key)
        .send()
        .await
        .map_err(|err| error::translate(err, "copy file", Some(&source)))?;
    Ok(())
}
