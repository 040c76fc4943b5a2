/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::primitives::ByteStream;

use crate::error::{self, Error};

/// Upload a local file with `PutObject`. The local existence check runs
/// before any service contact so a bad path never generates traffic.
pub(crate) async fn upload_file(
    client: &aws_sdk_s3::Client,
    local_path: &str,
    bucket: &str,
    destination_key: &str,
) -> Result<(), Error> {
    match tokio::fs::metadata(local_path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Err(error::local_file_not_found(local_path)),
    }

    tracing::debug!(bucket, key = destination_key, path = local_path, "uploading object");

    let body = ByteStream::from_path(local_path)
        .await
        .map_err(|err| error::unknown("upload file", err))?;

    client
        .put_object()
        .bucket(bucket)
        .key(destination_key)
        .body(body)
        .send()
        .await
        .map_err(|err| error::translate(err, "upload file", Some(bucket)))?;
    Ok(())
}
