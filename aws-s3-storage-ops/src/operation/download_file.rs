/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::get_object::GetObjectError;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{self, Error};

/// Stream an object to a local file with `GetObject`. Local I/O failures
/// after the service call are wrapped unchanged.
pub(crate) async fn download_file(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    source_key: &str,
    local_destination_path: &str,
) -> Result<(), Error> {
    tracing::debug!(bucket, key = source_key, path = local_destination_path, "downloading object");

    let resp = match client
        .get_object()
        .bucket(bucket)
        .key(source_key)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(err)
            if err
                .as_service_error()
                .is_some_and(GetObjectError::is_no_such_key) =>
        {
            return Err(error::object_not_found("download file", source_key, err));
        }
        Err(err) => return Err(error::translate(err, "download file", Some(bucket))),
    };

    let mut file = fs::File::create(local_destination_path)
        .await
        .map_err(|err| error::unknown("download file", err))?;
    let mut body = resp.body.into_async_read();
    tokio::io::copy(&mut body, &mut file)
        .await
        .map_err(|err| error::unknown("download file", err))?;
    file.flush()
        .await
        .map_err(|err| error::unknown("download file", err))?;
    Ok(())
}
