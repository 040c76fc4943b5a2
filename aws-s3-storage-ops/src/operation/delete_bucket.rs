/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};

/// Delete a bucket. The service rejects the call while the bucket still
/// holds objects; that conflict surfaces wrapped, with the original failure
/// as source.
pub(crate) async fn delete_bucket(client: &aws_sdk_s3::Client, bucket: &str) -> Result<(), Error> {
    client
        .delete_bucket()
        .bucket(bucket)
        .send()
        .await
        .map_err(|err| error::translate(err, "delete bucket", Some(bucket)))?;
    Ok(())
}
