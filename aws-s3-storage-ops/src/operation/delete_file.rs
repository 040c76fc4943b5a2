/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};

/// Delete a single object. `DeleteObject` is idempotent at the service:
/// deleting an already-absent key reports success.
pub(crate) async fn delete_file(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<(), Error> {
    client
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|err| error::translate(err, "delete file", Some(bucket)))?;
    Ok(())
}
