/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::head_bucket::HeadBucketError;

use crate::error::{self, Error};

/// Probe a bucket with `HeadBucket`. Not-found is the negative answer, not
/// an error.
pub(crate) async fn bucket_exists(
    client: &aws_sdk_s3::Client,
    bucket: &str,
) -> Result<bool, Error> {
    match client.head_bucket().bucket(bucket).send().await {
        Ok(_) => Ok(true),
        Err(err)
            if err
                .as_service_error()
                .is_some_and(HeadBucketError::is_not_found) =>
        {
            Ok(false)
        }
        Err(err) => Err(error::translate(err, "check bucket existence", Some(bucket))),
    }
}
