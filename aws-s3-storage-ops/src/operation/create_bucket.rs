/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::create_bucket::CreateBucketError;

use crate::error::{self, Error};

/// Create a bucket. A name taken by anyone, including the caller, is a
/// fatal conflict and is never retried.
pub(crate) async fn create_bucket(client: &aws_sdk_s3::Client, bucket: &str) -> Result<(), Error> {
    match client.create_bucket().bucket(bucket).send().await {
        Ok(_) => Ok(()),
        Err(err)
            if err.as_service_error().is_some_and(|e: &CreateBucketError| {
                e.is_bucket_already_exists() || e.is_bucket_already_owned_by_you()
            }) =>
        {
            Err(error::bucket_already_exists(bucket, err))
        }
        Err(err) => Err(error::translate(err, "create bucket", Some(bucket))),
    }
}
