/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::head_object::HeadObjectError;

use crate::error::{self, Error};

/// Probe an object with `HeadObject`. A not-found response is the negative
/// answer, not an error; any other failure propagates translated.
pub(crate) async fn file_exists(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<bool, Error> {
    match client.head_object().bucket(bucket).key(key).send().await {
        Ok(_) => Ok(true),
        Err(err)
            if err
                .as_service_error()
                .is_some_and(HeadObjectError::is_not_found) =>
        {
            Ok(false)
        }
        Err(err) => Err(error::translate(err, "check file existence", Some(bucket))),
    }
}
