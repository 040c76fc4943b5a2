/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::head_object::HeadObjectError;

use crate::error::{self, Error};
use crate::types::ObjectMetadata;

pub(crate) async fn get_file_info(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<ObjectMetadata, Error> {
    let resp = match client.head_object().bucket(bucket).key(key).send().await {
        Ok(resp) => resp,
        Err(err)
            if err
                .as_service_error()
                .is_some_and(HeadObjectError::is_not_found) =>
        {
            return Err(error::object_not_found("get file info", key, err));
        }
        Err(err) => return Err(error::translate(err, "get file info", Some(bucket))),
    };

    Ok(ObjectMetadata {
        content_length: resp.content_length(),
        last_modified: resp.last_modified().map(|dt| dt.to_string()),
        content_type: resp.content_type().map(str::to_owned),
        e_tag: resp.e_tag().map(str::to_owned),
    })
}
