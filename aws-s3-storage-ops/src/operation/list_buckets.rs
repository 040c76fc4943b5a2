/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};

pub(crate) async fn list_buckets(client: &aws_sdk_s3::Client) -> Result<Vec<String>, Error> {
    let resp = client
        .list_buckets()
        .send()
        .await
        .map_err(|err| error::translate(err, "list buckets", None))?;
    Ok(resp
        .buckets()
        .iter()
        .filter_map(|bucket| bucket.name().map(str::to_owned))
        .collect())
}
