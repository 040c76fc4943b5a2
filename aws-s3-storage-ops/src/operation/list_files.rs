/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use tracing::Instrument;

use crate::error::{self, Error};

/// List the keys of every object under `prefix`, in the order the service
/// returns them. An empty prefix lists the whole bucket.
pub(crate) async fn list_files(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, Error> {
    let mut pages = client
        .list_objects_v2()
        .bucket(bucket)
        .prefix(prefix)
        .into_paginator()
        .send();

    let mut keys = Vec::new();
    loop {
        let page = pages
            .next()
            .instrument(tracing::debug_span!("send-list-objects-v2"))
            .await;
        let page = match page {
            None => break,
            Some(page) => page.map_err(|err| error::translate(err, "list files", Some(bucket)))?,
        };
        keys.extend(
            page.contents()
                .iter()
                .filter_map(|obj| obj.key().map(str::to_owned)),
        );
    }
    Ok(keys)
}
