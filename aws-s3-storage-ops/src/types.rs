/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

/// Metadata describing a single object, produced by a successful
/// [`get_file_info`](crate::Client::get_file_info) call.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ObjectMetadata {
    /// Size of the object body in bytes
    pub content_length: Option<i64>,
    /// Creation date of the object, formatted as reported by the service
    pub last_modified: Option<String>,
    /// MIME type describing the object data
    pub content_type: Option<String>,
    /// Opaque content-identity token for the object
    pub e_tag: Option<String>,
}

impl ObjectMetadata {
    /// Render the metadata as the fixed string mapping
    /// (`Content-Length`, `Last-Modified`, `Content-Type`, `ETag`).
    ///
    /// Fields the service did not report are omitted from the map.
    pub fn to_map(&self) -> HashMap<&'static str, String> {
        let mut map = HashMap::new();
        if let Some(content_length) = self.content_length {
            map.insert("Content-Length", content_length.to_string());
        }
        if let Some(last_modified) = &self.last_modified {
            map.insert("Last-Modified", last_modified.clone());
        }
        if let Some(content_type) = &self.content_type {
            map.insert("Content-Type", content_type.clone());
        }
        if let Some(e_tag) = &self.e_tag {
            map.insert("ETag", e_tag.clone());
        }
        map
    }
}
