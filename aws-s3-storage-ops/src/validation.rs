/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Request parameter validation.
//!
//! Every public operation validates its bucket name and role-tagged string
//! parameters here before the service client is touched, so malformed
//! requests never generate network traffic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{self, Error};

/// Allowed bucket name shape: starts and ends alphanumeric, lowercase
/// letters/digits with single interior hyphens, dot-separated labels of the
/// same shape. Length is checked separately.
static BUCKET_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9](-?[a-z0-9])*(\.[a-z0-9](-?[a-z0-9])*)*$").expect("valid regex")
});

/// Names shaped like a dotted IPv4 address (e.g. `192.168.5.4`) are reserved
/// by the provider and rejected even though they match the allowed shape.
static DOTTED_IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.){3}\d+$").expect("valid regex"));

const MIN_BUCKET_NAME_LEN: usize = 3;
const MAX_BUCKET_NAME_LEN: usize = 63;

/// The role a string parameter plays in an operation.
///
/// The same underlying string is validated differently depending on its
/// role: an empty [`Prefix`](ParamKind::Prefix) is a valid "no filter"
/// request, while an empty key or path is never meaningful.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParamKind {
    /// Key-prefix filter for listing; empty means "all objects"
    Prefix,
    /// Full object key
    Key,
    /// Local filesystem path of an upload source
    LocalPath,
    /// Object key of a copy/upload destination
    DestinationKey,
    /// Object key of a copy/download source
    SourceKey,
    /// Local filesystem path of a download destination
    LocalDestinationPath,
}

impl ParamKind {
    fn label(&self) -> &'static str {
        match self {
            ParamKind::Prefix => "prefix",
            ParamKind::Key => "key",
            ParamKind::LocalPath => "local path",
            ParamKind::DestinationKey => "destination key",
            ParamKind::SourceKey => "source key",
            ParamKind::LocalDestinationPath => "local destination path",
        }
    }

    fn allows_empty(&self) -> bool {
        matches!(self, ParamKind::Prefix)
    }
}

/// Validate a bucket name against the provider naming rules.
///
/// Checks run in order: absent, then empty, then format, so callers can
/// distinguish "missing" from "malformed". The format rules: 3-63
/// characters, lowercase letters/digits/dots/hyphens, must start and end
/// with a letter or digit, must not be shaped like a dotted IPv4 address.
pub fn validate_bucket_name(name: Option<&str>) -> Result<(), Error> {
    let name = match name {
        None => return Err(error::null_value("bucket name")),
        Some(name) => name,
    };
    if name.is_empty() {
        return Err(error::empty_value("bucket name"));
    }
    if name.len() < MIN_BUCKET_NAME_LEN
        || name.len() > MAX_BUCKET_NAME_LEN
        || DOTTED_IPV4.is_match(name)
        || !BUCKET_NAME.is_match(name)
    {
        return Err(error::invalid_bucket_name(name));
    }
    Ok(())
}

/// Validate a role-tagged string parameter.
///
/// Absent values fail for every kind. Empty values fail for every kind
/// except [`ParamKind::Prefix`].
pub fn validate_param(value: Option<&str>, kind: ParamKind) -> Result<(), Error> {
    let value = match value {
        None => return Err(error::null_value(kind.label())),
        Some(value) => value,
    };
    if value.is_empty() && !kind.allows_empty() {
        return Err(error::empty_value(kind.label()));
    }
    Ok(())
}
