/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_smithy_runtime_api::http::Response;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    resource: Option<String>,
    source: Option<BoxError>,
}

/// Closed taxonomy of storage operation errors.
///
/// Validation kinds (`NullValue`, `EmptyValue`, `InvalidFormat`,
/// `LocalFileNotFound`) are raised before any service contact. The remaining
/// kinds are raised after a service call and always carry the original
/// failure as [`source`](std::error::Error::source).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A required parameter was absent
    NullValue,

    /// A required parameter was the empty string
    EmptyValue,

    /// A bucket name does not follow the provider naming rules
    InvalidFormat,

    /// The requested bucket does not exist
    BucketNotFound,

    /// The requested object does not exist
    ObjectNotFound,

    /// The bucket name is already taken (possibly by the caller)
    BucketAlreadyExists,

    /// The bucket still contains objects and cannot be deleted
    BucketNotEmpty,

    /// The local source file for an upload does not exist
    LocalFileNotFound,

    /// Any other failure, service-side or local, wrapped unchanged
    Unknown,
}

impl Error {
    fn new(kind: ErrorKind, message: String) -> Error {
        Error {
            kind,
            message,
            resource: None,
            source: None,
        }
    }

    fn with_resource(mut self, resource: impl Into<String>) -> Error {
        self.resource = Some(resource.into());
        self
    }

    fn with_source(mut self, source: impl Into<BoxError>) -> Error {
        self.source = Some(source.into());
        self
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The parameter or resource name the error refers to, if any.
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.source.as_ref() {
            Some(source) => Some(source.as_ref()),
            None => None,
        }
    }
}

pub(crate) fn null_value(param: &'static str) -> Error {
    Error::new(ErrorKind::NullValue, format!("{param} cannot be null")).with_resource(param)
}

pub(crate) fn empty_value(param: &'static str) -> Error {
    Error::new(ErrorKind::EmptyValue, format!("{param} cannot be empty")).with_resource(param)
}

pub(crate) fn invalid_bucket_name(name: &str) -> Error {
    Error::new(
        ErrorKind::InvalidFormat,
        format!("invalid bucket name: {name}. It must follow S3 naming rules"),
    )
    .with_resource(name)
}

pub(crate) fn local_file_not_found(path: &str) -> Error {
    Error::new(
        ErrorKind::LocalFileNotFound,
        format!("file does not exist: {path}"),
    )
    .with_resource(path)
}

/// The bucket name is already taken, by the caller or anyone else; a fatal
/// conflict, never retried.
pub(crate) fn bucket_already_exists<E>(bucket: &str, source: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(
        ErrorKind::BucketAlreadyExists,
        format!("bucket already exists: {bucket}"),
    )
    .with_resource(bucket)
    .with_source(source)
}

/// An object was reported missing by the service during `operation`.
pub(crate) fn object_not_found<E>(operation: &'static str, key: &str, source: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(
        ErrorKind::ObjectNotFound,
        format!("object not found during {operation}: {key}"),
    )
    .with_resource(key)
    .with_source(source)
}

/// A failure that is not a classified service error (local I/O faults,
/// stream construction failures, and the like). Never discarded silently.
pub(crate) fn unknown<E>(operation: &'static str, err: E) -> Error
where
    E: Into<BoxError>,
{
    let err = err.into();
    Error::new(ErrorKind::Unknown, format!("failed to {operation}: {err}")).with_source(err)
}

/// Maps a service failure into the taxonomy, dispatching on the error code
/// carried in the response metadata. The original failure is always kept as
/// the source so no translation step is lossy.
pub(crate) fn translate<E>(
    err: SdkError<E, Response>,
    operation: &'static str,
    resource: Option<&str>,
) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let kind = match err.code() {
        Some("NoSuchBucket") => ErrorKind::BucketNotFound,
        Some("NoSuchKey" | "NotFound") => ErrorKind::ObjectNotFound,
        Some("BucketAlreadyExists" | "BucketAlreadyOwnedByYou") => ErrorKind::BucketAlreadyExists,
        _ => ErrorKind::Unknown,
    };

    let name = resource.unwrap_or("<unspecified>");
    let message = match kind {
        ErrorKind::BucketNotFound => format!("bucket not found during {operation}: {name}"),
        ErrorKind::ObjectNotFound => format!("object not found during {operation}: {name}"),
        ErrorKind::BucketAlreadyExists => format!("bucket already exists: {name}"),
        _ => {
            let detail = err
                .message()
                .unwrap_or("unexpected service failure")
                .to_owned();
            format!("failed to {operation} for resource {name}: {detail}")
        }
    };

    let mut translated = Error::new(kind, message).with_source(err);
    if let Some(resource) = resource {
        translated = translated.with_resource(resource);
    }
    translated
}
