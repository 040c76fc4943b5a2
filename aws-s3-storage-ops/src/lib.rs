/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Validated bucket/object operations for Amazon S3 compatible stores.
//!
//! This crate is a thin facade over the base Amazon S3 [service API]. It
//! exposes a small, vendor-neutral set of bucket and object operations,
//! rejects malformed requests before any network call is made, and maps
//! service failures into a single closed [`ErrorKind`](error::ErrorKind)
//! taxonomy so callers never have to match on SDK error types.
//!
//! [service API]: https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations_Amazon_Simple_Storage_Service.html
//!
//! # Examples
//!
//! Load the default configuration:
//!
//! ```no_run
//! # async fn example() {
//! let config = aws_s3_storage_ops::from_env().load().await;
//! let client = aws_s3_storage_ops::Client::new(config);
//! # }
//! ```
//!
//! Upload a local file and list the bucket:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_storage_ops::error::Error> {
//! let config = aws_s3_storage_ops::from_env().load().await;
//! let client = aws_s3_storage_ops::Client::new(config);
//!
//! client
//!     .upload_file("/tmp/report.csv", "my-bucket", "reports/report.csv")
//!     .await?;
//!
//! let keys = client.list_files("my-bucket", Some("reports/")).await?;
//! for key in keys {
//!     println!("{key}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`list_files`](crate::Client::list_files) - list object keys, optionally under a prefix
//! * [`file_exists`](crate::Client::file_exists) - check whether an object exists
//! * [`upload_file`](crate::Client::upload_file) - upload a local file to a bucket
//! * [`download_file`](crate::Client::download_file) - download an object to a local path
//! * [`delete_file`](crate::Client::delete_file) - delete a single object
//! * [`copy_file`](crate::Client::copy_file) - server-side copy between locations
//! * [`move_file`](crate::Client::move_file) - relocate an object (copy then delete)
//! * [`get_file_info`](crate::Client::get_file_info) - fetch object metadata
//! * [`list_buckets`](crate::Client::list_buckets) - list bucket names
//! * [`bucket_exists`](crate::Client::bucket_exists) - check whether a bucket exists
//! * [`create_bucket`](crate::Client::create_bucket) - create a bucket
//! * [`delete_bucket`](crate::Client::delete_bucket) - delete an empty bucket

/// Error types emitted by `aws-s3-storage-ops`
pub mod error;

/// Common types used by `aws-s3-storage-ops`
pub mod types;

/// Request parameter validation
pub mod validation;

/// Storage operations client
pub mod client;

/// Storage operations
mod operation;

/// Client configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
