/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::ObjectMetadata;
use crate::validation::{self, ParamKind};
use crate::{operation, Config};

/// Storage operations client for Amazon S3 compatible object stores.
///
/// Every operation validates its parameters before the service client is
/// touched; a request that fails validation generates zero network traffic.
/// Service failures surface as [`Error`](crate::error::Error) values carrying
/// a closed [`ErrorKind`](crate::error::ErrorKind) and the original failure
/// as source. The client performs no retries of its own; transient failures
/// surface immediately for the caller to decide on.
///
/// The client is cheap to clone and safe to share across tasks. It holds no
/// state beyond the shared service handle and imposes no ordering between
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct Client {
    handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, currently just the config.
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: Config,
}

impl Client {
    /// Creates a new client from a storage operations config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    fn s3(&self) -> &aws_sdk_s3::Client {
        self.handle.config.client()
    }

    /// List the keys of the objects in a bucket, optionally filtered by a
    /// prefix, in the order the service returns them.
    ///
    /// `None` and `Some("")` both mean "no filter": every key in the bucket
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &aws_s3_storage_ops::Client) -> Result<(), aws_s3_storage_ops::error::Error> {
    /// let keys = client.list_files("my-bucket", Some("photos/")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_files(
        &self,
        bucket: &str,
        prefix: Option<&str>,
    ) -> Result<Vec<String>, Error> {
        validation::validate_bucket_name(Some(bucket))?;
        let prefix = prefix.unwrap_or("");
        validation::validate_param(Some(prefix), ParamKind::Prefix)?;
        operation::list_files::list_files(self.s3(), bucket, prefix).await
    }

    /// Check whether an object exists in a bucket.
    ///
    /// A missing object is the `false` answer, not an error. Any other
    /// service failure propagates.
    pub async fn file_exists(&self, bucket: &str, key: &str) -> Result<bool, Error> {
        validation::validate_bucket_name(Some(bucket))?;
        validation::validate_param(Some(key), ParamKind::Key)?;
        operation::file_exists::file_exists(self.s3(), bucket, key).await
    }

    /// Upload a file from the local filesystem to a bucket.
    ///
    /// Fails with [`ErrorKind::LocalFileNotFound`](crate::error::ErrorKind::LocalFileNotFound)
    /// before any service contact when `local_path` does not name an
    /// existing file.
    pub async fn upload_file(
        &self,
        local_path: &str,
        bucket: &str,
        destination_key: &str,
    ) -> Result<(), Error> {
        validation::validate_bucket_name(Some(bucket))?;
        validation::validate_param(Some(local_path), ParamKind::LocalPath)?;
        validation::validate_param(Some(destination_key), ParamKind::DestinationKey)?;
        operation::upload_file::upload_file(self.s3(), local_path, bucket, destination_key).await
    }

    /// Download an object to a path on the local filesystem.
    ///
    /// The destination file is created (or truncated) and written in place.
    pub async fn download_file(
        &self,
        bucket: &str,
        source_key: &str,
        local_destination_path: &str,
    ) -> Result<(), Error> {
        validation::validate_bucket_name(Some(bucket))?;
        validation::validate_param(Some(source_key), ParamKind::SourceKey)?;
        validation::validate_param(
            Some(local_destination_path),
            ParamKind::LocalDestinationPath,
        )?;
        operation::download_file::download_file(
            self.s3(),
            bucket,
            source_key,
            local_destination_path,
        )
        .await
    }

    /// Delete an object from a bucket.
    ///
    /// Deleting a key that does not exist succeeds: the service treats
    /// object deletion as idempotent and this client does not second-guess
    /// it with an existence probe.
    pub async fn delete_file(&self, bucket: &str, key: &str) -> Result<(), Error> {
        validation::validate_bucket_name(Some(bucket))?;
        validation::validate_param(Some(key), ParamKind::Key)?;
        operation::delete_file::delete_file(self.s3(), bucket, key).await
    }

    /// Copy an object to another location, server-side.
    pub async fn copy_file(
        &self,
        source_bucket: &str,
        source_key: &str,
        dest_bucket: &str,
        dest_key: &str,
    ) -> Result<(), Error> {
        validation::validate_bucket_name(Some(source_bucket))?;
        validation::validate_bucket_name(Some(dest_bucket))?;
        validation::validate_param(Some(source_key), ParamKind::SourceKey)?;
        validation::validate_param(Some(dest_key), ParamKind::DestinationKey)?;
        operation::copy_file::copy_file(self.s3(), source_bucket, source_key, dest_bucket, dest_key)
            .await
    }

    /// Move an object to another location: a server-side copy followed by a
    /// delete of the source, strictly in that order.
    ///
    /// This is **not** atomic. If the copy fails, the delete is never
    /// attempted and nothing has changed. If the copy succeeds and the
    /// delete then fails, the error surfaced is the delete's, and **both**
    /// source and destination exist. The guarantee is
    /// at-least-one-object-persists, not exactly-once; callers that need the
    /// source gone must handle that outcome.
    pub async fn move_file(
        &self,
        source_bucket: &str,
        source_key: &str,
        dest_bucket: &str,
        dest_key: &str,
    ) -> Result<(), Error> {
        self.copy_file(source_bucket, source_key, dest_bucket, dest_key)
            .await?;
        self.delete_file(source_bucket, source_key).await
    }

    /// Fetch the metadata of an object.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &aws_s3_storage_ops::Client) -> Result<(), aws_s3_storage_ops::error::Error> {
    /// let info = client.get_file_info("my-bucket", "report.csv").await?;
    /// println!("{:?} bytes, etag {:?}", info.content_length, info.e_tag);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_file_info(&self, bucket: &str, key: &str) -> Result<ObjectMetadata, Error> {
        validation::validate_bucket_name(Some(bucket))?;
        validation::validate_param(Some(key), ParamKind::Key)?;
        operation::get_file_info::get_file_info(self.s3(), bucket, key).await
    }

    /// List the names of the buckets owned by the configured account.
    pub async fn list_buckets(&self) -> Result<Vec<String>, Error> {
        operation::list_buckets::list_buckets(self.s3()).await
    }

    /// Check whether a bucket exists.
    ///
    /// A missing bucket is the `false` answer, not an error. Any other
    /// service failure propagates.
    pub async fn bucket_exists(&self, bucket: &str) -> Result<bool, Error> {
        operation::bucket_exists::bucket_exists(self.s3(), bucket).await
    }

    /// Create a new bucket.
    ///
    /// A name conflict fails with
    /// [`ErrorKind::BucketAlreadyExists`](crate::error::ErrorKind::BucketAlreadyExists)
    /// whether the existing bucket is owned by the caller or by someone
    /// else; the caller must pick a different name.
    pub async fn create_bucket(&self, bucket: &str) -> Result<(), Error> {
        operation::create_bucket::create_bucket(self.s3(), bucket).await
    }

    /// Delete a bucket. The bucket must be empty.
    pub async fn delete_bucket(&self, bucket: &str) -> Result<(), Error> {
        operation::delete_bucket::delete_bucket(self.s3(), bucket).await
    }
}
