/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::error::Error as _;

use aws_s3_storage_ops::error::ErrorKind;
use aws_sdk_s3::error::ErrorMetadata;
use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
use aws_sdk_s3::operation::head_object::{HeadObjectError, HeadObjectOutput};
use aws_sdk_s3::operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output};
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::primitives::{ByteStream, DateTime};
use aws_sdk_s3::types::error::{NoSuchKey, NotFound};
use aws_sdk_s3::types::Object;
use aws_smithy_mocks::{mock, mock_client, RuleMode};
use test_common::{create_test_file, storage_client};

fn list_page(keys: &[&str]) -> ListObjectsV2Output {
    let contents = keys
        .iter()
        .map(|k| Object::builder().key(*k).build())
        .collect();
    ListObjectsV2Output::builder()
        .set_contents(Some(contents))
        .build()
}

#[tokio::test]
async fn list_files_returns_keys_in_service_order() {
    let list = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.bucket() == Some("my-bucket") && r.prefix() == Some("my-folder/"))
        .then_output(|| list_page(&["my-folder/file1.txt", "my-folder/file2.png"]));
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]));

    let keys = client
        .list_files("my-bucket", Some("my-folder/"))
        .await
        .unwrap();
    assert_eq!(keys, vec!["my-folder/file1.txt", "my-folder/file2.png"]);
}

#[tokio::test]
async fn list_files_with_empty_prefix_lists_everything() {
    let list = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.prefix() == Some(""))
        .then_output(|| list_page(&["a.txt", "folder/b.png"]));
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]));

    let keys = client.list_files("my-bucket", Some("")).await.unwrap();
    assert_eq!(keys, vec!["a.txt", "folder/b.png"]);
}

#[tokio::test]
async fn list_files_without_prefix_defaults_to_everything() {
    let list = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.prefix() == Some(""))
        .then_output(|| list_page(&["a.txt", "folder/b.png", "root_file.png"]));
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]));

    let keys = client.list_files("my-bucket", None).await.unwrap();
    assert_eq!(keys.len(), 3);
}

#[tokio::test]
async fn list_files_follows_continuation_tokens() {
    let first = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.continuation_token().is_none())
        .then_output(|| {
            ListObjectsV2Output::builder()
                .contents(Object::builder().key("k1").build())
                .is_truncated(true)
                .next_continuation_token("token1")
                .build()
        });
    let second = mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.continuation_token() == Some("token1"))
        .then_output(|| list_page(&["k2"]));
    let client = storage_client(mock_client!(
        aws_sdk_s3,
        RuleMode::Sequential,
        &[&first, &second]
    ));

    let keys = client.list_files("my-bucket", None).await.unwrap();
    assert_eq!(keys, vec!["k1", "k2"]);
}

#[tokio::test]
async fn list_files_maps_missing_bucket() {
    let list = mock!(aws_sdk_s3::Client::list_objects_v2).then_error(|| {
        ListObjectsV2Error::generic(ErrorMetadata::builder().code("NoSuchBucket").build())
    });
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]));

    let err = client.list_files("valid-bucket", None).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::BucketNotFound);
    assert!(err.source().is_some());
}

#[tokio::test]
async fn list_files_rejects_invalid_bucket_name_without_service_contact() {
    let list = mock!(aws_sdk_s3::Client::list_objects_v2).then_output(|| list_page(&["a.txt"]));
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]));

    let err = client
        .list_files("Invalid_BucketName", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidFormat);
    assert_eq!(list.num_calls(), 0);

    let err = client.list_files("", None).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EmptyValue);
    assert_eq!(list.num_calls(), 0);
}

#[tokio::test]
async fn file_exists_true_when_head_succeeds() {
    let head = mock!(aws_sdk_s3::Client::head_object)
        .match_requests(|r| r.bucket() == Some("my-bucket") && r.key() == Some("a.txt"))
        .then_output(|| HeadObjectOutput::builder().build());
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head]));

    assert!(client.file_exists("my-bucket", "a.txt").await.unwrap());
}

#[tokio::test]
async fn file_exists_false_on_not_found() {
    let head = mock!(aws_sdk_s3::Client::head_object)
        .then_error(|| HeadObjectError::NotFound(NotFound::builder().build()));
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head]));

    assert!(!client.file_exists("my-bucket", "missing.txt").await.unwrap());
}

#[tokio::test]
async fn file_exists_propagates_other_failures() {
    let head = mock!(aws_sdk_s3::Client::head_object).then_error(|| {
        HeadObjectError::generic(
            ErrorMetadata::builder()
                .code("AccessDenied")
                .message("Access Denied")
                .build(),
        )
    });
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head]));

    let err = client
        .file_exists("my-bucket", "secret.txt")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Unknown);
    assert!(err.source().is_some());
}

#[tokio::test]
async fn file_exists_rejects_empty_key_without_service_contact() {
    let head = mock!(aws_sdk_s3::Client::head_object).then_output(|| HeadObjectOutput::builder().build());
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head]));

    let err = client.file_exists("my-bucket", "").await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EmptyValue);
    assert_eq!(head.num_calls(), 0);
}

#[tokio::test]
async fn upload_file_sends_local_contents() {
    let temp = tempfile::tempdir().unwrap();
    let path = create_test_file(&temp, "report.csv", 64);

    let put = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|r| r.bucket() == Some("my-bucket") && r.key() == Some("reports/report.csv"))
        .then_output(|| PutObjectOutput::builder().build());
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put]));

    client
        .upload_file(&path, "my-bucket", "reports/report.csv")
        .await
        .unwrap();
    assert_eq!(put.num_calls(), 1);
}

#[tokio::test]
async fn upload_file_fails_before_service_when_local_file_is_missing() {
    let put = mock!(aws_sdk_s3::Client::put_object).then_output(|| PutObjectOutput::builder().build());
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put]));

    let err = client
        .upload_file("/no/such/file", "my-bucket", "k")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::LocalFileNotFound);
    assert_eq!(put.num_calls(), 0);
}

#[tokio::test]
async fn upload_file_maps_missing_bucket() {
    let temp = tempfile::tempdir().unwrap();
    let path = create_test_file(&temp, "report.csv", 16);

    let put = mock!(aws_sdk_s3::Client::put_object).then_error(|| {
        aws_sdk_s3::operation::put_object::PutObjectError::generic(
            ErrorMetadata::builder().code("NoSuchBucket").build(),
        )
    });
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put]));

    let err = client
        .upload_file(&path, "gone-bucket", "k")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::BucketNotFound);
}

#[tokio::test]
async fn download_file_writes_the_object_body() {
    let temp = tempfile::tempdir().unwrap();
    let dest = temp.path().join("out.txt");
    let dest = dest.to_str().unwrap().to_owned();

    let get = mock!(aws_sdk_s3::Client::get_object)
        .match_requests(|r| r.bucket() == Some("my-bucket") && r.key() == Some("a.txt"))
        .then_output(|| {
            GetObjectOutput::builder()
                .body(ByteStream::from_static(b"hello world"))
                .build()
        });
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get]));

    client
        .download_file("my-bucket", "a.txt", &dest)
        .await
        .unwrap();
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "hello world");
}

#[tokio::test]
async fn download_file_maps_missing_object() {
    let get = mock!(aws_sdk_s3::Client::get_object)
        .then_error(|| GetObjectError::NoSuchKey(NoSuchKey::builder().build()));
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get]));

    let err = client
        .download_file("my-bucket", "missing.txt", "/tmp/ignored-destination")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ObjectNotFound);
    assert_eq!(err.resource(), Some("missing.txt"));
    assert!(err.source().is_some());
}

#[tokio::test]
async fn download_file_rejects_empty_destination_without_service_contact() {
    let get = mock!(aws_sdk_s3::Client::get_object)
        .then_output(|| GetObjectOutput::builder().build());
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get]));

    let err = client
        .download_file("my-bucket", "a.txt", "")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EmptyValue);
    assert_eq!(get.num_calls(), 0);
}

#[tokio::test]
async fn delete_file_succeeds() {
    let delete = mock!(aws_sdk_s3::Client::delete_object)
        .match_requests(|r| r.bucket() == Some("my-bucket") && r.key() == Some("a.txt"))
        .then_output(|| DeleteObjectOutput::builder().build());
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&delete]));

    client.delete_file("my-bucket", "a.txt").await.unwrap();
    assert_eq!(delete.num_calls(), 1);
}

// The service reports success for absent keys; the client passes that
// through rather than probing for existence first.
#[tokio::test]
async fn delete_file_is_idempotent_for_absent_keys() {
    let delete = mock!(aws_sdk_s3::Client::delete_object)
        .then_output(|| DeleteObjectOutput::builder().build());
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&delete]));

    client
        .delete_file("my-bucket", "never-existed.txt")
        .await
        .unwrap();
}

#[tokio::test]
async fn get_file_info_returns_the_fixed_metadata_set() {
    let head = mock!(aws_sdk_s3::Client::head_object).then_output(|| {
        HeadObjectOutput::builder()
            .content_length(1024)
            .content_type("text/plain")
            .e_tag("\"abc123\"")
            .last_modified(DateTime::from_secs(1_722_000_000))
            .build()
    });
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head]));

    let info = client.get_file_info("my-bucket", "a.txt").await.unwrap();
    assert_eq!(info.content_length, Some(1024));
    assert_eq!(info.content_type.as_deref(), Some("text/plain"));
    assert_eq!(info.e_tag.as_deref(), Some("\"abc123\""));
    assert!(info.last_modified.is_some());

    let map = info.to_map();
    assert_eq!(map.get("Content-Length"), Some(&"1024".to_owned()));
    assert!(map.contains_key("Last-Modified"));
    assert!(map.contains_key("Content-Type"));
    assert!(map.contains_key("ETag"));
}

#[tokio::test]
async fn get_file_info_maps_missing_object() {
    let head = mock!(aws_sdk_s3::Client::head_object)
        .then_error(|| HeadObjectError::NotFound(NotFound::builder().build()));
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head]));

    let err = client
        .get_file_info("my-bucket", "missing.txt")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ObjectNotFound);
    assert_eq!(err.resource(), Some("missing.txt"));
}

// Metadata lookups validate like their sibling operations.
#[tokio::test]
async fn get_file_info_rejects_bad_input_without_service_contact() {
    let head = mock!(aws_sdk_s3::Client::head_object).then_output(|| HeadObjectOutput::builder().build());
    let client = storage_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&head]));

    let err = client.get_file_info("my-bucket", "").await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EmptyValue);
    let err = client.get_file_info("BAD NAME", "a.txt").await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidFormat);
    assert_eq!(head.num_calls(), 0);
}
