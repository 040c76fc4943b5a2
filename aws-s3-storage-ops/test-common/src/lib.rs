/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Build a storage operations client over an injected (usually mocked) S3
/// client.
pub fn storage_client(s3: aws_sdk_s3::Client) -> aws_s3_storage_ops::Client {
    let config = aws_s3_storage_ops::Config::builder().client(s3).build();
    aws_s3_storage_ops::Client::new(config)
}

/// Create a file of `size` zero bytes under `dir` and return its path as a
/// string.
pub fn create_test_file(dir: &tempfile::TempDir, name: &str, size: usize) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, vec![0u8; size]).unwrap();
    path.to_str().unwrap().to_owned()
}
