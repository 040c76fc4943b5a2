/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;

use clap::Parser;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "demo")]
#[command(about = "Walks the storage operations client end-to-end against a live endpoint.")]
pub struct Args {
    /// Local file to upload as the demo object
    #[arg(required = true)]
    file: String,

    /// Service endpoint, e.g. http://localhost:9000 for MinIO
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Service region
    #[arg(long, default_value = "us-east-1")]
    region: String,

    /// Static access key (pairs with --secret-key)
    #[arg(long)]
    access_key: Option<String>,

    /// Static secret key (pairs with --access-key)
    #[arg(long)]
    secret_key: Option<String>,

    /// Bucket to exercise; created when absent
    #[arg(long, default_value = "storage-ops-demo")]
    bucket: String,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut loader = aws_s3_storage_ops::from_env()
        .region(args.region.clone())
        .force_path_style(args.endpoint_url.is_some());
    if let Some(endpoint_url) = args.endpoint_url.clone() {
        loader = loader.endpoint_url(endpoint_url);
    }
    if let (Some(access_key), Some(secret_key)) = (args.access_key.clone(), args.secret_key.clone())
    {
        loader = loader.credentials(access_key, secret_key);
    }
    let client = aws_s3_storage_ops::Client::new(loader.load().await);

    if !client.bucket_exists(&args.bucket).await? {
        client.create_bucket(&args.bucket).await?;
        println!("created bucket {}", args.bucket);
    }

    client
        .upload_file(&args.file, &args.bucket, "demo/input.bin")
        .await?;
    println!("uploaded {} as demo/input.bin", args.file);

    println!("objects under demo/:");
    for key in client.list_files(&args.bucket, Some("demo/")).await? {
        println!("  {key}");
    }

    let info = client.get_file_info(&args.bucket, "demo/input.bin").await?;
    for (name, value) in info.to_map() {
        println!("  {name}: {value}");
    }

    client
        .move_file(&args.bucket, "demo/input.bin", &args.bucket, "demo/moved.bin")
        .await?;
    println!(
        "moved; source still present: {}",
        client.file_exists(&args.bucket, "demo/input.bin").await?
    );

    client.delete_file(&args.bucket, "demo/moved.bin").await?;
    println!("cleaned up demo/moved.bin");

    Ok(())
}
