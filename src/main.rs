use kinesis_shard_reader::{run, Config, KinesisClient};

use anyhow::Result;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the table, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::new();
    info!(
        stream_name = config.stream_name(),
        shard_id = config.shard_id(),
        region = config.region(),
        "reading shard"
    );

    let client = KinesisClient::builder(config.region())
        .await
        .endpoint_url(config.endpoint_url())
        .build();

    run(&client, &config, &mut io::stdout().lock()).await
}
