pub mod client;
pub mod config;
mod error;
pub mod reader;
pub mod render;
pub mod types;

pub use client::{KinesisClient, StreamClient};
pub use config::Config;
pub use error::ReaderError;
pub use reader::ShardReader;

use anyhow::Result;
use std::io::Write;

pub const ENV_KINESIS_ENDPOINT_URL: &str = "KINESIS_ENDPOINT_URL";

/// Acquires an iterator for the configured shard, reads a single batch and
/// writes it to `out` as a table. Nothing is written unless every record
/// decodes.
pub async fn run<W: Write>(client: &dyn StreamClient, config: &Config, out: &mut W) -> Result<()> {
    let position = config.position()?;
    let reader = ShardReader::new(client, config.stream_name(), config.shard_id())
        .position(position)
        .limit(config.limit());

    let records = reader.read().await?;
    let table = render::table(config.shard_id(), &records)?;

    out.write_all(table.as_bytes())?;
    out.flush()?;
    Ok(())
}
