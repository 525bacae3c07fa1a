mod kinesis;
#[cfg(test)]
mod mock;

use crate::types::{Records, ShardPosition};

use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct GetShardIteratorOutput {
    pub shard_iterator: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetRecordsOutput {
    pub records: Records,
    pub next_shard_iterator: Option<String>,
    pub millis_behind_latest: Option<i64>,
}

/// The two remote operations a shard read needs.
#[async_trait]
pub trait StreamClient: Send + Sync {
    async fn get_shard_iterator(
        &self,
        stream_name: &str,
        shard_id: &str,
        position: &ShardPosition,
    ) -> Result<GetShardIteratorOutput>;

    async fn get_records(&self, shard_iterator: &str, limit: i32) -> Result<GetRecordsOutput>;
}

pub use kinesis::{KinesisClient, KinesisClientBuilder};
#[cfg(test)]
pub use mock::{Call, MockClient};
