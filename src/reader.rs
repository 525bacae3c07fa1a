use crate::client::StreamClient;
use crate::types::{Records, ShardPosition};
use crate::ReaderError;

use anyhow::Result;
use tracing::{debug, info, trace};

pub const DEFAULT_LIMIT: i32 = 200;

/// Reads one batch of records from one shard.
///
/// The read happens in two steps: [`ShardReader::acquire`] obtains the
/// iterator, and the returned [`AcquiredShard`] is consumed by
/// [`AcquiredShard::fetch`], so a single acquisition can only ever be used
/// for one `GetRecords` call.
pub struct ShardReader<'a> {
    client: &'a dyn StreamClient,
    stream_name: &'a str,
    shard_id: &'a str,
    position: ShardPosition,
    limit: i32,
}

impl<'a> ShardReader<'a> {
    pub fn new(client: &'a dyn StreamClient, stream_name: &'a str, shard_id: &'a str) -> Self {
        Self {
            client,
            stream_name,
            shard_id,
            position: ShardPosition::default(),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn position(self, position: ShardPosition) -> Self {
        Self { position, ..self }
    }

    pub fn limit(self, limit: i32) -> Self {
        Self { limit, ..self }
    }

    pub async fn acquire(self) -> Result<AcquiredShard<'a>> {
        let shard_iterator = self
            .client
            .get_shard_iterator(self.stream_name, self.shard_id, &self.position)
            .await?
            .shard_iterator
            .ok_or_else(|| ReaderError::MissingShardIterator {
                stream_name: self.stream_name.into(),
                shard_id: self.shard_id.into(),
            })?;

        Ok(AcquiredShard {
            client: self.client,
            shard_id: self.shard_id,
            shard_iterator,
            limit: self.limit,
        })
    }

    pub async fn read(self) -> Result<Records> {
        self.acquire().await?.fetch().await
    }
}

pub struct AcquiredShard<'a> {
    client: &'a dyn StreamClient,
    shard_id: &'a str,
    shard_iterator: String,
    limit: i32,
}

impl AcquiredShard<'_> {
    pub fn shard_iterator(&self) -> &str {
        &self.shard_iterator
    }

    /// Single `GetRecords` call. The next iterator is not followed.
    pub async fn fetch(self) -> Result<Records> {
        let output = self
            .client
            .get_records(&self.shard_iterator, self.limit)
            .await?;

        info!(
            shard_id = self.shard_id,
            count = output.records.len(),
            "fetched records"
        );
        debug!(
            next_shard_iterator = ?output.next_shard_iterator,
            millis_behind_latest = ?output.millis_behind_latest,
            "batch position"
        );
        for record in output.records.iter() {
            trace!(
                sequence_number = record.sequence_number(),
                partition_key = record.partition_key(),
                size = record.data().len(),
                "record"
            );
        }

        Ok(output.records)
    }
}
