use super::{GetRecordsOutput, GetShardIteratorOutput, StreamClient};
use crate::types::{Record, Records, ShardPosition};

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_kinesis::config::{Builder as KinesisConfigBuilder, Region};
use aws_sdk_kinesis::Client;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct KinesisClient {
    client: Client,
}

#[async_trait]
impl StreamClient for KinesisClient {
    async fn get_shard_iterator(
        &self,
        stream_name: &str,
        shard_id: &str,
        position: &ShardPosition,
    ) -> Result<GetShardIteratorOutput> {
        debug!(stream_name, shard_id, ?position, "GetShardIterator");

        let shard_iterator = self
            .client
            .get_shard_iterator()
            .stream_name(stream_name)
            .shard_id(shard_id)
            .shard_iterator_type(position.iterator_type())
            .set_starting_sequence_number(position.starting_sequence_number().map(String::from))
            .send()
            .await
            .with_context(|| {
                format!("failed to get shard iterator for `{shard_id}` of stream `{stream_name}`")
            })?
            .shard_iterator;

        Ok(GetShardIteratorOutput { shard_iterator })
    }

    async fn get_records(&self, shard_iterator: &str, limit: i32) -> Result<GetRecordsOutput> {
        debug!(limit, "GetRecords");

        let output = self
            .client
            .get_records()
            .shard_iterator(shard_iterator)
            .limit(limit)
            .send()
            .await
            .context("failed to get records")?;

        let records = output.records.into_iter().map(Record::from).collect::<Vec<_>>();

        Ok(GetRecordsOutput {
            records: Records::new(records),
            next_shard_iterator: output.next_shard_iterator,
            millis_behind_latest: output.millis_behind_latest,
        })
    }
}

impl KinesisClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn builder<T: Into<String>>(region: T) -> KinesisClientBuilder {
        KinesisClientBuilder::new(region).await
    }
}

#[derive(Debug)]
pub struct KinesisClientBuilder {
    builder: KinesisConfigBuilder,
}

impl KinesisClientBuilder {
    /// Loads the shared AWS config (credential chain and so on) pinned to `region`.
    pub async fn new<T: Into<String>>(region: T) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.into()))
            .load()
            .await;

        Self {
            builder: KinesisConfigBuilder::from(&config),
        }
    }

    pub fn endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => {
                debug!(%url, "overriding kinesis endpoint");
                Self {
                    builder: self.builder.endpoint_url(url),
                }
            }
            None => self,
        }
    }

    pub fn build(self) -> KinesisClient {
        KinesisClient::new(Client::from_conf(self.builder.build()))
    }
}
