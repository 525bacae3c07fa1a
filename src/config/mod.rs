use crate::reader::DEFAULT_LIMIT;
use crate::types::{ShardIteratorKind, ShardPosition};
use crate::{ReaderError, ENV_KINESIS_ENDPOINT_URL};

use clap::Parser;

/// Print the records of a single Kinesis shard as a table.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Target stream
    #[arg(long)]
    stream_name: String,

    /// Target shard within the stream
    #[arg(long)]
    shard_id: String,

    /// Service region, e.g. us-east-1
    #[arg(long)]
    region: String,

    /// Maximum number of records read in the single batch
    #[arg(
        long,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(i32).range(1..=10_000)
    )]
    limit: i32,

    /// Where in the shard to start reading
    #[arg(long, value_enum, default_value_t = ShardIteratorKind::TrimHorizon)]
    iterator_type: ShardIteratorKind,

    /// Required by at-sequence-number and after-sequence-number
    #[arg(long)]
    starting_sequence_number: Option<String>,

    /// Override the service endpoint, e.g. for localstack
    #[arg(long, env = ENV_KINESIS_ENDPOINT_URL)]
    endpoint_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }

    pub fn shard_id(&self) -> &str {
        &self.shard_id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }

    pub fn position(&self) -> Result<ShardPosition, ReaderError> {
        ShardPosition::new(self.iterator_type, self.starting_sequence_number.clone())
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}
