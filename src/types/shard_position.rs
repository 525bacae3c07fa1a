use crate::error::ReaderError;

use aws_sdk_kinesis::types::ShardIteratorType;
use clap::ValueEnum;
use std::fmt;

/// Iterator policy as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShardIteratorKind {
    #[default]
    TrimHorizon,
    Latest,
    AtSequenceNumber,
    AfterSequenceNumber,
}

impl fmt::Display for ShardIteratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TrimHorizon => "trim-horizon",
            Self::Latest => "latest",
            Self::AtSequenceNumber => "at-sequence-number",
            Self::AfterSequenceNumber => "after-sequence-number",
        };
        f.write_str(name)
    }
}

/// Where in the shard the iterator starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShardPosition {
    /// Oldest record the service still retains.
    #[default]
    TrimHorizon,
    Latest,
    AtSequenceNumber(String),
    AfterSequenceNumber(String),
}

impl ShardPosition {
    pub fn new(
        kind: ShardIteratorKind,
        sequence_number: Option<String>,
    ) -> Result<Self, ReaderError> {
        match (kind, sequence_number) {
            (ShardIteratorKind::TrimHorizon, _) => Ok(Self::TrimHorizon),
            (ShardIteratorKind::Latest, _) => Ok(Self::Latest),
            (ShardIteratorKind::AtSequenceNumber, Some(seq)) => Ok(Self::AtSequenceNumber(seq)),
            (ShardIteratorKind::AfterSequenceNumber, Some(seq)) => {
                Ok(Self::AfterSequenceNumber(seq))
            }
            (kind, None) => Err(ReaderError::MissingSequenceNumber(kind)),
        }
    }

    pub fn iterator_type(&self) -> ShardIteratorType {
        match self {
            Self::TrimHorizon => ShardIteratorType::TrimHorizon,
            Self::Latest => ShardIteratorType::Latest,
            Self::AtSequenceNumber(_) => ShardIteratorType::AtSequenceNumber,
            Self::AfterSequenceNumber(_) => ShardIteratorType::AfterSequenceNumber,
        }
    }

    pub fn starting_sequence_number(&self) -> Option<&str> {
        match self {
            Self::AtSequenceNumber(seq) | Self::AfterSequenceNumber(seq) => Some(seq),
            Self::TrimHorizon | Self::Latest => None,
        }
    }
}
