use crate::types::ShardIteratorKind;

use std::str::Utf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("no shard iterator returned for shard `{shard_id}` of stream `{stream_name}`")]
    MissingShardIterator {
        stream_name: String,
        shard_id: String,
    },
    #[error("payload of record `{sequence_number}` is not valid UTF-8")]
    InvalidPayload {
        sequence_number: String,
        #[source]
        source: Utf8Error,
    },
    #[error("iterator type `{0}` requires --starting-sequence-number")]
    MissingSequenceNumber(ShardIteratorKind),
}
