mod record;
mod shard_position;

pub use record::{Record, Records};
pub use shard_position::{ShardIteratorKind, ShardPosition};
