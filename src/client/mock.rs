use super::{GetRecordsOutput, GetShardIteratorOutput, StreamClient};
use crate::types::{Records, ShardPosition};

use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetShardIterator {
        stream_name: String,
        shard_id: String,
        position: ShardPosition,
    },
    GetRecords {
        shard_iterator: String,
        limit: i32,
    },
}

type Scripted<T> = Arc<Mutex<VecDeque<Result<T>>>>;

/// Answers from scripted responses and remembers every call it receives.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    iterators: Scripted<GetShardIteratorOutput>,
    records: Scripted<GetRecordsOutput>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iterator<T: Into<String>>(self, shard_iterator: T) -> Self {
        self.iterators.lock().unwrap().push_back(Ok(GetShardIteratorOutput {
            shard_iterator: Some(shard_iterator.into()),
        }));
        self
    }

    pub fn without_iterator(self) -> Self {
        self.iterators
            .lock()
            .unwrap()
            .push_back(Ok(GetShardIteratorOutput {
                shard_iterator: None,
            }));
        self
    }

    pub fn with_iterator_error(self, message: &str) -> Self {
        self.iterators
            .lock()
            .unwrap()
            .push_back(Err(anyhow::anyhow!(message.to_string())));
        self
    }

    pub fn with_records<T: Into<Records>>(self, records: T, next: Option<&str>) -> Self {
        self.records.lock().unwrap().push_back(Ok(GetRecordsOutput {
            records: records.into(),
            next_shard_iterator: next.map(String::from),
            millis_behind_latest: Some(0),
        }));
        self
    }

    pub fn with_records_error(self, message: &str) -> Self {
        self.records
            .lock()
            .unwrap()
            .push_back(Err(anyhow::anyhow!(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StreamClient for MockClient {
    async fn get_shard_iterator(
        &self,
        stream_name: &str,
        shard_id: &str,
        position: &ShardPosition,
    ) -> Result<GetShardIteratorOutput> {
        self.calls.lock().unwrap().push(Call::GetShardIterator {
            stream_name: stream_name.into(),
            shard_id: shard_id.into(),
            position: position.clone(),
        });

        self.iterators
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("ResourceNotFoundException")))
    }

    async fn get_records(&self, shard_iterator: &str, limit: i32) -> Result<GetRecordsOutput> {
        self.calls.lock().unwrap().push(Call::GetRecords {
            shard_iterator: shard_iterator.into(),
            limit,
        });

        self.records
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("ExpiredIteratorException")))
    }
}

#[tokio::test]
async fn mock_client_replays_scripted_responses_in_order() {
    let client = MockClient::new()
        .with_iterator("iterator_0")
        .with_records([("1", "a")], Some("iterator_1"));

    let output = client
        .get_shard_iterator("stream", "shard", &ShardPosition::TrimHorizon)
        .await
        .unwrap();
    assert_eq!(output.shard_iterator.as_deref(), Some("iterator_0"));

    let output = client.get_records("iterator_0", 10).await.unwrap();
    assert_eq!(output.records.len(), 1);
    assert_eq!(output.next_shard_iterator.as_deref(), Some("iterator_1"));

    assert!(client.get_records("iterator_1", 10).await.is_err());
    assert_eq!(client.calls().len(), 3);
}
