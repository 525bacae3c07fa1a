use crate::error::ReaderError;

use aws_sdk_kinesis::types;
use std::slice::Iter;

#[derive(Debug, Default, Clone)]
pub struct Records {
    records: Vec<Record>,
}

impl Records {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> Iter<'_, Record> {
        self.records.iter()
    }
}

impl<I, T> From<I> for Records
where
    I: IntoIterator<Item = T>,
    T: Into<Record>,
{
    fn from(values: I) -> Records {
        let records = values.into_iter().map(|v| v.into()).collect();
        Records { records }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    sequence_number: String,
    partition_key: String,
    data: Vec<u8>,
}

impl Record {
    pub fn new<S, P, D>(sequence_number: S, partition_key: P, data: D) -> Self
    where
        S: Into<String>,
        P: Into<String>,
        D: Into<Vec<u8>>,
    {
        Self {
            sequence_number: sequence_number.into(),
            partition_key: partition_key.into(),
            data: data.into(),
        }
    }

    pub fn sequence_number(&self) -> &str {
        &self.sequence_number
    }

    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Payload decoded as UTF-8. There is no lossy fallback.
    pub fn payload(&self) -> Result<&str, ReaderError> {
        std::str::from_utf8(&self.data).map_err(|source| ReaderError::InvalidPayload {
            sequence_number: self.sequence_number.clone(),
            source,
        })
    }
}

impl From<types::Record> for Record {
    fn from(value: types::Record) -> Record {
        Record {
            sequence_number: value.sequence_number,
            partition_key: value.partition_key,
            data: value.data.into_inner(),
        }
    }
}

// (sequence_number, data) pairs, handy for building fixtures.
impl<S: Into<String>, D: Into<Vec<u8>>> From<(S, D)> for Record {
    fn from((sequence_number, data): (S, D)) -> Record {
        Record::new(sequence_number, "", data)
    }
}
