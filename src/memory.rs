//! A [`TodoSource`] that keeps its tasks in memory
//!
//! It behaves like a well-behaved server (it assigns ids and keeps the insertion order), and can be scripted to fail with a [`MockBehaviour`].

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::draft::DraftEntry;
use crate::error::SourceError;
use crate::mock_behaviour::MockBehaviour;
use crate::task::{TaskId, TaskRecord};
use crate::traits::TodoSource;

/// How many requests a [`MemorySource`] has received
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestCount {
    pub list: u32,
    pub create: u32,
    pub delete: u32,
}

#[derive(Debug, Default)]
struct MemoryData {
    records: Vec<TaskRecord>,
    next_id: i64,
    behaviour: MockBehaviour,
    requests: RequestCount,
}

#[derive(Debug)]
pub struct MemorySource {
    data: Mutex<MemoryData>,
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySource {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a source that already holds some tasks.
    /// New ids will be picked after the largest numeric id of these tasks.
    pub fn with_records(records: Vec<TaskRecord>) -> Self {
        let next_id = records.iter()
            .filter_map(|record| record.id().as_number())
            .max()
            .map_or(1, |max| max.saturating_add(1));

        Self {
            data: Mutex::new(MemoryData {
                records,
                next_id,
                ..MemoryData::default()
            }),
        }
    }

    fn data(&self) -> MutexGuard<'_, MemoryData> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_behaviour(&self, behaviour: MockBehaviour) {
        self.data().behaviour = behaviour;
    }

    /// The tasks currently stored
    pub fn records(&self) -> Vec<TaskRecord> {
        self.data().records.clone()
    }

    pub fn requests(&self) -> RequestCount {
        self.data().requests
    }
}

#[async_trait]
impl TodoSource for MemorySource {
    async fn list(&self) -> Result<Vec<TaskRecord>, SourceError> {
        let mut data = self.data();
        data.requests.list += 1;
        data.behaviour.can_list()?;
        Ok(data.records.clone())
    }

    async fn create(&self, draft: &DraftEntry) -> Result<TaskRecord, SourceError> {
        let mut data = self.data();
        data.requests.create += 1;
        data.behaviour.can_create()?;

        let id = data.next_id;
        data.next_id = data.next_id.saturating_add(1);
        let record = TaskRecord::new(id, &draft.date, &draft.day, &draft.activity, draft.status);
        data.records.push(record.clone());
        Ok(record)
    }

    async fn delete(&self, id: &TaskId) -> Result<(), SourceError> {
        let mut data = self.data();
        data.requests.delete += 1;
        data.behaviour.can_delete()?;
        data.records.retain(|record| record.id() != id);
        Ok(())
    }
}
