use async_trait::async_trait;

use crate::draft::DraftEntry;
use crate::error::SourceError;
use crate::task::{TaskId, TaskRecord};

/// A collection of tasks, where the records and their ids are owned by the source (usually a remote server)
#[async_trait]
pub trait TodoSource: Send + Sync {
    /// Returns every task of the collection, in the order of the source
    async fn list(&self) -> Result<Vec<TaskRecord>, SourceError>;

    /// Creates a task out of a draft, and returns it as it has been stored (i.e. with its newly assigned id)
    async fn create(&self, draft: &DraftEntry) -> Result<TaskRecord, SourceError>;

    /// Removes a task.
    /// Removing a task the source does not know about is not an error: the in-memory source ignores unknown ids,
    /// and the HTTP client accepts a `404 Not Found` as well as any 2xx status.
    async fn delete(&self, id: &TaskId) -> Result<(), SourceError>;
}
