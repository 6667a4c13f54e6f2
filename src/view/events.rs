//! Utilities to follow the changes of a view

use std::fmt::{Display, Error, Formatter};

use crate::draft::DraftField;
use crate::error::Notice;
use crate::task::TaskId;

/// Something that happened to a view
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// The view has been created but has not been mounted yet
    NotMounted,
    /// The view has been mounted, and its tasks are being fetched
    Mounted,
    /// The tasks have been fetched from the source
    Loaded{ count: usize },
    DraftEdited{ field: DraftField },
    /// A task has been created on the source, and appended to the view
    Created{ id: TaskId },
    /// A task has been deleted from the source, and removed from the view
    Deleted{ id: TaskId },
    /// An operation failed, and this notice is now displayed
    Failed{ notice: Notice },
    Unmounted,
}

impl Display for ViewEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ViewEvent::NotMounted => write!(f, "Not mounted"),
            ViewEvent::Mounted => write!(f, "Mounted, fetching tasks..."),
            ViewEvent::Loaded{count} => write!(f, "Loaded {} tasks", count),
            ViewEvent::DraftEdited{field} => write!(f, "Edited the {} of the draft", field),
            ViewEvent::Created{id} => write!(f, "Created task {}", id),
            ViewEvent::Deleted{id} => write!(f, "Deleted task {}", id),
            ViewEvent::Failed{notice} => write!(f, "{}", notice),
            ViewEvent::Unmounted => write!(f, "Unmounted"),
        }
    }
}

impl Default for ViewEvent {
    fn default() -> Self {
        Self::NotMounted
    }
}


/// The latest change applied to a view
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Change {
    /// Incremented every time the state of the view changes
    pub revision: u64,
    pub event: ViewEvent,
}

/// See [`change_channel`]
pub type ChangeSender = tokio::sync::watch::Sender<Change>;
/// See [`change_channel`]
pub type ChangeReceiver = tokio::sync::watch::Receiver<Change>;

/// Create a channel, that can be used to know when a view must be rendered again
pub fn change_channel() -> (ChangeSender, ChangeReceiver) {
    tokio::sync::watch::channel(Change::default())
}
