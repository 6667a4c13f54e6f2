//! The planner view: a local mirror of a task collection, plus a draft to create new tasks
//!
//! The list of tasks is fetched once when the view is mounted, then patched after every successful creation or deletion.
//! It is never fetched again, so it may drift from the source if someone else changes the collection.
//!
//! Operations only need a shared reference, so that several of them can be in flight at the same time.
//! In this case, each one applies its effect whenever its response arrives (there is no ordering between them).
//! The [revision](TaskPlannerView::revision) tells in which order the effects have been applied.

use std::sync::{Mutex, MutexGuard};

use crate::draft::{DraftEntry, DraftField};
use crate::error::{DraftError, Notice};
use crate::task::{TaskId, TaskRecord};
use crate::traits::TodoSource;

pub mod events;
use events::{change_channel, Change, ChangeReceiver, ChangeSender, ViewEvent};

/// Where a view is in its life
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, but its tasks have not been requested yet
    Created,
    Mounted,
    /// The view is gone. Its state is discarded, and late responses are ignored
    Unmounted,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::Created
    }
}

/// A copy of everything a view displays
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub tasks: Vec<TaskRecord>,
    pub draft: DraftEntry,
    pub notice: Option<Notice>,
    pub revision: u64,
}

#[derive(Debug, Default)]
struct ViewState {
    tasks: Vec<TaskRecord>,
    draft: DraftEntry,
    notice: Option<Notice>,
    lifecycle: Lifecycle,
    /// Bumped on unmount, so that requests started before can tell they are stale
    generation: u64,
    revision: u64,
}

impl ViewState {
    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation && self.lifecycle != Lifecycle::Unmounted
    }
}


/// A task planner bound to a [`TodoSource`]
#[derive(Debug)]
pub struct TaskPlannerView<S: TodoSource> {
    source: S,
    state: Mutex<ViewState>,
    changes: ChangeSender,
}

impl<S: TodoSource> TaskPlannerView<S> {
    /// Create a view, with no task and a blank draft. Nothing is requested until it is [mounted](Self::mount)
    pub fn new(source: S) -> Self {
        let (changes, _) = change_channel();
        Self {
            source,
            state: Mutex::new(ViewState::default()),
            changes,
        }
    }

    pub fn source(&self) -> &S { &self.source }

    /// The state lock is never held across an `.await`
    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn commit(&self, state: &mut ViewState, event: ViewEvent) {
        state.revision += 1;
        log::trace!("View revision {}: {}", state.revision, event);
        self.changes.send_replace(Change { revision: state.revision, event });
    }

    fn fail(&self, state: &mut ViewState, notice: Notice) {
        state.notice = Some(notice);
        self.commit(state, ViewEvent::Failed{ notice });
    }

    pub fn lifecycle(&self) -> Lifecycle  { self.state().lifecycle       }
    pub fn tasks(&self) -> Vec<TaskRecord> { self.state().tasks.clone()   }
    pub fn draft(&self) -> DraftEntry      { self.state().draft.clone()   }
    pub fn notice(&self) -> Option<Notice> { self.state().notice          }
    pub fn revision(&self) -> u64          { self.state().revision        }

    pub fn snapshot(&self) -> ViewSnapshot {
        let state = self.state();
        ViewSnapshot {
            tasks: state.tasks.clone(),
            draft: state.draft.clone(),
            notice: state.notice,
            revision: state.revision,
        }
    }

    /// Get notified every time this view changes (and should be rendered again)
    pub fn subscribe(&self) -> ChangeReceiver {
        self.changes.subscribe()
    }

    /// Render the current state as plain text
    pub fn render(&self) -> String {
        crate::render::render(&self.snapshot())
    }

    /// Mount the view, and fetch the tasks from the source.
    ///
    /// This replaces the local list with whatever the source returns. In case of failure, the list stays empty and a notice is displayed.
    /// This does nothing if the view is already mounted.
    ///
    /// It returns whether the tasks have been loaded.
    pub async fn mount(&self) -> bool {
        let generation = {
            let mut state = self.state();
            if state.lifecycle == Lifecycle::Mounted {
                log::debug!("View is already mounted, not loading it again");
                return false;
            }
            state.lifecycle = Lifecycle::Mounted;
            self.commit(&mut state, ViewEvent::Mounted);
            state.generation
        };

        let result = self.source.list().await;

        let mut state = self.state();
        if state.is_current(generation) == false {
            log::info!("View has been unmounted while fetching tasks. Discarding them");
            return false;
        }
        match result {
            Ok(records) => {
                log::info!("Loaded {} tasks", records.len());
                let count = records.len();
                state.tasks = records;
                self.commit(&mut state, ViewEvent::Loaded{ count });
                true
            },
            Err(err) => {
                log::error!("Error fetching todos: {}", err);
                self.fail(&mut state, Notice::FetchFailed);
                false
            },
        }
    }

    /// Discard the state of the view.
    ///
    /// Requests that are still in flight will complete, but their responses will be ignored.
    /// The view can be mounted again afterwards, in which case it starts from scratch.
    pub fn unmount(&self) {
        let mut state = self.state();
        if state.lifecycle == Lifecycle::Unmounted {
            return;
        }
        state.lifecycle = Lifecycle::Unmounted;
        state.generation += 1;
        state.tasks.clear();
        state.draft.reset();
        state.notice = None;
        self.commit(&mut state, ViewEvent::Unmounted);
    }

    /// Change a single field of the draft. Values are not validated at this point
    pub fn edit_field(&self, field: DraftField, value: &str) -> Result<(), DraftError> {
        let mut state = self.state();
        if state.lifecycle == Lifecycle::Unmounted {
            log::warn!("Ignoring an edit of the {} on an unmounted view", field);
            return Ok(());
        }

        let previous = state.draft.clone();
        state.draft.set(field, value)?;
        if state.draft != previous {
            self.commit(&mut state, ViewEvent::DraftEdited{ field });
        }
        Ok(())
    }

    /// Send the draft to the source, to create a new task.
    ///
    /// Nothing is sent if the date, day or activity is blank.
    /// On success, the created task is appended to the list and the draft is reset. On failure, the draft is kept as is, so that it can be submitted again.
    ///
    /// It returns whether a task has been created.
    pub async fn submit(&self) -> bool {
        let (generation, draft) = {
            let mut state = self.state();
            if state.lifecycle == Lifecycle::Unmounted {
                log::warn!("Ignoring a submission on an unmounted view");
                return false;
            }
            let missing = state.draft.missing_fields();
            if missing.is_empty() == false {
                log::debug!("Not submitting a draft with missing fields {:?}", missing);
                self.fail(&mut state, Notice::FillInAllFields);
                return false;
            }
            (state.generation, state.draft.clone())
        };

        let result = self.source.create(&draft).await;

        let mut state = self.state();
        if state.is_current(generation) == false {
            log::info!("View has been unmounted while saving a task. Ignoring the response");
            return false;
        }
        match result {
            Ok(record) => {
                let id = record.id().clone();
                state.tasks.push(record);
                state.draft.reset();
                state.notice = None;
                self.commit(&mut state, ViewEvent::Created{ id });
                true
            },
            Err(err) => {
                log::error!("Error saving todo: {}", err);
                self.fail(&mut state, Notice::SaveFailed);
                false
            },
        }
    }

    /// Delete a task from the source, then from the list.
    ///
    /// On failure, the task stays in the list and a notice is displayed.
    ///
    /// It returns whether the task has been deleted.
    pub async fn delete(&self, id: &TaskId) -> bool {
        let generation = {
            let state = self.state();
            if state.lifecycle == Lifecycle::Unmounted {
                log::warn!("Ignoring the deletion of {} on an unmounted view", id);
                return false;
            }
            state.generation
        };

        let result = self.source.delete(id).await;

        let mut state = self.state();
        if state.is_current(generation) == false {
            log::info!("View has been unmounted while deleting task {}. Ignoring the response", id);
            return false;
        }
        match result {
            Ok(()) => {
                state.tasks.retain(|task| task.id() != id);
                self.commit(&mut state, ViewEvent::Deleted{ id: id.clone() });
                true
            },
            Err(err) => {
                log::error!("Error deleting todo {}: {}", id, err);
                self.fail(&mut state, Notice::DeleteFailed);
                false
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySource;
    use crate::mock_behaviour::MockBehaviour;
    use crate::task::TaskStatus;

    fn record(id: i64, activity: &str) -> TaskRecord {
        TaskRecord::new(TaskId::number(id), "2024-01-01", "Monday", activity, TaskStatus::NotDone)
    }

    fn fill(view: &TaskPlannerView<MemorySource>) {
        view.edit_field(DraftField::Date, "2024-01-01").unwrap();
        view.edit_field(DraftField::Day, "Monday").unwrap();
        view.edit_field(DraftField::Activity, "Write report").unwrap();
    }

    #[tokio::test]
    async fn mount_only_loads_once() {
        let view = TaskPlannerView::new(MemorySource::with_records(vec![record(1, "a")]));
        assert_eq!(view.lifecycle(), Lifecycle::Created);

        assert!(view.mount().await);
        assert!(view.mount().await == false);
        assert_eq!(view.source().requests().list, 1);
        assert_eq!(view.tasks(), vec![record(1, "a")]);
    }

    #[tokio::test]
    async fn unmount_discards_state() {
        let view = TaskPlannerView::new(MemorySource::with_records(vec![record(1, "a")]));
        view.mount().await;
        view.edit_field(DraftField::Day, "Friday").unwrap();
        view.unmount();

        assert_eq!(view.snapshot().tasks, Vec::new());
        assert_eq!(view.draft(), DraftEntry::new());
        assert_eq!(view.lifecycle(), Lifecycle::Unmounted);

        // Nothing happens on an unmounted view
        view.edit_field(DraftField::Day, "Friday").unwrap();
        assert_eq!(view.draft(), DraftEntry::new());
        assert!(view.delete(&TaskId::number(1)).await == false);
        assert_eq!(view.source().requests().delete, 0);

        // ...until it is mounted again
        assert!(view.mount().await);
        assert_eq!(view.tasks(), vec![record(1, "a")]);
    }

    #[tokio::test]
    async fn unchanged_edits_do_not_bump_the_revision() {
        let view = TaskPlannerView::new(MemorySource::new());
        view.edit_field(DraftField::Activity, "Write report").unwrap();
        let revision = view.revision();
        view.edit_field(DraftField::Activity, "Write report").unwrap();
        assert_eq!(view.revision(), revision);
    }

    #[tokio::test]
    async fn new_notice_replaces_the_previous_one() {
        let view = TaskPlannerView::new(MemorySource::new());
        view.source().set_behaviour(MockBehaviour::fail_now(1));
        view.mount().await;
        assert_eq!(view.notice(), Some(Notice::FetchFailed));

        view.submit().await;
        assert_eq!(view.notice(), Some(Notice::FillInAllFields));

        fill(&view);
        view.submit().await;
        assert_eq!(view.notice(), Some(Notice::SaveFailed));

        view.delete(&TaskId::number(3)).await;
        assert_eq!(view.notice(), Some(Notice::DeleteFailed));

        // A successful creation clears the notice
        assert!(view.submit().await);
        assert_eq!(view.notice(), None);
    }

    #[tokio::test]
    async fn subscribers_see_the_latest_change() {
        let view = TaskPlannerView::new(MemorySource::new());
        let receiver = view.subscribe();
        view.mount().await;
        fill(&view);
        view.submit().await;

        let change = receiver.borrow().clone();
        assert_eq!(change.revision, view.revision());
        assert_eq!(change.event, ViewEvent::Created{ id: TaskId::number(1) });
    }
}
