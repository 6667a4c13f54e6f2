//! To-do tasks, as stored by the remote `/todos` collection

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// The identifier of a task.
///
/// It is assigned by the server and is opaque to this crate. Depending on the server, it is either a JSON number (of any kind) or a JSON string,
/// and it is kept (and compared) in the exact shape the server sent it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(serde_json::Number),
    Text(String),
}

impl TaskId {
    pub fn number(n: i64) -> Self {
        TaskId::Number(n.into())
    }

    /// Returns the value of this id, if it is an integer that fits an `i64`
    pub fn as_number(&self) -> Option<i64> {
        match self {
            TaskId::Number(n) => n.as_i64(),
            TaskId::Text(_) => None,
        }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::number(n)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId::Text(s.to_string())
    }
}


/// Whether a task has been done
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Not Done")]
    NotDone,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// Every status, in the order a form offers them
    pub const ALL: [TaskStatus; 2] = [TaskStatus::NotDone, TaskStatus::Done];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::NotDone => "Not Done",
            TaskStatus::Done => "Done",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::NotDone
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL.iter()
            .find(|status| status.label() == s)
            .copied()
            .ok_or_else(|| DraftError::UnknownStatus(s.to_string()))
    }
}


/// A to-do task, as persisted by the server
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// The server-assigned identifier
    id: TaskId,
    /// A calendar date, usually formatted as `YYYY-MM-DD`
    date: String,
    /// A free-text label for the day
    day: String,
    /// What has to be done
    activity: String,
    /// Servers that do not send a status are considered to hold undone tasks
    #[serde(default)]
    status: TaskStatus,
}

impl TaskRecord {
    pub fn new<I, S, T, U>(id: I, date: S, day: T, activity: U, status: TaskStatus) -> Self
    where
        I: Into<TaskId>,
        S: ToString,
        T: ToString,
        U: ToString,
    {
        Self {
            id: id.into(),
            date: date.to_string(),
            day: day.to_string(),
            activity: activity.to_string(),
            status,
        }
    }

    pub fn id(&self) -> &TaskId         { &self.id       }
    pub fn date(&self) -> &str          { &self.date     }
    pub fn day(&self) -> &str           { &self.day      }
    pub fn activity(&self) -> &str      { &self.activity }
    pub fn status(&self) -> TaskStatus  { self.status    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_numeric_and_text_ids() {
        let json = r#"[
            {"id": 7, "date": "2024-01-01", "day": "Monday", "activity": "Write report", "status": "Done"},
            {"id": "a3f", "date": "2024-01-02", "day": "Tuesday", "activity": "Review", "status": "Not Done"}
        ]"#;
        let records: Vec<TaskRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].id(), &TaskId::number(7));
        assert_eq!(records[0].status(), TaskStatus::Done);
        assert_eq!(records[1].id(), &TaskId::Text("a3f".to_string()));
        assert_eq!(records[1].status(), TaskStatus::NotDone);
    }

    #[test]
    fn missing_status_defaults_to_not_done() {
        let json = r#"{"id": 1, "date": "2024-01-01", "day": "Monday", "activity": "Run"}"#;
        let record: TaskRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status(), TaskStatus::NotDone);
    }

    #[test]
    fn status_labels() {
        assert_eq!("Done".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
        assert_eq!("Not Done".parse::<TaskStatus>().unwrap(), TaskStatus::NotDone);
        assert!("done".parse::<TaskStatus>().is_err());
        assert_eq!(serde_json::to_string(&TaskStatus::NotDone).unwrap(), r#""Not Done""#);
    }

    #[test]
    fn display_ids() {
        assert_eq!(TaskId::number(42).to_string(), "42");
        assert_eq!(TaskId::from("x-42").to_string(), "x-42");
    }

    #[test]
    fn any_json_number_is_a_valid_id() {
        let json = r#"[
            {"id": 18446744073709551615, "date": "2024-01-01", "day": "Monday", "activity": "Huge"},
            {"id": 7.0, "date": "2024-01-01", "day": "Monday", "activity": "Float"},
            {"id": -3, "date": "2024-01-01", "day": "Monday", "activity": "Negative"}
        ]"#;
        let records: Vec<TaskRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(serde_json::to_string(records[0].id()).unwrap(), "18446744073709551615");
        assert_eq!(records[0].id().as_number(), None);
        assert_eq!(serde_json::to_string(records[1].id()).unwrap(), "7.0");
        assert_eq!(records[1].id().as_number(), None);
        assert_ne!(records[1].id(), &TaskId::number(7));
        assert_eq!(records[2].id(), &TaskId::number(-3));
        assert_eq!(records[2].id().as_number(), Some(-3));
    }
}
