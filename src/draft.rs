//! The entry a user is filling in before it gets submitted

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;
use crate::task::TaskStatus;

/// One field of a [`DraftEntry`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Day,
    Activity,
    Status,
}

impl DraftField {
    /// Every field, in the order a form shows them
    pub const ALL: [DraftField; 4] = [DraftField::Date, DraftField::Day, DraftField::Activity, DraftField::Status];

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Date => "date",
            DraftField::Day => "day",
            DraftField::Activity => "activity",
            DraftField::Status => "status",
        }
    }
}

impl Display for DraftField {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DraftField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL.iter()
            .find(|field| field.name() == s)
            .copied()
            .ok_or_else(|| DraftError::UnknownField(s.to_string()))
    }
}


/// A task that has not been sent to the server yet.
///
/// This is also the payload of a creation request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEntry {
    pub date: String,
    pub day: String,
    pub activity: String,
    pub status: TaskStatus,
}

impl DraftEntry {
    /// A blank draft, whose status is `Not Done`
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field, as a form would display it
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Date => &self.date,
            DraftField::Day => &self.day,
            DraftField::Activity => &self.activity,
            DraftField::Status => self.status.label(),
        }
    }

    /// Set a single field.
    ///
    /// Text fields accept anything (including empty values). The status only accepts one of its labels, and the draft is left untouched otherwise.
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        match field {
            DraftField::Date => self.date = value.to_string(),
            DraftField::Day => self.day = value.to_string(),
            DraftField::Activity => self.activity = value.to_string(),
            DraftField::Status => self.status = value.parse()?,
        }
        Ok(())
    }

    /// The required fields that are still blank
    pub fn missing_fields(&self) -> Vec<DraftField> {
        [DraftField::Date, DraftField::Day, DraftField::Activity].iter()
            .filter(|field| self.get(**field).is_empty())
            .copied()
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Go back to a blank draft
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_one_field_only() {
        let mut draft = DraftEntry::new();
        draft.set(DraftField::Day, "Monday").unwrap();
        assert_eq!(draft, DraftEntry { day: "Monday".to_string(), ..DraftEntry::default() });

        draft.set(DraftField::Status, "Done").unwrap();
        assert_eq!(draft.status, TaskStatus::Done);
        assert_eq!(draft.day, "Monday");
    }

    #[test]
    fn setting_twice_is_idempotent() {
        let mut draft = DraftEntry::new();
        draft.set(DraftField::Activity, "Write report").unwrap();
        let once = draft.clone();
        draft.set(DraftField::Activity, "Write report").unwrap();
        assert_eq!(draft, once);
    }

    #[test]
    fn invalid_status_leaves_draft_untouched() {
        let mut draft = DraftEntry::new();
        draft.set(DraftField::Status, "Done").unwrap();
        assert_eq!(draft.set(DraftField::Status, "Maybe"), Err(DraftError::UnknownStatus("Maybe".to_string())));
        assert_eq!(draft.status, TaskStatus::Done);
    }

    #[test]
    fn missing_fields() {
        let mut draft = DraftEntry::new();
        assert_eq!(draft.missing_fields(), vec![DraftField::Date, DraftField::Day, DraftField::Activity]);

        draft.set(DraftField::Date, "2024-01-01").unwrap();
        draft.set(DraftField::Activity, "Write report").unwrap();
        assert_eq!(draft.missing_fields(), vec![DraftField::Day]);
        assert!(draft.is_complete() == false);

        draft.set(DraftField::Day, "Monday").unwrap();
        assert!(draft.is_complete());

        draft.reset();
        assert_eq!(draft, DraftEntry { date: String::new(), day: String::new(), activity: String::new(), status: TaskStatus::NotDone });
    }

    #[test]
    fn field_names() {
        assert_eq!("activity".parse::<DraftField>().unwrap(), DraftField::Activity);
        assert!("id".parse::<DraftField>().is_err());
    }

    #[test]
    fn serialize_as_creation_payload() {
        let draft = DraftEntry {
            date: "2024-01-01".to_string(),
            day: "Monday".to_string(),
            activity: "Write report".to_string(),
            status: TaskStatus::NotDone,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, serde_json::json!({
            "date": "2024-01-01", "day": "Monday", "activity": "Write report", "status": "Not Done"
        }));
    }
}
