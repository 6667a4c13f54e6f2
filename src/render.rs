//! Plain-text rendering of a planner view

use crate::draft::{DraftEntry, DraftField};
use crate::task::{TaskRecord, TaskStatus};
use crate::view::ViewSnapshot;

pub const TITLE: &str = "Personal Planner";

/// Render a whole page: the notice (if any), the form, then one block per task
pub fn render(snapshot: &ViewSnapshot) -> String {
    let mut lines = vec![TITLE.to_string(), "=".repeat(TITLE.len())];

    if let Some(notice) = snapshot.notice {
        lines.push(format!("! {}", notice));
    }

    for field in DraftField::ALL.iter() {
        lines.push(render_input(&snapshot.draft, *field));
    }
    lines.push("[Add Task]".to_string());
    lines.push(String::new());

    if snapshot.tasks.is_empty() {
        lines.push("(no tasks)".to_string());
    }
    for task in &snapshot.tasks {
        lines.extend(render_task(task));
    }

    let mut page = lines.join("\n");
    page.push('\n');
    page
}

fn placeholder(field: DraftField) -> &'static str {
    match field {
        DraftField::Date => "YYYY-MM-DD",
        DraftField::Day => "Enter Day",
        DraftField::Activity => "What is the task?",
        DraftField::Status => "",
    }
}

fn render_input(draft: &DraftEntry, field: DraftField) -> String {
    let value = match field {
        DraftField::Status => {
            TaskStatus::ALL.iter()
                .map(|status| {
                    let mark = if *status == draft.status { "x" } else { " " };
                    format!("({}) {}", mark, status)
                })
                .collect::<Vec<_>>()
                .join("  ")
        },
        _ => match draft.get(field) {
            "" => format!("[ {} ]", placeholder(field)),
            value => format!("[{}]", value),
        },
    };
    format!("{:<9} {}", format!("{}:", field), value)
}

/// The lines that describe a single task
pub fn render_task(task: &TaskRecord) -> Vec<String> {
    vec![
        format!("#{}", task.id()),
        format!("  Date: {}", task.date()),
        format!("  Day: {}", task.day()),
        format!("  Activity: {}", task.activity()),
        format!("  Status: {}", task.status()),
        format!("  [Delete #{}]", task.id()),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Notice;
    use crate::task::TaskId;

    #[test]
    fn render_empty_page() {
        let page = render(&ViewSnapshot::default());
        let expected = "\
Personal Planner
================
date:     [ YYYY-MM-DD ]
day:      [ Enter Day ]
activity: [ What is the task? ]
status:   (x) Not Done  ( ) Done
[Add Task]

(no tasks)
";
        assert_eq!(page, expected);
    }

    #[test]
    fn notice_comes_before_the_form_and_tasks_keep_their_order() {
        let snapshot = ViewSnapshot {
            tasks: vec![
                TaskRecord::new(TaskId::number(2), "2024-01-02", "Tuesday", "Second", TaskStatus::Done),
                TaskRecord::new(TaskId::number(1), "2024-01-01", "Monday", "First", TaskStatus::NotDone),
            ],
            draft: DraftEntry { day: "Friday".to_string(), status: TaskStatus::Done, ..DraftEntry::default() },
            notice: Some(Notice::DeleteFailed),
            revision: 4,
        };
        let page = render(&snapshot);

        let notice = page.find("! Failed to delete the task.").unwrap();
        let form = page.find("date:").unwrap();
        let second = page.find("Activity: Second").unwrap();
        let first = page.find("Activity: First").unwrap();
        assert!(notice < form);
        assert!(form < second);
        assert!(second < first);

        assert!(page.contains("day:      [Friday]"));
        assert!(page.contains("status:   ( ) Not Done  (x) Done"));
        assert!(page.contains("  Status: Done\n  [Delete #2]"));
    }
}
