use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single reminder: what to do and when it falls due.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Lists written before ids existed get a fresh id per task on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub title: String,

    #[serde(default)]
    pub summary: String,

    pub due_date: DateTime<Utc>,
}

impl Task {
    pub fn new(title: String, summary: String, now: DateTime<Utc>, due_offset: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            summary,
            due_date: now + due_offset,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_date <= now
    }

    /// The summary to display, if one was given. Whitespace counts as given.
    pub fn summary_text(&self) -> Option<&str> {
        if self.summary.is_empty() {
            None
        } else {
            Some(&self.summary)
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::Task;

    #[test]
    fn due_date_is_offset_from_creation() {
        let now = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
            .single()
            .expect("valid now");
        let task = Task::new("Pay rent".to_string(), String::new(), now, Duration::minutes(10));

        assert_eq!(task.due_date, now + Duration::minutes(10));
        assert!(!task.is_due(now));
        assert!(task.is_due(now + Duration::minutes(10)));
    }

    #[test]
    fn only_empty_summary_has_no_text() {
        let now = Utc::now();
        let empty = Task::new("a".to_string(), String::new(), now, Duration::zero());
        let spaces = Task::new("a".to_string(), "   ".to_string(), now, Duration::zero());
        let filled = Task::new("a".to_string(), "call first".to_string(), now, Duration::zero());

        assert_eq!(empty.summary_text(), None);
        assert_eq!(spaces.summary_text(), Some("   "));
        assert_eq!(filled.summary_text(), Some("call first"));
    }

    #[test]
    fn whitespace_title_still_counts() {
        let now = Utc::now();
        let untitled = Task::new(String::new(), String::new(), now, Duration::zero());
        let spaces = Task::new("  ".to_string(), String::new(), now, Duration::zero());

        assert!(!untitled.has_title());
        assert!(spaces.has_title());
    }

    #[test]
    fn parses_list_written_without_ids() {
        let raw = r#"[{"title":"Water plants","summary":"","dueDate":"2023-04-01T10:15:00.000Z"}]"#;
        let tasks: Vec<Task> = serde_json::from_str(raw).expect("parse legacy list");

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Water plants");
        assert_eq!(
            tasks[0].due_date,
            Utc.with_ymd_and_hms(2023, 4, 1, 10, 15, 0)
                .single()
                .expect("valid due")
        );
    }

    #[test]
    fn serializes_camel_case_fields() {
        let now = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
            .single()
            .expect("valid now");
        let task = Task::new("t".to_string(), "s".to_string(), now, Duration::minutes(10));
        let value = serde_json::to_value(&task).expect("serialize task");

        assert_eq!(value["title"], "t");
        assert_eq!(value["summary"], "s");
        assert_eq!(value["dueDate"], "2026-03-01T09:40:00Z");
        assert!(value["id"].is_string());
    }
}
