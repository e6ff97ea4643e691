use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::storage::KeyValueStorage;
use crate::store::TaskStore;

/// A task that fell due during a tick and was removed from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub task_id: Uuid,
    pub title: String,
    pub due_date: DateTime<Utc>,
}

/// Polling reminder check. The caller owns the timer and calls
/// [`tick`](Self::tick) every `interval`, so a reminder can arrive up to one
/// interval after its due time.
#[derive(Debug, Clone, Copy)]
pub struct ReminderScheduler {
    interval: Duration,
}

impl ReminderScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Latest instant a task due at `due` will be noticed, given ticks keep
    /// firing on schedule.
    pub fn latest_notice(&self, due: DateTime<Utc>) -> DateTime<Utc> {
        due + self.interval
    }

    /// Removes every task due at `now` and reports each exactly once, in
    /// list order.
    #[tracing::instrument(skip(self, store))]
    pub fn tick<S: KeyValueStorage>(&self, store: &mut TaskStore<S>, now: DateTime<Utc>) -> Vec<Reminder> {
        let due = store.due_tasks(now);
        let reminders: Vec<Reminder> = due
            .into_iter()
            .filter_map(|id| store.delete_by_id(id))
            .map(|task| Reminder {
                task_id: task.id,
                title: task.title,
                due_date: task.due_date,
            })
            .collect();

        if !reminders.is_empty() {
            info!(fired = reminders.len(), remaining = store.len(), "reminders due");
        }
        reminders
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::ReminderScheduler;
    use crate::storage::{MemoryStorage, load_tasks};
    use crate::store::TaskStore;

    #[test]
    fn removes_all_simultaneously_due_tasks() {
        let storage = MemoryStorage::new();
        let mut store = TaskStore::load(storage.clone(), Duration::minutes(10));
        let now = Utc
            .with_ymd_and_hms(2026, 7, 1, 18, 0, 0)
            .single()
            .expect("valid now");
        for title in ["A", "B", "C", "D"] {
            store.create_at(title.to_string(), String::new(), now);
        }
        store.create_at("later".to_string(), String::new(), now + Duration::minutes(30));

        let scheduler = ReminderScheduler::new(Duration::seconds(60));
        let reminders = scheduler.tick(&mut store, now + Duration::minutes(10));

        let fired: Vec<&str> = reminders.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(fired, ["A", "B", "C", "D"]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title, "later");
        assert_eq!(load_tasks(&storage).map(|t| t.len()), Some(1));
    }

    #[test]
    fn second_tick_fires_nothing_new() {
        let mut store = TaskStore::load(MemoryStorage::new(), Duration::minutes(10));
        let now = Utc
            .with_ymd_and_hms(2026, 7, 1, 18, 0, 0)
            .single()
            .expect("valid now");
        store.create_at("once".to_string(), String::new(), now);
        let scheduler = ReminderScheduler::new(Duration::seconds(60));
        let later = now + Duration::minutes(11);

        assert_eq!(scheduler.tick(&mut store, later).len(), 1);
        assert!(scheduler.tick(&mut store, later).is_empty());
    }

    #[test]
    fn latest_notice_is_one_interval_late() {
        let scheduler = ReminderScheduler::new(Duration::seconds(60));
        let due = Utc
            .with_ymd_and_hms(2026, 7, 1, 18, 0, 0)
            .single()
            .expect("valid due");

        assert_eq!(scheduler.latest_notice(due), due + Duration::minutes(1));
    }
}
