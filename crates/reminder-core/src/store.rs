use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::storage::{KeyValueStorage, load_tasks, save_tasks};
use crate::task::Task;

/// The ordered task list. Every mutation is mirrored to storage before the
/// call returns.
#[derive(Debug)]
pub struct TaskStore<S: KeyValueStorage> {
    tasks: Vec<Task>,
    storage: S,
    due_offset: Duration,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// Restores the list from `storage`, starting empty when nothing usable
    /// is stored.
    #[tracing::instrument(skip(storage))]
    pub fn load(storage: S, due_offset: Duration) -> Self {
        let tasks = load_tasks(&storage).unwrap_or_default();
        info!(count = tasks.len(), "restored task list");
        Self {
            tasks,
            storage,
            due_offset,
        }
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn create(&mut self, title: String, summary: String) -> Task {
        self.create_at(title, summary, Utc::now())
    }

    #[tracing::instrument(skip(self, title, summary))]
    pub fn create_at(&mut self, title: String, summary: String, now: DateTime<Utc>) -> Task {
        let task = Task::new(title, summary, now, self.due_offset);
        info!(id = %task.id, due = %task.due_date, "created task");
        self.tasks.push(task.clone());
        self.persist();
        task
    }

    /// Removes the task at `index`; out-of-range indices change nothing.
    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, index: usize) -> Option<Task> {
        if index >= self.tasks.len() {
            debug!(len = self.tasks.len(), "delete index out of range; ignoring");
            return None;
        }
        let task = self.tasks.remove(index);
        info!(id = %task.id, "deleted task");
        self.persist();
        Some(task)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn delete_by_id(&mut self, id: Uuid) -> Option<Task> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            debug!("no task with id; ignoring delete");
            return None;
        };
        self.delete(index)
    }

    /// Ids of every task whose due time has passed, in list order.
    pub fn due_tasks(&self, now: DateTime<Utc>) -> Vec<Uuid> {
        self.tasks
            .iter()
            .filter(|t| t.is_due(now))
            .map(|t| t.id)
            .collect()
    }

    fn persist(&self) {
        if let Err(err) = save_tasks(&self.storage, &self.tasks) {
            error!(error = %format!("{err:#}"), "failed persisting task list");
        }
    }
}
