use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::config::ReminderConfig;
use crate::notification::{Notification, NotificationPresenter};
use crate::scheduler::{Reminder, ReminderScheduler};
use crate::storage::KeyValueStorage;
use crate::store::TaskStore;
use crate::task::Task;
use crate::theme::Theme;

/// All state for one page session: the task list, the banner and the theme.
/// Built once at startup from storage; the UI drives it and owns the timers.
#[derive(Debug)]
pub struct ReminderSession<S: KeyValueStorage> {
    config: ReminderConfig,
    store: TaskStore<S>,
    scheduler: ReminderScheduler,
    presenter: NotificationPresenter,
    theme: Theme,
}

impl<S: KeyValueStorage> ReminderSession<S> {
    #[tracing::instrument(skip(storage, config))]
    pub fn start(storage: S, config: ReminderConfig, device_prefers_dark: Option<bool>) -> Self {
        let theme = Theme::resolve(&storage, device_prefers_dark);
        let store = TaskStore::load(storage, config.due_offset);
        info!(
            tasks = store.len(),
            theme = theme.storage_value(),
            "reminder session started"
        );
        Self {
            config,
            store,
            scheduler: ReminderScheduler::new(config.check_interval),
            presenter: NotificationPresenter::new(config.notification_duration),
            theme,
        }
    }

    pub fn config(&self) -> &ReminderConfig {
        &self.config
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    pub fn create_task(&mut self, title: String, summary: String) -> Task {
        self.store.create(title, summary)
    }

    pub fn create_task_at(&mut self, title: String, summary: String, now: DateTime<Utc>) -> Task {
        self.store.create_at(title, summary, now)
    }

    pub fn delete_task(&mut self, id: Uuid) -> Option<Task> {
        self.store.delete_by_id(id)
    }

    /// One scheduler pass. Each due task gets its own banner; the last one
    /// stays on screen.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Vec<Reminder> {
        let reminders = self.scheduler.tick(&mut self.store, now);
        for reminder in &reminders {
            self.presenter.show(&reminder.title, now);
        }
        reminders
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.presenter.current()
    }

    pub fn dismiss_notification(&mut self) {
        self.presenter.dismiss();
    }

    pub fn auto_hide_notification(&mut self, generation: u64) -> bool {
        self.presenter.auto_hide(generation)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme.save(self.store.storage());
        info!(theme = self.theme.storage_value(), "toggled theme");
        self.theme
    }
}
