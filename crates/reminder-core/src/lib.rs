pub mod config;
pub mod notification;
pub mod scheduler;
pub mod session;
pub mod storage;
pub mod store;
pub mod task;
pub mod theme;

pub use config::ReminderConfig;
pub use notification::{Notification, NotificationPresenter};
pub use scheduler::{Reminder, ReminderScheduler};
pub use session::ReminderSession;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::TaskStore;
pub use task::Task;
pub use theme::Theme;
