mod new_task_modal;
mod notification_banner;
mod task_card;
mod task_list;
mod title_bar;

pub use new_task_modal::NewTaskModal;
pub use notification_banner::NotificationBanner;
pub use task_card::TaskCard;
pub use task_list::TaskList;
pub use title_bar::TitleBar;
