use reminder_core::Task;
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskCard;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub on_delete: Callback<Uuid>
}

/// Cards are only drawn for tasks
/// with a non-empty title (spaces
/// count); untitled ones stay
/// in the list until they fall due.
pub fn renderable_tasks(
  tasks: &[Task]
) -> impl Iterator<Item = &Task> {
  tasks
    .iter()
    .filter(|task| task.has_title())
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  if props.tasks.is_empty() {
    return html! {
        <div class="muted empty">{ "You have no tasks" }</div>
    };
  }

  html! {
      <>
          {
              for renderable_tasks(&props.tasks).map(|task| html! {
                  <TaskCard
                      key={task.id.to_string()}
                      task={task.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
      </>
  }
}

#[cfg(test)]
mod tests {
  use chrono::{
    Duration,
    Utc
  };
  use reminder_core::Task;

  use super::renderable_tasks;

  #[test]
  fn skips_untitled_tasks() {
    let now = Utc::now();
    let tasks = vec![
      Task::new(
        "A".to_string(),
        String::new(),
        now,
        Duration::minutes(10)
      ),
      Task::new(
        String::new(),
        "hidden".to_string(),
        now,
        Duration::minutes(10)
      ),
      Task::new(
        " ".to_string(),
        String::new(),
        now,
        Duration::minutes(10)
      ),
      Task::new(
        "C".to_string(),
        String::new(),
        now,
        Duration::minutes(10)
      ),
    ];

    let titles: Vec<&str> =
      renderable_tasks(&tasks)
        .map(|task| {
          task.title.as_str()
        })
        .collect();

    assert_eq!(titles, ["A", " ", "C"]);
  }
}
