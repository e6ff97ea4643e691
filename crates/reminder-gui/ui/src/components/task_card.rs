use reminder_core::Task;
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

pub const NO_SUMMARY_TEXT: &str =
  "No summary was provided for this \
   task";

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub task:      Task,
  pub on_delete: Callback<Uuid>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let id = props.task.id;
  let on_delete =
    props.on_delete.clone();
  let summary = props
    .task
    .summary_text()
    .unwrap_or(NO_SUMMARY_TEXT)
    .to_string();

  html! {
      <div class="card">
          <div class="card-head">
              <span class="card-title">{ &props.task.title }</span>
              <button
                  class="icon-btn danger"
                  type="button"
                  title="Delete task"
                  onclick={move |_| on_delete.emit(id)}
              >
                  { "\u{1F5D1}" }
              </button>
          </div>
          <div class="muted">{ summary }</div>
      </div>
  }
}
