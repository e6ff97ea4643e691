use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NewTaskModalProps {
  pub open:             bool,
  pub title:            String,
  pub summary:          String,
  pub on_title_input:
    Callback<InputEvent>,
  pub on_summary_input:
    Callback<InputEvent>,
  pub on_cancel:
    Callback<MouseEvent>,
  pub on_create:
    Callback<MouseEvent>
}

/// Title is required; summary is
/// optional.
pub fn can_create(title: &str) -> bool {
  !title.trim().is_empty()
}

#[function_component(NewTaskModal)]
pub fn new_task_modal(
  props: &NewTaskModalProps
) -> Html {
  if !props.open {
    return html! {};
  }

  html! {
      <div class="modal-backdrop" onclick={props.on_cancel.clone()}>
          <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">{ "New Task" }</div>
              <div class="field">
                  <label>{ "Title" }<span class="required">{ " *" }</span></label>
                  <input
                      value={props.title.clone()}
                      oninput={props.on_title_input.clone()}
                      placeholder="Task Title"
                      required={true}
                  />
              </div>
              <div class="field">
                  <label>{ "Summary" }</label>
                  <input
                      value={props.summary.clone()}
                      oninput={props.on_summary_input.clone()}
                      placeholder="Task Summary"
                  />
              </div>
              <div class="footer">
                  <button type="button" class="btn subtle" onclick={props.on_cancel.clone()}>{ "Cancel" }</button>
                  <button
                      type="button"
                      class="btn"
                      onclick={props.on_create.clone()}
                      disabled={!can_create(&props.title)}
                  >
                      { "Create Task" }
                  </button>
              </div>
          </div>
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::can_create;

  #[test]
  fn blank_titles_cannot_be_created() {
    assert!(!can_create(""));
    assert!(!can_create("   "));
    assert!(can_create("Pay rent"));
  }
}
