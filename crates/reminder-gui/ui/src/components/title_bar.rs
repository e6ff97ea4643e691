use reminder_core::Theme;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TitleBarProps {
  pub theme:           Theme,
  pub on_toggle_theme:
    Callback<MouseEvent>
}

#[function_component(TitleBar)]
pub fn title_bar(
  props: &TitleBarProps
) -> Html {
  // Shows the scheme a click switches to.
  let icon = match props.theme {
    | Theme::Dark => "\u{2600}",
    | Theme::Light => "\u{263E}"
  };

  html! {
      <div class="title-bar">
          <h1>{ "My Tasks" }</h1>
          <button
              class="icon-btn"
              type="button"
              title="Toggle color scheme"
              onclick={props.on_toggle_theme.clone()}
          >
              { icon }
          </button>
      </div>
  }
}
