use reminder_core::Notification;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
  pub notification:
    Option<Notification>,
  pub on_dismiss:
    Callback<MouseEvent>
}

#[function_component(NotificationBanner)]
pub fn notification_banner(
  props: &NotificationBannerProps
) -> Html {
  let Some(notification) =
    &props.notification
  else {
    return html! {};
  };

  html! {
      <div class="notification" role="alert">
          <div>
              <div class="heading">{ &notification.heading }</div>
              <div>{ &notification.message }</div>
          </div>
          <button
              class="icon-btn"
              type="button"
              title="Dismiss"
              onclick={props.on_dismiss.clone()}
          >
              { "\u{2715}" }
          </button>
      </div>
  }
}
