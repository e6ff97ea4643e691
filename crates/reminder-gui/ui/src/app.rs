use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo::timers::callback::{
  Interval,
  Timeout
};
use reminder_core::{
  ReminderConfig,
  ReminderSession
};
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  TargetCast,
  UseForceUpdateHandle,
  classes,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_mut_ref,
  use_state
};

use crate::components::{
  NewTaskModal,
  NotificationBanner,
  TaskList,
  TitleBar
};
use crate::storage::{
  LocalStorage,
  device_prefers_dark
};

type Session = Rc<
  RefCell<ReminderSession<LocalStorage>>
>;
type AutoHideSlot =
  Rc<RefCell<Option<Timeout>>>;

#[derive(Clone, PartialEq, Default)]
struct TaskDraft {
  title:   String,
  summary: String
}

fn input_value(
  event: &InputEvent
) -> String {
  event
    .target_unchecked_into::<
      HtmlInputElement
    >()
    .value()
}

/// Replaces any pending auto-hide with
/// one for the banner now on screen.
/// Dropping the old `Timeout` cancels
/// it.
fn arm_auto_hide(
  session: &Session,
  slot: &AutoHideSlot,
  force_update: &UseForceUpdateHandle
) {
  let (generation, millis) = {
    let session = session.borrow();
    let Some(notification) =
      session.notification()
    else {
      slot.borrow_mut().take();
      return;
    };
    (
      notification.generation,
      session
        .config()
        .notification_millis()
    )
  };

  let timeout = {
    let session = session.clone();
    let slot_inner = slot.clone();
    let force_update =
      force_update.clone();
    Timeout::new(millis, move || {
      slot_inner.borrow_mut().take();
      if session
        .borrow_mut()
        .auto_hide_notification(
          generation
        )
      {
        force_update.force_update();
      }
    })
  };

  *slot.borrow_mut() = Some(timeout);
}

#[function_component(App)]
pub fn app() -> Html {
  let session: Session =
    use_mut_ref(|| {
      ReminderSession::start(
        LocalStorage,
        ReminderConfig::embedded(),
        device_prefers_dark()
      )
    });
  let auto_hide: AutoHideSlot =
    use_mut_ref(|| None);
  let force_update =
    use_force_update();
  let draft =
    use_state(|| None::<TaskDraft>);

  {
    let session = session.clone();
    let auto_hide = auto_hide.clone();
    let force_update =
      force_update.clone();
    use_effect_with((), move |_| {
      let millis = session
        .borrow()
        .config()
        .check_interval_millis();
      tracing::info!(
        period_ms = millis,
        "starting reminder interval"
      );

      let interval = {
        let session = session.clone();
        let auto_hide =
          auto_hide.clone();
        Interval::new(millis, move || {
          let reminders = session
            .borrow_mut()
            .tick(Utc::now());
          if reminders.is_empty() {
            return;
          }
          for reminder in &reminders {
            tracing::info!(
              task = %reminder.task_id,
              title = %reminder.title,
              due = %reminder.due_date,
              "task due"
            );
          }
          arm_auto_hide(
            &session,
            &auto_hide,
            &force_update
          );
          force_update.force_update();
        })
      };

      move || {
        tracing::debug!(
          "cancelling reminder interval"
        );
        drop(interval);
        auto_hide.borrow_mut().take();
      }
    });
  }

  let on_toggle_theme = {
    let session = session.clone();
    let force_update =
      force_update.clone();
    Callback::from(
      move |_: MouseEvent| {
        session
          .borrow_mut()
          .toggle_theme();
        force_update.force_update();
      }
    )
  };

  let on_delete = {
    let session = session.clone();
    let force_update =
      force_update.clone();
    Callback::from(move |id: Uuid| {
      if session
        .borrow_mut()
        .delete_task(id)
        .is_some()
      {
        force_update.force_update();
      }
    })
  };

  let on_open_modal = {
    let draft = draft.clone();
    Callback::from(
      move |_: MouseEvent| {
        draft.set(Some(
          TaskDraft::default()
        ));
      }
    )
  };

  let on_cancel = {
    let draft = draft.clone();
    Callback::from(
      move |_: MouseEvent| {
        draft.set(None);
      }
    )
  };

  let on_title_input = {
    let draft = draft.clone();
    Callback::from(
      move |event: InputEvent| {
        if let Some(mut next) =
          (*draft).clone()
        {
          next.title =
            input_value(&event);
          draft.set(Some(next));
        }
      }
    )
  };

  let on_summary_input = {
    let draft = draft.clone();
    Callback::from(
      move |event: InputEvent| {
        if let Some(mut next) =
          (*draft).clone()
        {
          next.summary =
            input_value(&event);
          draft.set(Some(next));
        }
      }
    )
  };

  let on_create = {
    let draft = draft.clone();
    let session = session.clone();
    Callback::from(
      move |_: MouseEvent| {
        let Some(current) =
          (*draft).clone()
        else {
          return;
        };
        if current.title.trim().is_empty()
        {
          tracing::debug!(
            "ignoring create with \
             blank title"
          );
          return;
        }
        session.borrow_mut().create_task(
          current.title,
          current.summary
        );
        draft.set(None);
      }
    )
  };

  let on_dismiss = {
    let session = session.clone();
    let auto_hide = auto_hide.clone();
    let force_update =
      force_update.clone();
    Callback::from(
      move |_: MouseEvent| {
        auto_hide.borrow_mut().take();
        session
          .borrow_mut()
          .dismiss_notification();
        force_update.force_update();
      }
    )
  };

  let current = session.borrow();
  let theme = current.theme();
  let tasks = current.tasks().to_vec();
  let notification =
    current.notification().cloned();
  drop(current);

  let modal_draft =
    (*draft).clone().unwrap_or_default();

  html! {
      <div class={classes!("app", theme.as_class())}>
          <NewTaskModal
              open={draft.is_some()}
              title={modal_draft.title}
              summary={modal_draft.summary}
              on_title_input={on_title_input}
              on_summary_input={on_summary_input}
              on_cancel={on_cancel}
              on_create={on_create}
          />
          <div class="container">
              <TitleBar theme={theme} on_toggle_theme={on_toggle_theme} />
              <TaskList tasks={tasks} on_delete={on_delete} />
              <button class="btn full" type="button" onclick={on_open_modal}>{ "New Task" }</button>
          </div>
          <NotificationBanner notification={notification} on_dismiss={on_dismiss} />
      </div>
  }
}
