use anyhow::{
  Context,
  anyhow
};
use chrono::Duration;
use serde::Deserialize;
use tracing::{
  debug,
  error
};

/// Storage key holding the serialized
/// task list.
pub const TASKS_STORAGE_KEY: &str =
  "tasks";

/// Storage key holding the chosen
/// colour scheme. Shared with
/// earlier releases of the page.
pub const THEME_STORAGE_KEY: &str =
  "mantine-color-scheme";

const EMBEDDED_CONFIG_TOML: &str =
  include_str!(
    "../assets/reminder.toml"
  );

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct ReminderConfig {
  pub due_offset:            Duration,
  pub check_interval:        Duration,
  pub notification_duration: Duration
}

#[derive(Debug, Deserialize)]
struct RawConfig {
  reminders:    RawReminders,
  notification: RawNotification
}

#[derive(Debug, Deserialize)]
struct RawReminders {
  due_offset_minutes:     i64,
  check_interval_seconds: i64
}

#[derive(Debug, Deserialize)]
struct RawNotification {
  auto_hide_seconds: i64
}

impl Default for ReminderConfig {
  fn default() -> Self {
    Self {
      due_offset:
        Duration::minutes(10),
      check_interval:
        Duration::seconds(60),
      notification_duration:
        Duration::seconds(5)
    }
  }
}

impl ReminderConfig {
  /// Config shipped with the crate.
  /// Falls back to the built-in
  /// defaults if the asset is broken.
  pub fn embedded() -> Self {
    match Self::from_toml_str(
      EMBEDDED_CONFIG_TOML
    ) {
      | Ok(cfg) => cfg,
      | Err(err) => {
        error!(
          error = %format!("{err:#}"),
          "invalid embedded reminder \
           config; using defaults"
        );
        Self::default()
      }
    }
  }

  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let parsed: RawConfig =
      toml::from_str(raw).context(
        "failed parsing reminder \
         config"
      )?;

    let cfg = Self {
      due_offset:
        Duration::minutes(positive(
          "reminders.due_offset_minutes",
          parsed
            .reminders
            .due_offset_minutes
        )?),
      check_interval:
        Duration::seconds(positive(
          "reminders.check_interval_seconds",
          parsed
            .reminders
            .check_interval_seconds
        )?),
      notification_duration:
        Duration::seconds(positive(
          "notification.auto_hide_seconds",
          parsed
            .notification
            .auto_hide_seconds
        )?)
    };

    debug!(?cfg, "loaded reminder config");
    Ok(cfg)
  }

  /// Interval period for timer APIs
  /// that take milliseconds.
  pub fn check_interval_millis(
    &self
  ) -> u32 {
    to_millis(self.check_interval)
  }

  pub fn notification_millis(
    &self
  ) -> u32 {
    to_millis(
      self.notification_duration
    )
  }
}

fn positive(
  key: &str,
  value: i64
) -> anyhow::Result<i64> {
  if value <= 0 {
    return Err(anyhow!(
      "{key} must be positive, got \
       {value}"
    ));
  }
  Ok(value)
}

fn to_millis(
  duration: Duration
) -> u32 {
  u32::try_from(
    duration
      .num_milliseconds()
      .max(0)
  )
  .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
  use chrono::Duration;

  use super::ReminderConfig;

  #[test]
  fn embedded_asset_matches_defaults() {
    assert_eq!(
      ReminderConfig::embedded(),
      ReminderConfig::default()
    );
  }

  #[test]
  fn parses_custom_values() {
    let cfg =
      ReminderConfig::from_toml_str(
        r#"
[reminders]
due_offset_minutes = 30
check_interval_seconds = 15

[notification]
auto_hide_seconds = 8
"#
      )
      .expect("parse config");

    assert_eq!(
      cfg.due_offset,
      Duration::minutes(30)
    );
    assert_eq!(
      cfg.check_interval_millis(),
      15_000
    );
    assert_eq!(
      cfg.notification_millis(),
      8_000
    );
  }

  #[test]
  fn rejects_zero_interval() {
    let err =
      ReminderConfig::from_toml_str(
        r#"
[reminders]
due_offset_minutes = 10
check_interval_seconds = 0

[notification]
auto_hide_seconds = 5
"#
      )
      .expect_err(
        "zero interval rejected"
      );

    assert!(
      err
        .to_string()
        .contains("check_interval")
    );
  }

  #[test]
  fn rejects_missing_section() {
    assert!(
      ReminderConfig::from_toml_str(
        "[reminders]\n\
         due_offset_minutes = 10\n\
         check_interval_seconds = 60\n"
      )
      .is_err()
    );
  }
}
