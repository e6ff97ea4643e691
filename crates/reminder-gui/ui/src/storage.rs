use anyhow::anyhow;
use reminder_core::KeyValueStorage;

const DARK_SCHEME_QUERY: &str =
  "(prefers-color-scheme: dark)";

/// The browser's `localStorage`.
/// Reads fail soft to `None` when the
/// page has no storage access.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct LocalStorage;

fn browser_storage()
-> Option<web_sys::Storage> {
  web_sys::window().and_then(
    |window| {
      window
        .local_storage()
        .ok()
        .flatten()
    }
  )
}

impl KeyValueStorage for LocalStorage {
  fn get_item(
    &self,
    key: &str
  ) -> Option<String> {
    browser_storage().and_then(
      |storage| {
        storage
          .get_item(key)
          .ok()
          .flatten()
      }
    )
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    let storage = browser_storage()
      .ok_or_else(|| {
        anyhow!(
          "localStorage is not \
           available"
        )
      })?;
    storage
      .set_item(key, value)
      .map_err(|err| {
        anyhow!(
          "localStorage write for \
           {key} failed: {err:?}"
        )
      })
  }
}

/// `None` when the browser cannot
/// answer the media query.
pub fn device_prefers_dark()
-> Option<bool> {
  web_sys::window()
    .and_then(|window| {
      window
        .match_media(
          DARK_SCHEME_QUERY
        )
        .ok()
        .flatten()
    })
    .map(|query| query.matches())
}
