use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::Context;
use tracing::{debug, error, warn};

use crate::config::TASKS_STORAGE_KEY;
use crate::task::Task;

/// String key/value persistence, shaped like the browser's `localStorage`.
pub trait KeyValueStorage {
    /// Absent and unreadable values are both `None`.
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Process-local storage. Clones share the same map, so a clone can play
/// the part of "the page after a reload".
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Writes the whole ordered list under the tasks key, replacing what was there.
#[tracing::instrument(skip(storage, tasks), fields(count = tasks.len()))]
pub fn save_tasks<S: KeyValueStorage + ?Sized>(storage: &S, tasks: &[Task]) -> anyhow::Result<()> {
    let serialized = serde_json::to_string(tasks).context("failed serializing task list")?;
    storage
        .set_item(TASKS_STORAGE_KEY, &serialized)
        .with_context(|| format!("failed writing storage key {TASKS_STORAGE_KEY}"))?;
    debug!(bytes = serialized.len(), "saved task list");
    Ok(())
}

/// Reads the stored list. Missing, `null` and unparsable values all come
/// back as `None`.
#[tracing::instrument(skip(storage))]
pub fn load_tasks<S: KeyValueStorage + ?Sized>(storage: &S) -> Option<Vec<Task>> {
    let Some(raw) = storage.get_item(TASKS_STORAGE_KEY) else {
        debug!("no stored task list");
        return None;
    };

    match serde_json::from_str::<Option<Vec<Task>>>(&raw) {
        Ok(Some(tasks)) => {
            debug!(count = tasks.len(), "loaded task list");
            Some(tasks)
        }
        Ok(None) => {
            warn!("stored task list is null");
            None
        }
        Err(err) => {
            error!(error = %err, "failed parsing stored task list; ignoring it");
            None
        }
    }
}
