//! Namespaced local persistence with schema validation at the boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature that keeps per-user state in the browser (study tasks, mood,
//! journal, completed lessons, the session itself) goes through this module.
//! Keys are `<namespace>_<userId>` for feature slots and fixed names for the
//! session and accessibility slots.
//!
//! ERROR HANDLING
//! ==============
//! Reads parse the stored JSON into the caller's type. A value that does not
//! match the expected shape surfaces as [`StorageError::Malformed`] instead of
//! a panic. [`load_or_default`] applies the shared recovery policy: log, drop
//! the offending key, fall back to the default.
//!
//! TRADE-OFFS
//! ==========
//! Writes always replace the whole value. There is no versioning, no partial
//! update and no cross-tab coordination; the last writer wins.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Fixed key holding the signed-in user record.
pub const SESSION_USER_KEY: &str = "edunexus_user";
/// Fixed key holding the session bearer token.
pub const SESSION_TOKEN_KEY: &str = "edunexus_token";
/// Fixed key holding accessibility preferences.
pub const ACCESSIBILITY_KEY: &str = "edunexus_accessibility";

/// Errors produced by local persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backing store could not be reached (no window, storage disabled).
    #[error("local storage unavailable: {0}")]
    Unavailable(String),

    /// A stored value exists but does not match the expected shape.
    #[error("stored value under `{key}` is malformed: {reason}")]
    Malformed { key: String, reason: String },

    /// The in-memory value could not be serialized.
    #[error("failed to serialize value for `{key}`: {reason}")]
    Serialize { key: String, reason: String },

    /// The backing store rejected the write (quota, private mode).
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Feature prefixes for per-user save slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Namespace {
    StudyTasks,
    Mood,
    Journal,
    CompletedLessons,
}

impl Namespace {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::StudyTasks => "study_tasks",
            Self::Mood => "mood",
            Self::Journal => "journal",
            Self::CompletedLessons => "completed_lessons",
        }
    }
}

/// A fully-formed storage key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    /// Per-user slot: `<namespace>_<user_id>`.
    #[must_use]
    pub fn scoped(namespace: Namespace, user_id: &str) -> Self {
        Self(format!("{}_{user_id}", namespace.prefix()))
    }

    /// Global slot with a fixed name.
    #[must_use]
    pub fn fixed(name: &str) -> Self {
        Self(name.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw string key/value store. Implemented by the browser `localStorage`
/// adapter and by an in-memory map.
pub trait LocalStore {
    /// Read the raw value for `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the store cannot be reached.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the store rejects the value.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; absent keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the store cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key in the store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the store cannot be reached.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Load and validate the JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Malformed`] when the stored text does not parse as
/// `T`, or any error from the underlying store.
pub fn load<T, S>(store: &S, key: &StorageKey) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: LocalStore + ?Sized,
{
    let Some(raw) = store.get_raw(key.as_str())? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Malformed { key: key.to_string(), reason: e.to_string() })
}

/// Serialize `value` and overwrite `key` with it.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] or any write error from the store.
pub fn save<T, S>(store: &S, key: &StorageKey, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: LocalStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Serialize { key: key.to_string(), reason: e.to_string() })?;
    store.set_raw(key.as_str(), &raw)
}

/// Load a text slot. Values written by [`save`] are JSON strings; bare text
/// left by older builds is returned as-is.
///
/// # Errors
///
/// Returns any error from the underlying store.
pub fn load_text<S>(store: &S, key: &StorageKey) -> Result<Option<String>, StorageError>
where
    S: LocalStore + ?Sized,
{
    let Some(raw) = store.get_raw(key.as_str())? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str::<String>(&raw).unwrap_or(raw)))
}

/// Load `key`, recovering from absent or malformed values with `T::default()`.
///
/// A malformed value is logged and removed so the next write starts clean.
pub fn load_or_default<T, S>(store: &S, key: &StorageKey) -> T
where
    T: DeserializeOwned + Default,
    S: LocalStore + ?Sized,
{
    match load(store, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            discard(store, key, &err);
            T::default()
        }
    }
}

/// Log a failed read and drop the key it came from.
pub fn discard<S>(store: &S, key: &StorageKey, err: &StorageError)
where
    S: LocalStore + ?Sized,
{
    log::warn!("discarding stored value: {err}");
    if let StorageError::Malformed { .. } = err {
        if let Err(remove_err) = store.remove(key.as_str()) {
            log::warn!("could not remove `{key}`: {remove_err}");
        }
    }
}

/// Persist `value`, logging instead of propagating failures. Used by UI event
/// handlers, where a failed write must not interrupt the interaction.
pub fn save_logged<T, S>(store: &S, key: &StorageKey, value: &T)
where
    T: Serialize + ?Sized,
    S: LocalStore + ?Sized,
{
    if let Err(err) = save(store, key, value) {
        log::error!("{err}");
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `window.localStorage` adapter. Outside the browser (SSR, unit tests) it
/// behaves as an empty store that accepts and drops writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

impl LocalStore for BrowserStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .clear()
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory store used by tests and anywhere a throwaway slot is enough.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl LocalStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
