//! Persisted key-value state (theme mode, verification flag)
//!
//! Entries are JSON files on native platforms and an in-process map on wasm.
//! A `Storage` value is a cheap cloneable handle; handles over the same
//! backend observe each other's writes, which is what the verification
//! poll relies on. Entries may carry an expiry and read as absent once past
//! it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct PersistedEntry {
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<u64>,
}

impl PersistedEntry {
    fn is_expired(&self, now: u64) -> bool {
        matches!(self.expires_at, Some(deadline) if now >= deadline)
    }
}

type MemoryMap = Arc<Mutex<HashMap<String, PersistedEntry>>>;

/// Process-wide backing map for wasm, where every handle shares one origin
/// store the way browser cookies do.
#[allow(dead_code)]
static SHARED_MEMORY: Lazy<MemoryMap> = Lazy::new(MemoryMap::default);

#[derive(Clone)]
enum Backend {
    #[cfg(not(target_arch = "wasm32"))]
    Disk(PathBuf),
    Memory(MemoryMap),
}

// Handles are equal when they address the same backing store.
impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            #[cfg(not(target_arch = "wasm32"))]
            (Backend::Disk(a), Backend::Disk(b)) => a == b,
            (Backend::Memory(a), Backend::Memory(b)) => Arc::ptr_eq(a, b),
            #[cfg(not(target_arch = "wasm32"))]
            _ => false,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Storage {
    backend: Backend,
}

impl Storage {
    /// Handle to the platform default store.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Self {
        let dir = dirs::data_local_dir()
            .map(|base| base.join("portfolio").join("state"))
            .unwrap_or_else(|| PathBuf::from("cache").join("state"));
        Self::open_at(dir)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Self {
        Self {
            backend: Backend::Memory(SHARED_MEMORY.clone()),
        }
    }

    /// Handle rooted at an explicit directory. Two handles over the same
    /// directory see each other's writes.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_at(dir: PathBuf) -> Self {
        Self {
            backend: Backend::Disk(dir),
        }
    }

    /// Isolated store for tests.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryMap::default()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let entry = self.read_entry(key)?;
        if entry.is_expired(current_timestamp()) {
            let _ = self.remove(key);
            return None;
        }
        Some(entry.value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.write_entry(
            key,
            &PersistedEntry {
                value: value.to_string(),
                expires_at: None,
            },
        )
    }

    /// Set a value that expires `ttl` from now.
    pub fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<(), String> {
        self.write_entry(
            key,
            &PersistedEntry {
                value: value.to_string(),
                expires_at: Some(current_timestamp() + ttl.as_secs()),
            },
        )
    }

    pub fn remove(&self, key: &str) -> Result<(), String> {
        match &self.backend {
            #[cfg(not(target_arch = "wasm32"))]
            Backend::Disk(dir) => {
                let path = dir.join(format!("{}.json", sanitize_key(key)));
                if path.exists() {
                    fs::remove_file(path).map_err(|e| format!("failed to remove entry: {}", e))?;
                }
                Ok(())
            }
            Backend::Memory(map) => {
                let mut entries = map.lock().map_err(|e| e.to_string())?;
                entries.remove(key);
                Ok(())
            }
        }
    }

    fn read_entry(&self, key: &str) -> Option<PersistedEntry> {
        match &self.backend {
            #[cfg(not(target_arch = "wasm32"))]
            Backend::Disk(dir) => {
                let path = dir.join(format!("{}.json", sanitize_key(key)));
                let raw = fs::read_to_string(path).ok()?;
                serde_json::from_str(&raw).ok()
            }
            Backend::Memory(map) => {
                let entries = map.lock().ok()?;
                entries.get(key).cloned()
            }
        }
    }

    fn write_entry(&self, key: &str, entry: &PersistedEntry) -> Result<(), String> {
        match &self.backend {
            #[cfg(not(target_arch = "wasm32"))]
            Backend::Disk(dir) => {
                fs::create_dir_all(dir)
                    .map_err(|e| format!("failed to create state directory: {}", e))?;
                let path = dir.join(format!("{}.json", sanitize_key(key)));
                let payload = serde_json::to_string(entry).map_err(|e| e.to_string())?;
                fs::write(path, payload).map_err(|e| format!("failed to write entry: {}", e))
            }
            Backend::Memory(map) => {
                let mut entries = map.lock().map_err(|e| e.to_string())?;
                entries.insert(key.to_string(), entry.clone());
                Ok(())
            }
        }
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Sanitize storage key for filesystem use
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("portfolio-theme"), "portfolio-theme");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
    }

    #[test]
    fn set_then_get_round_trips() {
        let storage = Storage::in_memory();
        storage.set("portfolio-theme", "auto").expect("set failed");
        assert_eq!(storage.get("portfolio-theme"), Some("auto".to_string()));
    }

    #[test]
    fn get_missing_key_is_none() {
        let storage = Storage::in_memory();
        assert_eq!(storage.get("nope"), None);
    }

    #[test]
    fn expired_entry_reads_as_absent() {
        let storage = Storage::in_memory();
        storage
            .set_with_ttl("is_verified", "true", Duration::from_secs(0))
            .expect("set failed");
        assert_eq!(storage.get("is_verified"), None);
    }

    #[test]
    fn unexpired_entry_survives() {
        let storage = Storage::in_memory();
        storage
            .set_with_ttl("is_verified", "true", Duration::from_secs(3600))
            .expect("set failed");
        assert_eq!(storage.get("is_verified"), Some("true".to_string()));
    }

    #[test]
    fn cloned_handles_share_the_backend() {
        let storage = Storage::in_memory();
        let other_tab = storage.clone();
        other_tab.set("is_verified", "true").expect("set failed");
        assert_eq!(storage.get("is_verified"), Some("true".to_string()));
    }

    #[test]
    fn remove_deletes_the_entry() {
        let storage = Storage::in_memory();
        storage.set("is_verified", "true").expect("set failed");
        storage.remove("is_verified").expect("remove failed");
        assert_eq!(storage.get("is_verified"), None);
    }
}
