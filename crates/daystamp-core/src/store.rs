//! Flat-file persistence for the attendance ledger.
//!
//! The whole ledger lives in a single JSON file under the data directory
//! and is rewritten in full on every successful check-in. Persistence is
//! availability-favoring: a missing or corrupt file degrades to an empty
//! ledger, and a failed write leaves the in-memory copy as the source of
//! truth. Failures are logged, never propagated to the check-in path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::Ledger;

/// File name of the persisted ledger inside the data directory.
pub const LEDGER_FILE: &str = "ledger.json";

/// Returns `~/.config/daystamp[-dev]/` based on DAYSTAMP_ENV.
///
/// Set DAYSTAMP_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYSTAMP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("daystamp-dev")
    } else {
        base_dir.join("daystamp")
    };

    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Storage handle for the ledger file.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Open the store at the default data directory, creating it if needed.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join(LEDGER_FILE),
        })
    }

    /// Open the store at an explicit file path (embedding hosts, tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted ledger.
    ///
    /// An absent file is a first run and yields an empty ledger. An
    /// unreadable or corrupt file is logged and also yields an empty
    /// ledger rather than failing the caller.
    pub fn load(&self) -> Ledger {
        if !self.path.exists() {
            return Ledger::new();
        }
        match self.try_load() {
            Ok(ledger) => ledger,
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to load ledger, starting empty"
                );
                Ledger::new()
            }
        }
    }

    fn try_load(&self) -> Result<Ledger> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the full ledger, overwriting any previous content.
    ///
    /// Write failures are logged and swallowed; callers proceed with
    /// in-memory state and the next successful save catches up.
    pub fn save(&self, ledger: &Ledger) {
        if let Err(e) = self.try_save(ledger) {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "failed to save ledger"
            );
        }
    }

    /// Fallible save with all-or-nothing visibility: the ledger is written
    /// to a sibling temp file and renamed over the target, so an
    /// interrupted write never leaves a torn file for the next load.
    ///
    /// # Errors
    /// Returns an error if serialization or any filesystem step fails.
    pub fn try_save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(ledger)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> LedgerStore {
        LedgerStore::with_path(dir.path().join(LEDGER_FILE))
    }

    #[test]
    fn load_missing_file_returns_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_load_roundtrip_preserves_ledger() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut ledger = Ledger::new();
        let record = ledger.get_or_create("group_42", "u1", "Alice");
        record.total_days = 3;
        record.continuous_days = 3;
        record.month_days = 3;
        record.total_rewards = 540;
        record.month_rewards = 540;
        record.last_checkin = chrono::NaiveDate::from_ymd_opt(2024, 1, 3);
        ledger.get_or_create("private_7", "u2", "Bob");

        store.try_save(&ledger).unwrap();
        assert_eq!(store.load(), ledger);
    }

    #[test]
    fn load_corrupt_file_returns_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "{not valid json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&Ledger::new());

        assert!(store.path().exists());
        assert!(!dir.path().join("ledger.json.tmp").exists());
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = LedgerStore::with_path(dir.path().join("nested/deeper").join(LEDGER_FILE));

        store.try_save(&Ledger::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut first = Ledger::new();
        first.get_or_create("group_1", "u1", "Alice");
        store.save(&first);

        let second = Ledger::new();
        store.save(&second);

        assert!(store.load().is_empty());
    }
}
