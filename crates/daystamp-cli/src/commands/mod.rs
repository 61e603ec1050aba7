pub mod checkin;
pub mod rank;

use std::path::Path;

use daystamp_core::error::Result;
use daystamp_core::store::LEDGER_FILE;
use daystamp_core::LedgerStore;

/// Store at `--data-dir` when given, otherwise the default data directory.
pub(crate) fn open_store(data_dir: Option<&Path>) -> Result<LedgerStore> {
    match data_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Ok(LedgerStore::with_path(dir.join(LEDGER_FILE)))
        }
        None => LedgerStore::open(),
    }
}
