use std::{fs, io::ErrorKind, path::PathBuf};

use tracing::debug;

use super::KeyValueStore;
use crate::{
    errors::{LedgerError, Result},
    utils::files::write_atomic,
};

const VALUE_EXTENSION: &str = "json";

/// Filesystem-backed store keeping one JSON document per key under `root`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn value_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        {
            return Err(LedgerError::Storage(format!("invalid storage key `{key}`")));
        }
        Ok(self.root.join(format!("{key}.{VALUE_EXTENSION}")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        write_atomic(&path, value)?;
        debug!(key, path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.value_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::files::tmp_path;
    use tempfile::tempdir;

    #[test]
    fn round_trips_values_per_key() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("data")).unwrap();
        assert!(store.get("financeTransactions").unwrap().is_none());

        store.set("financeTransactions", "[]").unwrap();
        assert_eq!(
            store.get("financeTransactions").unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("data/financeTransactions.json").exists());
        assert!(!dir.path().join("data/financeTransactions.json.tmp").exists());

        store.remove("financeTransactions").unwrap();
        store.remove("financeTransactions").unwrap();
        assert!(store.get("financeTransactions").unwrap().is_none());
    }

    #[test]
    fn rejects_keys_that_escape_the_root() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.set("../outside", "1"),
            Err(LedgerError::Storage(_))
        ));
        assert!(store.get("").is_err());
    }

    #[test]
    fn failed_write_keeps_previous_value() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        store.set("financeMainCurrency", "\"USD\"").unwrap();

        // A directory squatting on the temp path makes File::create fail.
        let path = store.value_path("financeMainCurrency").unwrap();
        fs::create_dir_all(tmp_path(&path)).unwrap();

        assert!(store.set("financeMainCurrency", "\"EUR\"").is_err());
        assert_eq!(
            store.get("financeMainCurrency").unwrap().as_deref(),
            Some("\"USD\"")
        );
    }
}
