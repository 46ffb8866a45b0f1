use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const TMP_SUFFIX: &str = "tmp";

/// Sibling path a write is staged at before it replaces `path`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to the temp sibling of `path`, then renames it over `path`.
/// A failed write leaves the previous contents of `path` untouched.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tmp_path_appends_suffix_to_extension() {
        assert_eq!(
            tmp_path(Path::new("store/financeTransactions.json")),
            PathBuf::from("store/financeTransactions.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("store/plain")), PathBuf::from("store/plain.tmp"));
    }

    #[test]
    fn write_atomic_replaces_contents_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/config.json");
        write_atomic(&path, "{}").unwrap();
        write_atomic(&path, r#"{"recent_limit":3}"#).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"recent_limit":3}"#);
        assert!(!tmp_path(&path).exists());
    }
}
