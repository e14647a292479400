//! File-backed backend.
//!
//! Each key is stored as one JSON file under the root directory. The file
//! carries an envelope with the original key, since key characters that
//! are not filesystem-safe get mangled in the file name.

use crate::{KvBackend, StoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    key: String,
    value: serde_json::Value,
}

/// One-file-per-key store rooted at a directory.
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open (and create, if needed) a store at the given directory.
    pub fn open(root: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| StoreError::OpenError(e.to_string()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.root.join(format!("{}.json", name))
    }

    fn read_envelope(&self, path: &std::path::Path) -> Result<Option<Envelope>, StoreError> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl KvBackend for FileBackend {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match self.read_envelope(&self.path_for(key))? {
            Some(envelope) if envelope.key == key => {
                Ok(Some(serde_json::to_vec(&envelope.value)?))
            }
            _ => Ok(None),
        }
    }

    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let envelope = Envelope {
            key: key.to_string(),
            value: serde_json::from_slice(value)?,
        };
        let bytes = serde_json::to_vec(&envelope)?;
        fs::write(self.path_for(key), bytes)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get_raw(key)?.is_some())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(envelope) = self.read_envelope(&entry.path())? {
                keys.push(envelope.key);
            }
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ridge-store-test-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn test_round_trip_on_disk() {
        let root = temp_root("rt");
        let backend = FileBackend::open(&root).unwrap();

        backend.set_raw("cart:sess-1", br#"{"n":1}"#).unwrap();
        assert!(backend.exists("cart:sess-1").unwrap());
        assert_eq!(
            backend.get_raw("cart:sess-1").unwrap(),
            Some(br#"{"n":1}"#.to_vec())
        );

        backend.delete("cart:sess-1").unwrap();
        assert!(!backend.exists("cart:sess-1").unwrap());

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_keys_survive_mangled_names() {
        let root = temp_root("keys");
        let backend = FileBackend::open(&root).unwrap();

        backend.set_raw("cart:a/b", b"1").unwrap();
        assert_eq!(backend.keys().unwrap(), vec!["cart:a/b".to_string()]);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_delete_missing_is_ok() {
        let root = temp_root("del");
        let backend = FileBackend::open(&root).unwrap();
        backend.delete("never-set").unwrap();

        fs::remove_dir_all(&root).ok();
    }
}
