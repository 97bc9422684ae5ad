//! Filesystem-backed keyed storage: one file per slot under a data root.

use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use pitaka_core::{CoreError, KeyValueStore};

const TMP_SUFFIX: &str = "tmp";

/// Locations used by the file store.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub root: PathBuf,
}

impl StorePaths {
    /// Platform data directory (falling back to home) plus `pitaka`.
    pub fn default_root() -> Self {
        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            root: base.join("pitaka"),
        }
    }
}

/// Keyed store persisting each slot as its own file.
///
/// Writes stage to a `.tmp` sibling and rename into place, so a torn write
/// never clobbers the previous value. Reads map a missing file to an absent
/// slot.
#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(paths: StorePaths) -> Result<Self, CoreError> {
        fs::create_dir_all(&paths.root)?;
        Ok(Self { root: paths.root })
    }

    pub fn open_default() -> Result<Self, CoreError> {
        Self::open(StorePaths::default_root())
    }

    /// Filesystem path holding the given slot.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(file_name(key))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let path = self.slot_path(key);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let path = self.slot_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Maps a slot key to a safe file name, preserving case so `userName` and
/// `username` stay distinct slots.
fn file_name(key: &str) -> String {
    let sanitized: String = key
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    if sanitized.is_empty() {
        "slot".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
