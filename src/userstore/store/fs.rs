use super::BackingStore;
use crate::error::{Result, StoreError};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A backing store over a single file on disk.
///
/// The file is created if it does not exist. An advisory exclusive lock is taken
/// on open and held until the store is closed or dropped, so two `userstore`
/// processes working on the same file run one after the other.
pub struct FileStore {
    path: PathBuf,
    file: File,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(StoreError::Io)?;

        FileExt::lock_exclusive(&file).map_err(|source| StoreError::Locked {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "opened backing file");
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BackingStore for FileStore {
    fn read_all(&mut self) -> Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(0)).map_err(StoreError::Io)?;
        let mut content = Vec::new();
        self.file
            .read_to_end(&mut content)
            .map_err(StoreError::Io)?;
        debug!(path = %self.path.display(), bytes = content.len(), "read backing file");
        Ok(content)
    }

    fn overwrite(&mut self, content: &[u8]) -> Result<()> {
        self.file.set_len(0).map_err(StoreError::Io)?;
        self.file.seek(SeekFrom::Start(0)).map_err(StoreError::Io)?;
        self.file.write_all(content).map_err(StoreError::Io)?;
        self.file.flush().map_err(StoreError::Io)?;
        debug!(path = %self.path.display(), bytes = content.len(), "rewrote backing file");
        Ok(())
    }

    fn close(self) -> Result<()> {
        self.file.sync_all().map_err(StoreError::Io)?;
        FileExt::unlock(&self.file).map_err(StoreError::Io)?;
        debug!(path = %self.path.display(), "closed backing file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        (dir, path)
    }

    #[test]
    fn open_creates_missing_file() {
        let (_dir, path) = setup();
        assert!(!path.exists());

        let store = FileStore::open(&path).unwrap();
        store.close().unwrap();

        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), b"");
    }

    #[test]
    fn open_keeps_existing_content() {
        let (_dir, path) = setup();
        fs::write(&path, b"[1,2,3]").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.read_all().unwrap(), b"[1,2,3]");
    }

    #[test]
    fn read_all_is_repeatable() {
        let (_dir, path) = setup();
        fs::write(&path, b"[]").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.read_all().unwrap(), b"[]");
        assert_eq!(store.read_all().unwrap(), b"[]");
    }

    #[test]
    fn overwrite_discards_longer_previous_content() {
        let (_dir, path) = setup();
        fs::write(&path, b"a much longer previous payload").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        store.overwrite(b"[]").unwrap();
        assert_eq!(store.read_all().unwrap(), b"[]");
        store.close().unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"[]");
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("users.json");
        assert!(matches!(FileStore::open(&path), Err(StoreError::Io(_))));
    }

    #[test]
    fn exposes_path() {
        let (_dir, path) = setup();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
    }
}
