//! JSON snapshot file store.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use std::sync::Arc;
use tracing::{debug, warn};

use super::io::write_atomic;
use crate::task::{
    codec,
    domain::Task,
    ports::{
        TaskStore, TaskStoreError, TaskStoreResult,
        store::ensure_unique_ids,
    },
};

/// Suffix given to a snapshot that could not be decoded.
const QUARANTINE_SUFFIX: &str = ".corrupt";

/// Task store persisting the snapshot as one JSON file.
///
/// The file uses the export format, so a snapshot file can be imported
/// elsewhere as-is. Filesystem calls run on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct FileTaskStore {
    dir: Arc<Dir>,
    file_name: Utf8PathBuf,
}

impl FileTaskStore {
    /// Opens a store on `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the directory cannot be
    /// created or opened.
    pub fn open(data_dir: &Utf8Path, file_name: impl Into<Utf8PathBuf>) -> TaskStoreResult<Self> {
        Dir::create_ambient_dir_all(data_dir, ambient_authority())
            .map_err(TaskStoreError::persistence)?;
        let dir = Dir::open_ambient_dir(data_dir, ambient_authority())
            .map_err(TaskStoreError::persistence)?;
        Ok(Self::from_dir(dir, file_name))
    }

    /// Creates a store on an already opened directory handle.
    #[must_use]
    pub fn from_dir(dir: Dir, file_name: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir: Arc::new(dir),
            file_name: file_name.into(),
        }
    }

    /// Returns the snapshot file name inside the store directory.
    #[must_use]
    pub fn file_name(&self) -> &Utf8Path {
        &self.file_name
    }

    /// Returns the name an undecodable snapshot is moved to.
    #[must_use]
    pub fn quarantine_name(&self) -> Utf8PathBuf {
        quarantine_path(&self.file_name)
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&Dir, &Utf8Path) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || f(&dir, &file_name))
            .await
            .map_err(TaskStoreError::persistence)?
    }
}

fn read_snapshot(dir: &Dir, file_name: &Utf8Path) -> TaskStoreResult<Vec<Task>> {
    let bytes = match dir.read(file_name) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(file = %file_name, "no task snapshot yet");
            return Ok(Vec::new());
        }
        Err(err) => return Err(TaskStoreError::persistence(err)),
    };

    match codec::import(&bytes) {
        Ok(tasks) => {
            debug!(file = %file_name, count = tasks.len(), "loaded task snapshot");
            Ok(tasks)
        }
        Err(err) => {
            quarantine(dir, file_name);
            warn!(file = %file_name, error = %err, "unreadable task snapshot set aside, starting empty");
            Ok(Vec::new())
        }
    }
}

fn quarantine_path(file_name: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{file_name}{QUARANTINE_SUFFIX}"))
}

/// Renames an undecodable snapshot to its quarantine name.
fn quarantine(dir: &Dir, file_name: &Utf8Path) {
    if let Err(err) = dir.rename(file_name, dir, quarantine_path(file_name)) {
        warn!(file = %file_name, error = %err, "could not set aside unreadable task snapshot");
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn load(&self) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(read_snapshot).await
    }

    async fn replace_all(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        ensure_unique_ids(tasks)?;
        let bytes = codec::export(tasks).map_err(TaskStoreError::persistence)?;
        let count = tasks.len();
        self.run_blocking(move |dir, file_name| {
            write_atomic(dir, file_name.as_str(), &bytes).map_err(TaskStoreError::persistence)?;
            debug!(file = %file_name, count, "wrote task snapshot");
            Ok(())
        })
        .await
    }
}
