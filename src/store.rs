use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::models::Submission;

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Malformed(serde_json::Error),
    Encode(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "I/O error: {err}"),
            StoreError::Malformed(err) => write!(f, "Stored data is not a JSON array: {err}"),
            StoreError::Encode(err) => write!(f, "Failed to encode submission: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Malformed(err) | StoreError::Encode(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// Append-only list of submissions kept as one pretty-printed JSON array.
///
/// Stored records are handled as raw JSON values: only the array shape is
/// checked, and existing entries are written back exactly as they were read,
/// whatever their ids or extra keys.
///
/// Appends are serialized through `write_lock`, so concurrent submissions in
/// this process never lose each other's records. The file is replaced with a
/// rename, so readers never observe a half-written array. Nothing coordinates
/// with other processes writing the same file.
pub struct SubmissionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SubmissionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create the file as an empty array if it does not exist yet.
    /// Existing content is never touched, even if it is malformed.
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        if fs::try_exists(&self.path).await? {
            tracing::info!("Submission store found at {}", self.path.display());
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        tracing::info!("Creating submission store at {}", self.path.display());
        self.write_all(&[]).await
    }

    /// Read every stored record in insertion order. A missing file is an
    /// empty store; anything other than a JSON array is `Malformed`.
    pub async fn load(&self) -> Result<Vec<Value>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_slice(&bytes).map_err(StoreError::Malformed)
    }

    /// Read, push, rewrite. Returns the number of stored records afterwards.
    pub async fn append(&self, submission: &Submission) -> Result<usize, StoreError> {
        let record = serde_json::to_value(submission).map_err(StoreError::Encode)?;

        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        records.push(record);
        self.write_all(&records).await?;

        Ok(records.len())
    }

    async fn write_all(&self, records: &[Value]) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(records).map_err(StoreError::Encode)?;
        let tmp = self.temp_path()?;

        if let Err(e) = write_synced(&tmp, &encoded).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf, StoreError> {
        let mut name: OsString = self
            .path
            .file_name()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("store path has no file name: {}", self.path.display()),
                )
            })?
            .to_os_string();
        name.push(".tmp");
        Ok(self.path.with_file_name(name))
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}
