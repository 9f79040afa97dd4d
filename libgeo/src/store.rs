//! Persistence for the sample collection.
//!
//! The whole collection lives in one JSON file holding an array of
//! [Sample] records. Every mutation is a full load-modify-save cycle; the
//! file is the sole source of truth and callers are expected to re-read it
//! after each change rather than caching records in memory.

use crate::{Error, Result, sample::Sample};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection. A missing file or unreadable contents
    /// yields an empty collection rather than an error; corruption is
    /// logged but deliberately not surfaced to the caller.
    pub async fn load_all(&self) -> Result<Vec<Sample>> {
        debug!(path = ?self.path, "loading record collection");
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&contents) {
            Ok(samples) => Ok(samples),
            Err(e) => {
                warn!(path = ?self.path, error = %e, "stored data unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Serialize the full sequence and overwrite the stored file.
    pub async fn save_all(&self, samples: &[Sample]) -> Result<()> {
        debug!(path = ?self.path, count = samples.len(), "saving record collection");
        let serialized = serde_json::to_string(samples).map_err(Error::StoreSerialization)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, serialized).await?;
        Ok(())
    }

    /// Append a new record to the collection.
    pub async fn add(&self, sample: Sample) -> Result<()> {
        let mut samples = self.load_all().await?;
        samples.push(sample);
        self.save_all(&samples).await
    }

    /// Fetch a single record by id.
    pub async fn get(&self, id: &str) -> Result<Sample> {
        self.load_all()
            .await?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::RecordNotFound(id.to_string()))
    }

    /// Replace the record with the same id, preserving its position in the
    /// collection.
    pub async fn update(&self, sample: Sample) -> Result<()> {
        let mut samples = self.load_all().await?;
        let slot = samples
            .iter_mut()
            .find(|s| s.id == sample.id)
            .ok_or_else(|| Error::RecordNotFound(sample.id.clone()))?;
        *slot = sample;
        self.save_all(&samples).await
    }

    /// Remove the record with the given id. Removing an id that isn't in
    /// the collection is a no-op.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        let mut samples = self.load_all().await?;
        samples.retain(|s| s.id != id);
        self.save_all(&samples).await
    }

    /// Remove the stored collection entirely. Clearing an empty store is
    /// fine.
    pub async fn clear(&self) -> Result<()> {
        debug!(path = ?self.path, "clearing record collection");
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
