//! Durable storage for the tracker's collections.
//!
//! Each collection is persisted independently as a JSON array of records
//! under its own fixed path, so a failure writing one can never corrupt the
//! other. The store is handed to the tracker at construction; there is no
//! ambient global.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::goals::types::Goal;
use crate::workouts::types::Workout;

const WORKOUTS_FILE: &str = "workouts.json";
const GOALS_FILE: &str = "goals.json";

/// Persistence seam between the tracker and durable storage.
pub trait TrackerStore {
    /// Persist the full workout collection.
    fn save_workouts(&self, workouts: &[Workout]) -> Result<(), StoreError>;

    /// Persist the full goal collection.
    fn save_goals(&self, goals: &[Goal]) -> Result<(), StoreError>;

    /// Restore the workout collection. Missing or corrupt data yields an
    /// empty collection, never an error for the other collection to trip on.
    fn load_workouts(&self) -> Result<Vec<Workout>, StoreError>;

    /// Restore the goal collection, with the same tolerance as
    /// [`TrackerStore::load_workouts`].
    fn load_goals(&self) -> Result<Vec<Goal>, StoreError>;
}

/// File-backed store writing each collection as its own JSON document.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store in the platform data directory.
    pub fn open_default() -> Self {
        Self::new(Self::default_dir())
    }

    /// Get the platform data directory for tracker state.
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "fittrack", "FitTrack")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_collection<T: Serialize>(&self, file: &str, records: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::IoError(e.to_string()))?;

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::SerializeError(e.to_string()))?;

        // Commit via rename so a crash mid-write leaves the previous
        // contents intact.
        let path = self.dir.join(file);
        let staging = self.dir.join(format!("{}.tmp", file));
        fs::write(&staging, json).map_err(|e| StoreError::IoError(e.to_string()))?;
        fs::rename(&staging, &path).map_err(|e| StoreError::IoError(e.to_string()))?;

        Ok(())
    }

    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(file);

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| StoreError::IoError(e.to_string()))?;

        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!("Ignoring corrupt {}: {}", file, e);
                Ok(Vec::new())
            }
        }
    }
}

impl TrackerStore for JsonStore {
    fn save_workouts(&self, workouts: &[Workout]) -> Result<(), StoreError> {
        self.write_collection(WORKOUTS_FILE, workouts)
    }

    fn save_goals(&self, goals: &[Goal]) -> Result<(), StoreError> {
        self.write_collection(GOALS_FILE, goals)
    }

    fn load_workouts(&self) -> Result<Vec<Workout>, StoreError> {
        self.read_collection(WORKOUTS_FILE)
    }

    fn load_goals(&self) -> Result<Vec<Goal>, StoreError> {
        self.read_collection(GOALS_FILE)
    }
}

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
