//! JSON file-backed doctor directory.
//!
//! The whole directory is one human-editable JSON file, loaded into memory
//! on open. Saves use atomic writes (write-to-temp + rename) so a crash never
//! leaves a half-written file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: loads the entire file once
//! - **Write**: serializes and rewrites the entire dataset
//! - **Best for**: a few thousand records, refreshed by a content job

use crate::domain::error::{LocatorError, Result};
use crate::domain::Doctor;
use crate::storage::backend::DirectorySource;
use crate::storage::models::DoctorRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current version of the directory file format.
pub const FORMAT_VERSION: u32 = 1;

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DirectoryData {
    version: u32,

    /// When the file was last written by [`JsonDirectory::save`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    doctors: Vec<DoctorRecord>,
}

impl Default for DirectoryData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            generated_at: None,
            doctors: Vec::new(),
        }
    }
}

/// Doctor directory stored as a JSON file.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "generated_at": "2024-05-01T09:30:00Z",
///   "doctors": [
///     {
///       "name": "Dr. Ada Byron",
///       "specialty": "Cardiology",
///       "address": "1 Main St",
///       "phoneNumber": "+1 555 0100",
///       "imageUrl": "/media/ada.jpg",
///       "location": "Springfield"
///     }
///   ]
/// }
/// ```
#[derive(Debug)]
pub struct JsonDirectory {
    file_path: PathBuf,
    data: DirectoryData,
    /// Records changed since the last save.
    dirty: bool,
}

impl JsonDirectory {
    /// Opens a directory file. A missing file yields an empty directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not valid
    /// JSON, or declares a newer format version.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use doctor_locator::storage::JsonDirectory;
    ///
    /// let directory = JsonDirectory::open("/srv/locator/doctors.json")?;
    /// println!("{} doctors", directory.len());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let _span = tracing::debug_span!("open_directory", path = ?file_path).entered();

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("directory file missing, starting empty");
            DirectoryData::default()
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &Path) -> Result<DirectoryData> {
        let contents = std::fs::read_to_string(path)?;
        let data: DirectoryData = serde_json::from_str(&contents)
            .map_err(|e| LocatorError::Storage(format!("failed to parse directory: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(LocatorError::Storage(format!(
                "unsupported directory version {} (newest known is {FORMAT_VERSION})",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            doctors = data.doctors.len(),
            generated_at = ?data.generated_at,
            "loaded directory"
        );

        Ok(data)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.doctors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.doctors.is_empty()
    }

    #[must_use]
    pub const fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.data.generated_at
    }

    /// Every record converted to the domain type, in file order.
    #[must_use]
    pub fn doctors(&self) -> Vec<Doctor> {
        self.data
            .doctors
            .iter()
            .cloned()
            .map(DoctorRecord::into_doctor)
            .collect()
    }

    /// Replaces every record. Call [`save`](Self::save) to persist.
    pub fn replace(&mut self, doctors: &[Doctor]) {
        self.data.doctors = doctors.iter().map(DoctorRecord::from).collect();
        self.dirty = true;
    }

    /// Writes the directory to disk if it changed, stamping `generated_at`.
    ///
    /// Parent directories are created as needed. The data goes to a sibling
    /// `.tmp` file first and is then renamed over the target.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the temporary file
    /// cannot be written, or the rename fails.
    pub fn save(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let _span = tracing::debug_span!("save_directory", path = ?self.file_path).entered();

        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.data.version = FORMAT_VERSION;
        self.data.generated_at = Some(Utc::now());

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| LocatorError::Storage(format!("failed to serialize directory: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(doctors = self.data.doctors.len(), "directory saved");
        Ok(())
    }
}

impl DirectorySource for JsonDirectory {
    fn load_doctors(&self) -> Result<Vec<Doctor>> {
        Ok(self.doctors())
    }
}
