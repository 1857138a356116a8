//! # File I/O Module
//!
//! Handles history file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, verify, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Histories are saved as `.bmi.json` files containing pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bmi_core::file_io::{load_history, save_history};
//! use bmi_core::records::History;
//! use std::path::Path;
//!
//! let history = History::new(None);
//! let path = Path::new("history.bmi.json");
//!
//! save_history(&history, path)?;
//! let loaded = load_history(path)?;
//! # Ok::<(), bmi_core::errors::CalcError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::errors::{CalcError, CalcResult};
use crate::records::{History, SCHEMA_VERSION};

/// Default history file name
pub const DEFAULT_HISTORY_FILE: &str = "bmi_history.bmi.json";

/// Save a history to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize history to JSON
/// 2. Write to a temporary file (`<name>.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Re-read the temp file and check it parses
/// 5. Rename over the target (atomic on most filesystems)
pub fn save_history(history: &History, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(history)?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    if let Err(e) = verify_written(&tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::debug!("saved {} records to {}", history.record_count(), path.display());
    Ok(())
}

/// Load a history from a file.
///
/// # Returns
///
/// * `Ok(History)` - Successfully loaded history
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_history(path: &Path) -> CalcResult<History> {
    read_history(path).inspect_err(|e| log::warn!("could not load {}: {}", path.display(), e))
}

fn read_history(path: &Path) -> CalcResult<History> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let history: History =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&history.meta.version)?;

    log::debug!("loaded {} records from {}", history.record_count(), path.display());
    Ok(history)
}

/// Load a history, or start a fresh one if the file does not exist yet.
///
/// Any other failure (unreadable, corrupt, wrong version) is returned so the
/// caller does not silently overwrite a file it could not read.
pub fn load_or_default(path: &Path) -> CalcResult<History> {
    match fs::metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("no history at {}, starting a new one", path.display());
            Ok(History::default())
        }
        _ => load_history(path),
    }
}

/// Temp file used during atomic saves: the target name plus `.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("history"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn verify_written(tmp_path: &Path) -> CalcResult<()> {
    let contents = fs::read_to_string(tmp_path).map_err(|e| {
        CalcError::file_error("verify temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    serde_json::from_str::<History>(&contents)?;
    Ok(())
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let (Some(file_major), Some(current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };

    // Major version must match
    if file_major != current_major {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor may carry breaking changes
    if *current_major == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}
