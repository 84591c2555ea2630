//! # File I/O Module
//!
//! Handles section files and report output:
//! - **Section loading**: JSON files describing a [`BeamSection`]
//! - **Atomic report writes**: Write to .tmp, sync, rename to prevent corruption
//!
//! The temporary file is owned by a guard and removed when the guard drops,
//! so a failed or interrupted write leaves nothing behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_section, write_report};
//! use beam_core::pdf::{render_section_pdf, ReportInfo};
//! use std::path::Path;
//!
//! let section = load_section(Path::new("b1.json"))?;
//! let pdf = render_section_pdf(&section, &ReportInfo::default())?;
//! write_report(Path::new("beam_design_calculation.pdf"), &pdf)?;
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::calculations::BeamSection;
use crate::errors::{CalcError, CalcResult};

/// Temporary file that is deleted on drop unless persisted.
struct TempFileGuard {
    path: PathBuf,
    persisted: bool,
}

impl TempFileGuard {
    fn for_target(target: &Path) -> Self {
        TempFileGuard {
            path: tmp_path_for(target),
            persisted: false,
        }
    }

    /// Rename the temporary file onto `target`, consuming the guard.
    fn persist(mut self, target: &Path) -> CalcResult<()> {
        fs::rename(&self.path, target).map_err(|e| {
            CalcError::file_error("rename to final", target.display().to_string(), e.to_string())
        })?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if !self.persisted {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// `report.pdf` -> `report.pdf.tmp`
fn tmp_path_for(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write report bytes to a file with atomic write semantics.
///
/// The write process:
/// 1. Write to a temporary file (.tmp)
/// 2. Sync to disk (fsync)
/// 3. Rename .tmp to the target (atomic on most filesystems)
///
/// On any failure the temporary file is removed and the target is untouched.
///
/// # Example
///
/// ```rust,no_run
/// use beam_core::file_io::write_report;
/// use std::path::Path;
///
/// write_report(Path::new("beam_design_calculation.pdf"), b"%PDF-1.7")?;
/// # Ok::<(), beam_core::errors::CalcError>(())
/// ```
pub fn write_report(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let guard = TempFileGuard::for_target(path);

    let mut tmp_file = File::create(&guard.path).map_err(|e| {
        CalcError::file_error("create temp file", guard.path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", guard.path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", guard.path.display().to_string(), e.to_string())
    })?;

    // Handle must be closed before rename on Windows
    drop(tmp_file);
    guard.persist(path)?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote report");
    Ok(())
}

/// Load a section from a JSON file.
///
/// Missing fields take their defaults; the section is not validated here.
///
/// # Returns
///
/// * `Ok(BeamSection)` - Parsed section
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_section(path: &Path) -> CalcResult<BeamSection> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let section: BeamSection =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    tracing::debug!(path = %path.display(), "loaded section");
    Ok(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn test_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_write_report_replaces_target() {
        let path = test_path("report.pdf");

        write_report(&path, b"first").unwrap();
        write_report(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!tmp_path_for(&path).exists(), "temp file left behind");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_report_failure_cleans_up() {
        // Target is an existing directory, so the rename fails
        let dir = test_path("report_dir");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("keep"), b"x").unwrap();

        let err = write_report(&dir, b"bytes").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!tmp_path_for(&dir).exists(), "temp file left behind");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_guard_removes_unpersisted_file() {
        let target = test_path("guarded.pdf");
        {
            let guard = TempFileGuard::for_target(&target);
            fs::write(&guard.path, b"partial").unwrap();
            assert!(guard.path.exists());
        }
        assert!(!tmp_path_for(&target).exists());
        assert!(!target.exists());
    }

    #[test]
    fn test_tmp_path_appends_extension() {
        assert_eq!(
            tmp_path_for(Path::new("out/beam_design_calculation.pdf")),
            PathBuf::from("out/beam_design_calculation.pdf.tmp")
        );
    }

    #[test]
    fn test_load_section_partial_json() {
        let path = test_path("section.json");
        fs::write(&path, r#"{"moment_knm": 120.0, "f_ck_mpa": 35.0}"#).unwrap();

        let section = load_section(&path).unwrap();
        assert_eq!(section.moment_knm, 120.0);
        assert_eq!(section.materials.concrete.f_ck_mpa, 35.0);
        assert_eq!(section.width_mm, BeamSection::default().width_mm);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_section_invalid_json() {
        let path = test_path("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_section(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(!err.is_recoverable());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_section(&test_path("does_not_exist.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(err.is_recoverable());
    }
}
