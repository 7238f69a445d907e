//! Sequential export driver.
//!
//! The 3D host (or any other backend) sits behind [`SceneRenderer`]; this
//! module only decides file paths and the order jobs are handed over.

use std::path::{Path, PathBuf};

use super::jobs::{ExportJob, STL_EXTENSION};
use crate::error::{Result, SwatchError};

/// Backend that turns one export job into one output file.
pub trait SceneRenderer {
    /// Extension of the files this renderer writes.
    fn extension(&self) -> &str {
        STL_EXTENSION
    }

    /// Render `job` to `path`. Existing files are overwritten.
    fn render(&mut self, job: &ExportJob, path: &Path) -> Result<()>;
}

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_dir: PathBuf,
    /// Paths in job order; may repeat when two jobs share a file name.
    pub files: Vec<PathBuf>,
}

/// Render every job in order into `output_dir`, creating it if needed.
///
/// Stops at the first renderer error. Jobs that sanitize to the same file
/// name overwrite each other.
pub fn run_export<R: SceneRenderer + ?Sized>(
    jobs: &[ExportJob],
    renderer: &mut R,
    output_dir: &Path,
) -> Result<ExportSummary> {
    if jobs.is_empty() {
        return Err(SwatchError::EmptyCatalog);
    }

    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir).map_err(|e| SwatchError::io(output_dir, e))?;
        log::info!("Created folder: {}", output_dir.display());
    }

    let total = jobs.len();
    let mut files = Vec::with_capacity(total);

    for (i, job) in jobs.iter().enumerate() {
        let file_name = format!("{}.{}", job.file_stem(), renderer.extension());
        let path = output_dir.join(&file_name);

        renderer.render(job, &path)?;
        log::info!("[{}/{}] Exported: {}", i + 1, total, file_name);

        files.push(path);
    }

    Ok(ExportSummary {
        output_dir: output_dir.to_path_buf(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writes the colour name into each file and records call order.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<String>,
        fail_on: Option<String>,
    }

    impl SceneRenderer for RecordingRenderer {
        fn render(&mut self, job: &ExportJob, path: &Path) -> Result<()> {
            if self.fail_on.as_deref() == Some(job.colour.as_str()) {
                return Err(SwatchError::Render(format!("cannot render {}", job.colour)));
            }
            self.calls.push(job.colour.clone());
            std::fs::write(path, &job.colour).map_err(|e| SwatchError::io(path, e))
        }
    }

    fn job(colour: &str) -> ExportJob {
        ExportJob {
            colour: colour.into(),
            manufacturer: "Bambu Lab".into(),
            material: "PLA".into(),
            temp_nozzle: "220".into(),
            temp_bed: "60".into(),
        }
    }

    #[test]
    fn test_run_export_creates_dir_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output");
        let mut renderer = RecordingRenderer::default();

        let summary = run_export(&[job("White"), job("Black")], &mut renderer, &out).unwrap();

        assert_eq!(renderer.calls, vec!["White", "Black"]);
        assert_eq!(summary.files.len(), 2);
        assert_eq!(summary.files[0], out.join("BambuLab_PLA_White.stl"));
        assert!(summary.files[1].exists());
    }

    #[test]
    fn test_run_export_duplicate_names_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = RecordingRenderer::default();
        let mut second = job("Orange");
        second.temp_nozzle = "230".into();

        let summary =
            run_export(&[job("Orange"), second], &mut renderer, dir.path()).unwrap();

        assert_eq!(summary.files[0], summary.files[1]);
        assert_eq!(renderer.calls.len(), 2);
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_run_export_stops_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = RecordingRenderer {
            fail_on: Some("Black".into()),
            ..Default::default()
        };

        let result = run_export(
            &[job("White"), job("Black"), job("Grey")],
            &mut renderer,
            dir.path(),
        );

        assert!(matches!(result, Err(SwatchError::Render(_))));
        assert_eq!(renderer.calls, vec!["White"]);
    }

    #[test]
    fn test_run_export_no_jobs() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = RecordingRenderer::default();
        assert!(matches!(
            run_export(&[], &mut renderer, dir.path()),
            Err(SwatchError::EmptyCatalog)
        ));
    }
}
