//! JSON job manifest for the 3D host.
//!
//! The host script reads this list, sets each text object by name and
//! exports one mesh per entry.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use super::jobs::{ExportJob, TextField};
use crate::error::{Result, SwatchError};

/// One manifest entry: the job plus everything the host needs to apply it.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry<'a> {
    pub file_name: String,
    #[serde(flatten)]
    pub job: &'a ExportJob,
    /// Scene text object name → label text.
    pub text: BTreeMap<&'static str, String>,
}

impl<'a> ManifestEntry<'a> {
    pub fn new(job: &'a ExportJob) -> Self {
        let text = TextField::ALL
            .iter()
            .map(|field| (field.object_name(), job.text(*field)))
            .collect();

        Self {
            file_name: job.file_name(),
            job,
            text,
        }
    }
}

pub fn manifest(jobs: &[ExportJob]) -> Vec<ManifestEntry<'_>> {
    jobs.iter().map(ManifestEntry::new).collect()
}

/// Write the manifest as pretty JSON followed by a newline.
pub fn write_manifest<W: Write>(jobs: &[ExportJob], mut writer: W) -> Result<()> {
    let to_io = |e: std::io::Error| SwatchError::io("<manifest>", e);

    serde_json::to_writer_pretty(&mut writer, &manifest(jobs)).map_err(|e| to_io(e.into()))?;
    writeln!(writer).map_err(to_io)?;
    writer.flush().map_err(to_io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_entry_shape() {
        let job = ExportJob {
            colour: "Black".into(),
            manufacturer: "Bambu Lab".into(),
            material: "PETG".into(),
            temp_nozzle: "250".into(),
            temp_bed: "80".into(),
        };

        let mut buf = Vec::new();
        write_manifest(std::slice::from_ref(&job), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let entry = &value[0];

        assert_eq!(entry["file_name"], "BambuLab_PETG_Black.stl");
        assert_eq!(entry["colour"], "Black");
        assert_eq!(entry["temp_bed"], "80");
        assert_eq!(entry["text"]["TextManufacturer"], "Bambu Lab");
        assert_eq!(entry["text"]["TempHotend"], "250°");
        assert_eq!(entry["text"]["TempBuildplate"], "80°");
    }

    #[test]
    fn test_manifest_preserves_job_order() {
        let jobs: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|c| ExportJob {
                colour: c.to_string(),
                manufacturer: "M".into(),
                material: "PLA".into(),
                temp_nozzle: "200".into(),
                temp_bed: "55".into(),
            })
            .collect();

        let entries = manifest(&jobs);
        let colours: Vec<_> = entries.iter().map(|e| e.job.colour.as_str()).collect();
        assert_eq!(colours, vec!["A", "B", "C"]);
    }
}
