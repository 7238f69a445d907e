//! Export job generation.
//!
//! A catalog is flattened into one job per (profile, colour) pair. Jobs are
//! never persisted; they are rebuilt from the catalog on every export run.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{Result, SwatchError};

/// File extension of the swatch meshes produced by the 3D host.
pub const STL_EXTENSION: &str = "stl";

/// Suffix appended to temperatures on the printed label.
pub const DEGREE_MARK: &str = "°";

/// One swatch to render: a single colour of a single profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportJob {
    pub colour: String,
    pub manufacturer: String,
    pub material: String,
    pub temp_nozzle: String,
    pub temp_bed: String,
}

/// Text slots on the swatch model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Colour,
    Manufacturer,
    Material,
    TempNozzle,
    TempBed,
}

impl TextField {
    pub const ALL: [TextField; 5] = [
        TextField::Colour,
        TextField::Manufacturer,
        TextField::Material,
        TextField::TempNozzle,
        TextField::TempBed,
    ];

    /// Name of the text object in the swatch scene.
    pub fn object_name(&self) -> &'static str {
        match self {
            TextField::Colour => "TextColour",
            TextField::Manufacturer => "TextManufacturer",
            TextField::Material => "TextMaterial",
            TextField::TempNozzle => "TempHotend",
            TextField::TempBed => "TempBuildplate",
        }
    }
}

impl ExportJob {
    /// Label text for one slot. Temperatures get a degree mark.
    pub fn text(&self, field: TextField) -> String {
        match field {
            TextField::Colour => self.colour.clone(),
            TextField::Manufacturer => self.manufacturer.clone(),
            TextField::Material => self.material.clone(),
            TextField::TempNozzle => format!("{}{}", self.temp_nozzle, DEGREE_MARK),
            TextField::TempBed => format!("{}{}", self.temp_bed, DEGREE_MARK),
        }
    }

    /// `<manufacturer>_<material>_<colour>`, each part sanitized.
    pub fn file_stem(&self) -> String {
        format!(
            "{}_{}_{}",
            sanitize(&self.manufacturer),
            sanitize(&self.material),
            sanitize(&self.colour)
        )
    }

    /// Output file name for the STL export.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem(), STL_EXTENSION)
    }
}

/// Strip spaces and turn `/` into `-`. Nothing else is escaped.
///
/// # Example
/// ```
/// use filament_swatch::export::sanitize;
///
/// assert_eq!(sanitize("Bambu Lab"), "BambuLab");
/// assert_eq!(sanitize("PA-CF/Black"), "PA-CF-Black");
/// ```
pub fn sanitize(s: &str) -> String {
    s.chars()
        .filter(|&c| c != ' ')
        .map(|c| if c == '/' { '-' } else { c })
        .collect()
}

/// Expand profiles × colours into jobs, in catalog order then colour order.
///
/// Fails with [`SwatchError::EmptyCatalog`] when there is nothing to export.
pub fn flatten(catalog: &Catalog) -> Result<Vec<ExportJob>> {
    let jobs: Vec<ExportJob> = catalog
        .profiles
        .iter()
        .flat_map(|profile| {
            profile.colours.iter().map(move |colour| ExportJob {
                colour: colour.clone(),
                manufacturer: profile.manufacturer.clone(),
                material: profile.material.clone(),
                temp_nozzle: profile.temp_nozzle.clone(),
                temp_bed: profile.temp_bed.clone(),
            })
        })
        .collect();

    if jobs.is_empty() {
        return Err(SwatchError::EmptyCatalog);
    }
    Ok(jobs)
}
