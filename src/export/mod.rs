//! Export pipeline: catalog → jobs → renderer.
//!
//! Flattening and file naming live here; drawing the actual swatch is the
//! renderer's business.

pub mod jobs;
pub mod manifest;
pub mod preview;
pub mod renderer;

pub use jobs::{ExportJob, TextField, flatten, sanitize};
pub use manifest::write_manifest;
pub use preview::LabelPreviewRenderer;
pub use renderer::{ExportSummary, SceneRenderer, run_export};
