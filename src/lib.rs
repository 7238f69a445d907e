//! Filament Swatch Library
//!
//! Maintains a JSON catalog of 3D-printer filament profiles and turns it into
//! export jobs for printing labelled sample tiles.
//!
//! # Features
//!
//! - Load/save the `filaments.json` catalog
//! - Add and remove profiles and colours
//! - Flatten profiles × colours into export jobs with stable file names
//! - Write a job manifest for a 3D host, or PNG label previews
//!
//! # Example
//!
//! ```no_run
//! use filament_swatch::catalog::{CatalogStore, Repository};
//! use filament_swatch::export::flatten;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = CatalogStore::new("filaments.json");
//!     let mut catalog = store.load()?;
//!
//!     Repository::new(&mut catalog).add_profile("Bambu Lab", "PLA", "220", "60", "White, Black")?;
//!     store.save(&catalog)?;
//!
//!     for job in flatten(&catalog)? {
//!         println!("{}", job.file_name());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod shell;
pub mod utils;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogStore, Profile, Repository};
pub use error::{Result, SwatchError};
pub use export::{ExportJob, flatten};
pub use shell::Shell;
