//! Filament catalog model and persistence.
//!
//! Handles the profile data model, loading/saving the catalog file,
//! and the in-memory editing operations.

pub mod repository;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use repository::Repository;
pub use store::{CATALOG_FILE, CatalogStore};
pub use types::*;
