//! Port trait definitions
//!
//! These traits define the read interfaces the engine consumes. The catalog
//! owns any locking or transaction discipline; the engine only borrows a
//! consistent view for the duration of one call.

pub mod catalog;
pub mod gazetteer;

pub use catalog::{CatalogReader, CatalogSnapshot};
pub use gazetteer::Gazetteer;
