use async_trait::async_trait;

use crate::error::Result;
use crate::models::GpsCoordinate;

/// Port for place-name to coordinate resolution
#[async_trait]
pub trait Gazetteer: Send + Sync {
    /// Resolve a place name to a coordinate
    ///
    /// `Ok(None)` means the name is unknown; an `Err` is reserved for the
    /// service itself being unreachable.
    async fn resolve_place_name(&self, name: &str) -> Result<Option<GpsCoordinate>>;
}
