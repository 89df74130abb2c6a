pub mod autocomplete;
pub mod directory;
pub mod media;
pub mod query;
pub mod result;

pub use autocomplete::AutoCompleteItem;
pub use directory::{
    DirectoryId, DirectoryNode, DirectoryTree, MetaFile, MetaFileId, PartialDirectory,
};
pub use media::{
    BoundingBox, CameraData, FaceRegion, GpsCoordinate, MediaDimension, MediaId, MediaItem,
    MediaMetadata, MediaType, Orientation, PositionData,
};
pub use query::{DistanceOrigin, DistanceQuery, MatchMode, SearchQuery, TextCategory, TextQuery};
pub use result::SearchResult;
