use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::directory::DirectoryId;

/// Unique identifier for a media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MediaId(pub u64);

/// Media kind, classified from the file extension at indexing time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Photo,
    Video,
}

/// File extensions treated as video content
const VIDEO_EXTENSIONS: [&str; 6] = [".mp4", ".webm", ".ogv", ".ogg", ".avi", ".mkv"];

impl MediaType {
    /// Classify a file name by its extension; anything not in the video
    /// table counts as a photo.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            MediaType::Video
        } else {
            MediaType::Photo
        }
    }
}

/// A single catalog entry (photo or video)
///
/// Immutable snapshot for the duration of one evaluation; the catalog
/// collaborator owns the data. The directory back-reference is an arena
/// index into the catalog's [`super::DirectoryTree`], never an owning
/// pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique identifier
    pub id: MediaId,

    /// File name, extension included
    pub name: String,

    /// Owning directory
    pub directory: DirectoryId,

    /// Photo or video
    pub media_type: MediaType,

    /// Metadata record
    pub metadata: MediaMetadata,
}

impl MediaItem {
    pub fn is_photo(&self) -> bool {
        self.media_type == MediaType::Photo
    }

    /// Width over height of the stored pixel dimensions
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.metadata.size.width) / f64::from(self.metadata.size.height)
    }

    /// Whether the item carries any usable location information: a place
    /// name or a complete GPS fix
    pub fn has_position_data(&self) -> bool {
        self.metadata.position.as_ref().is_some_and(PositionData::is_populated)
    }
}

/// Metadata attached to one media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
    /// Pixel dimensions as stored in the file
    pub size: MediaDimension,

    /// Creation timestamp in epoch milliseconds
    pub creation_date: i64,

    /// File size in bytes
    pub file_size: u64,

    /// Star rating 0-5; absent means unrated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    /// EXIF orientation tag
    #[serde(default)]
    pub orientation: Orientation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Keyword set; order is irrelevant for matching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Detected faces with their regions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faces: Vec<FaceRegion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionData>,
}

impl MediaMetadata {
    /// Creation timestamp as a UTC datetime; `None` if the epoch value is
    /// out of chrono's representable range
    pub fn creation_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.creation_date).single()
    }

    /// Rating with unrated items counted as 0
    pub fn effective_rating(&self) -> u8 {
        self.rating.unwrap_or(0)
    }

    /// Resolution in megapixels
    pub fn megapixels(&self) -> f64 {
        self.size.megapixels()
    }

    /// Dimensions after applying the EXIF orientation correction
    pub fn oriented_size(&self) -> MediaDimension {
        if self.orientation.swaps_dimensions() {
            self.size.transposed()
        } else {
            self.size
        }
    }
}

/// Pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDimension {
    pub width: u32,
    pub height: u32,
}

impl MediaDimension {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// width * height / 1e6
    pub fn megapixels(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height) / 1e6
    }

    pub fn transposed(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// EXIF orientation tag, values 1-8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Orientation {
    #[default]
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
    BottomLeft = 4,
    LeftTop = 5,
    RightTop = 6,
    RightBottom = 7,
    LeftBottom = 8,
}

impl Orientation {
    /// Parse a raw EXIF tag value
    pub fn from_exif(value: u8) -> Option<Self> {
        match value {
            1 => Some(Orientation::TopLeft),
            2 => Some(Orientation::TopRight),
            3 => Some(Orientation::BottomRight),
            4 => Some(Orientation::BottomLeft),
            5 => Some(Orientation::LeftTop),
            6 => Some(Orientation::RightTop),
            7 => Some(Orientation::RightBottom),
            8 => Some(Orientation::LeftBottom),
            _ => None,
        }
    }

    /// Tags 5-8 rotate by 90 degrees, swapping display width and height
    pub fn swaps_dimensions(self) -> bool {
        (self as u8) >= 5
    }
}

/// A detected face with its display name and region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceRegion {
    /// Person name
    pub name: String,

    /// Region within the image, in pixels
    pub bounding_box: BoundingBox,
}

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Camera data extracted from EXIF
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<u32>,

    /// Aperture as an f-number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fnumber: Option<f64>,

    /// Exposure time in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure: Option<f64>,

    /// Focal length in millimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f64>,
}

/// Location information for one media item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps: Option<GpsCoordinate>,
}

impl PositionData {
    /// Place-name fields that are present, in country/state/city order
    pub fn place_names(&self) -> impl Iterator<Item = &str> {
        self.country
            .as_deref()
            .into_iter()
            .chain(self.state.as_deref())
            .chain(self.city.as_deref())
    }

    /// True when any place name is set or a complete GPS fix is present
    pub fn is_populated(&self) -> bool {
        self.place_names().next().is_some() || self.gps.is_some()
    }
}

/// WGS84 coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsCoordinate {
    /// Degrees, positive north
    pub latitude: f64,

    /// Degrees, positive east
    pub longitude: f64,

    /// Meters above sea level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl GpsCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }
}
