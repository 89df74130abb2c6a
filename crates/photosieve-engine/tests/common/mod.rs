#![allow(dead_code)]

//! Shared expedition-library fixture for the engine integration tests

use photosieve_core::config::SearchLimits;
use photosieve_core::models::{
    BoundingBox, DirectoryId, FaceRegion, GpsCoordinate, MediaDimension, MediaId, MediaMetadata,
    MetaFileId, Orientation, PositionData, SearchResult,
};
use photosieve_engine::SearchEngine;
use photosieve_store::{MemoryCatalog, MemoryGazetteer};

pub const T_OLD: i64 = 1_500_000_000_000;
pub const T_MID: i64 = 1_600_000_000_000;
pub const T_LATE: i64 = 1_600_000_050_000;
pub const T_NEW: i64 = 1_700_000_000_000;

pub const BERGEN: GpsCoordinate = GpsCoordinate {
    latitude: 60.3913,
    longitude: 5.3221,
    altitude: None,
};
pub const OSLO: GpsCoordinate = GpsCoordinate {
    latitude: 59.9139,
    longitude: 10.7522,
    altitude: None,
};
pub const ZERMATT: GpsCoordinate = GpsCoordinate {
    latitude: 46.0207,
    longitude: 7.7491,
    altitude: None,
};
pub const REYKJAVIK: GpsCoordinate = GpsCoordinate {
    latitude: 64.1466,
    longitude: -21.9426,
    altitude: None,
};

/// Test gallery:
///
/// ```text
/// expeditions
/// |- fjord_sunrise.jpg   (faces: Ada Lovelace, Grace Hopper; Bergen)
/// |- market_street.jpg   (faces: Grace Hopper; Oslo)
/// |- glacier_flight.mp4  (video, no faces, no GPS)
/// |-> Summit Attempts
///     |- ridge_camp.jpg  (no faces; Zermatt)
/// |-> Harbor Towns
///     |- harbor_night.jpg (faces: Ada Lovelace, Mary Jackson; Reykjavik)
///     |-> Harbor Annex    (empty)
/// ```
pub struct Fixture {
    pub catalog: MemoryCatalog,
    pub gazetteer: MemoryGazetteer,
    pub root: DirectoryId,
    pub summit_dir: DirectoryId,
    pub harbor_dir: DirectoryId,
    pub annex_dir: DirectoryId,
    pub fjord: MediaId,
    pub market: MediaId,
    pub glacier_video: MediaId,
    pub ridge: MediaId,
    pub harbor: MediaId,
    pub routes_meta: MetaFileId,
    pub harbor_meta: MetaFileId,
}

impl Fixture {
    pub fn engine(&self) -> SearchEngine<MemoryCatalog, MemoryGazetteer> {
        self.engine_with(SearchLimits::default())
    }

    pub fn engine_with(&self, limits: SearchLimits) -> SearchEngine<MemoryCatalog, MemoryGazetteer> {
        SearchEngine::new(self.catalog.clone(), self.gazetteer.clone(), limits)
    }
}

fn face(name: &str) -> FaceRegion {
    FaceRegion {
        name: name.to_string(),
        bounding_box: BoundingBox {
            left: 16,
            top: 16,
            width: 96,
            height: 96,
        },
    }
}

struct MetaSpec<'a> {
    size: (u32, u32),
    orientation: Orientation,
    creation_date: i64,
    rating: Option<u8>,
    caption: Option<&'a str>,
    keywords: &'a [&'a str],
    faces: Vec<FaceRegion>,
    position: Option<(&'a str, &'a str, Option<GpsCoordinate>)>,
}

fn meta(spec: MetaSpec<'_>) -> MediaMetadata {
    MediaMetadata {
        size: MediaDimension::new(spec.size.0, spec.size.1),
        creation_date: spec.creation_date,
        file_size: 1_000_000,
        rating: spec.rating,
        orientation: spec.orientation,
        caption: spec.caption.map(str::to_string),
        keywords: spec.keywords.iter().map(|k| k.to_string()).collect(),
        faces: spec.faces,
        camera: None,
        position: spec.position.map(|(country, city, gps)| PositionData {
            country: Some(country.to_string()),
            state: None,
            city: Some(city.to_string()),
            gps,
        }),
    }
}

pub fn fixture() -> Fixture {
    let catalog = MemoryCatalog::new();

    let root = catalog.add_directory("expeditions", None);
    let summit_dir = catalog.add_directory("Summit Attempts", Some(root));
    let harbor_dir = catalog.add_directory("Harbor Towns", Some(root));
    let annex_dir = catalog.add_directory("Harbor Annex", Some(harbor_dir));

    let fjord = catalog.add_media(
        root,
        "fjord_sunrise.jpg",
        meta(MetaSpec {
            size: (3000, 2000),
            orientation: Orientation::TopLeft,
            creation_date: T_MID,
            rating: Some(2),
            caption: Some("Sunrise over the fjord"),
            keywords: &["fjord", "sunrise"],
            faces: vec![face("Ada Lovelace"), face("Grace Hopper")],
            position: Some(("Norway", "Bergen", Some(BERGEN))),
        }),
    );

    let market = catalog.add_media(
        root,
        "market_street.jpg",
        meta(MetaSpec {
            size: (2000, 1500),
            orientation: Orientation::TopLeft,
            creation_date: T_MID - 100_000,
            rating: Some(4),
            caption: Some("Old market street"),
            keywords: &["market", "street"],
            faces: vec![face("Grace Hopper")],
            position: Some(("Norway", "Oslo", Some(OSLO))),
        }),
    );

    let glacier_video = catalog.add_media(
        root,
        "glacier_flight.mp4",
        meta(MetaSpec {
            size: (1920, 1080),
            orientation: Orientation::TopLeft,
            creation_date: T_LATE,
            rating: None,
            caption: None,
            keywords: &["glacier", "aerial"],
            faces: vec![],
            position: None,
        }),
    );

    let ridge = catalog.add_media(
        summit_dir,
        "ridge_camp.jpg",
        meta(MetaSpec {
            size: (4000, 3000),
            orientation: Orientation::TopLeft,
            creation_date: T_OLD,
            rating: Some(5),
            caption: Some("Camp below the ridge"),
            keywords: &["ridge", "glacier"],
            faces: vec![],
            position: Some(("Switzerland", "Zermatt", Some(ZERMATT))),
        }),
    );

    let harbor = catalog.add_media(
        harbor_dir,
        "harbor_night.jpg",
        meta(MetaSpec {
            size: (6000, 4000),
            orientation: Orientation::RightTop,
            creation_date: T_NEW,
            rating: Some(3),
            caption: Some("Lanterns in the harbor"),
            keywords: &["harbor", "night"],
            faces: vec![face("Ada Lovelace"), face("Mary Jackson")],
            position: Some(("Iceland", "Reykjavik", Some(REYKJAVIK))),
        }),
    );

    catalog.set_preview(root, fjord);
    let routes_meta = catalog.add_metafile(root, "routes.gpx");
    let harbor_meta = catalog.add_metafile(harbor_dir, "harbor_track.gpx");

    let gazetteer = MemoryGazetteer::new();
    gazetteer.add_place("Bergen", BERGEN);
    gazetteer.add_place("Zermatt", ZERMATT);

    Fixture {
        catalog,
        gazetteer,
        root,
        summit_dir,
        harbor_dir,
        annex_dir,
        fjord,
        market,
        glacier_video,
        ridge,
        harbor,
        routes_meta,
        harbor_meta,
    }
}

/// Matched media ids, already in ascending id order
pub fn media_ids(result: &SearchResult) -> Vec<MediaId> {
    result.media.iter().map(|item| item.id).collect()
}

/// Matched directory ids, in ascending id order
pub fn directory_ids(result: &SearchResult) -> Vec<DirectoryId> {
    result.directories.iter().map(|dir| dir.id).collect()
}

/// Matched metafile ids
pub fn metafile_ids(result: &SearchResult) -> Vec<MetaFileId> {
    result.metafiles.iter().map(|mf| mf.id).collect()
}
