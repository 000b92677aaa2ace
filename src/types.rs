//! Value types shared by the encoder, decoders and neighbor logic.
//!
//! All types here are plain `Copy` values. None of them remember the bit
//! depth they were produced at; callers must carry it alongside.
use geo::{Coord, Point, Rect};
use serde::{Deserialize, Serialize};

/// Integer geohash. Holds up to [`MAX_BIT_DEPTH`](crate::MAX_BIT_DEPTH)
/// significant bits; at depth `d` valid values lie in `0..2^d`.
pub type GeohashInt = i64;

/// The exact rectangle a `(hash, bit_depth)` pair denotes.
///
/// # Example
///
/// ```rust
/// use geohash_int::decode_bbox;
///
/// let bbox = decode_bbox(4064984913515641, 52)?;
/// assert!(bbox.min_lat <= bbox.max_lat);
/// assert!(bbox.contains(37.8324, 112.5584));
/// # Ok::<(), geohash_int::GeohashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    /// The whole coordinate domain, `[-90, 90] x [-180, 180]`.
    pub fn world() -> Self {
        Self::new(-90.0, -180.0, 90.0, 180.0)
    }

    /// Centroid as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Inclusive containment test.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat)
            && (self.min_lng..=self.max_lng).contains(&lng)
    }

    /// Center and half-extents of this box.
    pub fn to_point(&self) -> DecodedPoint {
        let (lat, lng) = self.center();
        DecodedPoint {
            lat,
            lng,
            lat_err: self.max_lat - lat,
            lng_err: self.max_lng - lng,
        }
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(
            Coord {
                x: bbox.min_lng,
                y: bbox.min_lat,
            },
            Coord {
                x: bbox.max_lng,
                y: bbox.max_lat,
            },
        )
    }
}

/// A decoded location: cell center plus the maximum deviation of the
/// encoded coordinate from that center along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedPoint {
    pub lat: f64,
    pub lng: f64,
    pub lat_err: f64,
    pub lng_err: f64,
}

impl DecodedPoint {
    /// Rebuilds the cell from center and half-widths.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(
            self.lat - self.lat_err,
            self.lng - self.lng_err,
            self.lat + self.lat_err,
            self.lng + self.lng_err,
        )
    }
}

impl From<DecodedPoint> for Point<f64> {
    fn from(p: DecodedPoint) -> Self {
        Point::new(p.lng, p.lat)
    }
}

/// Compass bearing relative to a cell, as unit multipliers on the cell size.
///
/// ```text
///  |   NW  |   N   |  NE  |
///  |  1,-1 |  1,0  |  1,1 |
///  |   W   |   X   |   E  |
///  |  0,-1 |  0,0  |  0,1 |
///  |   SW  |   S   |  SE  |
///  | -1,-1 | -1,0  | -1,1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bearing {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Bearing {
    /// Every bearing, in the order `neighbors` reports them.
    pub const ALL: [Bearing; 8] = [
        Bearing::North,
        Bearing::NorthEast,
        Bearing::East,
        Bearing::SouthEast,
        Bearing::South,
        Bearing::SouthWest,
        Bearing::West,
        Bearing::NorthWest,
    ];

    /// `(lat, lng)` offsets, each in `{-1, 0, 1}`.
    pub const fn offsets(self) -> (i64, i64) {
        match self {
            Bearing::North => (1, 0),
            Bearing::NorthEast => (1, 1),
            Bearing::East => (0, 1),
            Bearing::SouthEast => (-1, 1),
            Bearing::South => (-1, 0),
            Bearing::SouthWest => (-1, -1),
            Bearing::West => (0, -1),
            Bearing::NorthWest => (1, -1),
        }
    }

    pub const fn opposite(self) -> Bearing {
        match self {
            Bearing::North => Bearing::South,
            Bearing::NorthEast => Bearing::SouthWest,
            Bearing::East => Bearing::West,
            Bearing::SouthEast => Bearing::NorthWest,
            Bearing::South => Bearing::North,
            Bearing::SouthWest => Bearing::NorthEast,
            Bearing::West => Bearing::East,
            Bearing::NorthWest => Bearing::SouthEast,
        }
    }
}
