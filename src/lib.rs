//! Integer geohashes: bisection encoding of coordinates, cell decoding,
//! neighbor derivation and bounding-region enumeration.
//!
//! ```rust
//! use geohash_int::{Bearing, decode, encode, neighbor};
//!
//! let hash = encode(37.8324, 112.5584, 52)?;
//! assert_eq!(hash, 4064984913515641);
//!
//! let point = decode(hash, 52)?;
//! assert!((point.lat - 37.8324).abs() <= point.lat_err);
//!
//! assert_eq!(neighbor(1702789509, Bearing::North, 32)?, 1702789520);
//! # Ok::<(), geohash_int::GeohashError>(())
//! ```
//!
//! Neighbors are approximated on a flat grid; near the poles and the
//! antimeridian they may repeat the source cell instead of wrapping.

pub mod compute;
pub mod config;
pub mod error;
pub mod hasher;
pub mod types;

pub use compute::{
    bboxes, cell_radius_meters, decode, decode_bbox, encode, find_bit_depth, get_bit, neighbor,
    neighbors, shift, try_find_bit_depth,
};
pub use config::Config;
pub use error::{BitDepthFault, GeohashError, Result};
pub use hasher::{Geohasher, GeohasherBuilder};
pub use types::{Bearing, BoundingBox, DecodedPoint, GeohashInt};

/// Maximum and default bit depth.
pub const MAX_BIT_DEPTH: i64 = 52;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeohashError, Geohasher, GeohasherBuilder, Result};

    pub use crate::{Bearing, BoundingBox, DecodedPoint, GeohashInt, MAX_BIT_DEPTH};

    pub use crate::{
        bboxes, decode, decode_bbox, encode, find_bit_depth, neighbor, neighbors, shift,
    };

    pub use crate::Config;
}
