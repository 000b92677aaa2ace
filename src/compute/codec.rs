//! Bisection encoder and decoders.
//!
//! A hash is built by repeatedly halving the coordinate domain, alternating
//! longitude and latitude, and recording which half the input fell into.
//! Bit pairs are emitted most significant first, longitude leading.

use crate::MAX_BIT_DEPTH;
use crate::compute::validation::validate_bit_depth;
use crate::error::Result;
use crate::types::{BoundingBox, DecodedPoint, GeohashInt};

/// Encodes a coordinate into an integer geohash of `bit_depth` bits.
///
/// Coordinates outside the nominal domain are not rejected; they simply
/// land in an edge cell. Use the same `bit_depth` when decoding.
///
/// # Examples
///
/// ```rust
/// use geohash_int::encode;
///
/// assert_eq!(encode(37.8324, 112.5584, 52)?, 4064984913515641);
/// assert!(encode(37.8324, 112.5584, 51).is_err());
/// # Ok::<(), geohash_int::GeohashError>(())
/// ```
pub fn encode(latitude: f64, longitude: f64, bit_depth: i64) -> Result<GeohashInt> {
    validate_bit_depth(bit_depth)?;

    let mut bounds = BoundingBox::world();
    let mut hash: GeohashInt = 0;

    for bit in 0..bit_depth {
        hash <<= 1;

        if bit % 2 == 0 {
            let mid = (bounds.min_lng + bounds.max_lng) / 2.0;
            if longitude > mid {
                hash += 1;
                bounds.min_lng = mid;
            } else {
                bounds.max_lng = mid;
            }
        } else {
            let mid = (bounds.min_lat + bounds.max_lat) / 2.0;
            if latitude > mid {
                hash += 1;
                bounds.min_lat = mid;
            } else {
                bounds.max_lat = mid;
            }
        }
    }

    Ok(hash)
}

/// Decodes a hash into its cell center and the half-widths of the cell.
///
/// The encoded coordinate is within `lat_err`/`lng_err` of the center.
pub fn decode(hash: GeohashInt, bit_depth: i64) -> Result<DecodedPoint> {
    Ok(decode_bbox(hash, bit_depth)?.to_point())
}

/// Decodes a hash into the bounding box of its cell.
pub fn decode_bbox(hash: GeohashInt, bit_depth: i64) -> Result<BoundingBox> {
    validate_bit_depth(bit_depth)?;

    let mut bounds = BoundingBox::world();
    let steps = (bit_depth / 2) as u32;

    for step in 0..steps {
        let lng_bit = get_bit(hash, (steps - step) * 2 - 1);
        let lat_bit = get_bit(hash, (steps - step) * 2 - 2);

        let mid_lat = (bounds.min_lat + bounds.max_lat) / 2.0;
        if lat_bit == 0 {
            bounds.max_lat = mid_lat;
        } else {
            bounds.min_lat = mid_lat;
        }

        let mid_lng = (bounds.min_lng + bounds.max_lng) / 2.0;
        if lng_bit == 0 {
            bounds.max_lng = mid_lng;
        } else {
            bounds.min_lng = mid_lng;
        }
    }

    Ok(bounds)
}

/// Returns bit `position` of `hash`, counted from the least significant bit.
///
/// `position` must be below 64.
#[inline]
pub fn get_bit(hash: GeohashInt, position: u32) -> GeohashInt {
    (hash >> position) & 0x01
}

/// Shifts `value` left by `MAX_BIT_DEPTH - bit_depth` bits, aligning a hash
/// of `bit_depth` bits with full-depth hashes.
///
/// ```rust
/// use geohash_int::shift;
///
/// assert_eq!(shift(1, 50)?, 4);
/// assert_eq!(shift(7, 52)?, 7);
/// # Ok::<(), geohash_int::GeohashError>(())
/// ```
pub fn shift(value: GeohashInt, bit_depth: i64) -> Result<GeohashInt> {
    validate_bit_depth(bit_depth)?;

    Ok(value << (MAX_BIT_DEPTH - bit_depth))
}
