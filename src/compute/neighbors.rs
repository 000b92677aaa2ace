//! Neighbor derivation and region enumeration.
//!
//! Neighbors are found by stepping the decoded cell center a whole cell in
//! the requested direction and re-encoding. This assumes cells of uniform
//! size around the source cell, which does not hold at the poles or across
//! the antimeridian: there the stepped coordinate leaves the domain and the
//! encoder clamps it into an edge cell, so results may repeat the source
//! cell or skip the wrap-around neighbor.

use crate::compute::codec::{decode, decode_bbox, encode};
use crate::compute::validation::validate_bit_depth;
use crate::error::Result;
use crate::types::{Bearing, DecodedPoint, GeohashInt};

/// Region enumerations above this many cells are logged as suspicious.
pub const LARGE_REGION_CELLS: usize = 100_000;

/// Re-encodes `center` moved by `lat_steps`/`lng_steps` whole cells.
fn step_cell(
    center: &DecodedPoint,
    lat_steps: i64,
    lng_steps: i64,
    bit_depth: i64,
) -> Result<GeohashInt> {
    let lat = center.lat + lat_steps as f64 * center.lat_err * 2.0;
    let lng = center.lng + lng_steps as f64 * center.lng_err * 2.0;
    encode(lat, lng, bit_depth)
}

/// Returns the hash of the cell adjacent to `hash` in direction `bearing`.
///
/// # Examples
///
/// ```rust
/// use geohash_int::{Bearing, neighbor};
///
/// assert_eq!(neighbor(1702789509, Bearing::North, 32)?, 1702789520);
/// # Ok::<(), geohash_int::GeohashError>(())
/// ```
pub fn neighbor(hash: GeohashInt, bearing: Bearing, bit_depth: i64) -> Result<GeohashInt> {
    let center = decode(hash, bit_depth)?;
    let (lat_steps, lng_steps) = bearing.offsets();
    let result = step_cell(&center, lat_steps, lng_steps, bit_depth)?;

    log::trace!(
        "neighbor of {} towards {:?} at depth {}: {}",
        hash,
        bearing,
        bit_depth,
        result
    );
    Ok(result)
}

/// Returns the eight neighbors of `hash` followed by `hash` itself.
///
/// Order: N, NE, E, SE, S, SW, W, NW, self. Values are not deduplicated;
/// near the poles several entries may be the same cell.
pub fn neighbors(hash: GeohashInt, bit_depth: i64) -> Result<[GeohashInt; 9]> {
    validate_bit_depth(bit_depth)?;

    let mut output = [hash; 9];
    for (slot, bearing) in output.iter_mut().zip(Bearing::ALL) {
        *slot = neighbor(hash, bearing, bit_depth)?;
    }
    Ok(output)
}

/// Returns the hashes of every cell covering the given rectangle.
///
/// The result is a row-major grid starting at the south-west corner cell,
/// latitude in the outer loop. Rectangles narrower than one cell yield
/// repeated hashes.
///
/// # Examples
///
/// ```rust
/// use geohash_int::{bboxes, encode};
///
/// let cells = bboxes(30.0, 120.0, 30.0001, 120.0001, 50)?;
/// assert!(cells.contains(&encode(30.0001, 120.0001, 50)?));
/// # Ok::<(), geohash_int::GeohashError>(())
/// ```
pub fn bboxes(
    min_lat: f64,
    min_lng: f64,
    max_lat: f64,
    max_lng: f64,
    bit_depth: i64,
) -> Result<Vec<GeohashInt>> {
    let grid = RegionGrid::new(min_lat, min_lng, max_lat, max_lng, bit_depth)?;
    let cells = grid.cell_count();

    log::debug!(
        "Enumerating region ({}, {})..({}, {}) at depth {}: {}x{} steps, {} cells",
        min_lat,
        min_lng,
        max_lat,
        max_lng,
        bit_depth,
        grid.lat_steps,
        grid.lng_steps,
        cells
    );
    if cells > LARGE_REGION_CELLS {
        log::warn!(
            "Region enumeration at depth {} produces {} cells",
            bit_depth,
            cells
        );
    }

    let mut output = Vec::with_capacity(cells.min(LARGE_REGION_CELLS));
    for lat in 0..=grid.lat_steps {
        for lng in 0..=grid.lng_steps {
            output.push(step_cell(&grid.south_west, lat, lng, bit_depth)?);
        }
    }
    Ok(output)
}

/// Step grid spanning a rectangle, anchored at its south-west corner cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegionGrid {
    pub south_west: DecodedPoint,
    /// Whole-cell steps to the north-east corner cell. Negative when the
    /// rectangle is inverted, in which case the grid is empty.
    pub lat_steps: i64,
    pub lng_steps: i64,
}

impl RegionGrid {
    pub fn new(
        min_lat: f64,
        min_lng: f64,
        max_lat: f64,
        max_lng: f64,
        bit_depth: i64,
    ) -> Result<Self> {
        validate_bit_depth(bit_depth)?;

        let hash_south_west = encode(min_lat, min_lng, bit_depth)?;
        let hash_north_east = encode(max_lat, max_lng, bit_depth)?;

        let south_west = decode(hash_south_west, bit_depth)?;
        let per_lat = south_west.lat_err * 2.0;
        let per_lng = south_west.lng_err * 2.0;

        let sw_bbox = decode_bbox(hash_south_west, bit_depth)?;
        let ne_bbox = decode_bbox(hash_north_east, bit_depth)?;

        // f64::round rounds half away from zero.
        let lat_steps = ((ne_bbox.min_lat - sw_bbox.min_lat) / per_lat).round() as i64;
        let lng_steps = ((ne_bbox.max_lng - sw_bbox.max_lng) / per_lng).round() as i64;

        Ok(Self {
            south_west,
            lat_steps,
            lng_steps,
        })
    }

    pub fn cell_count(&self) -> usize {
        if self.lat_steps < 0 || self.lng_steps < 0 {
            return 0;
        }
        ((self.lat_steps + 1) as usize).saturating_mul((self.lng_steps + 1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_known_values() {
        assert_eq!(neighbor(1702789509, Bearing::North, 32).unwrap(), 1702789520);
        assert_eq!(
            neighbor(27898503327470, Bearing::SouthWest, 46).unwrap(),
            27898503327465
        );
    }

    #[test]
    fn test_neighbors_fixed_order() {
        let result = neighbors(1702789509, 32).unwrap();
        assert_eq!(
            result,
            [
                1702789520, 1702789522, 1702789511, 1702789510, 1702789508, 1702789422,
                1702789423, 1702789434, 1702789509,
            ]
        );
    }

    #[test]
    fn test_neighbors_match_individual_calls() {
        let hash = encode(48.8566, 2.3522, 30).unwrap();
        let all = neighbors(hash, 30).unwrap();
        for (idx, bearing) in Bearing::ALL.into_iter().enumerate() {
            assert_eq!(all[idx], neighbor(hash, bearing, 30).unwrap());
        }
        assert_eq!(all[8], hash);
    }

    #[test]
    fn test_neighbor_is_adjacent_cell() {
        let hash = encode(48.8566, 2.3522, 30).unwrap();
        let origin = decode_bbox(hash, 30).unwrap();
        let north = decode_bbox(neighbor(hash, Bearing::North, 30).unwrap(), 30).unwrap();
        let east = decode_bbox(neighbor(hash, Bearing::East, 30).unwrap(), 30).unwrap();

        assert!((north.min_lat - origin.max_lat).abs() < 1e-9);
        assert!((north.min_lng - origin.min_lng).abs() < 1e-9);
        assert!((east.min_lng - origin.max_lng).abs() < 1e-9);
        assert!((east.min_lat - origin.min_lat).abs() < 1e-9);
    }

    #[test]
    fn test_north_pole_neighbor_clamps() {
        let hash = encode(89.9, 0.5, 10).unwrap();
        // Stepping past the pole lands back in the same top row.
        assert_eq!(neighbor(hash, Bearing::North, 10).unwrap(), hash);
    }

    #[test]
    fn test_bboxes_contains_north_east_corner() {
        let cells = bboxes(30.0, 120.0, 30.0001, 120.0001, 50).unwrap();
        assert!(cells.contains(&encode(30.0001, 120.0001, 50).unwrap()));
        assert!(cells.contains(&encode(30.0, 120.0, 50).unwrap()));
    }

    #[test]
    fn test_bboxes_grid_dimensions() {
        let grid = RegionGrid::new(30.0, 120.0, 30.0001, 120.0001, 50).unwrap();
        assert_eq!((grid.lat_steps, grid.lng_steps), (18, 9));

        let cells = bboxes(30.0, 120.0, 30.0001, 120.0001, 50).unwrap();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells.len(), 190);
    }

    #[test]
    fn test_bboxes_smaller_than_cell_is_single_cell() {
        let cells = bboxes(40.0, -74.0, 40.000001, -73.999999, 10).unwrap();
        assert_eq!(cells, vec![encode(40.0, -74.0, 10).unwrap()]);
    }

    #[test]
    fn test_bboxes_inverted_region_is_empty() {
        let cells = bboxes(40.0, -73.0, 30.0, -74.0, 20).unwrap();
        assert!(cells.is_empty());
    }

    #[test]
    fn test_invalid_depth_is_rejected() {
        assert!(neighbor(0, Bearing::North, 0).unwrap_err().is_invalid_bit_depth());
        assert!(neighbors(0, 53).unwrap_err().is_invalid_bit_depth());
        assert!(bboxes(0.0, 0.0, 1.0, 1.0, 7).unwrap_err().is_invalid_bit_depth());
    }

    #[test]
    fn test_region_cell_count() {
        let mut grid = RegionGrid::new(0.0, 0.0, 0.0, 0.0, 10).unwrap();
        assert_eq!(grid.cell_count(), 1);

        grid.lat_steps = 2;
        grid.lng_steps = 3;
        assert_eq!(grid.cell_count(), 12);

        grid.lat_steps = -1;
        assert_eq!(grid.cell_count(), 0);
    }
}
