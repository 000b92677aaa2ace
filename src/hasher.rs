//! Geohasher bound to a single bit depth.
//!
//! A hash does not record the depth it was produced at, so mixing depths
//! silently yields wrong cells. [`Geohasher`] validates the depth once and
//! applies it to every call.

use crate::MAX_BIT_DEPTH;
use crate::compute::neighbors::RegionGrid;
use crate::compute::{self, validation};
use crate::config::Config;
use crate::error::{GeohashError, Result};
use crate::types::{Bearing, BoundingBox, DecodedPoint, GeohashInt};

/// Integer geohash codec with a fixed, validated bit depth.
///
/// ```rust
/// use geohash_int::{Bearing, Geohasher};
///
/// let hasher = Geohasher::new(32)?;
/// let hash = 1702789509;
/// assert_eq!(hasher.neighbor(hash, Bearing::North)?, 1702789520);
/// assert_eq!(hasher.neighbors(hash)?[8], hash);
/// # Ok::<(), geohash_int::GeohashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geohasher {
    bit_depth: i64,
    max_region_cells: Option<usize>,
}

impl Geohasher {
    pub fn new(bit_depth: i64) -> Result<Self> {
        validation::validate_bit_depth(bit_depth)?;
        Ok(Self {
            bit_depth,
            max_region_cells: None,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate().map_err(GeohashError::Config)?;
        Ok(Self {
            bit_depth: config.bit_depth,
            max_region_cells: config.max_region_cells,
        })
    }

    pub fn builder() -> GeohasherBuilder {
        GeohasherBuilder::new()
    }

    pub fn bit_depth(&self) -> i64 {
        self.bit_depth
    }

    pub fn max_region_cells(&self) -> Option<usize> {
        self.max_region_cells
    }

    pub fn encode(&self, lat: f64, lng: f64) -> Result<GeohashInt> {
        compute::encode(lat, lng, self.bit_depth)
    }

    /// Encodes after rejecting non-finite or out-of-domain coordinates.
    pub fn encode_checked(&self, lat: f64, lng: f64) -> Result<GeohashInt> {
        validation::validate_coordinate(lat, lng)?;
        self.encode(lat, lng)
    }

    pub fn decode(&self, hash: GeohashInt) -> Result<DecodedPoint> {
        compute::decode(hash, self.bit_depth)
    }

    pub fn decode_bbox(&self, hash: GeohashInt) -> Result<BoundingBox> {
        compute::decode_bbox(hash, self.bit_depth)
    }

    pub fn neighbor(&self, hash: GeohashInt, bearing: Bearing) -> Result<GeohashInt> {
        compute::neighbor(hash, bearing, self.bit_depth)
    }

    pub fn neighbors(&self, hash: GeohashInt) -> Result<[GeohashInt; 9]> {
        compute::neighbors(hash, self.bit_depth)
    }

    /// Enumerates cells covering the rectangle.
    ///
    /// Fails with `InvalidInput` before enumerating if the grid would exceed
    /// the configured `max_region_cells`.
    pub fn bboxes(
        &self,
        min_lat: f64,
        min_lng: f64,
        max_lat: f64,
        max_lng: f64,
    ) -> Result<Vec<GeohashInt>> {
        if let Some(limit) = self.max_region_cells {
            let cells =
                RegionGrid::new(min_lat, min_lng, max_lat, max_lng, self.bit_depth)?.cell_count();
            if cells > limit {
                return Err(GeohashError::InvalidInput(format!(
                    "Region covers {} cells at bit depth {}, limit is {}",
                    cells, self.bit_depth, limit
                )));
            }
        }

        compute::bboxes(min_lat, min_lng, max_lat, max_lng, self.bit_depth)
    }

    /// Aligns a hash of this depth with full-depth hashes.
    pub fn shift(&self, value: GeohashInt) -> Result<GeohashInt> {
        compute::shift(value, self.bit_depth)
    }

    /// Approximate cell radius at this depth, if tabulated.
    pub fn cell_radius_meters(&self) -> Option<f64> {
        compute::cell_radius_meters(self.bit_depth).ok().flatten()
    }
}

impl Default for Geohasher {
    fn default() -> Self {
        Self {
            bit_depth: MAX_BIT_DEPTH,
            max_region_cells: None,
        }
    }
}

/// Builder for [`Geohasher`].
#[derive(Debug, Default)]
pub struct GeohasherBuilder {
    config: Config,
}

impl GeohasherBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bit_depth(mut self, bit_depth: i64) -> Self {
        self.config.bit_depth = bit_depth;
        self
    }

    pub fn max_region_cells(mut self, max_cells: usize) -> Self {
        self.config.max_region_cells = Some(max_cells);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Geohasher> {
        Geohasher::from_config(&self.config)
    }
}
