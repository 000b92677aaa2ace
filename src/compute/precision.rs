//! Bit depth to approximate cell radius lookup.

use crate::MAX_BIT_DEPTH;
use crate::compute::validation::validate_bit_depth;
use crate::error::Result;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Approximate cell radius in meters, keyed by bit depth.
///
/// Values from the ardb spatial index notes
/// (<https://github.com/yinqiwen/ardb/blob/master/doc/spatial-index.md>).
static BITS_TO_DISTANCE_METERS: Lazy<BTreeMap<i64, f64>> = Lazy::new(|| {
    BTreeMap::from([
        (52, 0.5971),
        (50, 1.1943),
        (48, 2.3889),
        (46, 4.7774),
        (44, 9.5547),
        (42, 19.1095),
        (40, 38.2189),
        (38, 76.4378),
        (36, 152.8757),
        (34, 305.751),
        (32, 611.5028),
        (30, 1223.0056),
        (28, 2446.0112),
        (26, 4892.0224),
        (24, 9784.0449),
        (22, 19568.0898),
        (20, 39136.1797),
        (18, 78272.35938),
        (16, 156544.7188),
        (14, 313089.4375),
        (12, 626178.875),
        (10, 1252357.75),
        (8, 2504715.5),
        (6, 5009431.0),
        (4, 10018863.0),
    ])
});

/// Finds the finest table entry whose cell radius exceeds `distance_meters`
/// and returns `MAX_BIT_DEPTH` minus its bit depth, i.e. how many bits a
/// full-depth hash must drop to reach a cell that covers the distance.
///
/// Returns `0` when no entry is large enough. A match at full depth also
/// yields `0`; use [`try_find_bit_depth`] to tell the two apart.
///
/// ```rust
/// use geohash_int::find_bit_depth;
///
/// assert_eq!(find_bit_depth(100.0), 16);
/// assert_eq!(find_bit_depth(20_000_000.0), 0);
/// ```
pub fn find_bit_depth(distance_meters: f64) -> i64 {
    try_find_bit_depth(distance_meters).unwrap_or(0)
}

/// Like [`find_bit_depth`], but `None` when no entry qualifies.
pub fn try_find_bit_depth(distance_meters: f64) -> Option<i64> {
    BITS_TO_DISTANCE_METERS
        .iter()
        .rev()
        .find(|&(_, &radius)| radius > distance_meters)
        .map(|(&bits, _)| MAX_BIT_DEPTH - bits)
}

/// Approximate cell radius for `bit_depth`, if the table lists it.
///
/// Depth 2 is valid but has no entry.
pub fn cell_radius_meters(bit_depth: i64) -> Result<Option<f64>> {
    validate_bit_depth(bit_depth)?;

    Ok(BITS_TO_DISTANCE_METERS.get(&bit_depth).copied())
}
