//! Validation for bit depths and geographic coordinates.

use crate::MAX_BIT_DEPTH;
use crate::error::{BitDepthFault, GeohashError, Result};

/// Rejects bit depths that are `<= 0`, above [`MAX_BIT_DEPTH`], or odd.
///
/// Every public operation calls this before doing any work.
///
/// # Examples
///
/// ```
/// use geohash_int::compute::validation::validate_bit_depth;
///
/// assert!(validate_bit_depth(52).is_ok());
/// assert!(validate_bit_depth(2).is_ok());
///
/// assert!(validate_bit_depth(0).is_err());
/// assert!(validate_bit_depth(53).is_err());
/// assert!(validate_bit_depth(51).is_err());
/// ```
pub fn validate_bit_depth(bit_depth: i64) -> Result<()> {
    let reason = if bit_depth <= 0 || bit_depth > MAX_BIT_DEPTH {
        BitDepthFault::OutOfRange
    } else if bit_depth % 2 != 0 {
        BitDepthFault::Odd
    } else {
        return Ok(());
    };

    log::debug!("Rejecting bit depth {}: {}", bit_depth, reason);
    Err(GeohashError::InvalidBitDepth { bit_depth, reason })
}

/// Validates a latitude/longitude pair is finite and inside the domain.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// The encoder itself accepts any input; this is for callers that want
/// out-of-domain coordinates rejected up front.
///
/// # Examples
///
/// ```
/// use geohash_int::compute::validation::validate_coordinate;
///
/// assert!(validate_coordinate(40.7128, -74.0060).is_ok());
/// assert!(validate_coordinate(95.0, -74.0).is_err());
/// assert!(validate_coordinate(40.0, 200.0).is_err());
/// ```
pub fn validate_coordinate(lat: f64, lng: f64) -> Result<()> {
    if !lat.is_finite() {
        return Err(GeohashError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lng.is_finite() {
        return Err(GeohashError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeohashError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(GeohashError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lng
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_even_depth() {
        for depth in (2..=MAX_BIT_DEPTH).step_by(2) {
            assert!(validate_bit_depth(depth).is_ok(), "depth {}", depth);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        for depth in [-1, 0, 53, 54, i64::MIN, i64::MAX] {
            match validate_bit_depth(depth) {
                Err(GeohashError::InvalidBitDepth { bit_depth, reason }) => {
                    assert_eq!(bit_depth, depth);
                    assert_eq!(reason, BitDepthFault::OutOfRange);
                }
                other => panic!("expected out of range for {}, got {:?}", depth, other),
            }
        }
    }

    #[test]
    fn test_rejects_odd() {
        for depth in [1, 3, 25, 51] {
            match validate_bit_depth(depth) {
                Err(GeohashError::InvalidBitDepth { reason, .. }) => {
                    assert_eq!(reason, BitDepthFault::Odd);
                }
                other => panic!("expected odd rejection for {}, got {:?}", depth, other),
            }
        }
    }

    #[test]
    fn test_valid_coordinates() {
        assert!(validate_coordinate(40.7128, -74.0060).is_ok());
        assert!(validate_coordinate(51.5074, -0.1278).is_ok());

        // Edge cases
        assert!(validate_coordinate(90.0, 0.0).is_ok());
        assert!(validate_coordinate(-90.0, 0.0).is_ok());
        assert!(validate_coordinate(0.0, 180.0).is_ok());
        assert!(validate_coordinate(0.0, -180.0).is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(validate_coordinate(90.1, 0.0).is_err());
        assert!(validate_coordinate(-95.0, 0.0).is_err());
        assert!(validate_coordinate(0.0, 180.1).is_err());
        assert!(validate_coordinate(0.0, -200.0).is_err());
    }

    #[test]
    fn test_non_finite_coordinates() {
        assert!(validate_coordinate(f64::NAN, 0.0).is_err());
        assert!(validate_coordinate(0.0, f64::NAN).is_err());
        assert!(validate_coordinate(f64::INFINITY, 0.0).is_err());
        assert!(validate_coordinate(0.0, f64::NEG_INFINITY).is_err());
    }
}
