//! Compute layer for the integer geohash algorithms.
//!
//! This module holds the pure functions the public API is built from:
//! - Bit-depth validation
//! - Bisection encoding and decoding
//! - Neighbor and region enumeration
//! - The bit-depth to cell-radius precision table
//!
//! Nothing here keeps state besides the read-only precision table.

pub mod codec;
pub mod neighbors;
pub mod precision;
pub mod validation;

pub use codec::{decode, decode_bbox, encode, get_bit, shift};
pub use neighbors::{bboxes, neighbor, neighbors};
pub use precision::{cell_radius_meters, find_bit_depth, try_find_bit_depth};
pub use validation::{validate_bit_depth, validate_coordinate};
