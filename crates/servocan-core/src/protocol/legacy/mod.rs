//! Legacy-format codec.
//!
//! Older firmware speaks a fixed 8-byte frame with a truncating 8-bit sum
//! checksum, always on arbitration ID 0. The checksum operand set is odd --
//! it folds the register address but not the opcode byte -- and is kept
//! exactly as the firmware checks it; see `encoder::checksum` before
//! touching it.

pub mod encoder;
pub mod layout;

pub use encoder::{build_legacy_read, build_legacy_write};
