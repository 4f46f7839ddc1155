//! Current-format codec.
//!
//! Frames carry a character opcode followed by the servo ID and the
//! address/value fields for the operation. The encoder builds every outgoing
//! frame from a handful of primitives so the byte layout lives in one place;
//! the parser decodes response frames with bounds checked stricter than the
//! firmware's own length marks (a too-short dual response is rejected rather
//! than read past).
//!
//! Byte positions and protocol constants live in `layout`, safe byte access
//! in `reader`.

pub mod encoder;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use encoder::{
    build_read, build_read_dual, build_write, build_write_dual, position_command, save_and_reset,
    set_can_id, set_can_id_high, set_can_id_low, set_can_mode, set_servo_id,
};
pub use parser::{ParsedResponse, parse_response};
