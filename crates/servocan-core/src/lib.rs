//! Servocan core codec for the Hitec CAN servo register protocol.
//!
//! This crate implements the protocol layer used by the CLI and by transport
//! front ends: the register catalog, frame encoders (current and legacy
//! formats) and the response parser. Encoding and decoding are byte-oriented
//! and side-effect free apart from `tracing` diagnostics; all bus I/O lives
//! in the (external) transport layer, which exchanges
//! `(arbitration_id, payload)` pairs with this crate.
//!
//! Invariants:
//! - Register values travel little-endian (low byte first).
//! - Opcode bytes are the ASCII codes of the protocol characters and are
//!   mapped explicitly in [`MessageType`], never cast.
//! - Decode failures surface as an absent result, never as a panic; a noisy
//!   bus is the expected operating environment.
//!
//! # Examples
//! ```
//! use servocan_core::{RegisterCatalog, parse_response, wire};
//!
//! let catalog = RegisterCatalog::new();
//! let frame = wire::build_write(1, 0x0C, 1500, false);
//! assert_eq!(frame.arbitration_id, 2);
//!
//! // Response payloads come back from the transport as raw bytes.
//! let parsed = parse_response(&catalog, &[0x00, b'v', 0x01, 0x0C, 0xDC, 0x05]);
//! assert!(parsed.is_some());
//! ```

use serde::{Deserialize, Serialize};

mod catalog;
pub mod protocol;
pub mod text;
pub mod validate;

pub use catalog::{RegisterCatalog, RegisterDefinition, registers};
pub use protocol::MessageType;
pub use protocol::wire::{ParsedResponse, parse_response};
pub use protocol::{legacy, wire};

/// Servo ID addressed by every node on the bus.
pub const BROADCAST_ID: u8 = 0;
/// Maximum CAN payload length; no frame produced here exceeds it.
pub const MAX_PAYLOAD_LEN: usize = 8;

/// A frame ready for the transport layer.
///
/// The transport wraps this into a hardware CAN frame with DLC equal to the
/// payload length. The arbitration ID is chosen by the encoder from the
/// extended/standard convention; the servo is addressed by the payload's
/// embedded servo-ID byte, not by the arbitration ID.
///
/// # Examples
/// ```
/// use servocan_core::wire;
///
/// let frame = wire::build_read(3, 0x32, false);
/// assert_eq!(frame.arbitration_id, 2);
/// assert_eq!(frame.payload, vec![b'r', 3, 0x32]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedMessage {
    /// CAN arbitration ID (0 for extended convention and legacy frames, 2 otherwise).
    pub arbitration_id: u32,
    /// Raw payload bytes, at most [`MAX_PAYLOAD_LEN`].
    pub payload: Vec<u8>,
}
