//! Protocol encoding and decoding modules.
//!
//! Two frame formats share this module:
//! - `wire`: the current character-opcode format, layered as
//!   `layout` (byte offsets and constants), `reader` (safe byte access),
//!   `encoder` / `parser` (domain-level codec) and `error`.
//! - `legacy`: the fixed 8-byte checksummed format kept for older firmware.
//!
//! Encoders and parsers are pure and contain no I/O; the transport layer
//! owns framing, retransmission and timing.

use serde::{Deserialize, Serialize};

pub mod legacy;
pub mod wire;

/// Protocol opcodes.
///
/// The wire values are the ASCII codes of the protocol characters and occupy
/// a fixed byte position in every frame; peers identify the message kind by
/// this exact byte. The mapping is explicit so a reordering of variants can
/// never change the encoding.
///
/// # Examples
/// ```
/// use servocan_core::MessageType;
///
/// assert_eq!(MessageType::WriteSingle.wire_byte(), b'w');
/// assert_eq!(MessageType::from_wire_byte(b'V'), Some(MessageType::ResponseDual));
/// assert_eq!(MessageType::from_wire_byte(0x00), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    /// Write one register (`'w'`).
    WriteSingle,
    /// Write two registers in one frame (`'W'`).
    WriteDual,
    /// Write one register, then read it back (`'x'`).
    WriteSingleRead,
    /// Write two registers, then read them back (`'X'`).
    WriteDualRead,
    /// Read one register (`'r'`).
    ReadSingle,
    /// Read two registers (`'R'`).
    ReadDual,
    /// Response carrying one register value (`'v'`).
    ResponseSingle,
    /// Response carrying two register values (`'V'`).
    ResponseDual,
}

impl MessageType {
    /// The opcode byte as it appears on the wire.
    pub const fn wire_byte(self) -> u8 {
        match self {
            Self::WriteSingle => b'w',
            Self::WriteDual => b'W',
            Self::WriteSingleRead => b'x',
            Self::WriteDualRead => b'X',
            Self::ReadSingle => b'r',
            Self::ReadDual => b'R',
            Self::ResponseSingle => b'v',
            Self::ResponseDual => b'V',
        }
    }

    /// Map a received opcode byte back to its message type.
    pub const fn from_wire_byte(byte: u8) -> Option<Self> {
        match byte {
            b'w' => Some(Self::WriteSingle),
            b'W' => Some(Self::WriteDual),
            b'x' => Some(Self::WriteSingleRead),
            b'X' => Some(Self::WriteDualRead),
            b'r' => Some(Self::ReadSingle),
            b'R' => Some(Self::ReadDual),
            b'v' => Some(Self::ResponseSingle),
            b'V' => Some(Self::ResponseDual),
            _ => None,
        }
    }

    /// Human-readable message description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::WriteSingle => "Write Single Register",
            Self::WriteDual => "Write Dual Register",
            Self::WriteSingleRead => "Write Single + Read",
            Self::WriteDualRead => "Write Dual + Read",
            Self::ReadSingle => "Read Single Register",
            Self::ReadDual => "Read Dual Register",
            Self::ResponseSingle => "Single Register Response",
            Self::ResponseDual => "Dual Register Response",
        }
    }
}
