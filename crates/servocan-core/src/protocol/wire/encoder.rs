//! Outgoing frame construction.
//!
//! Every operation is expressed through [`build_write`] or one of the read
//! primitives so the byte layout is defined once. Inputs are narrowed by the
//! parameter types themselves (`u8` IDs and addresses, `u16` values); the
//! encoder never rejects a frame. Legality checks live in
//! [`crate::validate`] and are deliberately opt-in, so callers can still send
//! protocol-breaking test frames on purpose.

use tracing::debug;

use super::layout;
use crate::EncodedMessage;
use crate::catalog::registers;
use crate::protocol::MessageType;
use crate::text::format_hex_bytes;

fn arbitration_id(is_extended: bool) -> u32 {
    if is_extended {
        layout::ARBITRATION_ID_EXTENDED
    } else {
        layout::ARBITRATION_ID_STANDARD
    }
}

fn frame(is_extended: bool, payload: Vec<u8>) -> EncodedMessage {
    let arbitration_id = arbitration_id(is_extended);
    debug!(
        arbitration_id,
        payload = %format_hex_bytes(&payload),
        "encoded frame"
    );
    EncodedMessage {
        arbitration_id,
        payload,
    }
}

/// Write a single 16-bit register.
///
/// Payload: `[opcode 'w', servo_id, address, value_low, value_high]`.
pub fn build_write(servo_id: u8, address: u8, value: u16, is_extended: bool) -> EncodedMessage {
    let [lo, hi] = value.to_le_bytes();
    frame(
        is_extended,
        vec![
            MessageType::WriteSingle.wire_byte(),
            servo_id,
            address,
            lo,
            hi,
        ],
    )
}

/// Write two independent registers in one frame.
pub fn build_write_dual(
    servo_id: u8,
    address_a: u8,
    value_a: u16,
    address_b: u8,
    value_b: u16,
    is_extended: bool,
) -> EncodedMessage {
    let [lo_a, hi_a] = value_a.to_le_bytes();
    let [lo_b, hi_b] = value_b.to_le_bytes();
    frame(
        is_extended,
        vec![
            MessageType::WriteDual.wire_byte(),
            servo_id,
            address_a,
            lo_a,
            hi_a,
            address_b,
            lo_b,
            hi_b,
        ],
    )
}

/// Request a single register readback.
pub fn build_read(servo_id: u8, address: u8, is_extended: bool) -> EncodedMessage {
    frame(
        is_extended,
        vec![MessageType::ReadSingle.wire_byte(), servo_id, address],
    )
}

/// Request a dual register readback.
pub fn build_read_dual(
    servo_id: u8,
    address_a: u8,
    address_b: u8,
    is_extended: bool,
) -> EncodedMessage {
    frame(
        is_extended,
        vec![
            MessageType::ReadDual.wire_byte(),
            servo_id,
            address_a,
            address_b,
        ],
    )
}

/// Save settings to flash and reboot the servo.
pub fn save_and_reset(servo_id: u8, is_extended: bool) -> EncodedMessage {
    build_write(
        servo_id,
        registers::SAVE_RESET,
        layout::SAVE_RESET_MAGIC,
        is_extended,
    )
}

/// Set the low byte of the servo's CAN ID. Always exactly one frame.
pub fn set_can_id_low(servo_id: u8, new_can_id: u16, is_extended: bool) -> Vec<EncodedMessage> {
    vec![build_write(
        servo_id,
        registers::CAN_ID_LOW,
        new_can_id & 0xFF,
        is_extended,
    )]
}

/// Set the high byte of the servo's CAN ID.
///
/// Emitted only when the high byte is non-zero; a redundant zero-write is
/// skipped, so the result holds zero or one frames.
pub fn set_can_id_high(servo_id: u8, new_can_id: u16, is_extended: bool) -> Vec<EncodedMessage> {
    let high = (new_can_id >> 8) & 0xFF;
    if high > 0 {
        vec![build_write(
            servo_id,
            registers::CAN_ID_HIGH,
            high,
            is_extended,
        )]
    } else {
        Vec::new()
    }
}

/// Set the servo's full CAN ID.
///
/// Returns the complete ordered frame sequence: the low byte, then the high
/// byte when it is non-zero. Callers must transmit the frames in order.
pub fn set_can_id(servo_id: u8, new_can_id: u16, is_extended: bool) -> Vec<EncodedMessage> {
    let mut messages = set_can_id_low(servo_id, new_can_id, is_extended);
    messages.extend(set_can_id_high(servo_id, new_can_id, is_extended));
    messages
}

/// Set the servo receive ID. Skipped entirely when the new ID byte is zero.
pub fn set_servo_id(servo_id: u8, new_id: u16, is_extended: bool) -> Vec<EncodedMessage> {
    let id = new_id & 0xFF;
    if id > 0 {
        vec![build_write(servo_id, registers::SERVO_ID, id, is_extended)]
    } else {
        Vec::new()
    }
}

/// Set the CAN mode register (0 = standard, 1 = extended).
pub fn set_can_mode(servo_id: u8, mode: u16, is_extended: bool) -> EncodedMessage {
    build_write(servo_id, registers::CAN_MODE, mode, is_extended)
}

/// Command a new position.
pub fn position_command(servo_id: u8, position: u16, is_extended: bool) -> EncodedMessage {
    build_write(servo_id, registers::POSITION_NEW, position, is_extended)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_frame_layout() {
        let frame = build_write(1, 0x0A, 0x1234, false);
        assert_eq!(frame.arbitration_id, 2);
        assert_eq!(frame.payload, vec![0x77, 0x01, 0x0A, 0x34, 0x12]);
    }

    #[test]
    fn extended_convention_selects_arbitration_id_zero() {
        assert_eq!(build_write(1, 0x0A, 0x1234, true).arbitration_id, 0);
        assert_eq!(build_read(1, 0x0A, true).arbitration_id, 0);
    }

    #[test]
    fn write_dual_frame_layout() {
        let frame = build_write_dual(2, 0x0C, 0x05DC, 0x3E, 0x0011, false);
        assert_eq!(
            frame.payload,
            vec![b'W', 0x02, 0x0C, 0xDC, 0x05, 0x3E, 0x11, 0x00]
        );
    }

    #[test]
    fn read_frame_layouts() {
        assert_eq!(build_read(3, 0x32, false).payload, vec![b'r', 3, 0x32]);
        assert_eq!(
            build_read_dual(3, 0x3C, 0x3E, false).payload,
            vec![b'R', 3, 0x3C, 0x3E]
        );
    }

    #[test]
    fn save_and_reset_writes_magic_value() {
        let frame = save_and_reset(1, false);
        assert_eq!(frame.payload, vec![b'w', 1, 0x70, 0xFF, 0xFF]);
    }

    #[test]
    fn set_can_id_low_always_emits_one_frame() {
        let messages = set_can_id_low(1, 0x0000, false);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].payload, vec![b'w', 1, 0x3E, 0x00, 0x00]);
    }

    #[test]
    fn set_can_id_high_skips_zero_high_byte() {
        assert!(set_can_id_high(1, 0x00FF, false).is_empty());
        let messages = set_can_id_high(1, 0x0100, false);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].payload, vec![b'w', 1, 0x3C, 0x01, 0x00]);
    }

    #[test]
    fn set_can_id_emits_low_then_conditional_high() {
        let messages = set_can_id(1, 0x0234, false);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].payload[2], 0x3E);
        assert_eq!(messages[0].payload[3], 0x34);
        assert_eq!(messages[1].payload[2], 0x3C);
        assert_eq!(messages[1].payload[3], 0x02);

        assert_eq!(set_can_id(1, 0x0034, false).len(), 1);
    }

    #[test]
    fn set_servo_id_skips_zero_id() {
        assert!(set_servo_id(1, 0x0000, false).is_empty());
        let messages = set_servo_id(1, 0x0005, false);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].payload, vec![b'w', 1, 0x32, 0x05, 0x00]);
    }

    #[test]
    fn set_can_mode_and_position_target_their_registers() {
        assert_eq!(set_can_mode(1, 1, false).payload[2], 0x6A);
        assert_eq!(position_command(1, 1500, false).payload[2], 0x0C);
    }

    #[test]
    fn encoding_is_idempotent() {
        let a = build_write(9, 0x10, 0xBEEF, false);
        let b = build_write(9, 0x10, 0xBEEF, false);
        assert_eq!(a, b);
    }

    #[test]
    fn value_split_round_trips() {
        for value in [0u16, 1, 0x00FF, 0x0100, 0x1234, 0xFFFF] {
            let frame = build_write(1, 0x0A, value, false);
            let joined = u16::from_le_bytes([frame.payload[3], frame.payload[4]]);
            assert_eq!(joined, value);
        }
    }
}
