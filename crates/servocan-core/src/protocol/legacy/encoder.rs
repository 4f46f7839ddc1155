use tracing::debug;

use super::layout;
use crate::EncodedMessage;
use crate::text::format_hex_bytes;

// Truncating 8-bit sum over servo ID, data bytes and register address. The
// opcode byte is NOT summed; the firmware checks this exact operand set, so
// it stays that way even though it looks like an oversight in the original
// protocol.
fn checksum(servo_id: u8, data_low: u8, data_high: u8, address: u8) -> u8 {
    servo_id
        .wrapping_add(data_low)
        .wrapping_add(data_high)
        .wrapping_add(address)
}

fn frame(payload: [u8; layout::FRAME_LEN]) -> EncodedMessage {
    debug!(
        arbitration_id = layout::ARBITRATION_ID,
        payload = %format_hex_bytes(&payload),
        "encoded legacy frame"
    );
    EncodedMessage {
        arbitration_id: layout::ARBITRATION_ID,
        payload: payload.to_vec(),
    }
}

/// Write a register using the legacy 8-byte frame.
///
/// Layout: `[0x00, 0x00, servo_id, 0x02, data_low, data_high, checksum, 0x00]`.
pub fn build_legacy_write(servo_id: u8, address: u8, value: u16) -> EncodedMessage {
    let [data_low, data_high] = value.to_le_bytes();
    frame([
        0x00,
        0x00,
        servo_id,
        layout::OPCODE_WRITE,
        data_low,
        data_high,
        checksum(servo_id, data_low, data_high, address),
        0x00,
    ])
}

/// Request a register readback using the legacy 8-byte frame.
///
/// The data bytes are zero placeholders; the checksum covers servo ID,
/// address and the zero data-low placeholder.
pub fn build_legacy_read(servo_id: u8, address: u8) -> EncodedMessage {
    frame([
        0x00,
        0x00,
        servo_id,
        layout::OPCODE_READ,
        0x00,
        0x00,
        checksum(servo_id, 0x00, 0x00, address),
        0x00,
    ])
}
