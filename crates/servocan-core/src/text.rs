//! Display and input-parsing helpers shared by the CLI and log output.

use thiserror::Error;

use crate::protocol::MessageType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("invalid hex digit in {token:?}")]
    InvalidDigit { token: String },
}

/// Format bytes as uppercase space-separated hex (`"77 01 0A"`).
pub fn format_hex_bytes(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse user hex input into bytes.
///
/// Accepts space or comma separated tokens with optional `0x` prefixes, as
/// well as one contiguous digit run (`"0x77 0x01"`, `"77,01"`, `"7701"`).
/// An odd digit count is left-padded with a zero, matching how operators
/// type short values.
///
/// # Examples
/// ```
/// use servocan_core::text::parse_hex_input;
///
/// assert_eq!(parse_hex_input("0x77 0x01, 0A").unwrap(), vec![0x77, 0x01, 0x0A]);
/// assert!(parse_hex_input("0xZZ").is_err());
/// ```
pub fn parse_hex_input(input: &str) -> Result<Vec<u8>, TextError> {
    let mut digits = String::new();
    for token in input.split([' ', ',', '\t']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let stripped = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TextError::InvalidDigit {
                token: token.to_string(),
            });
        }
        digits.push_str(stripped);
    }
    if digits.len() % 2 != 0 {
        digits.insert(0, '0');
    }
    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for index in (0..digits.len()).step_by(2) {
        let pair = &digits[index..index + 2];
        let byte = u8::from_str_radix(pair, 16).map_err(|_| TextError::InvalidDigit {
            token: pair.to_string(),
        })?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Human-readable one-line description of a payload, keyed on the opcode in
/// byte 0 with servo/address context when the payload is long enough.
pub fn describe_message(payload: &[u8]) -> String {
    let Some(&opcode) = payload.first() else {
        return "Empty Message".to_string();
    };
    let base = MessageType::from_wire_byte(opcode)
        .map(MessageType::description)
        .unwrap_or("Unknown Message");
    if payload.len() >= 3 {
        let servo_id = payload[1];
        let address = payload[2];
        format!("{base} (Servo {servo_id}, Addr 0x{address:02X})")
    } else {
        base.to_string()
    }
}

/// Register-aware value formatting for display.
pub fn format_register_value(value: u16, register_name: &str) -> String {
    match register_name {
        "CAN_ID_HIGH" | "CAN_ID_LOW" => format!("0x{value:02X} ({value})"),
        "CAN_MODE" => {
            let mode = match value {
                0 => "Standard",
                1 => "Extended",
                _ => "Unknown",
            };
            format!("{value} ({mode})")
        }
        "POSITION_NEW" | "POSITION_EXT" => format!("{value} us"),
        _ => format!("0x{value:04X} ({value})"),
    }
}
