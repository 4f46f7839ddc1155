use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::WireError;
use super::layout;
use super::reader::WireReader;
use crate::catalog::RegisterCatalog;
use crate::protocol::MessageType;

/// Decoded response frame with register names resolved from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParsedResponse {
    /// One register value.
    #[serde(rename = "single_response")]
    Single {
        servo_id: u8,
        address: u8,
        value: u16,
        register_name: String,
    },
    /// Two register values from one frame.
    #[serde(rename = "dual_response")]
    Dual {
        servo_id: u8,
        address_a: u8,
        value_a: u16,
        address_b: u8,
        value_b: u16,
        register_name_a: String,
        register_name_b: String,
    },
}

/// Parse a response payload delivered by the transport.
///
/// Returns `None` for anything that is not a well-formed response frame:
/// too-short payloads, unknown opcodes, truncated value fields. Malformed
/// frames are expected on a live bus, so they are logged as diagnostics and
/// never surfaced as errors.
///
/// # Examples
/// ```
/// use servocan_core::{RegisterCatalog, parse_response, ParsedResponse};
///
/// let catalog = RegisterCatalog::new();
/// let parsed = parse_response(&catalog, &[0x00, b'v', 0x01, 0x0A, 0x34, 0x12]);
/// assert_eq!(
///     parsed,
///     Some(ParsedResponse::Single {
///         servo_id: 1,
///         address: 0x0A,
///         value: 0x1234,
///         register_name: "ADDR_0A".to_string(),
///     })
/// );
/// assert_eq!(parse_response(&catalog, &[0x00, 0x01]), None);
/// ```
pub fn parse_response(catalog: &RegisterCatalog, payload: &[u8]) -> Option<ParsedResponse> {
    match parse_response_frame(catalog, payload) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(%err, payload_len = payload.len(), "discarding malformed response");
            None
        }
    }
}

fn parse_response_frame(
    catalog: &RegisterCatalog,
    payload: &[u8],
) -> Result<Option<ParsedResponse>, WireError> {
    let reader = WireReader::new(payload);
    reader.require_len(layout::RESPONSE_MIN_LEN)?;

    let opcode = reader.read_u8(layout::RESPONSE_OPCODE_OFFSET)?;
    match MessageType::from_wire_byte(opcode) {
        Some(MessageType::ResponseSingle) => {
            reader.require_len(layout::RESPONSE_SINGLE_LEN)?;
            let servo_id = reader.read_u8(layout::RESPONSE_SERVO_ID_OFFSET)?;
            let address = reader.read_u8(layout::RESPONSE_ADDRESS_OFFSET)?;
            let value = reader.read_u16_le(layout::RESPONSE_VALUE_RANGE.clone())?;
            Ok(Some(ParsedResponse::Single {
                servo_id,
                address,
                value,
                register_name: catalog.lookup(address).name,
            }))
        }
        Some(MessageType::ResponseDual) => {
            reader.require_len(layout::RESPONSE_DUAL_LEN)?;
            let servo_id = reader.read_u8(layout::RESPONSE_SERVO_ID_OFFSET)?;
            let address_a = reader.read_u8(layout::RESPONSE_ADDRESS_OFFSET)?;
            let value_a = reader.read_u16_le(layout::RESPONSE_VALUE_RANGE.clone())?;
            let address_b = reader.read_u8(layout::RESPONSE_ADDRESS_B_OFFSET)?;
            let value_b = reader.read_u16_le(layout::RESPONSE_VALUE_B_RANGE.clone())?;
            Ok(Some(ParsedResponse::Dual {
                servo_id,
                address_a,
                value_a,
                address_b,
                value_b,
                register_name_a: catalog.lookup(address_a).name,
                register_name_b: catalog.lookup(address_b).name,
            }))
        }
        _ => Ok(None),
    }
}
