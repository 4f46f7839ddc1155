//! Input validation predicates.
//!
//! Validation is separate from encoding on purpose: the encoder narrows its
//! inputs silently (wire compatibility with the permissive original), while
//! these checks operate on the caller's pre-narrowed values. Strict callers
//! run [`check_write`] before encoding; diagnostic tooling may skip it to
//! send deliberately malformed frames.

use thiserror::Error;

use crate::catalog::RegisterCatalog;

/// Typed rejection naming the violated constraint, suitable for surfacing to
/// an operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("servo id {id} out of range 0..=255")]
    ServoIdOutOfRange { id: u32 },
    #[error("register address {address:#X} out of range 0..=0xFF")]
    AddressOutOfRange { address: u32 },
    #[error("register address {address:#04X} must be even")]
    AddressOdd { address: u32 },
    #[error("value {value} out of range for register {register_name}")]
    ValueOutOfBounds { value: u32, register_name: String },
}

/// Servo IDs occupy one payload byte; 0 is the broadcast address.
pub fn valid_servo_id(id: u32) -> bool {
    id <= 0xFF
}

/// Register addresses occupy one byte and are even by protocol convention.
pub fn valid_register_address(address: u32) -> bool {
    address <= 0xFF && address % 2 == 0
}

/// Check a value against the catalog bounds for its register.
///
/// Either bound may be absent (unconstrained on that side); the 16-bit wire
/// range applies regardless.
pub fn valid_register_value(catalog: &RegisterCatalog, address: u8, value: u32) -> bool {
    let reg = catalog.lookup(address);
    if let Some(min) = reg.min_value {
        if value < u32::from(min) {
            return false;
        }
    }
    if let Some(max) = reg.max_value {
        if value > u32::from(max) {
            return false;
        }
    }
    value <= 0xFFFF
}

/// Run all write preconditions, reporting the first violated constraint.
///
/// # Examples
/// ```
/// use servocan_core::RegisterCatalog;
/// use servocan_core::validate::{ValidationError, check_write};
///
/// let catalog = RegisterCatalog::new();
/// assert!(check_write(&catalog, 1, 0x0C, 1500).is_ok());
/// assert_eq!(
///     check_write(&catalog, 1, 0x0D, 1500),
///     Err(ValidationError::AddressOdd { address: 0x0D })
/// );
/// ```
pub fn check_write(
    catalog: &RegisterCatalog,
    servo_id: u32,
    address: u32,
    value: u32,
) -> Result<(), ValidationError> {
    if !valid_servo_id(servo_id) {
        return Err(ValidationError::ServoIdOutOfRange { id: servo_id });
    }
    if address > 0xFF {
        return Err(ValidationError::AddressOutOfRange { address });
    }
    if address % 2 != 0 {
        return Err(ValidationError::AddressOdd { address });
    }
    if !valid_register_value(catalog, address as u8, value) {
        return Err(ValidationError::ValueOutOfBounds {
            value,
            register_name: catalog.lookup(address as u8).name,
        });
    }
    Ok(())
}
