//! Static register catalog.
//!
//! The catalog maps register addresses to their definitions and is built once
//! at startup. Lookups never fail: firmware variants answer with registers
//! outside the documented set, so unknown addresses resolve to a synthesized
//! placeholder instead of an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known register addresses from the servo manual.
pub mod registers {
    /// New position command (pulse width in microseconds).
    pub const POSITION_NEW: u8 = 0x0C;
    /// Extended position readback.
    pub const POSITION_EXT: u8 = 0x10;
    /// Servo receive ID (read-only).
    pub const SERVO_ID: u8 = 0x32;
    /// CAN ID high byte.
    pub const CAN_ID_HIGH: u8 = 0x3C;
    /// CAN ID low byte.
    pub const CAN_ID_LOW: u8 = 0x3E;
    /// Baudrate setting.
    pub const BAUDRATE: u8 = 0x60;
    /// CAN mode setting (0 = standard, 1 = extended).
    pub const CAN_MODE: u8 = 0x6A;
    /// Save-and-reset command register.
    pub const SAVE_RESET: u8 = 0x70;
}

/// Definition of a single servo register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterDefinition {
    /// Register address on the servo.
    pub address: u8,
    /// Short name (e.g., `POSITION_NEW`).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Register size in bytes.
    pub size: u8,
    /// Whether writes to this register are rejected by firmware.
    pub read_only: bool,
    /// Lower value bound, when the manual documents one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<u16>,
    /// Upper value bound, when the manual documents one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<u16>,
}

impl RegisterDefinition {
    fn known(address: u8, name: &str, description: &str) -> Self {
        Self {
            address,
            name: name.to_string(),
            description: description.to_string(),
            size: 2,
            read_only: false,
            min_value: None,
            max_value: None,
        }
    }

    fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    fn placeholder(address: u8) -> Self {
        Self {
            address,
            name: format!("ADDR_{address:02X}"),
            description: "Unknown Register".to_string(),
            size: 2,
            read_only: false,
            min_value: None,
            max_value: None,
        }
    }
}

/// Immutable register catalog, injected by reference into the decoder and
/// the validators.
///
/// # Examples
/// ```
/// use servocan_core::{RegisterCatalog, registers};
///
/// let catalog = RegisterCatalog::new();
/// assert_eq!(catalog.lookup(registers::SERVO_ID).name, "SERVO_ID");
/// assert_eq!(catalog.lookup(0x44).name, "ADDR_44");
/// ```
#[derive(Debug, Clone)]
pub struct RegisterCatalog {
    entries: BTreeMap<u8, RegisterDefinition>,
}

impl RegisterCatalog {
    /// Build the catalog of documented registers.
    pub fn new() -> Self {
        use registers::*;
        let defs = [
            RegisterDefinition::known(SERVO_ID, "SERVO_ID", "Servo Receive ID").read_only(),
            RegisterDefinition::known(CAN_ID_HIGH, "CAN_ID_HIGH", "CAN ID High Byte"),
            RegisterDefinition::known(CAN_ID_LOW, "CAN_ID_LOW", "CAN ID Low Byte"),
            RegisterDefinition::known(CAN_MODE, "CAN_MODE", "CAN Mode Setting"),
            RegisterDefinition::known(POSITION_NEW, "POSITION_NEW", "New Position Command"),
            RegisterDefinition::known(POSITION_EXT, "POSITION_EXT", "Extended Position"),
            RegisterDefinition::known(BAUDRATE, "BAUDRATE", "Baudrate Setting"),
            RegisterDefinition::known(SAVE_RESET, "SAVE_RESET", "Save and Reset Command"),
        ];
        Self {
            entries: defs.into_iter().map(|def| (def.address, def)).collect(),
        }
    }

    /// Build a catalog from explicit definitions (alternate firmware maps,
    /// tests).
    pub fn from_definitions(defs: impl IntoIterator<Item = RegisterDefinition>) -> Self {
        Self {
            entries: defs.into_iter().map(|def| (def.address, def)).collect(),
        }
    }

    /// Resolve an address to its definition. Unknown addresses yield a
    /// placeholder named `ADDR_XX`; this never fails.
    pub fn lookup(&self, address: u8) -> RegisterDefinition {
        self.entries
            .get(&address)
            .cloned()
            .unwrap_or_else(|| RegisterDefinition::placeholder(address))
    }

    /// Snapshot of all documented registers, in address order.
    pub fn all(&self) -> BTreeMap<u8, RegisterDefinition> {
        self.entries.clone()
    }
}

impl Default for RegisterCatalog {
    fn default() -> Self {
        Self::new()
    }
}
