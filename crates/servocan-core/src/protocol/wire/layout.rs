// Arbitration IDs for the two addressing conventions. The choice only
// selects the constant; frame content is identical either way.
pub const ARBITRATION_ID_EXTENDED: u32 = 0;
pub const ARBITRATION_ID_STANDARD: u32 = 2;

// Request frames: opcode first, then servo ID.
pub const OPCODE_OFFSET: usize = 0;
pub const SERVO_ID_OFFSET: usize = 1;

// Response frames: byte 0 is reserved, the opcode follows.
pub const RESPONSE_OPCODE_OFFSET: usize = 1;
pub const RESPONSE_SERVO_ID_OFFSET: usize = 2;
pub const RESPONSE_ADDRESS_OFFSET: usize = 3;
pub const RESPONSE_VALUE_RANGE: std::ops::Range<usize> = 4..6;
pub const RESPONSE_ADDRESS_B_OFFSET: usize = 6;
pub const RESPONSE_VALUE_B_RANGE: std::ops::Range<usize> = 7..9;

pub const RESPONSE_MIN_LEN: usize = 4;
pub const RESPONSE_SINGLE_LEN: usize = RESPONSE_VALUE_RANGE.end;
pub const RESPONSE_DUAL_LEN: usize = RESPONSE_VALUE_B_RANGE.end;

/// Writing this value to the SAVE_RESET register saves settings and reboots.
pub const SAVE_RESET_MAGIC: u16 = 0xFFFF;
