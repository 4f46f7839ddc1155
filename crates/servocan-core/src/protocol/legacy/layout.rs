pub const ARBITRATION_ID: u32 = 0;
pub const FRAME_LEN: usize = 8;

pub const SERVO_ID_OFFSET: usize = 2;
pub const OPCODE_OFFSET: usize = 3;
pub const DATA_LOW_OFFSET: usize = 4;
pub const DATA_HIGH_OFFSET: usize = 5;
pub const CHECKSUM_OFFSET: usize = 6;

pub const OPCODE_READ: u8 = 0x01;
pub const OPCODE_WRITE: u8 = 0x02;
