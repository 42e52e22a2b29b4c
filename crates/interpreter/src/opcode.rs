//! Opcodes metered by the stateless gas schedule.

/// `BALANCE`
pub const BALANCE: u8 = 0x31;
/// `EXTCODESIZE`
pub const EXTCODESIZE: u8 = 0x3B;
/// `EXTCODEHASH`
pub const EXTCODEHASH: u8 = 0x3F;
/// `SLOAD`
pub const SLOAD: u8 = 0x54;
/// `SSTORE`
pub const SSTORE: u8 = 0x55;
/// `CALL`
pub const CALL: u8 = 0xF1;
/// `CALLCODE`
pub const CALLCODE: u8 = 0xF2;
/// `DELEGATECALL`
pub const DELEGATECALL: u8 = 0xF4;
/// `STATICCALL`
pub const STATICCALL: u8 = 0xFA;
/// `SELFDESTRUCT`
pub const SELFDESTRUCT: u8 = 0xFF;

/// Returns the mnemonic of a metered opcode.
pub const fn name(opcode: u8) -> Option<&'static str> {
    Some(match opcode {
        BALANCE => "BALANCE",
        EXTCODESIZE => "EXTCODESIZE",
        EXTCODEHASH => "EXTCODEHASH",
        SLOAD => "SLOAD",
        SSTORE => "SSTORE",
        CALL => "CALL",
        CALLCODE => "CALLCODE",
        DELEGATECALL => "DELEGATECALL",
        STATICCALL => "STATICCALL",
        SELFDESTRUCT => "SELFDESTRUCT",
        _ => return None,
    })
}
