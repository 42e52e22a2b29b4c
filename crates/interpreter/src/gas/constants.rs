/// Gas cost for reading from a warm storage slot (EIP-2929).
///
/// The stateless schedule charges it for `SLOAD`/`SSTORE` when the witness
/// already holds the slot, so those opcodes are never free.
pub const WARM_STORAGE_READ_COST: u64 = 100;
/// Additional gas cost when a call transfers value.
pub const CALLVALUE: u64 = 9000;
/// Gas cost for creating a new account.
pub const NEWACCOUNT: u64 = 25000;
