/// Halt status of an instruction, as seen by the interpreter loop.
///
/// Only the statuses a gas computation can end with are listed. Codes keep
/// the interpreter's numbering so they can be passed through unchanged.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstructionResult {
    /// Remaining gas does not cover the opcode.
    OutOfGas = 0x50,
    /// An operand was missing from the stack.
    StackUnderflow,
    /// Pushing would exceed [`STACK_LIMIT`](crate::STACK_LIMIT).
    StackOverflow,
    /// Fatal external error. Returned by the host when state cannot be loaded.
    FatalExternalError,
}
