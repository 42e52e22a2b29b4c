use crate::InstructionResult;

/// Failure of an opcode gas adapter.
///
/// The witness itself never fails; these come from deducting gas or from the
/// legacy calculator an adapter wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum WitnessGasError {
    /// Remaining gas does not cover the computed charge.
    #[error("out of gas")]
    OutOfGas,
    /// The wrapped legacy gas calculator failed; its status is passed on unchanged.
    #[error("legacy gas calculator failed: {0:?}")]
    LegacyCalculator(InstructionResult),
    /// The operand stack is shallower than the opcode requires.
    #[error("stack underflow")]
    StackUnderflow,
}

impl From<WitnessGasError> for InstructionResult {
    fn from(error: WitnessGasError) -> Self {
        match error {
            WitnessGasError::OutOfGas => InstructionResult::OutOfGas,
            WitnessGasError::LegacyCalculator(result) => result,
            WitnessGasError::StackUnderflow => InstructionResult::StackUnderflow,
        }
    }
}
