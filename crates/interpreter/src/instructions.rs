//! Opcode gas adapters of the stateless schedule.
//!
//! Every adapter has the [`WitnessGasFn`](crate::WitnessGasFn) shape: it gets
//! the [`WitnessContext`](crate::WitnessContext), the executing contract and
//! the operand stack, and returns the gas the opcode owes.
pub mod contract;
pub mod host;
pub mod utility;

pub use contract::{
    call, call_code, delegate_call, static_call, CallScheme, GasCalculator, LegacyCallGas,
    WithCodeTouches,
};
pub use host::{balance, extcodehash, extcodesize, selfdestruct, sload, sstore};
