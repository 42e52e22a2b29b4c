//! # stateless-gas-interpreter
//!
//! Opcode gas adapters for the stateless (verkle) gas schedule.
//!
//! Before a metered opcode runs, the interpreter hands the adapter a
//! [`WitnessContext`] (the transaction's [`AccessWitness`], the host and the
//! frame's [`Gas`]), the executing contract address and the operand stack.
//! The adapter touches the witness and returns the gas the opcode owes.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod cfg;
mod error;
pub mod gas;
pub mod host;
mod instruction_context;
mod instruction_result;
pub mod instructions;
mod interpreter;
pub mod opcode;
mod table;

pub use cfg::GasCfg;
pub use error::WitnessGasError;
pub use gas::Gas;
pub use host::{DummyHost, Host};
pub use instruction_context::WitnessContext;
pub use instruction_result::InstructionResult;
pub use interpreter::{Stack, STACK_LIMIT};
pub use table::{Charge, WitnessGasFn, WitnessGasTable};

pub use primitives;
pub use witness::{self, AccessKind, AccessWitness, BlockWitness, ItemKind, WitnessGasCosts};
