//! # stateless-gas-primitives
//!
//! Primitive types, hardfork identifiers and gas constants shared by the
//! witness tracker and the opcode gas adapters.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;
pub mod hardfork;

pub use alloy_primitives::{self, address, b256, Address, B256, U256};
pub use constants::*;
