//! # stateless-gas-witness
//!
//! Access model and the per-transaction access witness used to price state
//! access under the verkle (stateless) gas schedule.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

mod access;
mod block;
mod costs;
mod witness;

pub use access::{AccessItem, AccessKey, AccessKind, ItemKind};
pub use block::BlockWitness;
pub use costs::WitnessGasCosts;
pub use primitives;
pub use witness::AccessWitness;
