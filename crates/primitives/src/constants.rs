//! Gas constants of the stateless (verkle) access schedule.
//!
//! The four components are the EIP-4762 witness costs. The derived costs
//! price every witness key as its own branch plus leaf, a per-key
//! simplification of EIP-4762, which charges a branch once per stem.

/// Cost to add a branch (stem) to the witness the first time it is read.
pub const WITNESS_BRANCH_COST: u64 = 1900;

/// Cost to add a leaf (chunk) to the witness the first time it is read.
pub const WITNESS_CHUNK_COST: u64 = 200;

/// Cost to edit a subtree the first time it is written.
pub const SUBTREE_EDIT_COST: u64 = 3000;

/// Cost to edit a leaf the first time it is written.
pub const CHUNK_EDIT_COST: u64 = 500;

/// Gas charged for a cold read of a single witness key.
pub const WITNESS_COLD_READ_COST: u64 = WITNESS_BRANCH_COST + WITNESS_CHUNK_COST;

/// Extra gas charged when a key that was read is written for the first time.
pub const WITNESS_WRITE_UPGRADE_COST: u64 = SUBTREE_EDIT_COST + CHUNK_EDIT_COST;

/// Gas charged for a cold write of a single witness key.
pub const WITNESS_COLD_WRITE_COST: u64 = WITNESS_COLD_READ_COST + WITNESS_WRITE_UPGRADE_COST;
