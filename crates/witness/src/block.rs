//! Block-level record of keys already paid for.

use crate::{AccessWitness, WitnessGasCosts};

/// Keys paid for by earlier transactions of the same block.
///
/// Each transaction starts from a copy of the block record, so keys paid for
/// earlier in the block are warm, and its witness is committed back once the
/// transaction finishes. Committing happens whatever the transaction outcome
/// was, since a reverted transaction still paid for what it touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockWitness {
    witness: AccessWitness,
}

impl BlockWitness {
    /// Creates an empty block record priced with `costs`.
    pub fn new(costs: WitnessGasCosts) -> Self {
        Self {
            witness: AccessWitness::with_costs(costs),
        }
    }

    /// Returns a fresh per-transaction witness seeded with the keys paid so far.
    pub fn begin_transaction(&self) -> AccessWitness {
        self.witness.clone()
    }

    /// Folds a finished transaction's witness into the block record.
    pub fn commit(&mut self, transaction: AccessWitness) {
        self.witness.merge(&transaction);
    }

    /// Returns the accumulated witness of the block.
    #[inline]
    pub fn witness(&self) -> &AccessWitness {
        &self.witness
    }
}
