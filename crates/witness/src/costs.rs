use primitives::{CHUNK_EDIT_COST, SUBTREE_EDIT_COST, WITNESS_BRANCH_COST, WITNESS_CHUNK_COST};

/// Gas schedule of the access witness.
///
/// Built from the EIP-4762 cost components, but collapsed per key: every
/// witness key pays one branch plus one leaf, instead of the branch being
/// shared by all keys of a stem. The fields are public for test networks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WitnessGasCosts {
    /// Charged on the first read of a branch.
    pub branch_read: u64,
    /// Charged on the first read of a leaf.
    pub chunk_read: u64,
    /// Charged on the first write to a subtree.
    pub subtree_edit: u64,
    /// Charged on the first write to a leaf.
    pub chunk_edit: u64,
}

impl Default for WitnessGasCosts {
    fn default() -> Self {
        Self {
            branch_read: WITNESS_BRANCH_COST,
            chunk_read: WITNESS_CHUNK_COST,
            subtree_edit: SUBTREE_EDIT_COST,
            chunk_edit: CHUNK_EDIT_COST,
        }
    }
}

impl WitnessGasCosts {
    /// Gas for reading a key that is not in the witness yet.
    #[inline]
    pub const fn cold_read(&self) -> u64 {
        self.branch_read.saturating_add(self.chunk_read)
    }

    /// Gas for writing a key that was only read so far.
    #[inline]
    pub const fn write_upgrade(&self) -> u64 {
        self.subtree_edit.saturating_add(self.chunk_edit)
    }

    /// Gas for writing a key that is not in the witness yet.
    #[inline]
    pub const fn cold_write(&self) -> u64 {
        self.cold_read().saturating_add(self.write_upgrade())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{WITNESS_COLD_READ_COST, WITNESS_COLD_WRITE_COST, WITNESS_WRITE_UPGRADE_COST};

    #[test]
    fn default_schedule() {
        let costs = WitnessGasCosts::default();
        assert_eq!(costs.cold_read(), WITNESS_COLD_READ_COST);
        assert_eq!(costs.write_upgrade(), WITNESS_WRITE_UPGRADE_COST);
        assert_eq!(costs.cold_write(), WITNESS_COLD_WRITE_COST);
        assert!(costs.cold_write() >= costs.cold_read());
    }

    #[test]
    fn custom_schedule_saturates() {
        let costs = WitnessGasCosts {
            branch_read: u64::MAX,
            chunk_read: 1,
            subtree_edit: 0,
            chunk_edit: 0,
        };
        assert_eq!(costs.cold_read(), u64::MAX);
        assert_eq!(costs.cold_write(), u64::MAX);
    }
}
