//! Per-transaction access witness.
//!
//! The witness remembers, for every key touched during a transaction, the
//! highest [`AccessKind`] that was already paid for. Every `touch_*` method
//! returns the marginal gas owed by the caller for that touch and never fails;
//! turning a charge into an out-of-gas halt is the caller's business.
//!
//! Touches are never rolled back. A key that was paid for inside a reverted
//! call frame stays warm for the rest of the transaction.

use crate::{AccessItem, AccessKey, AccessKind, ItemKind, WitnessGasCosts};
use primitives::Address;
use std::collections::{btree_map::Entry, BTreeMap};
use tracing::trace;

/// Keys touched by a transaction and the access level they were charged at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessWitness {
    /// Schedule used to price new touches.
    costs: WitnessGasCosts,
    /// Highest level charged for every touched key.
    accesses: BTreeMap<AccessKey, AccessKind>,
}

impl AccessWitness {
    /// Creates an empty witness with the default gas schedule.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty witness priced with `costs`.
    #[inline]
    pub fn with_costs(costs: WitnessGasCosts) -> Self {
        Self {
            costs,
            accesses: BTreeMap::new(),
        }
    }

    /// Returns the gas schedule.
    #[inline]
    pub fn costs(&self) -> &WitnessGasCosts {
        &self.costs
    }

    /// Returns the level `key` was charged at, or `None` if it is untouched.
    #[inline]
    pub fn level(&self, key: &AccessKey) -> Option<AccessKind> {
        self.accesses.get(key).copied()
    }

    /// Number of touched keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.accesses.len()
    }

    /// Returns `true` if nothing was touched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accesses.is_empty()
    }

    /// Iterates touched keys in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccessKey, AccessKind)> + '_ {
        self.accesses.iter().map(|(key, kind)| (key, *kind))
    }

    /// Touches `item` of `address` for reading.
    ///
    /// Returns the cold read cost the first time the key is seen and zero
    /// afterwards, whether the earlier touch was a read or a write.
    pub fn touch_address_on_read(&mut self, address: Address, item: impl Into<AccessItem>) -> u64 {
        let key = AccessKey::new(address, item);
        let gas = match self.accesses.entry(key) {
            Entry::Occupied(_) => return 0,
            Entry::Vacant(entry) => {
                entry.insert(AccessKind::Read);
                self.costs.cold_read()
            }
        };
        trace!(target: "witness", %address, item = ?key.item, gas, "charged read");
        gas
    }

    /// Touches `item` of `address` for writing.
    ///
    /// An untouched key costs the full cold write. A key that was only read
    /// is upgraded and costs the difference between write and read. A key
    /// that was already written costs nothing.
    pub fn touch_address_on_write(&mut self, address: Address, item: impl Into<AccessItem>) -> u64 {
        let key = AccessKey::new(address, item);
        let gas = match self.accesses.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(AccessKind::Write);
                self.costs.cold_write()
            }
            Entry::Occupied(mut entry) => match *entry.get() {
                AccessKind::Write => return 0,
                AccessKind::Read => {
                    entry.insert(AccessKind::Write);
                    self.costs.write_upgrade()
                }
            },
        };
        trace!(target: "witness", %address, item = ?key.item, gas, "charged write");
        gas
    }

    /// Touches `item` of `address` with the given access direction.
    #[inline]
    pub fn touch(&mut self, address: Address, item: impl Into<AccessItem>, kind: AccessKind) -> u64 {
        match kind {
            AccessKind::Read => self.touch_address_on_read(address, item),
            AccessKind::Write => self.touch_address_on_write(address, item),
        }
    }

    /// Touches the version field of `address`.
    #[inline]
    pub fn touch_version(&mut self, address: Address, kind: AccessKind) -> u64 {
        self.touch(address, ItemKind::VERSION, kind)
    }

    /// Touches the balance of `address`.
    #[inline]
    pub fn touch_balance(&mut self, address: Address, kind: AccessKind) -> u64 {
        self.touch(address, ItemKind::BALANCE, kind)
    }

    /// Touches the nonce of `address`.
    #[inline]
    pub fn touch_nonce(&mut self, address: Address, kind: AccessKind) -> u64 {
        self.touch(address, ItemKind::NONCE, kind)
    }

    /// Touches the code hash of `address`.
    #[inline]
    pub fn touch_code_hash(&mut self, address: Address, kind: AccessKind) -> u64 {
        self.touch(address, ItemKind::CODE_HASH, kind)
    }

    /// Touches the code size of `address`.
    #[inline]
    pub fn touch_code_size(&mut self, address: Address, kind: AccessKind) -> u64 {
        self.touch(address, ItemKind::CODE_SIZE, kind)
    }

    /// Touches every header item in `items`, lowest bit first, and returns the summed gas.
    pub fn touch_items(&mut self, address: Address, items: ItemKind, kind: AccessKind) -> u64 {
        items.iter_items().fold(0u64, |gas, item| {
            gas.saturating_add(self.touch(address, item, kind))
        })
    }

    /// Touches the whole account header of `address`.
    #[inline]
    pub fn touch_full_account(&mut self, address: Address, kind: AccessKind) -> u64 {
        self.touch_items(address, ItemKind::ALL_ITEMS, kind)
    }

    /// Merges `other` into this witness, keeping the higher level per key.
    ///
    /// No gas is computed; merging only moves already-paid keys around.
    pub fn merge(&mut self, other: &AccessWitness) {
        for (key, kind) in other.iter() {
            let level = self.accesses.entry(*key).or_insert(kind);
            if kind > *level {
                *level = kind;
            }
        }
    }
}
