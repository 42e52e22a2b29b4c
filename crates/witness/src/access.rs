//! Access model: direction of an access, account header items and witness keys.

use bitflags::bitflags;
use primitives::{Address, B256};

/// Direction of a state access.
///
/// Ordered so that `Read < Write`; a key's recorded level only ever moves
/// upwards in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessKind {
    /// The value is only read.
    Read,
    /// The value is written.
    Write,
}

bitflags! {
    /// Account header items that are priced individually by the witness.
    ///
    /// Bit positions match the header layout of the witness format and must not
    /// be reordered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ItemKind: u64 {
        /// Account version.
        const VERSION = 1 << 0;
        /// Account balance.
        const BALANCE = 1 << 1;
        /// Account nonce.
        const NONCE = 1 << 2;
        /// Hash of the account code.
        const CODE_HASH = 1 << 3;
        /// Size of the account code.
        const CODE_SIZE = 1 << 4;
    }
}

impl ItemKind {
    /// First bit past the header items. Never a member of an [`ItemKind`] set.
    pub const LAST_HEADER_ITEM: u64 = 1 << 5;

    /// Every header item.
    pub const ALL_ITEMS: Self = Self::all();

    /// No header item.
    pub const NO_ITEMS: Self = Self::empty();

    /// Returns `true` if exactly one header item is set.
    #[inline]
    pub const fn is_single(self) -> bool {
        self.bits().count_ones() == 1
    }

    /// Iterates the single items contained in this set, lowest bit first.
    pub fn iter_items(self) -> impl Iterator<Item = ItemKind> {
        (0..Self::LAST_HEADER_ITEM.trailing_zeros())
            .map(|bit| Self::from_bits_retain(1 << bit))
            .filter(move |item| self.contains(*item))
    }
}

/// What part of an account a witness key points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessItem {
    /// A single account header field.
    Header(ItemKind),
    /// A storage slot.
    Storage(B256),
}

impl From<ItemKind> for AccessItem {
    #[inline]
    fn from(item: ItemKind) -> Self {
        Self::Header(item)
    }
}

impl From<B256> for AccessItem {
    #[inline]
    fn from(slot: B256) -> Self {
        Self::Storage(slot)
    }
}

/// Key of the witness: an account and the header field or storage slot touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessKey {
    /// Account address.
    pub address: Address,
    /// Field or slot of the account.
    pub item: AccessItem,
}

impl AccessKey {
    /// Creates a key for `item` of `address`.
    ///
    /// A header item must hold exactly one flag.
    #[inline]
    pub fn new(address: Address, item: impl Into<AccessItem>) -> Self {
        let item = item.into();
        debug_assert!(
            !matches!(item, AccessItem::Header(kind) if !kind.is_single()),
            "header key must reference a single item"
        );
        Self { address, item }
    }

    /// Creates a key for a single header item.
    #[inline]
    pub fn header(address: Address, item: ItemKind) -> Self {
        Self::new(address, item)
    }

    /// Creates a key for a storage slot.
    #[inline]
    pub fn storage(address: Address, slot: B256) -> Self {
        Self::new(address, slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{address, b256};

    #[test]
    fn header_bits() {
        assert_eq!(ItemKind::VERSION.bits(), 1);
        assert_eq!(ItemKind::BALANCE.bits(), 2);
        assert_eq!(ItemKind::NONCE.bits(), 4);
        assert_eq!(ItemKind::CODE_HASH.bits(), 8);
        assert_eq!(ItemKind::CODE_SIZE.bits(), 16);

        let union = ItemKind::VERSION
            | ItemKind::BALANCE
            | ItemKind::NONCE
            | ItemKind::CODE_SIZE
            | ItemKind::CODE_HASH;
        assert_eq!(union.bits(), 31);
        assert_eq!(union, ItemKind::ALL_ITEMS);
        assert_eq!(ItemKind::NO_ITEMS.bits(), 0);
    }

    #[test]
    fn last_header_item_is_outside_the_set() {
        assert_eq!(ItemKind::LAST_HEADER_ITEM, 32);
        assert!(ItemKind::from_bits(ItemKind::LAST_HEADER_ITEM).is_none());
        assert_eq!(ItemKind::ALL_ITEMS.bits() & ItemKind::LAST_HEADER_ITEM, 0);
        assert_eq!(
            ItemKind::from_bits_truncate(ItemKind::LAST_HEADER_ITEM | 2),
            ItemKind::BALANCE
        );
    }

    #[test]
    fn set_operations() {
        let set = ItemKind::BALANCE | ItemKind::CODE_SIZE;
        assert!(set.contains(ItemKind::BALANCE));
        assert!(!set.contains(ItemKind::NONCE));
        assert_eq!(set & ItemKind::CODE_SIZE, ItemKind::CODE_SIZE);
        assert!(!set.is_single());
        assert!(ItemKind::NONCE.is_single());
        assert!(!ItemKind::NO_ITEMS.is_single());
    }

    #[test]
    fn iter_items_ascending() {
        let items: Vec<_> = ItemKind::ALL_ITEMS.iter_items().collect();
        assert_eq!(
            items,
            vec![
                ItemKind::VERSION,
                ItemKind::BALANCE,
                ItemKind::NONCE,
                ItemKind::CODE_HASH,
                ItemKind::CODE_SIZE,
            ]
        );
        assert_eq!(ItemKind::NO_ITEMS.iter_items().count(), 0);
    }

    #[test]
    fn keys_compare_structurally() {
        let addr = address!("0x00000000000000000000000000000000000000aa");
        let slot = b256!("0x0000000000000000000000000000000000000000000000000000000000000001");

        assert_eq!(
            AccessKey::header(addr, ItemKind::BALANCE),
            AccessKey::header(addr, ItemKind::BALANCE)
        );
        assert_ne!(
            AccessKey::header(addr, ItemKind::BALANCE),
            AccessKey::header(addr, ItemKind::NONCE)
        );
        assert_ne!(
            AccessKey::storage(addr, slot),
            AccessKey::storage(Address::ZERO, slot)
        );
        assert_eq!(AccessKey::new(addr, slot).item, AccessItem::Storage(slot));
    }
}
