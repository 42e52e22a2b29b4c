//! Hardfork identifiers.
#![allow(non_camel_case_types)]

pub use SpecId::*;

/// Specification IDs, ordered by activation.
///
/// Only the forks around the switch to the stateless gas schedule are listed.
/// Discriminants follow the mainnet fork numbering.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecId {
    /// Cancun hard fork
    CANCUN = 17,
    /// Prague hard fork
    #[default]
    PRAGUE,
    /// Osaka hard fork
    OSAKA,
    /// Verkle hard fork (EIP-4762 stateless gas costs)
    VERKLE,
}

impl SpecId {
    /// Returns `true` if the given specification ID is enabled in this spec.
    #[inline]
    pub const fn is_enabled_in(self, other: Self) -> bool {
        self as u8 >= other as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verkle_is_latest() {
        assert!(SpecId::VERKLE.is_enabled_in(SpecId::OSAKA));
        assert!(SpecId::VERKLE.is_enabled_in(SpecId::VERKLE));
        assert!(!SpecId::PRAGUE.is_enabled_in(SpecId::VERKLE));
        assert_eq!(SpecId::default(), PRAGUE);
    }
}
