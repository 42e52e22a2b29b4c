//! Gas configuration of the stateless schedule.

use primitives::hardfork::SpecId;
use witness::{AccessWitness, BlockWitness, WitnessGasCosts};

/// Configuration deciding whether, and with which prices, the stateless
/// gas schedule applies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasCfg {
    /// Active specification.
    pub spec: SpecId,
    /// Witness gas schedule.
    pub witness_costs: WitnessGasCosts,
    /// Forces the stateless schedule on or off regardless of `spec`.
    ///
    /// `None` means it is active from [`SpecId::VERKLE`] onwards.
    pub stateless: Option<bool>,
}

impl GasCfg {
    /// Creates a configuration for `spec` with the default witness schedule.
    pub fn new(spec: SpecId) -> Self {
        Self {
            spec,
            ..Default::default()
        }
    }

    /// Overrides activation of the stateless schedule.
    pub fn with_stateless(mut self, stateless: bool) -> Self {
        self.stateless = Some(stateless);
        self
    }

    /// Returns `true` if opcodes are metered with the access witness.
    #[inline]
    pub fn is_stateless(&self) -> bool {
        self.stateless
            .unwrap_or_else(|| self.spec.is_enabled_in(SpecId::VERKLE))
    }

    /// Creates an empty transaction witness priced by this configuration.
    #[inline]
    pub fn new_witness(&self) -> AccessWitness {
        AccessWitness::with_costs(self.witness_costs)
    }

    /// Creates an empty block witness priced by this configuration.
    #[inline]
    pub fn new_block_witness(&self) -> BlockWitness {
        BlockWitness::new(self.witness_costs)
    }
}
