//! EVM gas accounting for a call frame.

mod calc;
mod constants;

pub use calc::*;
pub use constants::*;

/// Gas of a call frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gas {
    /// The initial gas limit. This is constant throughout execution.
    limit: u64,
    /// The remaining gas.
    remaining: u64,
}

impl Gas {
    /// Creates a new `Gas` struct with the given gas limit.
    #[inline]
    pub const fn new(limit: u64) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Returns the gas limit.
    #[inline]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the amount of gas remaining.
    #[inline]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Returns the total amount of gas spent.
    #[inline]
    pub const fn spent(&self) -> u64 {
        self.limit - self.remaining
    }

    /// Spends all remaining gas.
    #[inline]
    pub fn spend_all(&mut self) {
        self.remaining = 0;
    }

    /// Records an explicit cost.
    ///
    /// Returns `false` and leaves the gas untouched if the cost exceeds the
    /// remaining gas.
    #[inline]
    #[must_use = "prefer returning an out-of-gas error on failure"]
    pub fn record_cost(&mut self, cost: u64) -> bool {
        if let Some(new_remaining) = self.remaining.checked_sub(cost) {
            self.remaining = new_remaining;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::Gas;

    #[test]
    fn record_cost_within_limit() {
        let mut gas = Gas::new(100);
        assert!(gas.record_cost(40));
        assert_eq!(gas.remaining(), 60);
        assert_eq!(gas.spent(), 40);
        assert!(gas.record_cost(60));
        assert_eq!(gas.remaining(), 0);
    }

    #[test]
    fn record_cost_over_limit_is_rejected() {
        let mut gas = Gas::new(10);
        assert!(!gas.record_cost(11));
        assert_eq!(gas.remaining(), 10);
        gas.spend_all();
        assert_eq!(gas.spent(), gas.limit());
    }
}
