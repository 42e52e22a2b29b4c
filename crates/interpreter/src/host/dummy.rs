use crate::Host;
use primitives::Address;
use std::collections::BTreeSet;

/// A dummy [Host] implementation backed by address sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DummyHost {
    /// Accounts that exist and are not empty.
    pub existing_accounts: BTreeSet<Address>,
    /// Accounts created in the current transaction.
    pub created_accounts: BTreeSet<Address>,
    /// Accounts whose state cannot be loaded.
    pub unreachable_accounts: BTreeSet<Address>,
}

impl DummyHost {
    /// Creates an empty dummy host.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the accounts created so far, as at the start of a transaction.
    #[inline]
    pub fn clear(&mut self) {
        self.created_accounts.clear();
    }
}

impl Host for DummyHost {
    fn is_empty_account(&mut self, address: Address) -> Option<bool> {
        if self.unreachable_accounts.contains(&address) {
            return None;
        }
        Some(!self.existing_accounts.contains(&address))
    }

    fn created_in_current_tx(&self, address: Address) -> bool {
        self.created_accounts.contains(&address)
    }
}
