//! State the gas adapters need from the execution engine.

mod dummy;

pub use dummy::DummyHost;

use auto_impl::auto_impl;
use primitives::Address;

/// Host interface used by the gas adapters.
///
/// Warm and cold account access is tracked by the access witness alone, so
/// the host is never asked whether an account was accessed before.
#[auto_impl(&mut, Box)]
pub trait Host {
    /// Returns `true` if `address` does not exist or is empty.
    ///
    /// Returns `None` if the state could not be read, which is fatal.
    fn is_empty_account(&mut self, address: Address) -> Option<bool>;

    /// Returns `true` if `address` was created earlier in the current transaction.
    fn created_in_current_tx(&self, address: Address) -> bool;
}
