use super::constants::*;

/// Legacy call gas of the call instructions under the stateless schedule.
///
/// Account access is priced by the access witness, so only two parts remain:
/// * Transfer value gas, if value is transferred.
/// * New account gas, if value is transferred to an empty account
///   (EIP-161: State trie clearing).
///
/// `is_empty` must be hardcoded to `false` for `CALLCODE`, `DELEGATECALL`
/// and `STATICCALL`, which never create the callee.
#[inline]
pub const fn call_cost(transfers_value: bool, is_empty: bool) -> u64 {
    let mut gas = 0;

    // transfer value cost
    if transfers_value {
        gas += CALLVALUE;

        // new account cost
        if is_empty {
            gas += NEWACCOUNT;
        }
    }

    gas
}
