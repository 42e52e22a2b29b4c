use crate::{Stack, WitnessGasError};
use primitives::{Address, B256, U256};

/// Trait for converting types into U256 values.
pub trait IntoU256 {
    /// Converts the implementing type into a U256 value.
    fn into_u256(self) -> U256;
}

impl IntoU256 for Address {
    fn into_u256(self) -> U256 {
        self.into_word().into_u256()
    }
}

impl IntoU256 for B256 {
    fn into_u256(self) -> U256 {
        U256::from_be_bytes(self.0)
    }
}

/// Trait for converting types into Address values. It ignores excess bytes.
pub trait IntoAddress {
    /// Converts the implementing type into an Address value.
    fn into_address(self) -> Address;
}

impl IntoAddress for U256 {
    fn into_address(self) -> Address {
        Address::from_word(B256::from(self.to_be_bytes()))
    }
}

/// Peeks the `n`-th stack item from the top.
#[inline]
pub(crate) fn peek(stack: &Stack, n: usize) -> Result<U256, WitnessGasError> {
    stack.peek(n).map_err(|_| WitnessGasError::StackUnderflow)
}

/// Peeks the `n`-th stack item from the top as an address.
#[inline]
pub(crate) fn peek_address(stack: &Stack, n: usize) -> Result<Address, WitnessGasError> {
    peek(stack, n).map(IntoAddress::into_address)
}

/// Peeks the `n`-th stack item from the top as a storage slot.
#[inline]
pub(crate) fn peek_slot(stack: &Stack, n: usize) -> Result<B256, WitnessGasError> {
    peek(stack, n).map(|value| B256::from(value.to_be_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{address, b256};

    #[test]
    fn address_roundtrip() {
        let addr = address!("0x0000000000000000000000000000000000000001");
        let u256 = addr.into_u256();
        assert_eq!(u256, U256::from(0x01));
        assert_eq!(u256.into_address(), addr);
    }

    #[test]
    fn address_ignores_high_bytes() {
        let word = U256::MAX;
        assert_eq!(word.into_address(), Address::repeat_byte(0xff));
    }

    #[test]
    fn peek_helpers() {
        let slot = b256!("0x00000000000000000000000000000000000000000000000000000000000000aa");
        let stack: Stack = [U256::from(1), slot.into_u256()].into_iter().collect();
        assert_eq!(peek_slot(&stack, 0), Ok(slot));
        assert_eq!(
            peek_address(&stack, 1),
            Ok(address!("0x0000000000000000000000000000000000000001"))
        );
        assert_eq!(peek(&stack, 2), Err(WitnessGasError::StackUnderflow));
    }
}
