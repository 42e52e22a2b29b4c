use crate::InstructionResult;
use primitives::U256;
use std::vec::Vec;

/// EVM interpreter stack limit.
pub const STACK_LIMIT: usize = 1024;

/// EVM operand stack.
///
/// Gas adapters only peek at it; nothing is popped while gas is computed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stack {
    data: Vec<U256>,
}

impl Default for Stack {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Instantiate a new stack with the [default stack limit][STACK_LIMIT].
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Returns the length of the stack in words.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Push a new value onto the stack.
    ///
    /// If it will exceed the stack limit, returns `StackOverflow` error and leaves the stack
    /// unchanged.
    #[inline]
    pub fn push(&mut self, value: U256) -> Result<(), InstructionResult> {
        if self.data.len() == STACK_LIMIT {
            return Err(InstructionResult::StackOverflow);
        }
        self.data.push(value);
        Ok(())
    }

    /// Peek a value at given index for the stack, where the top of
    /// the stack is at index `0`. If the index is too large,
    /// [`InstructionResult::StackUnderflow`] is returned.
    #[inline]
    pub fn peek(&self, no_from_top: usize) -> Result<U256, InstructionResult> {
        if self.data.len() > no_from_top {
            Ok(self.data[self.data.len() - no_from_top - 1])
        } else {
            Err(InstructionResult::StackUnderflow)
        }
    }
}

impl FromIterator<U256> for Stack {
    /// Builds a stack bottom first: the last item becomes the top.
    fn from_iter<I: IntoIterator<Item = U256>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().take(STACK_LIMIT).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_counts_from_top() {
        let stack: Stack = [1u64, 2, 3].into_iter().map(U256::from).collect();
        assert_eq!(stack.peek(0), Ok(U256::from(3)));
        assert_eq!(stack.peek(2), Ok(U256::from(1)));
        assert_eq!(stack.peek(3), Err(InstructionResult::StackUnderflow));
    }

    #[test]
    fn push_respects_limit() {
        let mut stack: Stack = core::iter::repeat(U256::ZERO).take(STACK_LIMIT).collect();
        assert_eq!(stack.len(), STACK_LIMIT);
        assert_eq!(stack.push(U256::ZERO), Err(InstructionResult::StackOverflow));
        assert_eq!(stack.len(), STACK_LIMIT);
    }
}
