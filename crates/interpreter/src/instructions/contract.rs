use super::utility::{peek_address, IntoAddress};
use crate::{gas::call_cost, Host, InstructionResult, Stack, WitnessContext, WitnessGasError};
use primitives::Address;
use witness::AccessKind;

/// Call instruction variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallScheme {
    /// `CALL`.
    Call,
    /// `CALLCODE`
    CallCode,
    /// `DELEGATECALL`
    DelegateCall,
    /// `STATICCALL`
    StaticCall,
}

impl CallScheme {
    /// Returns `true` if the stack carries a value operand for this call.
    #[inline]
    pub const fn has_value(self) -> bool {
        matches!(self, Self::Call | Self::CallCode)
    }
}

/// Base gas calculator of an opcode, as it was before the stateless schedule.
pub trait GasCalculator<H: ?Sized> {
    /// Computes the base gas of the opcode.
    fn base_gas(
        &self,
        context: &mut WitnessContext<'_, H>,
        contract: Address,
        stack: &Stack,
    ) -> Result<u64, InstructionResult>;
}

/// Legacy gas of the call instructions: value transfer and new account
/// surcharges.
///
/// Account access is left to the access witness, so the result does not
/// depend on whether the callee was called before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegacyCallGas {
    /// Which call instruction is metered.
    pub scheme: CallScheme,
}

impl LegacyCallGas {
    /// Legacy gas of `CALL`.
    pub const CALL: Self = Self::new(CallScheme::Call);
    /// Legacy gas of `CALLCODE`.
    pub const CALL_CODE: Self = Self::new(CallScheme::CallCode);
    /// Legacy gas of `DELEGATECALL`.
    pub const DELEGATE_CALL: Self = Self::new(CallScheme::DelegateCall);
    /// Legacy gas of `STATICCALL`.
    pub const STATIC_CALL: Self = Self::new(CallScheme::StaticCall);

    /// Creates the calculator for `scheme`.
    #[inline]
    pub const fn new(scheme: CallScheme) -> Self {
        Self { scheme }
    }
}

impl<H: Host + ?Sized> GasCalculator<H> for LegacyCallGas {
    fn base_gas(
        &self,
        context: &mut WitnessContext<'_, H>,
        _contract: Address,
        stack: &Stack,
    ) -> Result<u64, InstructionResult> {
        // stack: gas, address, [value], ...
        let target = stack.peek(1)?.into_address();
        let transfers_value = self.scheme.has_value() && !stack.peek(2)?.is_zero();

        // only CALL with value can create the callee
        let is_empty = if transfers_value && self.scheme == CallScheme::Call {
            context
                .host
                .is_empty_account(target)
                .ok_or(InstructionResult::FatalExternalError)?
        } else {
            false
        };

        Ok(call_cost(transfers_value, is_empty))
    }
}

/// Decorates a legacy call calculator with the witness touches of the callee.
///
/// The wrapped calculator runs first. If it fails nothing is touched and its
/// status is passed on. Otherwise the callee's code size and then its code
/// hash are read from the witness, in that order, and both charges are added
/// to the legacy gas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WithCodeTouches<C> {
    legacy: C,
}

impl<C> WithCodeTouches<C> {
    /// Wraps `legacy`.
    #[inline]
    pub const fn new(legacy: C) -> Self {
        Self { legacy }
    }

    /// Computes the legacy gas plus the callee's code size and code hash touches.
    pub fn gas<H: Host + ?Sized>(
        &self,
        context: &mut WitnessContext<'_, H>,
        contract: Address,
        stack: &Stack,
    ) -> Result<u64, WitnessGasError>
    where
        C: GasCalculator<H>,
    {
        let gas = self
            .legacy
            .base_gas(context, contract, stack)
            .map_err(WitnessGasError::LegacyCalculator)?;

        let callee = peek_address(stack, 1)?;
        let code_size = context.witness.touch_code_size(callee, AccessKind::Read);
        let code_hash = context.witness.touch_code_hash(callee, AccessKind::Read);
        Ok(gas.saturating_add(code_size).saturating_add(code_hash))
    }
}

/// Gas of the `CALL` instruction.
pub fn call<H: Host + ?Sized>(
    context: &mut WitnessContext<'_, H>,
    contract: Address,
    stack: &Stack,
) -> Result<u64, WitnessGasError> {
    WithCodeTouches::new(LegacyCallGas::CALL).gas(context, contract, stack)
}

/// Gas of the `CALLCODE` instruction.
pub fn call_code<H: Host + ?Sized>(
    context: &mut WitnessContext<'_, H>,
    contract: Address,
    stack: &Stack,
) -> Result<u64, WitnessGasError> {
    WithCodeTouches::new(LegacyCallGas::CALL_CODE).gas(context, contract, stack)
}

/// Gas of the `DELEGATECALL` instruction.
pub fn delegate_call<H: Host + ?Sized>(
    context: &mut WitnessContext<'_, H>,
    contract: Address,
    stack: &Stack,
) -> Result<u64, WitnessGasError> {
    WithCodeTouches::new(LegacyCallGas::DELEGATE_CALL).gas(context, contract, stack)
}

/// Gas of the `STATICCALL` instruction.
pub fn static_call<H: Host + ?Sized>(
    context: &mut WitnessContext<'_, H>,
    contract: Address,
    stack: &Stack,
) -> Result<u64, WitnessGasError> {
    WithCodeTouches::new(LegacyCallGas::STATIC_CALL).gas(context, contract, stack)
}
