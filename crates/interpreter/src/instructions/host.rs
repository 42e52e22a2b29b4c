use super::utility::{peek_address, peek_slot};
use crate::{gas::WARM_STORAGE_READ_COST, Host, Stack, WitnessContext, WitnessGasError};
use primitives::Address;
use tracing::debug;
use witness::AccessKind;

/// Gas of the `SLOAD` instruction.
///
/// Reads the slot at the top of the stack in the contract's storage. A slot
/// already in the witness costs the warm storage read instead of nothing.
pub fn sload<H: Host + ?Sized>(
    context: &mut WitnessContext<'_, H>,
    contract: Address,
    stack: &Stack,
) -> Result<u64, WitnessGasError> {
    let slot = peek_slot(stack, 0)?;
    let gas = context.witness.touch_address_on_read(contract, slot);
    Ok(warm_floor(gas))
}

/// Gas of the `SSTORE` instruction.
///
/// Same as [`sload`] but at write level, so a slot that was only read pays
/// the upgrade to write.
pub fn sstore<H: Host + ?Sized>(
    context: &mut WitnessContext<'_, H>,
    contract: Address,
    stack: &Stack,
) -> Result<u64, WitnessGasError> {
    let slot = peek_slot(stack, 0)?;
    let gas = context.witness.touch_address_on_write(contract, slot);
    Ok(warm_floor(gas))
}

/// Storage access is never free: a zero witness charge becomes a warm read.
#[inline]
const fn warm_floor(gas: u64) -> u64 {
    if gas == 0 {
        WARM_STORAGE_READ_COST
    } else {
        gas
    }
}

/// Gas of the `BALANCE` instruction. A warm balance is free.
pub fn balance<H: Host + ?Sized>(
    context: &mut WitnessContext<'_, H>,
    _contract: Address,
    stack: &Stack,
) -> Result<u64, WitnessGasError> {
    let address = peek_address(stack, 0)?;
    Ok(context.witness.touch_balance(address, AccessKind::Read))
}

/// Gas of the `EXTCODESIZE` instruction.
pub fn extcodesize<H: Host + ?Sized>(
    context: &mut WitnessContext<'_, H>,
    _contract: Address,
    stack: &Stack,
) -> Result<u64, WitnessGasError> {
    let address = peek_address(stack, 0)?;
    Ok(context.witness.touch_code_size(address, AccessKind::Read))
}

/// Gas of the `EXTCODEHASH` instruction.
pub fn extcodehash<H: Host + ?Sized>(
    context: &mut WitnessContext<'_, H>,
    _contract: Address,
    stack: &Stack,
) -> Result<u64, WitnessGasError> {
    let address = peek_address(stack, 0)?;
    Ok(context.witness.touch_code_hash(address, AccessKind::Read))
}

/// Gas of the `SELFDESTRUCT` instruction.
///
/// Writes the beneficiary's balance, except when a contract that predates
/// this transaction names itself as beneficiary: the balance moves out and
/// back in, so the header does not change and nothing is charged.
///
/// Unlike the other adapters the charge is deducted from the frame gas right
/// away. If it does not fit, the frame runs out of gas and the opcode must not
/// execute.
pub fn selfdestruct<H: Host + ?Sized>(
    context: &mut WitnessContext<'_, H>,
    contract: Address,
    stack: &Stack,
) -> Result<u64, WitnessGasError> {
    let beneficiary = peek_address(stack, 0)?;
    if beneficiary == contract && !context.host.created_in_current_tx(contract) {
        debug!(target: "witness", %contract, "selfdestruct to self, beneficiary balance not touched");
        return Ok(0);
    }

    let gas = context.witness.touch_balance(beneficiary, AccessKind::Write);
    if !context.gas.record_cost(gas) {
        debug!(target: "witness", %contract, %beneficiary, gas, "selfdestruct out of gas");
        context.gas.spend_all();
        return Err(WitnessGasError::OutOfGas);
    }
    Ok(gas)
}
