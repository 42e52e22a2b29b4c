//! Opcode to gas adapter dispatch of the stateless schedule.

use crate::{instructions, opcode, GasCfg, Host, Stack, WitnessContext, WitnessGasError};
use primitives::Address;
use tracing::debug;

/// Opcode gas adapter signature.
pub type WitnessGasFn<H> =
    fn(&mut WitnessContext<'_, H>, Address, &Stack) -> Result<u64, WitnessGasError>;

/// Who deducts an adapter's result from the frame gas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Charge {
    /// The result is deducted by [`WitnessGasTable::meter`].
    Deferred,
    /// The adapter already deducted it.
    Inline,
}

/// Table of the 256 opcodes, holding an adapter for those the stateless
/// schedule meters.
pub struct WitnessGasTable<H: ?Sized> {
    table: [Option<(WitnessGasFn<H>, Charge)>; 256],
}

impl<H: ?Sized> core::fmt::Debug for WitnessGasTable<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WitnessGasTable")
            .field("metered", &self.table.iter().filter(|e| e.is_some()).count())
            .finish()
    }
}

impl<H: Host + ?Sized> WitnessGasTable<H> {
    /// Builds the table for `cfg`.
    ///
    /// Returns `None` when the stateless schedule is not active; callers then
    /// keep the legacy access-list gas rules.
    pub fn new(cfg: &GasCfg) -> Option<Self> {
        if !cfg.is_stateless() {
            return None;
        }
        Some(Self::stateless())
    }

    /// Builds the table of the stateless schedule unconditionally.
    pub fn stateless() -> Self {
        let mut table: [Option<(WitnessGasFn<H>, Charge)>; 256] = [None; 256];
        table[opcode::SLOAD as usize] = Some((instructions::sload, Charge::Deferred));
        table[opcode::SSTORE as usize] = Some((instructions::sstore, Charge::Deferred));
        table[opcode::BALANCE as usize] = Some((instructions::balance, Charge::Deferred));
        table[opcode::EXTCODESIZE as usize] = Some((instructions::extcodesize, Charge::Deferred));
        table[opcode::EXTCODEHASH as usize] = Some((instructions::extcodehash, Charge::Deferred));
        table[opcode::CALL as usize] = Some((instructions::call, Charge::Deferred));
        table[opcode::CALLCODE as usize] = Some((instructions::call_code, Charge::Deferred));
        table[opcode::DELEGATECALL as usize] = Some((instructions::delegate_call, Charge::Deferred));
        table[opcode::STATICCALL as usize] = Some((instructions::static_call, Charge::Deferred));
        table[opcode::SELFDESTRUCT as usize] = Some((instructions::selfdestruct, Charge::Inline));
        Self { table }
    }

    /// Returns the adapter of `opcode`, if the stateless schedule meters it.
    #[inline]
    pub fn get(&self, opcode: u8) -> Option<(WitnessGasFn<H>, Charge)> {
        self.table[opcode as usize]
    }

    /// Returns `true` if `opcode` has an adapter.
    #[inline]
    pub fn is_metered(&self, opcode: u8) -> bool {
        self.table[opcode as usize].is_some()
    }

    /// Replaces the adapter of `opcode`.
    #[inline]
    pub fn insert(&mut self, opcode: u8, gas_fn: WitnessGasFn<H>, charge: Charge) {
        self.table[opcode as usize] = Some((gas_fn, charge));
    }

    /// Meters `opcode` before it executes.
    ///
    /// Runs the opcode's adapter and deducts its result from the frame gas.
    /// Returns the gas charged for the opcode, `0` for opcodes this schedule
    /// does not meter. On failure the opcode must not execute.
    pub fn meter(
        &self,
        context: &mut WitnessContext<'_, H>,
        opcode: u8,
        contract: Address,
        stack: &Stack,
    ) -> Result<u64, WitnessGasError> {
        let Some((gas_fn, charge)) = self.get(opcode) else {
            return Ok(0);
        };

        let gas = gas_fn(context, contract, stack)?;
        if charge == Charge::Deferred && !context.gas.record_cost(gas) {
            debug!(
                target: "witness",
                opcode = opcode::name(opcode),
                %contract,
                gas,
                remaining = context.gas.remaining(),
                "out of gas"
            );
            return Err(WitnessGasError::OutOfGas);
        }
        Ok(gas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{instructions::utility::IntoU256, DummyHost, Gas};
    use primitives::{address, hardfork::SpecId, U256};
    use witness::AccessWitness;

    const CONTRACT: Address = address!("0x000000000000000000000000000000000000c0de");

    #[test]
    fn disabled_before_verkle() {
        assert!(WitnessGasTable::<DummyHost>::new(&GasCfg::new(SpecId::PRAGUE)).is_none());
        let table = WitnessGasTable::<DummyHost>::new(&GasCfg::new(SpecId::VERKLE)).unwrap();
        for op in [
            opcode::SLOAD,
            opcode::SSTORE,
            opcode::BALANCE,
            opcode::EXTCODESIZE,
            opcode::EXTCODEHASH,
            opcode::CALL,
            opcode::CALLCODE,
            opcode::DELEGATECALL,
            opcode::STATICCALL,
            opcode::SELFDESTRUCT,
        ] {
            assert!(table.is_metered(op), "{:?}", opcode::name(op));
        }
        assert!(!table.is_metered(0x01));
        assert_eq!(table.get(opcode::SELFDESTRUCT).unwrap().1, Charge::Inline);
    }

    #[test]
    fn meter_deducts_once() {
        let table = WitnessGasTable::<DummyHost>::stateless();
        let mut witness = AccessWitness::new();
        let mut host = DummyHost::new();
        let mut gas = Gas::new(1_000_000);
        let costs = *witness.costs();
        let beneficiary = address!("0x0000000000000000000000000000000000000bee");
        let mut context = WitnessContext::new(&mut witness, &mut host, &mut gas);

        let stack: Stack = [U256::from(3)].into_iter().collect();
        assert_eq!(
            table.meter(&mut context, opcode::SLOAD, CONTRACT, &stack),
            Ok(costs.cold_read())
        );
        assert_eq!(context.gas.spent(), costs.cold_read());

        let stack: Stack = [beneficiary.into_u256()].into_iter().collect();
        assert_eq!(
            table.meter(&mut context, opcode::SELFDESTRUCT, CONTRACT, &stack),
            Ok(costs.cold_write())
        );
        assert_eq!(context.gas.spent(), costs.cold_read() + costs.cold_write());

        assert_eq!(table.meter(&mut context, 0x01, CONTRACT, &stack), Ok(0));
    }

    #[test]
    fn meter_out_of_gas_keeps_touch() {
        let table = WitnessGasTable::<DummyHost>::stateless();
        let mut witness = AccessWitness::new();
        let mut host = DummyHost::new();
        let mut gas = Gas::new(10);
        let mut context = WitnessContext::new(&mut witness, &mut host, &mut gas);

        let stack: Stack = [U256::from(3)].into_iter().collect();
        assert_eq!(
            table.meter(&mut context, opcode::SSTORE, CONTRACT, &stack),
            Err(WitnessGasError::OutOfGas)
        );
        assert_eq!(context.gas.remaining(), 10);
        assert_eq!(witness.len(), 1);
    }

    #[test]
    fn custom_adapter() {
        fn flat<H: ?Sized>(
            _: &mut WitnessContext<'_, H>,
            _: Address,
            _: &Stack,
        ) -> Result<u64, WitnessGasError> {
            Ok(42)
        }

        let mut table = WitnessGasTable::<DummyHost>::stateless();
        table.insert(0x01, flat, Charge::Deferred);
        let mut witness = AccessWitness::new();
        let mut host = DummyHost::new();
        let mut gas = Gas::new(100);
        let mut context = WitnessContext::new(&mut witness, &mut host, &mut gas);
        assert_eq!(table.meter(&mut context, 0x01, CONTRACT, &Stack::new()), Ok(42));
        assert_eq!(gas.remaining(), 58);
    }
}
