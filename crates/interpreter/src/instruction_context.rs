use crate::Gas;
use witness::AccessWitness;

/// Context passed to the opcode gas adapters.
///
/// The witness is borrowed from whoever owns the transaction, so every call
/// frame of the transaction meters against the same record.
pub struct WitnessContext<'a, H: ?Sized> {
    /// Access witness of the running transaction.
    pub witness: &'a mut AccessWitness,
    /// Host interface for account state the legacy calculators need.
    pub host: &'a mut H,
    /// Gas of the current call frame.
    pub gas: &'a mut Gas,
}

impl<H: ?Sized> core::fmt::Debug for WitnessContext<'_, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WitnessContext")
            .field("witness", &self.witness)
            .field("host", &"<host>")
            .field("gas", &self.gas)
            .finish()
    }
}

impl<'a, H: ?Sized> WitnessContext<'a, H> {
    /// Create a new witness context.
    #[inline]
    pub fn new(witness: &'a mut AccessWitness, host: &'a mut H, gas: &'a mut Gas) -> Self {
        Self {
            witness,
            host,
            gas,
        }
    }

    /// Reborrows the context with a nested call frame's gas.
    ///
    /// The nested frame shares the transaction's witness, so its touches stay
    /// recorded even if the frame reverts.
    #[inline]
    pub fn with_gas<'b>(&'b mut self, gas: &'b mut Gas) -> WitnessContext<'b, H> {
        WitnessContext {
            witness: self.witness,
            host: self.host,
            gas,
        }
    }
}
