use super::{table, Bus, Cpu, Registers};

impl<B: Bus> Cpu<B> {
    /// Create a CPU core around the injected bus.
    ///
    /// Both dispatch tables are built and validated here; the register
    /// file starts in the power-on state (PC = 0, SP = 0, everything else
    /// zero, latches false).
    pub fn new(bus: B) -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            primary: table::build_primary(),
            extended: table::build_extended(),
            bus,
        }
    }

    /// Reset the CPU to its power-on state.
    ///
    /// Registers, flags, and latches are cleared; the dispatch tables and
    /// the bus are untouched.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.halted = false;
        self.stopped = false;
    }

    /// Whether the HALT latch is set.
    #[inline]
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Whether the STOP latch is set.
    #[inline]
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Whether the interrupt-enable latch (IME) is set.
    #[inline]
    pub fn interrupts_enabled(&self) -> bool {
        self.ime
    }

    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Tear down the engine and hand the bus back.
    pub fn into_bus(self) -> B {
        self.bus
    }
}
