use crate::cpu::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    pub(crate) fn exec_nop(&mut self, _opcode: u8) {}

    /// HALT only sets the latch. Waking the core back up is the caller's
    /// responsibility, since interrupt delivery lives outside this crate.
    pub(crate) fn exec_halt(&mut self, _opcode: u8) {
        self.halted = true;
    }

    /// STOP only sets the latch, like HALT but for the deeper low-power
    /// state.
    pub(crate) fn exec_stop(&mut self, _opcode: u8) {
        self.stopped = true;
    }

    pub(crate) fn exec_di(&mut self, _opcode: u8) {
        self.ime = false;
    }

    /// EI. Real hardware enables interrupts one instruction late; this
    /// core applies the latch immediately.
    pub(crate) fn exec_ei(&mut self, _opcode: u8) {
        self.ime = true;
    }
}
