//! Handlers for the extended (0xCB-prefixed) opcode space.
//!
//! The second opcode byte splits into a quadrant (shift/rotate, BIT, RES,
//! SET), a bit index or shift kind in bits 3-5, and a register/(HL)
//! target in bits 0-2.

use super::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    pub(crate) fn exec_cb_shift(&mut self, opcode: u8) {
        debug_assert!(opcode < 0x40);

        let kind = opcode >> 3;
        let target = opcode & 0x07;
        let value = self.read_reg8(target);
        let result = match kind {
            0 => self.alu_rlc(value),
            1 => self.alu_rrc(value),
            2 => self.alu_rl(value),
            3 => self.alu_rr(value),
            4 => self.alu_sla(value),
            5 => self.alu_sra(value),
            6 => self.alu_swap(value),
            7 => self.alu_srl(value),
            _ => unreachable!(),
        };
        self.write_reg8(target, result);
    }

    pub(crate) fn exec_cb_bit(&mut self, opcode: u8) {
        debug_assert!((0x40..=0x7F).contains(&opcode));

        let bit = (opcode >> 3) & 0x07;
        let target = opcode & 0x07;
        let value = self.read_reg8(target);
        self.alu_bit(bit, value);
    }

    pub(crate) fn exec_cb_res(&mut self, opcode: u8) {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let bit = (opcode >> 3) & 0x07;
        let target = opcode & 0x07;
        let value = self.read_reg8(target) & !(1 << bit);
        self.write_reg8(target, value);
    }

    pub(crate) fn exec_cb_set(&mut self, opcode: u8) {
        debug_assert!(opcode >= 0xC0);

        let bit = (opcode >> 3) & 0x07;
        let target = opcode & 0x07;
        let value = self.read_reg8(target) | (1 << bit);
        self.write_reg8(target, value);
    }
}
