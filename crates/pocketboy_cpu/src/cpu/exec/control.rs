use crate::cpu::{Bus, Cpu, Flag};

impl<B: Bus> Cpu<B> {
    #[inline]
    fn cc_condition(&self, cc: u8) -> bool {
        match cc {
            0 => !self.get_flag(Flag::Z), // NZ
            1 => self.get_flag(Flag::Z),  // Z
            2 => !self.get_flag(Flag::C), // NC
            3 => self.get_flag(Flag::C),  // C
            _ => false,
        }
    }

    pub(crate) fn exec_jr(&mut self, _opcode: u8) {
        self.jr(true);
    }

    pub(crate) fn exec_jr_cc(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cc = (opcode >> 3) & 0x03;
        self.jr(self.cc_condition(cc));
    }

    pub(crate) fn exec_jp_a16(&mut self, _opcode: u8) {
        let addr = self.fetch16();
        self.regs.set_pc(addr);
    }

    pub(crate) fn exec_jp_cc(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let cc = (opcode >> 3) & 0x03;
        self.jp_cond(self.cc_condition(cc));
    }

    pub(crate) fn exec_jp_hl(&mut self, _opcode: u8) {
        let addr = self.regs.hl();
        self.regs.set_pc(addr);
    }

    pub(crate) fn exec_call_cc(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cc = (opcode >> 3) & 0x03;
        self.call_cond(self.cc_condition(cc));
    }

    pub(crate) fn exec_ret_cc(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cc = (opcode >> 3) & 0x03;
        self.ret_cond(self.cc_condition(cc));
    }
}
