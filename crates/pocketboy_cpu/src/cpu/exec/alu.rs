use crate::cpu::{Bus, Cpu, Flag};

impl<B: Bus> Cpu<B> {
    pub(crate) fn exec_alu_r(&mut self, opcode: u8) {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let operation = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(src);

        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!(),
        }
    }

    pub(crate) fn exec_alu_d8(&mut self, opcode: u8) {
        let value = self.fetch8();

        match opcode {
            0xC6 => self.alu_add(value, false),
            0xCE => self.alu_add(value, true),
            0xD6 => self.alu_sub(value, false),
            0xDE => self.alu_sub(value, true),
            0xE6 => self.alu_and(value),
            0xEE => self.alu_xor(value),
            0xF6 => self.alu_or(value),
            0xFE => self.alu_cp(value),
            _ => unreachable!(),
        }
    }

    pub(crate) fn exec_rotate_a(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a();
        let result = match opcode {
            0x07 => self.alu_rlc(a),
            0x0F => self.alu_rrc(a),
            0x17 => self.alu_rl(a),
            0x1F => self.alu_rr(a),
            _ => unreachable!(),
        };
        self.regs.set_a(result);

        // Unlike the CB-prefixed rotates, the A forms always report Z clear.
        self.set_flag(Flag::Z, false);
    }

    pub(crate) fn exec_add_hl_rr(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = match opcode {
            0x09 => self.regs.bc(),
            0x19 => self.regs.de(),
            0x29 => self.regs.hl(),
            0x39 => self.regs.sp(),
            _ => unreachable!(),
        };
        self.alu_add16_hl(value);
    }

    pub(crate) fn exec_add_sp_r8(&mut self, _opcode: u8) {
        let imm = self.fetch8();
        let result = self.alu_add16_signed(self.regs.sp(), imm);
        self.regs.set_sp(result);
    }

    pub(crate) fn exec_ld_hl_sp_r8(&mut self, _opcode: u8) {
        let imm = self.fetch8();
        let base = self.regs.sp();
        let result = self.alu_add16_signed(base, imm);
        self.regs.set_hl(result);
    }

    pub(crate) fn exec_daa(&mut self, _opcode: u8) {
        self.alu_daa();
    }

    pub(crate) fn exec_cpl(&mut self, _opcode: u8) {
        let a = self.regs.a();
        self.regs.set_a(!a);
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::N, true);
    }

    pub(crate) fn exec_scf(&mut self, _opcode: u8) {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
    }

    pub(crate) fn exec_ccf(&mut self, _opcode: u8) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
    }
}
