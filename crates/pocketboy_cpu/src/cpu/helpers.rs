use super::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    /// Read the byte at PC and advance PC by one.
    #[inline]
    pub(crate) fn fetch8(&mut self) -> u8 {
        let value = self.bus.read(self.regs.pc());
        self.regs.set_pc(self.regs.pc().wrapping_add(1));
        value
    }

    /// Read a little-endian 16-bit immediate at PC and advance PC by two.
    #[inline]
    pub(crate) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8() as u16;
        let hi = self.fetch8() as u16;
        (hi << 8) | lo
    }

    #[inline]
    pub(crate) fn read(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    #[inline]
    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// 16-bit bus read, little-endian: low byte at the lower address.
    #[inline]
    pub(crate) fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.bus.read(addr) as u16;
        let hi = self.bus.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// 16-bit bus write, little-endian: low byte at the lower address.
    #[inline]
    pub(crate) fn write16(&mut self, addr: u16, value: u16) {
        self.bus.write(addr, value as u8);
        self.bus.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    #[inline]
    pub(crate) fn push16(&mut self, value: u16) {
        let lo = value as u8;
        let hi = (value >> 8) as u8;
        // Stack grows downward. We want memory[SP] = low, memory[SP+1] = high.
        self.regs.set_sp(self.regs.sp().wrapping_sub(1));
        self.bus.write(self.regs.sp(), hi);
        self.regs.set_sp(self.regs.sp().wrapping_sub(1));
        self.bus.write(self.regs.sp(), lo);
    }

    #[inline]
    pub(crate) fn pop16(&mut self) -> u16 {
        let value = self.read16(self.regs.sp());
        self.regs.set_sp(self.regs.sp().wrapping_add(2));
        value
    }

    /// Helper to read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(crate) fn read_reg8(&mut self, index: u8) -> u8 {
        match index {
            0 => self.regs.b(),
            1 => self.regs.c(),
            2 => self.regs.d(),
            3 => self.regs.e(),
            4 => self.regs.h(),
            5 => self.regs.l(),
            6 => {
                let addr = self.regs.hl();
                self.bus.read(addr)
            }
            7 => self.regs.a(),
            _ => 0,
        }
    }

    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches `read_reg8`.
    #[inline]
    pub(crate) fn write_reg8(&mut self, index: u8, value: u8) {
        match index {
            0 => self.regs.set_b(value),
            1 => self.regs.set_c(value),
            2 => self.regs.set_d(value),
            3 => self.regs.set_e(value),
            4 => self.regs.set_h(value),
            5 => self.regs.set_l(value),
            6 => {
                let addr = self.regs.hl();
                self.bus.write(addr, value);
            }
            7 => self.regs.set_a(value),
            _ => {}
        }
    }

    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand. The operand is consumed even when the
    /// condition fails, so PC always ends up past the instruction.
    pub(crate) fn jr(&mut self, cond: bool) {
        let offset = self.fetch8() as i8;
        if cond {
            let pc = self.regs.pc().wrapping_add(offset as i16 as u16);
            self.regs.set_pc(pc);
        }
    }

    /// Absolute jump helper used by JP cc,a16.
    pub(crate) fn jp_cond(&mut self, cond: bool) {
        let addr = self.fetch16();
        if cond {
            self.regs.set_pc(addr);
        }
    }

    /// Conditional call helper used by CALL cc,a16.
    ///
    /// The return address pushed is the PC after both operand bytes.
    pub(crate) fn call_cond(&mut self, cond: bool) {
        let addr = self.fetch16();
        if cond {
            let ret = self.regs.pc();
            self.push16(ret);
            self.regs.set_pc(addr);
        }
    }

    /// Conditional return helper used by RET cc.
    pub(crate) fn ret_cond(&mut self, cond: bool) {
        if cond {
            let addr = self.pop16();
            self.regs.set_pc(addr);
        }
    }
}
