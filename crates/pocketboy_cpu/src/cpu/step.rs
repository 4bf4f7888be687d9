use super::{Bus, Cpu, DecodeError, OpcodeExecuted, EXT_PREFIX};

impl<B: Bus> Cpu<B> {
    /// Execute exactly one instruction.
    ///
    /// Fetches the opcode byte at PC (following the extension prefix to a
    /// second byte when needed), dispatches through the matching table,
    /// and reports which opcode ran. An undefined opcode is returned as a
    /// [`DecodeError`] with PC rewound to the fetch address, leaving the
    /// register file exactly as it was before the call.
    ///
    /// The engine executes whatever PC points at regardless of the halt
    /// and stop latches; whether to keep stepping a halted core is the
    /// caller's policy.
    pub fn step(&mut self) -> Result<OpcodeExecuted, DecodeError> {
        let fetch_pc = self.regs.pc();
        let opcode = self.fetch8();

        if opcode == EXT_PREFIX {
            let ext = self.fetch8();
            let entry = match self.extended.get(ext) {
                Some(entry) => entry,
                None => {
                    self.regs.set_pc(fetch_pc);
                    log::error!(
                        "undefined extended opcode 0xcb {ext:#04x} at PC={fetch_pc:#06x}"
                    );
                    return Err(DecodeError::UndefinedExtended {
                        opcode: ext,
                        pc: fetch_pc,
                    });
                }
            };
            log::trace!("{fetch_pc:#06x}: cb {ext:02x}  {}", entry.mnemonic);
            let exec = entry.exec;
            exec(self, ext);
            Ok(OpcodeExecuted::Extended(ext))
        } else {
            let entry = match self.primary.get(opcode) {
                Some(entry) => entry,
                None => {
                    self.regs.set_pc(fetch_pc);
                    log::error!(
                        "undefined opcode {opcode:#04x} at PC={fetch_pc:#06x} \
                         (SP={sp:#06x} AF={af:#06x} BC={bc:#06x} DE={de:#06x} HL={hl:#06x})",
                        sp = self.regs.sp(),
                        af = self.regs.af(),
                        bc = self.regs.bc(),
                        de = self.regs.de(),
                        hl = self.regs.hl(),
                    );
                    return Err(DecodeError::Undefined {
                        opcode,
                        pc: fetch_pc,
                    });
                }
            };
            log::trace!("{fetch_pc:#06x}: {opcode:02x}     {}", entry.mnemonic);
            let exec = entry.exec;
            exec(self, opcode);
            Ok(OpcodeExecuted::Primary(opcode))
        }
    }

    /// Mnemonic of a defined opcode, for tracing and inspection.
    pub fn mnemonic(&self, opcode: OpcodeExecuted) -> Option<&str> {
        match opcode {
            OpcodeExecuted::Primary(op) => self.primary.get(op).map(|e| e.mnemonic.as_str()),
            OpcodeExecuted::Extended(op) => self.extended.get(op).map(|e| e.mnemonic.as_str()),
        }
    }

    /// Immediate-operand byte count of a defined opcode.
    pub fn operand_bytes(&self, opcode: OpcodeExecuted) -> Option<u8> {
        match opcode {
            OpcodeExecuted::Primary(op) => self.primary.get(op).map(|e| e.operands),
            OpcodeExecuted::Extended(op) => self.extended.get(op).map(|e| e.operands),
        }
    }
}
