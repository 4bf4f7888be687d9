//! Opcode dispatch tables.
//!
//! Two flat 256-entry tables map opcode bytes to handlers: the primary
//! space, and the extended space reached through [`EXT_PREFIX`]. Each
//! entry also carries the mnemonic and immediate-operand byte count for
//! tracing. Both tables are built once at engine construction; a missing
//! or doubly-registered definition is a construction bug and panics
//! there, never at runtime.

use super::{Bus, Cpu, EXT_PREFIX};

/// Handler for one table entry. The opcode byte that was dispatched is
/// passed back in so that family handlers can decode register and
/// condition fields from it.
pub(crate) type OpHandler<B> = fn(&mut Cpu<B>, u8);

/// One defined opcode.
pub(crate) struct OpcodeEntry<B: Bus> {
    pub(crate) mnemonic: String,
    /// Number of immediate operand bytes following the opcode.
    pub(crate) operands: u8,
    pub(crate) exec: OpHandler<B>,
}

pub(crate) struct OpcodeTable<B: Bus> {
    entries: [Option<OpcodeEntry<B>>; 256],
}

impl<B: Bus> OpcodeTable<B> {
    fn empty() -> Self {
        Self {
            entries: std::array::from_fn(|_| None),
        }
    }

    fn add(&mut self, opcode: u8, mnemonic: &str, operands: u8, exec: OpHandler<B>) {
        let slot = &mut self.entries[opcode as usize];
        assert!(slot.is_none(), "opcode {opcode:#04x} registered twice");
        *slot = Some(OpcodeEntry {
            mnemonic: mnemonic.to_string(),
            operands,
            exec,
        });
    }

    #[inline]
    pub(crate) fn get(&self, opcode: u8) -> Option<&OpcodeEntry<B>> {
        self.entries[opcode as usize].as_ref()
    }

    pub(crate) fn defined(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }
}

/// Primary opcode values with no operation. Fetching one of these is a
/// decode error; on hardware they hard-lock the CPU.
pub(crate) const UNDEFINED_PRIMARY: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

/// Register/(HL) names in opcode-field order (0=B .. 7=A).
const REG8_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];

/// Accumulator-ALU mnemonic prefixes in opcode-field order.
const ALU_NAMES: [&str; 8] = [
    "ADD A,", "ADC A,", "SUB ", "SBC A,", "AND ", "XOR ", "OR ", "CP ",
];

pub(crate) fn build_primary<B: Bus>() -> OpcodeTable<B> {
    let mut t = OpcodeTable::empty();

    t.add(0x00, "NOP", 0, Cpu::exec_nop);

    // 16-bit immediate loads.
    t.add(0x01, "LD BC,d16", 2, Cpu::exec_ld_rr_d16);
    t.add(0x11, "LD DE,d16", 2, Cpu::exec_ld_rr_d16);
    t.add(0x21, "LD HL,d16", 2, Cpu::exec_ld_rr_d16);
    t.add(0x31, "LD SP,d16", 2, Cpu::exec_ld_rr_d16);

    // A to/from register-pair indirect, including the HL+/HL- forms.
    t.add(0x02, "LD (BC),A", 0, Cpu::exec_ld_indirect_a);
    t.add(0x12, "LD (DE),A", 0, Cpu::exec_ld_indirect_a);
    t.add(0x22, "LD (HL+),A", 0, Cpu::exec_ld_indirect_a);
    t.add(0x32, "LD (HL-),A", 0, Cpu::exec_ld_indirect_a);
    t.add(0x0A, "LD A,(BC)", 0, Cpu::exec_ld_a_indirect);
    t.add(0x1A, "LD A,(DE)", 0, Cpu::exec_ld_a_indirect);
    t.add(0x2A, "LD A,(HL+)", 0, Cpu::exec_ld_a_indirect);
    t.add(0x3A, "LD A,(HL-)", 0, Cpu::exec_ld_a_indirect);

    t.add(0x08, "LD (a16),SP", 2, Cpu::exec_ld_a16_sp);

    // 16-bit INC/DEC.
    t.add(0x03, "INC BC", 0, Cpu::exec_inc16_rr);
    t.add(0x13, "INC DE", 0, Cpu::exec_inc16_rr);
    t.add(0x23, "INC HL", 0, Cpu::exec_inc16_rr);
    t.add(0x33, "INC SP", 0, Cpu::exec_inc16_rr);
    t.add(0x0B, "DEC BC", 0, Cpu::exec_dec16_rr);
    t.add(0x1B, "DEC DE", 0, Cpu::exec_dec16_rr);
    t.add(0x2B, "DEC HL", 0, Cpu::exec_dec16_rr);
    t.add(0x3B, "DEC SP", 0, Cpu::exec_dec16_rr);

    // 8-bit INC/DEC and LD r,d8, one per register column.
    for reg in 0..8u8 {
        let name = REG8_NAMES[reg as usize];
        t.add(0x04 | (reg << 3), &format!("INC {name}"), 0, Cpu::exec_inc8_r);
        t.add(0x05 | (reg << 3), &format!("DEC {name}"), 0, Cpu::exec_dec8_r);
        t.add(0x06 | (reg << 3), &format!("LD {name},d8"), 1, Cpu::exec_ld_r_d8);
    }

    // Unprefixed accumulator rotates.
    t.add(0x07, "RLCA", 0, Cpu::exec_rotate_a);
    t.add(0x0F, "RRCA", 0, Cpu::exec_rotate_a);
    t.add(0x17, "RLA", 0, Cpu::exec_rotate_a);
    t.add(0x1F, "RRA", 0, Cpu::exec_rotate_a);

    t.add(0x10, "STOP", 0, Cpu::exec_stop);

    // Relative jumps.
    t.add(0x18, "JR r8", 1, Cpu::exec_jr);
    t.add(0x20, "JR NZ,r8", 1, Cpu::exec_jr_cc);
    t.add(0x28, "JR Z,r8", 1, Cpu::exec_jr_cc);
    t.add(0x30, "JR NC,r8", 1, Cpu::exec_jr_cc);
    t.add(0x38, "JR C,r8", 1, Cpu::exec_jr_cc);

    // 16-bit adds into HL.
    t.add(0x09, "ADD HL,BC", 0, Cpu::exec_add_hl_rr);
    t.add(0x19, "ADD HL,DE", 0, Cpu::exec_add_hl_rr);
    t.add(0x29, "ADD HL,HL", 0, Cpu::exec_add_hl_rr);
    t.add(0x39, "ADD HL,SP", 0, Cpu::exec_add_hl_rr);

    t.add(0x27, "DAA", 0, Cpu::exec_daa);
    t.add(0x2F, "CPL", 0, Cpu::exec_cpl);
    t.add(0x37, "SCF", 0, Cpu::exec_scf);
    t.add(0x3F, "CCF", 0, Cpu::exec_ccf);

    // LD r,r block (0x40-0x7F). 0x76 is HALT, not a load.
    for dst in 0..8u8 {
        for src in 0..8u8 {
            let opcode = 0x40 | (dst << 3) | src;
            if opcode == 0x76 {
                continue;
            }
            let mnemonic = format!(
                "LD {},{}",
                REG8_NAMES[dst as usize], REG8_NAMES[src as usize]
            );
            t.add(opcode, &mnemonic, 0, Cpu::exec_ld_r_r);
        }
    }
    t.add(0x76, "HALT", 0, Cpu::exec_halt);

    // Accumulator ALU block (0x80-0xBF).
    for operation in 0..8u8 {
        for src in 0..8u8 {
            let opcode = 0x80 | (operation << 3) | src;
            let mnemonic = format!(
                "{}{}",
                ALU_NAMES[operation as usize], REG8_NAMES[src as usize]
            );
            t.add(opcode, &mnemonic, 0, Cpu::exec_alu_r);
        }
    }

    // Accumulator ALU with immediate operand.
    t.add(0xC6, "ADD A,d8", 1, Cpu::exec_alu_d8);
    t.add(0xCE, "ADC A,d8", 1, Cpu::exec_alu_d8);
    t.add(0xD6, "SUB d8", 1, Cpu::exec_alu_d8);
    t.add(0xDE, "SBC A,d8", 1, Cpu::exec_alu_d8);
    t.add(0xE6, "AND d8", 1, Cpu::exec_alu_d8);
    t.add(0xEE, "XOR d8", 1, Cpu::exec_alu_d8);
    t.add(0xF6, "OR d8", 1, Cpu::exec_alu_d8);
    t.add(0xFE, "CP d8", 1, Cpu::exec_alu_d8);

    // Returns.
    t.add(0xC0, "RET NZ", 0, Cpu::exec_ret_cc);
    t.add(0xC8, "RET Z", 0, Cpu::exec_ret_cc);
    t.add(0xD0, "RET NC", 0, Cpu::exec_ret_cc);
    t.add(0xD8, "RET C", 0, Cpu::exec_ret_cc);
    t.add(0xC9, "RET", 0, Cpu::exec_ret);
    t.add(0xD9, "RETI", 0, Cpu::exec_reti);

    // Stack push/pop.
    t.add(0xC1, "POP BC", 0, Cpu::exec_pop_rr);
    t.add(0xD1, "POP DE", 0, Cpu::exec_pop_rr);
    t.add(0xE1, "POP HL", 0, Cpu::exec_pop_rr);
    t.add(0xF1, "POP AF", 0, Cpu::exec_pop_rr);
    t.add(0xC5, "PUSH BC", 0, Cpu::exec_push_rr);
    t.add(0xD5, "PUSH DE", 0, Cpu::exec_push_rr);
    t.add(0xE5, "PUSH HL", 0, Cpu::exec_push_rr);
    t.add(0xF5, "PUSH AF", 0, Cpu::exec_push_rr);

    // Absolute jumps.
    t.add(0xC3, "JP a16", 2, Cpu::exec_jp_a16);
    t.add(0xC2, "JP NZ,a16", 2, Cpu::exec_jp_cc);
    t.add(0xCA, "JP Z,a16", 2, Cpu::exec_jp_cc);
    t.add(0xD2, "JP NC,a16", 2, Cpu::exec_jp_cc);
    t.add(0xDA, "JP C,a16", 2, Cpu::exec_jp_cc);
    t.add(0xE9, "JP (HL)", 0, Cpu::exec_jp_hl);

    // Calls.
    t.add(0xCD, "CALL a16", 2, Cpu::exec_call_a16);
    t.add(0xC4, "CALL NZ,a16", 2, Cpu::exec_call_cc);
    t.add(0xCC, "CALL Z,a16", 2, Cpu::exec_call_cc);
    t.add(0xD4, "CALL NC,a16", 2, Cpu::exec_call_cc);
    t.add(0xDC, "CALL C,a16", 2, Cpu::exec_call_cc);

    // Restarts.
    for vector in 0..8u8 {
        let opcode = 0xC7 | (vector << 3);
        t.add(opcode, &format!("RST {:02X}H", vector * 8), 0, Cpu::exec_rst);
    }

    // High-page and absolute accumulator loads.
    t.add(0xE0, "LDH (a8),A", 1, Cpu::exec_ldh_a8);
    t.add(0xF0, "LDH A,(a8)", 1, Cpu::exec_ldh_a8);
    t.add(0xE2, "LD (C),A", 0, Cpu::exec_ldh_c);
    t.add(0xF2, "LD A,(C)", 0, Cpu::exec_ldh_c);
    t.add(0xEA, "LD (a16),A", 2, Cpu::exec_ld_a16_a);
    t.add(0xFA, "LD A,(a16)", 2, Cpu::exec_ld_a16_a);

    // Stack-pointer arithmetic and transfers.
    t.add(0xE8, "ADD SP,r8", 1, Cpu::exec_add_sp_r8);
    t.add(0xF8, "LD HL,SP+r8", 1, Cpu::exec_ld_hl_sp_r8);
    t.add(0xF9, "LD SP,HL", 0, Cpu::exec_ld_sp_hl);

    // Interrupt-enable latch.
    t.add(0xF3, "DI", 0, Cpu::exec_di);
    t.add(0xFB, "EI", 0, Cpu::exec_ei);

    // The prefix byte dispatches into the extended table and must not
    // carry an operation of its own; the holes must stay holes.
    assert!(
        t.get(EXT_PREFIX).is_none(),
        "the extension prefix must not be a primary opcode"
    );
    for opcode in UNDEFINED_PRIMARY {
        assert!(
            t.get(opcode).is_none(),
            "undefined opcode {opcode:#04x} has an entry"
        );
    }
    assert_eq!(t.defined(), 244, "primary opcode table is incomplete");

    t
}

pub(crate) fn build_extended<B: Bus>() -> OpcodeTable<B> {
    let mut t = OpcodeTable::empty();

    const SHIFT_NAMES: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];

    for kind in 0..8u8 {
        for target in 0..8u8 {
            let opcode = (kind << 3) | target;
            let mnemonic = format!(
                "{} {}",
                SHIFT_NAMES[kind as usize], REG8_NAMES[target as usize]
            );
            t.add(opcode, &mnemonic, 0, Cpu::exec_cb_shift);
        }
    }

    for bit in 0..8u8 {
        for target in 0..8u8 {
            let name = REG8_NAMES[target as usize];
            let column = (bit << 3) | target;
            t.add(0x40 | column, &format!("BIT {bit},{name}"), 0, Cpu::exec_cb_bit);
            t.add(0x80 | column, &format!("RES {bit},{name}"), 0, Cpu::exec_cb_res);
            t.add(0xC0 | column, &format!("SET {bit},{name}"), 0, Cpu::exec_cb_set);
        }
    }

    // Every extended opcode is defined.
    assert_eq!(t.defined(), 256, "extended opcode table is incomplete");

    t
}
