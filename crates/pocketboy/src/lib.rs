//! Headless runner around the CPU core: loads a boot image into flat
//! memory and steps the engine until it latches halt/stop, hits an
//! undefined opcode, or runs out of its step budget.

use anyhow::Result;
use pocketboy_cpu::{Cpu, Flag};

pub mod memory;

pub use memory::FlatMemory;

/// Load `image` at address 0 and step the CPU.
///
/// The core itself never acts on the halt/stop latches; stopping on them
/// is this runner's policy. Returns the number of instructions executed.
pub fn run(image: &[u8], max_steps: u64) -> Result<u64> {
    let mut memory = FlatMemory::default();
    memory.load(0x0000, image);

    let mut cpu = Cpu::new(memory);
    let mut executed = 0u64;

    while executed < max_steps {
        if cpu.halted() {
            log::info!("CPU halted after {executed} instructions");
            break;
        }
        if cpu.stopped() {
            log::info!("CPU stopped after {executed} instructions");
            break;
        }
        cpu.step()?;
        executed += 1;
    }

    dump_registers(&cpu);
    Ok(executed)
}

/// Textual register dump, printed once a run finishes.
fn dump_registers(cpu: &Cpu<FlatMemory>) {
    let regs = &cpu.regs;
    println!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl()
    );
    println!("SP={:04X} PC={:04X}", regs.sp(), regs.pc());
    println!(
        "Z={} N={} H={} C={}  ime={} halted={} stopped={}",
        u8::from(cpu.get_flag(Flag::Z)),
        u8::from(cpu.get_flag(Flag::N)),
        u8::from(cpu.get_flag(Flag::H)),
        u8::from(cpu.get_flag(Flag::C)),
        u8::from(cpu.interrupts_enabled()),
        u8::from(cpu.halted()),
        u8::from(cpu.stopped()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_stops_on_halt() {
        // LD A,0x42; HALT
        let executed = run(&[0x3E, 0x42, 0x76], 100).unwrap();
        assert_eq!(executed, 2);
    }

    #[test]
    fn run_respects_the_step_budget() {
        // JR -2 loops forever; the budget has to cut it off.
        let executed = run(&[0x18, 0xFE], 10).unwrap();
        assert_eq!(executed, 10);
    }

    #[test]
    fn run_surfaces_decode_errors() {
        let err = run(&[0xD3], 100).unwrap_err();
        assert!(err.to_string().contains("undefined opcode"));
    }
}
