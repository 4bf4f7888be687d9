/// Abstraction over the memory bus the CPU executes against.
///
/// The core never constructs a bus; one is injected at engine
/// construction and every instruction reads and writes through it. Both
/// methods are total over the 16-bit address space — there is no error
/// return, and any banking or IO decoding happens on the implementor's
/// side.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);
}
