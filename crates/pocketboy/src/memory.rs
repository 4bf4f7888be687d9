use pocketboy_cpu::Bus;

/// Flat 64 KiB byte-addressable memory.
///
/// Every address is backed by exactly one byte; there is no banking,
/// mirroring, or IO decoding. This is the whole bus a bare CPU core
/// needs.
pub struct FlatMemory {
    bytes: [u8; Self::SIZE],
}

impl FlatMemory {
    pub const SIZE: usize = 0x10000;

    /// Copy `image` into memory starting at `offset`.
    ///
    /// An image reaching past the top of the address space is truncated.
    pub fn load(&mut self, offset: u16, image: &[u8]) {
        let start = offset as usize;
        let len = image.len().min(Self::SIZE - start);
        if len < image.len() {
            log::warn!(
                "image of {} bytes truncated to {} at offset {offset:#06x}",
                image.len(),
                len
            );
        }
        self.bytes[start..start + len].copy_from_slice(&image[..len]);
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self {
            bytes: [0; Self::SIZE],
        }
    }
}

impl Bus for FlatMemory {
    fn read(&mut self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_places_the_image_at_the_offset() {
        let mut memory = FlatMemory::default();
        memory.load(0x0100, &[0xAA, 0xBB]);
        assert_eq!(memory.read(0x00FF), 0x00);
        assert_eq!(memory.read(0x0100), 0xAA);
        assert_eq!(memory.read(0x0101), 0xBB);
    }

    #[test]
    fn load_truncates_at_the_top_of_memory() {
        let mut memory = FlatMemory::default();
        memory.load(0xFFFF, &[0x11, 0x22]);
        assert_eq!(memory.read(0xFFFF), 0x11);
        assert_eq!(memory.read(0x0000), 0x00);
    }

    #[test]
    fn writes_read_back() {
        let mut memory = FlatMemory::default();
        memory.write(0x8000, 0x5A);
        assert_eq!(memory.read(0x8000), 0x5A);
    }
}
