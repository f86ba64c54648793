/// Abstraction over the Game Boy address space (memory and IO).
///
/// The core assumes a flat 16-bit space with no access faults. Interrupt
/// enable/pending and the timer registers live in this space, so the CPU
/// reaches them through the same two calls as any other byte.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Peripheral-side store.
    ///
    /// The timer uses this to publish DIV/TIMA and raise IF bits. Buses that
    /// give CPU writes side effects (such as DIV reset on write) override
    /// this to store the raw byte instead; the default forwards to `write8`.
    fn store(&mut self, addr: u16, value: u8) {
        self.write8(addr, value)
    }
}

/// Read bit `bit` (0–7) of `byte`.
#[inline]
pub fn get_bit(byte: u8, bit: u8) -> bool {
    (byte >> (bit & 0x07)) & 1 != 0
}

#[inline]
pub fn set_bit(byte: u8, bit: u8) -> u8 {
    byte | (1 << (bit & 0x07))
}

#[inline]
pub fn clear_bit(byte: u8, bit: u8) -> u8 {
    byte & !(1 << (bit & 0x07))
}

#[inline]
pub fn toggle_bit(byte: u8, bit: u8) -> u8 {
    byte ^ (1 << (bit & 0x07))
}

/// Compose a 16-bit word from its high and low bytes.
#[inline]
pub fn form_word(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}
