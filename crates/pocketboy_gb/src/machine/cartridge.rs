use anyhow::{bail, Result};

/// First byte past the cartridge header (0x0100-0x014F).
pub const HEADER_END: usize = 0x0150;

const TITLE_START: usize = 0x0134;
const TITLE_END: usize = 0x0144;
const CART_TYPE: usize = 0x0147;
const ROM_SIZE: usize = 0x0148;
const HEADER_CHECKSUM: usize = 0x014D;

/// Fields of the cartridge header the flat machine cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub title: String,
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub header_checksum: u8,
    /// The stored checksum matches the one computed over 0x0134-0x014C.
    pub checksum_valid: bool,
}

impl CartridgeHeader {
    /// Parse the header out of a raw ROM image.
    ///
    /// Fails when the image is too short to contain a header at all.
    pub fn parse(rom: &[u8]) -> Result<Self> {
        if rom.len() < HEADER_END {
            bail!(
                "ROM image is {} bytes, too short for a cartridge header (need at least {} bytes)",
                rom.len(),
                HEADER_END
            );
        }

        let title = rom[TITLE_START..TITLE_END]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '?'
                }
            })
            .collect::<String>()
            .trim_end()
            .to_string();

        let header_checksum = rom[HEADER_CHECKSUM];
        Ok(Self {
            title,
            cartridge_type: rom[CART_TYPE],
            rom_size_code: rom[ROM_SIZE],
            header_checksum,
            checksum_valid: compute_header_checksum(rom) == header_checksum,
        })
    }

    /// ROM-only cartridges (optionally with plain RAM) need no mapper.
    pub fn is_rom_only(&self) -> bool {
        matches!(self.cartridge_type, 0x00 | 0x08 | 0x09)
    }

    /// Declared ROM size in bytes: 32 KiB << code.
    pub fn rom_size_bytes(&self) -> Option<usize> {
        (self.rom_size_code <= 0x08).then(|| (32 * 1024) << self.rom_size_code)
    }
}

/// `x = x - rom[i] - 1` over 0x0134..=0x014C.
fn compute_header_checksum(rom: &[u8]) -> u8 {
    rom[TITLE_START..HEADER_CHECKSUM]
        .iter()
        .fold(0u8, |x, &b| x.wrapping_sub(b).wrapping_sub(1))
}
