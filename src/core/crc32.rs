//! Table-driven CRC-32 engine parameterized by generator polynomial
//!
//! Uses the bit-reflected table construction, so it covers the common
//! "reflected" CRC-32 family (CRC-32/ISO-HDLC, BZIP-less variants, and
//! whatever undocumented cousins a vendor cooked up).

/// The standard reflected CRC-32 generator polynomial (0x04C11DB7 reflected).
pub const DEFAULT_POLYNOMIAL: u32 = 0xEDB8_8320;

/// A CRC-32 engine for a single generator polynomial.
///
/// Construction builds the full 256-entry lookup table, which is the dominant
/// cost when engines are created in bulk during a parameter sweep. The table
/// is owned by the engine and never mutated after construction.
#[derive(Debug, Clone)]
pub struct Crc32 {
    table: [u32; 256],
}

impl Crc32 {
    /// Build an engine for the given polynomial.
    ///
    /// Pure and total: every `u32` is a valid polynomial.
    pub fn new(polynomial: u32) -> Self {
        let mut table = [0u32; 256];
        for (index, entry) in table.iter_mut().enumerate() {
            let mut value = index as u32;
            for _ in 0..8 {
                if value & 1 != 0 {
                    value = (value >> 1) ^ polynomial;
                } else {
                    value >>= 1;
                }
            }
            *entry = value;
        }
        Self { table }
    }

    /// The 256-entry lookup table derived from the polynomial.
    pub fn table(&self) -> &[u32; 256] {
        &self.table
    }

    /// Compute the checksum of `bytes` under the given initial value and
    /// output-XOR policy.
    ///
    /// Standard reflected-table update: each input byte is XORed into the low
    /// byte of the running value to select a table entry, and the running
    /// value shifts right one byte. When `xorout` is set the final value is
    /// complemented. Empty input returns the (possibly complemented) initial
    /// value unchanged.
    pub fn compute(&self, bytes: &[u8], init: u32, xorout: bool) -> u32 {
        let mut crc = init;
        for &byte in bytes {
            let index = ((crc & 0xFF) as u8 ^ byte) as usize;
            crc = (crc >> 8) ^ self.table[index];
        }
        if xorout {
            crc = !crc;
        }
        crc
    }

    /// Test whether `bytes` reproduces `check` under the given parameters,
    /// accepting either the computed checksum or its byte-order-reversed form.
    ///
    /// The byte-swapped comparison stands in for flipping the "reflect
    /// output" bit without a second table pass. It is knowingly imprecise: a
    /// byte reversal of a reflected output is not the same parameterization
    /// as a non-reflected output, so a reversed hit identifies a candidate
    /// family rather than one exact algorithm. Kept as-is for output
    /// compatibility with existing result files.
    pub fn matches(&self, check: u32, bytes: &[u8], init: u32, xorout: bool) -> bool {
        let hash = self.compute(bytes, init, xorout);
        hash == check || hash.swap_bytes() == check
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new(DEFAULT_POLYNOMIAL)
    }
}
