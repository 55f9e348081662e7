//! Base-128 unsigned varints (LEB128): low-order group first, high bit set on
//! every byte except the last.

/// Longest encoding of a `u64`.
pub const MAX_UVARINT_LEN: usize = 10;

/// Incremental decoder fed one byte at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct UvarintAccumulator {
    value: u64,
    shift: u32,
}

/// The value does not fit in 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

impl UvarintAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next byte. Returns the decoded value once a byte without the
    /// continuation bit arrives.
    pub fn push(&mut self, byte: u8) -> Result<Option<u64>, Overflow> {
        let low = u64::from(byte & 0x7f);
        if self.shift >= 64 || (self.shift == 63 && low > 1) {
            return Err(Overflow);
        }
        self.value |= low << self.shift;
        if byte & 0x80 == 0 {
            return Ok(Some(self.value));
        }
        self.shift += 7;
        Ok(None)
    }
}

/// Encoder counterpart of [`UvarintAccumulator`], used to build fixtures and
/// check that decoded values re-encode to the same bytes.
pub fn put_uvarint(out: &mut Vec<u8>, mut x: u64) {
    while x >= 0x80 {
        out.push((x as u8) | 0x80);
        x >>= 7;
    }
    out.push(x as u8);
}

/// Encoded width of `x` in bytes.
pub fn uvarint_len(mut x: u64) -> usize {
    let mut n = 1;
    while x >= 0x80 {
        x >>= 7;
        n += 1;
    }
    n
}
