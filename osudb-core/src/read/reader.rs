use crate::error::{OsuDbError, Result};
use crate::util::ticks::Timestamp;
use crate::util::varint::UvarintAccumulator;
use std::io::{self, Read};

/// Presence byte for an absent string.
pub const STRING_ABSENT: u8 = 0x00;
/// Presence byte for a string followed by a varuint length and UTF-8 bytes.
pub const STRING_PRESENT: u8 = 0x0b;

// Upper bound, in bytes, on up-front allocation for a length read from the stream.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// Capacity to reserve for `count` elements of `T` without exceeding
/// `PREALLOC_LIMIT` bytes.
fn prealloc_items<T>(count: usize) -> usize {
    count.min(PREALLOC_LIMIT / size_of::<T>().max(1))
}

/// Forward-only little-endian reader over any byte source.
///
/// Tracks the absolute offset of the next byte so errors can point at the
/// field that failed. It never seeks.
pub struct DbReader<R> {
    inner: R,
    pos: u64,
}

impl<R: Read> DbReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> u64 {
        self.pos
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => {
                self.pos += N as u64;
                Ok(buf)
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(OsuDbError::TruncatedInput {
                    offset: self.pos,
                    need: N,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.fill::<1>()?;
        Ok(b)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.fill()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.fill()?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.fill()?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.fill()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.fill()?))
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let offset = self.pos;
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        let got = (&mut self.inner).take(len as u64).read_to_end(&mut buf)?;
        self.pos += got as u64;
        if got < len {
            return Err(OsuDbError::TruncatedInput {
                offset,
                need: len - got,
            });
        }
        Ok(buf)
    }

    pub fn read_uvarint(&mut self) -> Result<u64> {
        let offset = self.pos;
        let mut acc = UvarintAccumulator::new();
        loop {
            let byte = match self.read_u8() {
                Ok(b) => b,
                Err(OsuDbError::TruncatedInput { .. }) => {
                    return Err(OsuDbError::MalformedVarint { offset });
                }
                Err(e) => return Err(e),
            };
            match acc.push(byte) {
                Ok(Some(v)) => return Ok(v),
                Ok(None) => {}
                Err(_) => return Err(OsuDbError::MalformedVarint { offset }),
            }
        }
    }

    /// Read an optional string: a presence byte, then (if present) a varuint
    /// byte length and UTF-8 content.
    pub fn read_string(&mut self) -> Result<Option<String>> {
        let offset = self.pos;
        match self.read_u8()? {
            STRING_ABSENT => Ok(None),
            STRING_PRESENT => {
                let len_off = self.pos;
                let len = self.read_uvarint()?;
                let len = usize::try_from(len)
                    .map_err(|_| OsuDbError::MalformedVarint { offset: len_off })?;
                let text_off = self.pos;
                let bytes = self.read_bytes(len)?;
                String::from_utf8(bytes)
                    .map(Some)
                    .map_err(|source| OsuDbError::InvalidEncoding {
                        offset: text_off,
                        source,
                    })
            }
            marker => Err(OsuDbError::MalformedString { offset, marker }),
        }
    }

    pub fn read_timestamp(&mut self) -> Result<Timestamp> {
        Ok(Timestamp(self.read_u64()?))
    }

    /// Read a u32 element count, then exactly that many elements.
    pub fn read_counted<T>(
        &mut self,
        mut read_one: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let count = self.read_u32()? as usize;
        let mut out = Vec::with_capacity(prealloc_items::<T>(count));
        for _ in 0..count {
            out.push(read_one(self)?);
        }
        Ok(out)
    }
}
