use crate::error::{OsuDbError, Result};
use crate::read::reader::DbReader;
use serde::Serialize;
use std::io::Read;

/// Marker byte preceding the 32-bit integer half of a pair.
pub const INT_TAG: u8 = 0x08;
/// Marker byte preceding the 64-bit double half of a pair.
pub const DOUBLE_TAG: u8 = 0x0d;

/// Star rating computed for one combination of mods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarRating {
    /// Mod combination bitmask.
    pub mods: u32,
    pub rating: f64,
}

fn expect_tag<R: Read>(r: &mut DbReader<R>, expected: u8) -> Result<()> {
    let offset = r.position();
    let found = r.read_u8()?;
    if found != expected {
        return Err(OsuDbError::UnexpectedTag {
            offset,
            expected,
            found,
        });
    }
    Ok(())
}

impl StarRating {
    /// Layout: `0x08`, u32 mods, `0x0d`, f64 rating.
    pub fn read_from<R: Read>(r: &mut DbReader<R>) -> Result<Self> {
        expect_tag(r, INT_TAG)?;
        let mods = r.read_u32()?;
        expect_tag(r, DOUBLE_TAG)?;
        let rating = r.read_f64()?;
        Ok(Self { mods, rating })
    }
}

/// u32 count followed by that many pairs, in stored order.
pub fn read_star_ratings<R: Read>(r: &mut DbReader<R>) -> Result<Vec<StarRating>> {
    r.read_counted(StarRating::read_from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_bytes(mods: u32, rating: f64) -> Vec<u8> {
        let mut out = vec![INT_TAG];
        out.extend_from_slice(&mods.to_le_bytes());
        out.push(DOUBLE_TAG);
        out.extend_from_slice(&rating.to_le_bytes());
        out
    }

    #[test]
    fn reads_pair() {
        let bytes = pair_bytes(64, 5.25);
        let mut r = DbReader::new(&bytes[..]);
        let sr = StarRating::read_from(&mut r).unwrap();
        assert_eq!(sr, StarRating { mods: 64, rating: 5.25 });
        assert_eq!(r.position(), 14);
    }

    #[test]
    fn list_keeps_order_and_duplicates() {
        let mut bytes = 3u32.to_le_bytes().to_vec();
        bytes.extend(pair_bytes(0, 4.0));
        bytes.extend(pair_bytes(16, 4.5));
        bytes.extend(pair_bytes(0, 4.0));
        let list = read_star_ratings(&mut DbReader::new(&bytes[..])).unwrap();
        let mods: Vec<u32> = list.iter().map(|s| s.mods).collect();
        assert_eq!(mods, vec![0, 16, 0]);
    }

    #[test]
    fn empty_list() {
        let bytes = 0u32.to_le_bytes();
        assert!(read_star_ratings(&mut DbReader::new(&bytes[..])).unwrap().is_empty());
    }

    #[test]
    fn wrong_int_tag_stops_at_the_tag() {
        let mut bytes = pair_bytes(64, 5.25);
        bytes[0] = 0x09;
        let mut r = DbReader::new(&bytes[..]);
        match StarRating::read_from(&mut r) {
            Err(OsuDbError::UnexpectedTag {
                offset,
                expected,
                found,
            }) => {
                assert_eq!(offset, 0);
                assert_eq!(expected, INT_TAG);
                assert_eq!(found, 0x09);
            }
            other => panic!("expected UnexpectedTag, got {other:?}"),
        }
        assert_eq!(r.position(), 1);
    }

    #[test]
    fn wrong_double_tag() {
        let mut bytes = pair_bytes(1, 1.0);
        bytes[5] = 0x08;
        assert!(matches!(
            StarRating::read_from(&mut DbReader::new(&bytes[..])),
            Err(OsuDbError::UnexpectedTag {
                offset: 5,
                expected: DOUBLE_TAG,
                found: 0x08
            })
        ));
    }
}
