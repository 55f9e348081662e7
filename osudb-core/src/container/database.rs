use crate::container::beatmap::BeatmapEntry;
use crate::container::version::FormatVersion;
use crate::error::{OsuDbError, Result};
use crate::read::options::DecodeOptions;
use crate::read::reader::DbReader;
use crate::util::ticks::Timestamp;
use serde::Serialize;
use std::io::Read;

/// Decoded contents of an `osu!.db` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Database {
    pub version: FormatVersion,
    pub folder_count: u32,
    pub account_unlocked: bool,
    /// When a locked account becomes usable again.
    pub unlocked_at: Timestamp,
    pub player_name: Option<String>,
    pub beatmaps: Vec<BeatmapEntry>,
}

impl Database {
    /// Decode a whole database from a forward-only source.
    ///
    /// Reads exactly the bytes the header and the declared beatmap count
    /// describe; anything after them is left unread in `r`.
    pub fn read_from<R: Read>(r: R) -> Result<Self> {
        let mut r = DbReader::new(r);
        Self::decode(&mut r)
    }

    /// Decode from an in-memory file with default options.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_slice_with(bytes, &DecodeOptions::default())
    }

    pub fn from_slice_with(bytes: &[u8], opts: &DecodeOptions) -> Result<Self> {
        let mut r = DbReader::new(bytes);
        let db = Self::decode(&mut r)?;
        let offset = r.position();
        let rest = r.into_inner();
        if !rest.is_empty() {
            if opts.require_exhausted {
                return Err(OsuDbError::CountMismatch {
                    offset,
                    trailing: rest.len(),
                });
            }
            tracing::warn!(offset, trailing = rest.len(), "ignoring trailing bytes");
        }
        Ok(db)
    }

    fn decode<R: Read>(r: &mut DbReader<R>) -> Result<Self> {
        let version = FormatVersion(r.read_u32()?);
        let folder_count = r.read_u32()?;
        let account_unlocked = r.read_bool()?;
        let unlocked_at = r.read_timestamp()?;
        let player_name = r.read_string()?;
        tracing::debug!(%version, folder_count, player = ?player_name, "decoding database");

        let beatmaps = r.read_counted(|r| BeatmapEntry::read_from(r, version))?;

        let unknown = r.read_u32()?;
        tracing::trace!(unknown, "discarded trailing u32");
        tracing::debug!(
            beatmaps = beatmaps.len(),
            bytes = r.position(),
            "decoded database"
        );

        Ok(Self {
            version,
            folder_count,
            account_unlocked,
            unlocked_at,
            player_name,
            beatmaps,
        })
    }

    pub fn find_by_md5(&self, md5: &str) -> Option<&BeatmapEntry> {
        self.beatmaps
            .iter()
            .find(|b| b.md5.as_deref().is_some_and(|h| h.eq_ignore_ascii_case(md5)))
    }
}
