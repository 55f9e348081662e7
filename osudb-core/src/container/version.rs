use serde::Serialize;
use std::fmt;

/// First format revision that stores difficulty settings as `f32` and carries
/// per-mode star rating tables.
///
/// Older revisions store the four difficulty settings as single bytes, have no
/// star ratings, and append an extra 16-bit field after the per-beatmap flags.
/// All three layout differences switch on this one value.
pub const FLOAT_DIFFICULTY_VERSION: u32 = 20140609;

/// On-disk layout revision, written by the client as a `yyyymmdd` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FormatVersion(pub u32);

impl FormatVersion {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn has_float_difficulty(self) -> bool {
        self.0 >= FLOAT_DIFFICULTY_VERSION
    }

    pub fn has_star_ratings(self) -> bool {
        self.0 >= FLOAT_DIFFICULTY_VERSION
    }

    /// Whether each beatmap ends with an extra u16 before the trailing u32.
    pub fn has_legacy_trailer(self) -> bool {
        self.0 < FLOAT_DIFFICULTY_VERSION
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
