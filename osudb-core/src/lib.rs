#![forbid(unsafe_code)]

pub mod error;

pub mod util {
    pub mod ticks;
    pub mod varint;
}

pub mod read {
    pub mod options;
    pub mod reader;
}

pub mod container {
    pub mod beatmap;
    pub mod database;
    pub mod pair;
    pub mod timing;
    pub mod version;
}

pub mod domain;
pub mod list;
pub mod stats;

// Re-exports: stable API surface
pub use container::beatmap::{BeatmapEntry, GameMode, PerMode};
pub use container::database::Database;
pub use container::version::{FLOAT_DIFFICULTY_VERSION, FormatVersion};
pub use list::{ListOptions, list};
pub use read::options::DecodeOptions;
pub use stats::DbStats;
pub use util::ticks::Timestamp;
