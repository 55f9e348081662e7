use serde::Serialize;

/// One line of a beatmap listing.
#[derive(Clone, Debug, Serialize)]
pub struct BeatmapRow {
    pub index: usize,
    pub beatmap_id: u32,
    pub beatmapset_id: u32,
    pub mode: u8,
    pub artist: String,
    pub title: String,
    pub difficulty_name: String,
    pub md5: Option<String>,
}
