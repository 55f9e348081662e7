use crate::container::beatmap::{BeatmapEntry, GameMode};
use crate::container::database::Database;
use crate::domain::BeatmapRow;

#[derive(Clone, Debug, Default)]
pub struct ListOptions {
    /// Keep only beatmaps for this mode.
    pub mode: Option<GameMode>,
    pub limit: Option<usize>,
}

fn row(index: usize, b: &BeatmapEntry) -> BeatmapRow {
    // Prefer the romanised metadata, falling back to the unicode variant.
    let pick = |plain: &Option<String>, unicode: &Option<String>| {
        plain
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(unicode.as_deref())
            .unwrap_or_default()
            .to_owned()
    };
    BeatmapRow {
        index,
        beatmap_id: b.beatmap_id,
        beatmapset_id: b.beatmapset_id,
        mode: b.mode,
        artist: pick(&b.artist, &b.artist_unicode),
        title: pick(&b.title, &b.title_unicode),
        difficulty_name: b.difficulty_name.clone().unwrap_or_default(),
        md5: b.md5.clone(),
    }
}

pub fn list(db: &Database, opts: &ListOptions) -> Vec<BeatmapRow> {
    db.beatmaps
        .iter()
        .enumerate()
        .filter(|(_, b)| opts.mode.is_none_or(|m| b.game_mode() == Some(m)))
        .take(opts.limit.unwrap_or(usize::MAX))
        .map(|(i, b)| row(i, b))
        .collect()
}
