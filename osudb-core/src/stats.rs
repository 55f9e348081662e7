use crate::container::beatmap::PerMode;
use crate::container::database::Database;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Clone, Debug, Default, Serialize)]
pub struct DbStats {
    pub beatmaps: u64,
    pub beatmap_sets: u64,
    pub per_mode: PerMode<u64>,
    pub unknown_mode: u64,
    pub timing_points: u64,
    pub unplayed: u64,
    pub with_star_ratings: u64,
}

impl DbStats {
    pub fn collect(db: &Database) -> Self {
        let mut stats = Self::default();
        let mut sets = HashSet::new();
        for b in &db.beatmaps {
            stats.beatmaps += 1;
            sets.insert(b.beatmapset_id);
            match b.game_mode() {
                Some(m) => *stats.per_mode.get_mut(m) += 1,
                None => stats.unknown_mode += 1,
            }
            stats.timing_points += b.timing_points.len() as u64;
            stats.unplayed += u64::from(b.unplayed);
            stats.with_star_ratings += u64::from(b.star_ratings.is_some());
        }
        stats.beatmap_sets = sets.len() as u64;
        stats
    }
}
