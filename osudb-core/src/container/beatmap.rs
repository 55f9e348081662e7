use crate::container::pair::{StarRating, read_star_ratings};
use crate::container::timing::{TimingPoint, read_timing_points};
use crate::container::version::FormatVersion;
use crate::error::Result;
use crate::read::reader::DbReader;
use crate::util::ticks::Timestamp;
use serde::Serialize;
use std::io::Read;
use time::Duration;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameMode {
    Standard = 0,
    Taiko = 1,
    Fruits = 2,
    Mania = 3,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [Self::Standard, Self::Taiko, Self::Fruits, Self::Mania];

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Standard),
            1 => Some(Self::Taiko),
            2 => Some(Self::Fruits),
            3 => Some(Self::Mania),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "osu",
            Self::Taiko => "taiko",
            Self::Fruits => "fruits",
            Self::Mania => "mania",
        }
    }
}

/// One value per game mode, stored in the on-disk order standard, taiko,
/// fruits, mania.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PerMode<T> {
    pub standard: T,
    pub taiko: T,
    pub fruits: T,
    pub mania: T,
}

impl<T> PerMode<T> {
    /// Read four values in mode order.
    pub fn read_with<R: Read>(
        r: &mut DbReader<R>,
        mut read_one: impl FnMut(&mut DbReader<R>) -> Result<T>,
    ) -> Result<Self> {
        let standard = read_one(r)?;
        let taiko = read_one(r)?;
        let fruits = read_one(r)?;
        let mania = read_one(r)?;
        Ok(Self {
            standard,
            taiko,
            fruits,
            mania,
        })
    }

    pub fn get(&self, mode: GameMode) -> &T {
        match mode {
            GameMode::Standard => &self.standard,
            GameMode::Taiko => &self.taiko,
            GameMode::Fruits => &self.fruits,
            GameMode::Mania => &self.mania,
        }
    }

    pub fn get_mut(&mut self, mode: GameMode) -> &mut T {
        match mode {
            GameMode::Standard => &mut self.standard,
            GameMode::Taiko => &mut self.taiko,
            GameMode::Fruits => &mut self.fruits,
            GameMode::Mania => &mut self.mania,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GameMode, &T)> {
        GameMode::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectCounts {
    pub circles: u16,
    pub sliders: u16,
    pub spinners: u16,
}

/// Difficulty settings. Old revisions store the first four as whole bytes;
/// they are widened to `f32` here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Difficulty {
    pub approach_rate: f32,
    pub circle_size: f32,
    pub hp_drain: f32,
    pub overall_difficulty: f32,
    pub slider_velocity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeatmapEntry {
    pub artist: Option<String>,
    pub artist_unicode: Option<String>,
    pub title: Option<String>,
    pub title_unicode: Option<String>,
    pub creator: Option<String>,
    pub difficulty_name: Option<String>,
    pub audio_file: Option<String>,
    pub md5: Option<String>,
    pub osu_file: Option<String>,
    pub ranked_status: u8,
    pub objects: ObjectCounts,
    pub last_modified: Timestamp,
    pub difficulty: Difficulty,
    /// `None` for revisions that predate star ratings.
    pub star_ratings: Option<PerMode<Vec<StarRating>>>,
    pub drain_time: Duration,
    pub total_time: Duration,
    pub preview_offset: Duration,
    pub timing_points: Vec<TimingPoint>,
    pub beatmap_id: u32,
    pub beatmapset_id: u32,
    pub thread_id: u32,
    pub grades: PerMode<u8>,
    pub local_offset: u16,
    pub stack_leniency: f32,
    /// Raw mode byte; see [`BeatmapEntry::game_mode`].
    pub mode: u8,
    pub source: Option<String>,
    pub tags: Option<String>,
    pub online_offset: u16,
    pub title_font: Option<String>,
    pub unplayed: bool,
    pub last_played: Timestamp,
    /// Stored in the legacy osz2 archive format.
    pub osz2: bool,
    pub folder_name: Option<String>,
    pub last_checked: Timestamp,
    pub ignore_sound: bool,
    pub ignore_skin: bool,
    pub disable_storyboard: bool,
    pub disable_video: bool,
    pub visual_override: bool,
    pub mania_scroll_speed: u8,
}

fn read_difficulty_scalar<R: Read>(r: &mut DbReader<R>, version: FormatVersion) -> Result<f32> {
    if version.has_float_difficulty() {
        r.read_f32()
    } else {
        Ok(f32::from(r.read_u8()?))
    }
}

impl BeatmapEntry {
    /// Decode one record laid out for `version`.
    pub fn read_from<R: Read>(r: &mut DbReader<R>, version: FormatVersion) -> Result<Self> {
        let start = r.position();

        let artist = r.read_string()?;
        let artist_unicode = r.read_string()?;
        let title = r.read_string()?;
        let title_unicode = r.read_string()?;
        let creator = r.read_string()?;
        let difficulty_name = r.read_string()?;
        let audio_file = r.read_string()?;
        let md5 = r.read_string()?;
        let osu_file = r.read_string()?;
        let ranked_status = r.read_u8()?;
        let objects = ObjectCounts {
            circles: r.read_u16()?,
            sliders: r.read_u16()?,
            spinners: r.read_u16()?,
        };
        let last_modified = r.read_timestamp()?;
        let difficulty = Difficulty {
            approach_rate: read_difficulty_scalar(r, version)?,
            circle_size: read_difficulty_scalar(r, version)?,
            hp_drain: read_difficulty_scalar(r, version)?,
            overall_difficulty: read_difficulty_scalar(r, version)?,
            slider_velocity: r.read_f64()?,
        };
        let star_ratings = if version.has_star_ratings() {
            Some(PerMode::read_with(r, read_star_ratings)?)
        } else {
            None
        };
        let drain_time = Duration::seconds(i64::from(r.read_u32()?));
        let total_time = Duration::milliseconds(i64::from(r.read_u32()?));
        let preview_offset = Duration::milliseconds(i64::from(r.read_u32()?));
        let timing_points = read_timing_points(r)?;
        let beatmap_id = r.read_u32()?;
        let beatmapset_id = r.read_u32()?;
        let thread_id = r.read_u32()?;
        let grades = PerMode::read_with(r, |r| r.read_u8())?;
        let local_offset = r.read_u16()?;
        let stack_leniency = r.read_f32()?;
        let mode = r.read_u8()?;
        let source = r.read_string()?;
        let tags = r.read_string()?;
        let online_offset = r.read_u16()?;
        let title_font = r.read_string()?;
        let unplayed = r.read_bool()?;
        let last_played = r.read_timestamp()?;
        let osz2 = r.read_bool()?;
        let folder_name = r.read_string()?;
        let last_checked = r.read_timestamp()?;
        let ignore_sound = r.read_bool()?;
        let ignore_skin = r.read_bool()?;
        let disable_storyboard = r.read_bool()?;
        let disable_video = r.read_bool()?;
        let visual_override = r.read_bool()?;
        if version.has_legacy_trailer() {
            let legacy = r.read_u16()?;
            tracing::trace!(legacy, "discarded legacy u16");
        }
        let unknown = r.read_u32()?;
        tracing::trace!(unknown, "discarded per-beatmap u32");
        let mania_scroll_speed = r.read_u8()?;

        tracing::trace!(
            offset = start,
            len = r.position() - start,
            beatmap_id,
            beatmapset_id,
            "decoded beatmap"
        );

        Ok(Self {
            artist,
            artist_unicode,
            title,
            title_unicode,
            creator,
            difficulty_name,
            audio_file,
            md5,
            osu_file,
            ranked_status,
            objects,
            last_modified,
            difficulty,
            star_ratings,
            drain_time,
            total_time,
            preview_offset,
            timing_points,
            beatmap_id,
            beatmapset_id,
            thread_id,
            grades,
            local_offset,
            stack_leniency,
            mode,
            source,
            tags,
            online_offset,
            title_font,
            unplayed,
            last_played,
            osz2,
            folder_name,
            last_checked,
            ignore_sound,
            ignore_skin,
            disable_storyboard,
            disable_video,
            visual_override,
            mania_scroll_speed,
        })
    }

    /// Typed view of [`BeatmapEntry::mode`]; `None` for values the client
    /// does not define.
    pub fn game_mode(&self) -> Option<GameMode> {
        GameMode::from_u8(self.mode)
    }

    /// Star ratings for `mode`, empty when the revision has none.
    pub fn star_ratings_for(&self, mode: GameMode) -> &[StarRating] {
        self.star_ratings
            .as_ref()
            .map(|s| s.get(mode).as_slice())
            .unwrap_or(&[])
    }

    /// Star rating without mods, if the client computed one.
    pub fn nomod_rating(&self, mode: GameMode) -> Option<f64> {
        self.star_ratings_for(mode)
            .iter()
            .find(|s| s.mods == 0)
            .map(|s| s.rating)
    }
}
