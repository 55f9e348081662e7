//! Fixture encoder for building database files in tests.
#![allow(dead_code)]

use osudb_core::FLOAT_DIFFICULTY_VERSION;
use osudb_core::util::varint::put_uvarint;

/// Little-endian byte builder that remembers where every field ends.
#[derive(Default)]
pub struct Fixture {
    pub bytes: Vec<u8>,
    pub boundaries: Vec<usize>,
}

impl Fixture {
    fn mark(&mut self) -> &mut Self {
        self.boundaries.push(self.bytes.len());
        self
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.bytes.push(v);
        self.mark()
    }

    pub fn u16(&mut self, v: u16) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self.mark()
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self.mark()
    }

    pub fn u64(&mut self, v: u64) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self.mark()
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self.mark()
    }

    pub fn f64(&mut self, v: f64) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self.mark()
    }

    pub fn bool(&mut self, v: bool) -> &mut Self {
        self.u8(u8::from(v))
    }

    pub fn string(&mut self, s: Option<&str>) -> &mut Self {
        match s {
            None => self.bytes.push(0x00),
            Some(s) => {
                self.bytes.push(0x0b);
                put_uvarint(&mut self.bytes, s.len() as u64);
                self.bytes.extend_from_slice(s.as_bytes());
            }
        }
        self.mark()
    }

    pub fn pair(&mut self, mods: u32, rating: f64) -> &mut Self {
        self.u8(0x08).u32(mods).u8(0x0d).f64(rating)
    }

    pub fn header(&mut self, version: u32, player: Option<&str>, beatmaps: u32) -> &mut Self {
        self.u32(version)
            .u32(3)
            .bool(true)
            .u64(0)
            .string(player)
            .u32(beatmaps)
    }

    pub fn beatmap(&mut self, version: u32, spec: &MapSpec) -> &mut Self {
        let float = version >= FLOAT_DIFFICULTY_VERSION;
        self.string(Some(spec.artist))
            .string(None)
            .string(Some(spec.title))
            .string(None)
            .string(Some("creator"))
            .string(Some(spec.difficulty))
            .string(Some("audio.mp3"))
            .string(Some(spec.md5))
            .string(Some("map.osu"))
            .u8(4)
            .u16(100)
            .u16(50)
            .u16(1)
            .u64(637_000_000_000_000_000);
        for v in [9u8, 4, 6, 8] {
            if float {
                self.f32(f32::from(v) + 0.5);
            } else {
                self.u8(v);
            }
        }
        self.f64(1.4);
        if float {
            self.u32(1).pair(0, spec.stars);
            self.u32(0);
            self.u32(0);
            self.u32(0);
        }
        self.u32(120).u32(125_000).u32(30_000);
        self.u32(spec.timing_points);
        for i in 0..spec.timing_points {
            self.f64(300.0).f64(f64::from(i) * 1000.0).bool(i == 0);
        }
        self.u32(spec.beatmap_id)
            .u32(spec.beatmapset_id)
            .u32(0)
            .u8(9)
            .u8(9)
            .u8(9)
            .u8(9)
            .u16(0)
            .f32(0.7)
            .u8(spec.mode)
            .string(Some("source"))
            .string(Some("tags"))
            .u16(0)
            .string(None)
            .bool(spec.unplayed)
            .u64(0)
            .bool(false)
            .string(Some("folder"))
            .u64(0)
            .bool(false)
            .bool(false)
            .bool(false)
            .bool(false)
            .bool(false);
        if !float {
            self.u16(0);
        }
        self.u32(0).u8(0)
    }

    pub fn trailer(&mut self) -> &mut Self {
        self.u32(0)
    }
}

pub struct MapSpec {
    pub artist: &'static str,
    pub title: &'static str,
    pub difficulty: &'static str,
    pub md5: &'static str,
    pub beatmap_id: u32,
    pub beatmapset_id: u32,
    pub mode: u8,
    pub stars: f64,
    pub timing_points: u32,
    pub unplayed: bool,
}

pub fn sample_maps() -> Vec<MapSpec> {
    vec![
        MapSpec {
            artist: "xi",
            title: "FREEDOM DiVE",
            difficulty: "FOUR DIMENSIONS",
            md5: "da8aae79c8f3306b5d65ec951874a7fb",
            beatmap_id: 129891,
            beatmapset_id: 39804,
            mode: 0,
            stars: 7.1,
            timing_points: 3,
            unplayed: false,
        },
        MapSpec {
            artist: "xi",
            title: "FREEDOM DiVE",
            difficulty: "Another",
            md5: "0b4a0e5b2ac7b0c5e5e3f5e6e3a0c1d2",
            beatmap_id: 129892,
            beatmapset_id: 39804,
            mode: 3,
            stars: 4.2,
            timing_points: 1,
            unplayed: true,
        },
        MapSpec {
            artist: "DragonForce",
            title: "Through the Fire and Flames",
            difficulty: "Legend",
            md5: "9f86d081884c7d659a2feaa0c55ad015",
            beatmap_id: 40000,
            beatmapset_id: 12000,
            mode: 1,
            stars: 5.9,
            timing_points: 0,
            unplayed: false,
        },
    ]
}

/// A complete database file holding [`sample_maps`].
pub fn sample_db(version: u32) -> Fixture {
    let maps = sample_maps();
    let mut f = Fixture::default();
    f.header(version, Some("player"), maps.len() as u32);
    for m in &maps {
        f.beatmap(version, m);
    }
    f.trailer();
    f
}
