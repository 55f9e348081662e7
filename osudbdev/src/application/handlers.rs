use std::io::{self, Write};
use std::path::Path;

use osudb_core::error::Result;
use osudb_core::{Database, DbStats, DecodeOptions, GameMode, ListOptions, list};
use serde::Serialize;

pub fn load(path: &Path, opts: &DecodeOptions) -> Result<Database> {
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read database file");
    Database::from_slice_with(&bytes, opts)
}

fn invalid_input(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

pub fn handle_summary(path: &Path, opts: &DecodeOptions) -> Result<()> {
    let db = load(path, opts)?;
    let stats = DbStats::collect(&db);
    let mut out = io::stdout().lock();
    writeln!(out, "version           {}", db.version)?;
    writeln!(out, "player            {}", db.player_name.as_deref().unwrap_or("-"))?;
    writeln!(out, "folders           {}", db.folder_count)?;
    writeln!(out, "account unlocked  {} ({})", db.account_unlocked, db.unlocked_at)?;
    writeln!(out, "beatmaps          {}", stats.beatmaps)?;
    writeln!(out, "beatmap sets      {}", stats.beatmap_sets)?;
    for (mode, n) in stats.per_mode.iter() {
        writeln!(out, "  {:<16}{}", mode.name(), n)?;
    }
    if stats.unknown_mode > 0 {
        writeln!(out, "  {:<16}{}", "unknown", stats.unknown_mode)?;
    }
    writeln!(out, "timing points     {}", stats.timing_points)?;
    writeln!(out, "unplayed          {}", stats.unplayed)?;
    writeln!(out, "with star ratings {}", stats.with_star_ratings)?;
    Ok(())
}

pub fn handle_list(
    path: &Path,
    opts: &DecodeOptions,
    mode: Option<u8>,
    limit: Option<usize>,
) -> Result<()> {
    let mode = mode
        .map(|m| GameMode::from_u8(m).ok_or_else(|| invalid_input(format!("unknown mode {m}"))))
        .transpose()?;
    let db = load(path, opts)?;
    let rows = list(&db, &ListOptions { mode, limit });
    let mut out = io::stdout().lock();
    for r in rows {
        writeln!(
            out,
            "{:>6}  {:>8}/{:<8}  {} - {} [{}]  {}",
            r.index,
            r.beatmapset_id,
            r.beatmap_id,
            r.artist,
            r.title,
            r.difficulty_name,
            r.md5.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

pub fn handle_show(path: &Path, opts: &DecodeOptions, md5: &str) -> Result<()> {
    let db = load(path, opts)?;
    let entry = db
        .find_by_md5(md5)
        .ok_or_else(|| invalid_input(format!("no beatmap with md5 {md5}")))?;
    print_json(entry)
}

pub fn handle_dump(path: &Path, opts: &DecodeOptions) -> Result<()> {
    let db = load(path, opts)?;
    print_json(&db)
}
