use crate::error::Result;
use crate::read::reader::DbReader;
use serde::Serialize;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingPoint {
    pub bpm: f64,
    /// Milliseconds from the start of the chart.
    pub offset: f64,
    /// Raw on-disk flag separating the two kinds of timing change. Kept as
    /// stored, without mapping it onto inherited/uninherited semantics.
    pub uninherited: bool,
}

impl TimingPoint {
    pub const ENCODED_LEN: usize = 17;

    pub fn read_from<R: Read>(r: &mut DbReader<R>) -> Result<Self> {
        let bpm = r.read_f64()?;
        let offset = r.read_f64()?;
        let uninherited = r.read_bool()?;
        Ok(Self {
            bpm,
            offset,
            uninherited,
        })
    }
}

pub fn read_timing_points<R: Read>(r: &mut DbReader<R>) -> Result<Vec<TimingPoint>> {
    r.read_counted(TimingPoint::read_from)
}
