//! Writes novelty curves as `time,novelty` CSV tables.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{NoveltyError, Result};
use crate::novelty_curve::NoveltyCurve;

pub const HEADER: &str = "time,novelty";

/// Writes the header and one `time,novelty` row per frame, both fields
/// with 5 decimals.
pub fn write_rows<W: Write>(writer: &mut W, curve: &NoveltyCurve) -> io::Result<()> {
    writeln!(writer, "{}", HEADER)?;
    for (time, novelty) in curve.points() {
        writeln!(writer, "{:.5},{:.5}", time, novelty)?;
    }
    Ok(())
}

/// Writes `curve` to a CSV file at `path`. An existing file is only replaced
/// if `overwrite` is set.
pub fn write_csv<P: AsRef<Path>>(path: P, curve: &NoveltyCurve, overwrite: bool) -> Result<()> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let file = options
        .open(path)
        .map_err(|error| NoveltyError::io(path, error))?;

    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, curve)
        .and_then(|_| writer.flush())
        .map_err(|error| NoveltyError::io(path, error))?;

    info!("Wrote {} rows to {}", curve.len(), path.display());
    Ok(())
}
