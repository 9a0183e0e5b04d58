use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use rand::Rng;
use thiserror::Error;

/// Extension appended to the record identifier to form the output filename.
pub const FASTA_EXT: &str = "fasta";

/// Maximum number of characters written per sequence line.
pub const LINE_WIDTH: usize = 80;

#[derive(Error, Debug)]
pub enum InsertionErr {
    #[error(
        "sequence of {seq_len} bases is too short to hold a {marker_len}-character marker"
    )]
    MarkerTooLong { seq_len: usize, marker_len: usize },
}

/// A single FASTA record: the identifier doubles as the storage key stem,
/// and `seq` already carries the embedded marker.
pub struct FastaRecord {
    pub id: String,
    pub description: String,
    pub seq: String,
}

/// Embeds `marker` into `seq` at a random offset.
///
/// The offset is drawn uniformly from `[0, seq_len - marker_len]`, so the
/// marker always fits entirely within the sequence and the combined length is
/// exactly `seq_len + marker_len`. The marker length is measured in
/// characters, which for the A/C/G/T sequence coincides with bytes.
///
/// # Arguments
///
/// * `seq` - The generated sequence to embed the marker into.
/// * `marker` - The marker text, inserted verbatim.
/// * `rng` - The random source used to draw the offset.
///
/// # Returns
///
/// The combined sequence together with the offset the marker was placed at.
///
/// # Errors
///
/// Returns [`InsertionErr::MarkerTooLong`] when the marker is longer than the
/// sequence and no valid offset exists.
pub fn insert_marker(
    seq: &str,
    marker: &str,
    rng: &mut impl Rng,
) -> Result<(String, usize), InsertionErr> {
    let marker_len = marker.chars().count();
    if marker_len > seq.len() {
        return Err(InsertionErr::MarkerTooLong {
            seq_len: seq.len(),
            marker_len,
        });
    }

    let offset = rng.gen_range(0..=seq.len() - marker_len);

    let mut combined = String::with_capacity(seq.len() + marker.len());
    combined.push_str(&seq[..offset]);
    combined.push_str(marker);
    combined.push_str(&seq[offset..]);

    Ok((combined, offset))
}

/// Formats `record` as FASTA and writes it to the provided writer.
///
/// The header line is `>{id} {description}`; the sequence follows in chunks
/// of at most [`LINE_WIDTH`] characters, one per line, with no trailing blank
/// line beyond the final newline.
///
/// # Arguments
///
/// * `writer` - A mutable reference to an object that implements the `Write`
///   trait. A `std::io::Cursor` is acceptable for in-memory use.
/// * `record` - The record to serialize.
pub fn write_record(writer: &mut impl Write, record: &FastaRecord) -> std::io::Result<()> {
    writeln!(writer, ">{} {}", record.id, record.description)?;

    let chars: Vec<char> = record.seq.chars().collect();
    for chunk in chars.chunks(LINE_WIDTH) {
        let line: String = chunk.iter().collect();
        writeln!(writer, "{line}")?;
    }

    Ok(())
}

/// Writes `record` to `<id>.fasta` in the working directory, overwriting any
/// previous run, and returns the storage key used.
///
/// The record content is fully assembled before the file is created, so a
/// failed run never leaves a partial record behind.
pub fn save(record: &FastaRecord) -> Result<String> {
    let filename = format!("{}.{}", record.id, FASTA_EXT);

    let file = File::create(&filename)
        .with_context(|| format!("could not create output file {filename}"))?;
    let mut writer = BufWriter::new(file);

    write_record(&mut writer, record)?;
    writer.flush()?;

    Ok(filename)
}
