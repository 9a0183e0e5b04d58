use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParamErr {
    #[error("sequence length must be a whole number, got `{input}`")]
    InvalidLength { input: String },

    #[error("sequence ID cannot be empty")]
    EmptyIdentifier,

    #[error(
        "sequence length ({length}) must be greater than the marker length ({marker_len})"
    )]
    LengthTooShort { length: i64, marker_len: usize },
}

/// Validated parameters for one generation run.
#[derive(Debug)]
pub struct RunParams {
    pub length: usize,
    pub identifier: String,
    pub description: String,
    /// Marker text, trimmed and re-capitalized.
    pub marker: String,
}

impl RunParams {
    /// Prompts for and validates the four run parameters, in order: sequence
    /// length, sequence ID, description, marker text.
    ///
    /// Prompt text is written to `out` so that the interactive session and
    /// tests share the same code path (the driver passes stdout, tests pass a
    /// buffer). Each validation rule short-circuits: the first failure aborts
    /// before any further prompt is shown.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamErr`] when
    /// * the length does not parse as an integer,
    /// * the ID is blank after trimming, or
    /// * the length is not strictly greater than the marker length.
    pub fn from_reader(input: &mut impl BufRead, out: &mut impl Write) -> Result<Self> {
        let raw_length = prompt(input, out, "Sequence length: ")?;
        let length: i64 = raw_length.parse().map_err(|_| ParamErr::InvalidLength {
            input: raw_length.clone(),
        })?;

        let identifier = prompt(input, out, "Sequence ID: ")?;
        if identifier.is_empty() {
            return Err(ParamErr::EmptyIdentifier.into());
        }

        let description = prompt(input, out, "Description: ")?;

        let marker = capitalize(&prompt(input, out, "Marker text: ")?);
        let marker_len = marker.chars().count();
        if length <= marker_len as i64 {
            return Err(ParamErr::LengthTooShort { length, marker_len }.into());
        }

        Ok(RunParams {
            length: length as usize,
            identifier,
            description,
            marker,
        })
    }
}

/// Writes a prompt, then reads and trims one line of input.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> Result<String> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("could not read from input")?;

    Ok(line.trim().to_string())
}

/// First character uppercase, remainder lowercase, matching how the marker
/// is normalized before insertion.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> Result<RunParams> {
        let mut out = Vec::new();
        RunParams::from_reader(&mut Cursor::new(input), &mut out)
    }

    fn param_err(result: Result<RunParams>) -> ParamErr {
        result
            .unwrap_err()
            .downcast::<ParamErr>()
            .expect("expected a validation error")
    }

    #[test]
    fn valid_session() {
        let params = run("10\n  seq1 \n test run \n  aNN \n").unwrap();
        assert_eq!(params.length, 10);
        assert_eq!(params.identifier, "seq1");
        assert_eq!(params.description, "test run");
        assert_eq!(params.marker, "Ann");
    }

    #[test]
    fn prompts_in_order() {
        let mut out = Vec::new();
        RunParams::from_reader(&mut Cursor::new("10\nseq1\ndesc\nx\n"), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sequence length: Sequence ID: Description: Marker text: "
        );
    }

    #[test]
    fn non_integer_length() {
        let err = param_err(run("ten\n"));
        assert!(matches!(err, ParamErr::InvalidLength { .. }));
    }

    #[test]
    fn length_failure_stops_before_other_prompts() {
        let mut out = Vec::new();
        let res = RunParams::from_reader(&mut Cursor::new("ten\nseq1\ndesc\nx\n"), &mut out);
        assert!(res.is_err());
        assert_eq!(String::from_utf8(out).unwrap(), "Sequence length: ");
    }

    #[test]
    fn blank_identifier() {
        let err = param_err(run("10\n   \ndesc\nx\n"));
        assert!(matches!(err, ParamErr::EmptyIdentifier));
    }

    #[test]
    fn length_equal_to_marker_rejected() {
        let err = param_err(run("3\nseq1\ndesc\nAnn\n"));
        assert!(matches!(
            err,
            ParamErr::LengthTooShort {
                length: 3,
                marker_len: 3
            }
        ));
    }

    #[test]
    fn negative_length_rejected() {
        let err = param_err(run("-4\nseq1\ndesc\nx\n"));
        assert!(matches!(err, ParamErr::LengthTooShort { length: -4, .. }));
    }

    #[test]
    fn marker_is_recapitalized() {
        let params = run("20\nseq1\ndesc\nMAŁGORZATA\n").unwrap();
        assert_eq!(params.marker, "Małgorzata");
    }
}
