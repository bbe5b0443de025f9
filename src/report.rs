//! Human-readable and JSON presentation of a run.

use std::io::{BufRead, ErrorKind, Write};

use crate::{
    PerfRunError,
    config::{DetailMode, RunConfig},
    results::ResultSet,
};

/// Writes run descriptions and results to `out`.
pub struct Reporter<W> {
    out: W,
}

impl<W> Reporter<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_description(&mut self, config: &RunConfig) -> Result<(), PerfRunError> {
        writeln!(self.out, "TESTS: {}", config.num_tests())?;
        writeln!(self.out, "INTERVAL: {}s", config.interval_secs())?;
        writeln!(self.out, "Using 1 core")?;
        writeln!(self.out, "Computation Time: {}s", config.projected_secs())?;
        writeln!(self.out, "Computing...")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn write_summary(&mut self, results: &ResultSet) -> Result<(), PerfRunError> {
        writeln!(self.out)?;
        writeln!(self.out, "Finished {} tests.", results.len())?;
        writeln!(self.out, "Total Time: {:.6}s", results.total_time())?;
        writeln!(self.out, "Average Test Time: {:.6}s", results.average_time())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn write_prompt(&mut self) -> Result<(), PerfRunError> {
        writeln!(self.out, "All Results(Press 1):")?;
        self.out.flush()?;
        Ok(())
    }

    /// One line per run, numbered from 1.
    pub fn write_details(&mut self, results: &ResultSet) -> Result<(), PerfRunError> {
        for (idx, seconds) in results.iter().enumerate() {
            writeln!(self.out, "{}: {:.6}", idx + 1, seconds)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn write_json(&mut self, results: &ResultSet) -> Result<(), PerfRunError> {
        serde_json::to_writer_pretty(&mut self.out, results)
            .map_err(|e| PerfRunError::io(e.to_string()))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Reads the answer to the listing prompt; only an integer equal to `1`
/// selects the listing.
///
/// Blank lines are skipped and the leading integer of the first non-blank
/// line is taken, so `1 2` and `1abc` both select. End of input, a line
/// without leading digits or undecodable input decline.
pub fn read_detail_choice<R: BufRead>(mut input: R) -> Result<bool, PerfRunError> {
    let mut line = String::new();
    loop {
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return Ok(false),
            Ok(_) if line.trim().is_empty() => continue,
            Ok(_) => break,
            Err(err) if err.kind() == ErrorKind::InvalidData => return Ok(false),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(leading_integer(line.trim_start()) == Some(1))
}

fn leading_integer(text: &str) -> Option<i64> {
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits_len = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    text[..sign_len + digits_len].parse().ok()
}

/// Prints the summary and, depending on `mode`, the per-run listing.
pub fn present<R, W>(
    results: &ResultSet,
    mode: DetailMode,
    input: R,
    out: W,
) -> Result<(), PerfRunError>
where
    R: BufRead,
    W: Write,
{
    let mut reporter = Reporter::new(out);
    reporter.write_summary(results)?;
    let show_details = match mode {
        DetailMode::Always => true,
        DetailMode::Never => false,
        DetailMode::Prompt => {
            reporter.write_prompt()?;
            read_detail_choice(input)?
        }
    };
    if show_details {
        reporter.write_details(results)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{leading_integer, read_detail_choice};

    #[test]
    fn test_detail_choice_parsing() {
        assert!(read_detail_choice("1\n".as_bytes()).unwrap());
        assert!(read_detail_choice("  1  \n".as_bytes()).unwrap());
        assert!(!read_detail_choice("0\n".as_bytes()).unwrap());
        assert!(!read_detail_choice("yes\n".as_bytes()).unwrap());
        assert!(!read_detail_choice("".as_bytes()).unwrap());
        assert!(!read_detail_choice("11\n".as_bytes()).unwrap());
        assert!(!read_detail_choice(&[0xff, 0xfe, b'\n'][..]).unwrap());
        assert!(!read_detail_choice("\n\n".as_bytes()).unwrap());
        assert!(!read_detail_choice("-1\n".as_bytes()).unwrap());
        assert!(!read_detail_choice("abc 1\n".as_bytes()).unwrap());
    }

    #[test]
    fn test_detail_choice_takes_leading_integer_after_blank_lines() {
        assert!(read_detail_choice("\n1\n".as_bytes()).unwrap());
        assert!(read_detail_choice("\n   \n\t1\n".as_bytes()).unwrap());
        assert!(read_detail_choice("1 2\n".as_bytes()).unwrap());
        assert!(read_detail_choice("1abc\n".as_bytes()).unwrap());
        assert!(read_detail_choice("+1\n".as_bytes()).unwrap());
        assert!(read_detail_choice("1".as_bytes()).unwrap());
    }

    #[test]
    fn test_leading_integer_token() {
        assert_eq!(leading_integer("42rest"), Some(42));
        assert_eq!(leading_integer("-7 8"), Some(-7));
        assert_eq!(leading_integer("+"), None);
        assert_eq!(leading_integer("x1"), None);
        assert_eq!(leading_integer("99999999999999999999"), None);
    }
}
