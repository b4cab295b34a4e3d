//! Plain-text line storage used to feed and persist name lists.

mod file;

pub use file::{FileLineSink, FileLineSource};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LinesError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("error reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Something that yields the non-blank lines of a text resource.
pub trait LineSource {
    fn read_lines(&self) -> Result<Vec<String>, LinesError>;
}

/// Something that persists lines, replacing whatever it held before.
pub trait LineSink {
    fn write_lines(&self, lines: &[String]) -> Result<(), LinesError>;
}

/// Collects every line of `reader`, trimmed, skipping blank lines.
pub fn read_lines_from<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_owned());
        }
    }

    Ok(lines)
}

/// Writes each entry followed by `\n`. Nothing is written for an empty slice.
pub fn write_lines_to<W: Write, S: AsRef<str>>(mut writer: W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
