use super::{read_lines_from, write_lines_to, LineSink, LineSource, LinesError};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Reads names from a UTF-8 text file, one per line.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: io::Error) -> LinesError {
        LinesError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self) -> Result<Vec<String>, LinesError> {
        let file = File::open(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LinesError::NotFound {
                path: self.path.clone(),
            },
            _ => self.read_error(source),
        })?;

        read_lines_from(BufReader::new(file)).map_err(|source| self.read_error(source))
    }
}

/// Writes names to a text file, truncating it first.
#[derive(Debug, Clone)]
pub struct FileLineSink {
    path: PathBuf,
}

impl FileLineSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSink for FileLineSink {
    fn write_lines(&self, lines: &[String]) -> Result<(), LinesError> {
        let write_error = |source| LinesError::Write {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(write_error)?;
        write_lines_to(BufWriter::new(file), lines).map_err(write_error)
    }
}
