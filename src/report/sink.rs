//! Output sink selection
//!
//! The sink is chosen once, before the fetch, and used for every report
//! write. A file sink is created (truncating any existing file) up front so
//! that an unwritable path fails the run before any network activity.

use crate::ConfigError;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Destination for the extraction report
#[derive(Debug)]
pub enum Sink {
    Stdout(io::Stdout),
    File(File),
}

impl Sink {
    /// Creates the sink for this run
    ///
    /// With a path, the file is created immediately; creation failure is a
    /// fatal configuration error. Without one, the report goes to standard
    /// output.
    pub fn create(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                tracing::info!("Creating output file: {}", path.display());
                let file = File::create(path).map_err(|e| ConfigError::OutputFile {
                    path: path.display().to_string(),
                    source: e,
                })?;
                Ok(Self::File(file))
            }
            None => {
                tracing::info!("Output will be printed to the console");
                Ok(Self::Stdout(io::stdout()))
            }
        }
    }

    /// The underlying writer for report lines
    pub fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(stdout) => stdout,
            Self::File(file) => file,
        }
    }
}
