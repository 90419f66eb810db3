use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read log file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read log content from stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Reads the whole log into memory. `None` or `-` means stdin. Invalid UTF-8 is replaced.
pub fn read_log(source: Option<&Path>) -> Result<String, IngestError> {
    match source {
        Some(path) if path != Path::new("-") => {
            info!(path = %path.display(), "reading log file");
            let bytes = fs::read(path).map_err(|source| IngestError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => {
            info!("reading log content from stdin");
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(IngestError::Stdin)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
