use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KaoError>;

#[derive(Debug, Error)]
pub enum KaoError {
    #[error("config error: {0}")]
    Config(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("backup verification failed for {}: expected crc32 {expected:08x}, got {actual:08x}", .path.display())]
    Backup {
        path: PathBuf,
        expected: u32,
        actual: u32,
    },

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KaoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KaoError::Io {
            path: path.into(),
            source,
        }
    }
}
