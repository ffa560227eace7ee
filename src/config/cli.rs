use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Where the CLI reads a payload from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    Stdin,
    File(PathBuf),
}

impl PayloadSource {
    /// `-` selects stdin, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            PayloadSource::Stdin
        } else {
            PayloadSource::File(PathBuf::from(arg))
        }
    }

    pub async fn read(&self) -> Result<Vec<u8>> {
        match self {
            PayloadSource::Stdin => {
                let mut data = Vec::new();
                tokio::io::stdin().read_to_end(&mut data).await?;
                Ok(data)
            }
            PayloadSource::File(path) => Ok(tokio::fs::read(path).await?),
        }
    }
}

/// Writes bytes to stdout followed by a newline.
pub async fn write_stdout(data: &[u8]) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(data).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
