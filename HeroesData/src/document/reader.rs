//! Raw byte loading for path-based constructors

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

fn map_read_error(path: &Path, err: std::io::Error) -> Error {
    if err.kind() == ErrorKind::NotFound {
        Error::FileNotFound(path.to_path_buf())
    } else {
        Error::Io(err)
    }
}

/// Read a whole file, reporting a missing file as [`Error::FileNotFound`].
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| map_read_error(path, e))
}

/// Non-blocking variant of [`read_bytes`].
#[cfg(feature = "async")]
pub(crate) async fn read_bytes_async(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| map_read_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herodata_1_enus.json");
        assert!(matches!(read_bytes(&path), Err(Error::FileNotFound(p)) if p == path));
    }

    #[test]
    fn test_read_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, b"{}").unwrap();
        assert_eq!(read_bytes(&path).unwrap(), b"{}");
    }
}
