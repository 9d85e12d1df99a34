use crate::core::{Result, TranscriptError};
use std::io::{self, Write};
use std::path::Path;

/// Writes `text` to `path` (truncating), or to stdout with a trailing newline.
///
/// The file confirmation goes to stderr so piped stdout stays clean.
pub async fn write_output(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            write_file(text, path).await?;
            eprintln!("ℹ️  Transcript saved to {}", path.display());
            Ok(())
        }
        None => write_stdout(text),
    }
}

pub async fn write_file(text: &str, path: &Path) -> Result<()> {
    tokio::fs::write(path, text.as_bytes())
        .await
        .map_err(|source| write_error(path, source))?;

    tracing::debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

fn write_error(path: &Path, source: io::Error) -> TranscriptError {
    match source.kind() {
        io::ErrorKind::PermissionDenied => TranscriptError::PermissionDenied {
            path: path.to_path_buf(),
            source,
        },
        _ => TranscriptError::FileWrite {
            path: path.to_path_buf(),
            source,
        },
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text)
        .and_then(|_| stdout.flush())
        .map_err(TranscriptError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_file_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transcript.txt");
        std::fs::write(&path, "stale content that is longer than the new text").unwrap();

        write_output("fresh", Some(&path)).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[tokio::test]
    async fn test_write_file_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("transcript.txt");

        let err = write_file("text", &path).await.unwrap_err();

        match err {
            TranscriptError::FileWrite { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_write_error_distinguishes_permission_denied() {
        let path = Path::new("/root/out.txt");

        let denied = write_error(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, TranscriptError::PermissionDenied { .. }));
        assert_eq!(denied.to_string(), "Permission denied writing to /root/out.txt");

        let full = write_error(path, io::Error::new(io::ErrorKind::Other, "disk full"));
        match full {
            TranscriptError::FileWrite { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {:?}", other),
        }

        let missing = write_error(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(missing, TranscriptError::FileWrite { .. }));
    }

    #[tokio::test]
    async fn test_write_file_error_messages() {
        let dir = tempdir().unwrap();
        let err = write_file("text", dir.path()).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to write file: "));
    }
}
