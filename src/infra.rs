//! Infrastructure traits for abstracting I/O operations.
//!
//! Size measurement, manifest loading and snapshot persistence all go through
//! the [`FileSystem`] trait so that failure paths can be exercised in tests
//! without touching the real disk.

use std::io;
use std::path::{Path, PathBuf};

/// Trait for abstracting filesystem operations.
///
/// Implementations must be shareable across threads because the size
/// measurer may prefetch files in parallel.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file as bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file, replacing any previous content.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Whether a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether a directory exists at `path`.
    fn is_dir(&self, path: &Path) -> bool;

    /// Resolve symlinks and relative components of an existing path.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_real_filesystem_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("chunk.js");

        let fs = RealFileSystem;
        fs.write(&file_path, b"console.log(1)").unwrap();

        assert_eq!(fs.read_to_string(&file_path).unwrap(), "console.log(1)");
        assert_eq!(fs.read(&file_path).unwrap().len(), 14);
    }

    #[test]
    fn test_real_filesystem_create_dir_all() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir.path().join("a").join("b").join("c");

        let fs = RealFileSystem;
        fs.create_dir_all(&nested_path).unwrap();

        assert!(fs.is_dir(&nested_path));
        assert!(!fs.is_file(&nested_path));
    }

    #[test]
    fn test_real_filesystem_read_nonexistent_file_returns_not_found() {
        let fs = RealFileSystem;
        let err = fs.read(Path::new("/nonexistent/file.js")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_real_filesystem_canonicalize_resolves_dot_segments() {
        let temp_dir = TempDir::new().unwrap();
        let fs = RealFileSystem;
        fs.create_dir_all(&temp_dir.path().join("static")).unwrap();
        fs.write(&temp_dir.path().join("static/main.js"), b"x")
            .unwrap();

        let dotted = temp_dir.path().join("static/../static/./main.js");
        let direct = temp_dir.path().join("static/main.js");
        assert_eq!(
            fs.canonicalize(&dotted).unwrap(),
            fs.canonicalize(&direct).unwrap()
        );
    }
}
