//! File writers used to persist the auth file.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Writes whole files with a given permission mode.
pub trait FileWriter {
    /// Writes `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be written.
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> std::io::Result<()>;
}

impl<W: FileWriter + ?Sized> FileWriter for &W {
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> std::io::Result<()> {
        (**self).write_file(path, contents, mode)
    }
}

/// Writes to the local filesystem.
///
/// Parent directories are created as needed. On Unix the mode is applied
/// even when the file already exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileWriter;

impl FileWriter for OsFileWriter {
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }

        let mut file = options.open(path)?;
        file.write_all(contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(mode))?;
        }
        #[cfg(not(unix))]
        let _ = mode;

        Ok(())
    }
}

/// A file captured by [`MemoryFileWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// File contents.
    pub contents: Vec<u8>,
    /// Requested permission mode.
    pub mode: u32,
}

/// Keeps written files in memory.
#[derive(Debug, Default)]
pub struct MemoryFileWriter {
    files: Mutex<BTreeMap<PathBuf, WrittenFile>>,
}

impl MemoryFileWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the file written to `path`, if any.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<WrittenFile> {
        self.files.lock().get(path.as_ref()).cloned()
    }

    /// Returns the contents written to `path`, if any.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.get(path).map(|file| file.contents)
    }

    /// Returns the number of distinct files written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.lock().len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.lock().is_empty()
    }
}

impl FileWriter for MemoryFileWriter {
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> std::io::Result<()> {
        self.files.lock().insert(
            path.to_path_buf(),
            WrittenFile {
                contents: contents.to_vec(),
                mode,
            },
        );
        Ok(())
    }
}
