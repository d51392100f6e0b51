use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::normalize_path;
use crate::FileSystem;

/// In memory implementation of the `FileSystem` trait, for testing purposes.
///
/// Relative paths are resolved against the current working directory, which defaults to `/`.
#[derive(Debug)]
pub struct InMemoryFileSystem {
  files: RwLock<HashMap<PathBuf, String>>,
  current_working_directory: RwLock<PathBuf>,
}

impl InMemoryFileSystem {
  /// Change the current working directory. Used for resolving relative paths.
  pub fn set_current_working_directory(&self, cwd: PathBuf) {
    let mut state = self.current_working_directory.write().unwrap();
    *state = cwd;
  }

  /// Write a file at path.
  pub fn write_file(&self, path: &Path, contents: String) {
    let path = self.resolve(path);
    let mut files = self.files.write().unwrap();
    files.insert(path, contents);
  }

  fn resolve(&self, path: &Path) -> PathBuf {
    let cwd = self.current_working_directory.read().unwrap();
    normalize_path(&cwd.join(path))
  }
}

impl Default for InMemoryFileSystem {
  fn default() -> Self {
    Self {
      files: Default::default(),
      current_working_directory: RwLock::new(PathBuf::from("/")),
    }
  }
}

impl FileSystem for InMemoryFileSystem {
  fn cwd(&self) -> std::io::Result<PathBuf> {
    Ok(self.current_working_directory.read().unwrap().clone())
  }

  fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
    let path = self.resolve(path);
    let files = self.files.read().unwrap();

    files.get(&path).cloned().ok_or_else(|| {
      std::io::Error::new(std::io::ErrorKind::NotFound, "File not found")
    })
  }
}
