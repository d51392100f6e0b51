use std::io::Result;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// In-memory file-system for testing
pub mod in_memory_file_system;

/// File-system implementation backed by std::fs
#[cfg(not(target_arch = "wasm32"))]
pub mod os_file_system;

mod normalize_path;
pub use normalize_path::normalize_path;

pub type FileSystemRef = Arc<dyn FileSystem + Send + Sync>;

/// Trait abstracting the file-system reads a plugin is allowed to perform
///
/// Plugins receive the file-system from the host rather than reaching for `std::fs` and
/// `std::env::current_dir` directly, so that naming decisions can be tested without touching disk.
///
pub trait FileSystem {
  fn cwd(&self) -> Result<PathBuf> {
    Err(std::io::Error::new(
      std::io::ErrorKind::Other,
      "Not implemented",
    ))
  }
  fn read_to_string(&self, path: &Path) -> Result<String>;
}
