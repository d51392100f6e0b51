use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Lexically normalizes a path, without touching the file-system
///
/// `.` segments are dropped and `..` segments pop the previous normal segment. Leading `..`
/// segments of a relative path are kept, while `..` above the root is discarded.
///
pub fn normalize_path(path: &Path) -> PathBuf {
  let mut result: Vec<Component> = Vec::new();

  for component in path.components() {
    match component {
      Component::Prefix(_) | Component::RootDir => result.push(component),
      Component::CurDir => {}
      Component::ParentDir => match result.last() {
        Some(Component::Normal(_)) => {
          result.pop();
        }
        Some(Component::Prefix(_)) | Some(Component::RootDir) => {}
        _ => result.push(component),
      },
      Component::Normal(_) => result.push(component),
    }
  }

  PathBuf::from_iter(result)
}
