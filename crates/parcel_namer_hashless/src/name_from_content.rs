use std::path::Path;
use std::path::PathBuf;

use namer_core::types::Bundle;
use namer_filesystem::normalize_path;
use pathdiff::diff_paths;

use crate::NamerError;

/// Derives the name of a bundle from the entry asset of its bundle group
///
/// Entry bundles whose target declares an output file are named after that file. Every other
/// bundle is named after the path of its entry asset relative to the entry root, with parent
/// directory traversals replaced by `up_` so the name cannot escape the dist directory.
///
/// The returned name has neither a hash nor an extension.
///
pub fn name_from_content(
  bundle: &Bundle,
  is_entry: bool,
  entry_asset_id: &str,
  entry_root: &Path,
) -> Result<String, NamerError> {
  let entry_file_path = &bundle
    .entry_asset(entry_asset_id)
    .ok_or(NamerError::MissingValue("entry asset"))?
    .file_path;

  if is_entry {
    if let Some(dist_entry) = &bundle.target.dist_entry {
      return Ok(basename_without_extension(dist_entry));
    }
  }

  let entry_dir = entry_file_path.parent().unwrap_or(Path::new(""));
  let name = relative_path(entry_root, entry_dir).join(basename_without_extension(entry_file_path));

  Ok(
    name
      .to_string_lossy()
      .replace("../", "up_/")
      .replace("..\\", "up_\\"),
  )
}

pub(crate) fn basename_without_extension(path: &Path) -> String {
  path
    .file_stem()
    .map(|stem| stem.to_string_lossy().into_owned())
    .unwrap_or_default()
}

/// The path of `to` relative to `from`, after normalizing both
pub(crate) fn relative_path(from: &Path, to: &Path) -> PathBuf {
  let from = normalize_path(from);
  let to = normalize_path(to);

  diff_paths(&to, &from).unwrap_or(to)
}
