use std::hash::Hash;

use serde::Deserialize;
use serde::Serialize;

/// Represents a bundle or asset type by its extension
///
/// Defaults to `FileType::Js` for convenience.
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum FileType {
  Css,
  Html,
  #[default]
  Js,
  Json,
  Other(String),
}

impl Serialize for FileType {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    self.extension().serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for FileType {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let ext: String = Deserialize::deserialize(deserializer)?;
    Ok(Self::from_extension(&ext))
  }
}

impl FileType {
  pub fn extension(&self) -> &str {
    match self {
      FileType::Css => "css",
      FileType::Html => "html",
      FileType::Js => "js",
      FileType::Json => "json",
      FileType::Other(s) => s.as_str(),
    }
  }

  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "css" => FileType::Css,
      "html" => FileType::Html,
      "js" => FileType::Js,
      "json" => FileType::Json,
      ext => FileType::Other(ext.to_string()),
    }
  }

  /// The output file extensions a bundle of this type may be written with
  ///
  /// JavaScript may also be emitted as an ES module or CommonJS file; every other type only
  /// accepts its own extension.
  ///
  pub fn allowed_extensions(&self) -> Vec<&str> {
    match self {
      FileType::Js => vec!["js", "mjs", "cjs"],
      other => vec![other.extension()],
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn js_allows_module_extensions() {
    assert_eq!(FileType::Js.allowed_extensions(), vec!["js", "mjs", "cjs"]);
  }

  #[test]
  fn other_types_only_allow_their_own_extension() {
    assert_eq!(FileType::Css.allowed_extensions(), vec!["css"]);
    assert_eq!(
      FileType::Other(String::from("wasm")).allowed_extensions(),
      vec!["wasm"]
    );
  }

  #[test]
  fn round_trips_unknown_extensions() {
    let file_type = FileType::from_extension("webmanifest");

    assert_eq!(file_type, FileType::Other(String::from("webmanifest")));
    assert_eq!(file_type.extension(), "webmanifest");
  }
}
