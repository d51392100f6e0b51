use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

/// An asset executed when its bundle loads
///
/// Only the fields a namer reads are carried over from the host.
///
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
  /// The asset id
  pub id: String,

  /// The file path of the asset source
  pub file_path: PathBuf,
}
