use serde::Deserialize;
use serde::Serialize;
use serde_repr::Deserialize_repr;
use serde_repr::Serialize_repr;

use super::asset::Asset;
use super::file_type::FileType;
use super::target::Target;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
  /// Controls the behavior of the bundle to determine when the bundle loads
  pub bundle_behavior: BundleBehavior,

  /// The type of the bundle
  #[serde(rename = "type")]
  pub bundle_type: FileType,

  /// The assets executed immediately when the bundle is loaded
  ///
  /// Some bundles may not have any entry assets, like shared bundles.
  ///
  pub entry_assets: Vec<Asset>,

  /// A placeholder for the bundle content hash
  ///
  /// Hash references are replaced with a content hash of the bundle after packaging and
  /// optimizing.
  ///
  pub hash_reference: String,

  /// The bundle id
  pub id: String,

  /// Indicates that the name should be stable over time, even when the content of the bundle
  /// changes
  pub needs_stable_name: bool,

  /// The output target for the bundle
  pub target: Target,
}

impl Bundle {
  /// Finds the entry asset with the given id
  pub fn entry_asset(&self, asset_id: &str) -> Option<&Asset> {
    self.entry_assets.iter().find(|asset| asset.id == asset_id)
  }
}

/// Determines when the bundle loads
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum BundleBehavior {
  /// Embeds an asset into the parent bundle by creating an inline bundle
  Inline = 0,

  /// The asset will be isolated from its parents in a separate bundle, and shared assets will be
  /// duplicated
  Isolated = 1,

  /// Unspecified bundling behavior
  #[default]
  None = 255,
}
