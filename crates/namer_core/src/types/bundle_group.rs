use serde::Deserialize;
use serde::Serialize;

use super::target::Target;

/// Bundles that load together because they share one entry point
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleGroup {
  /// The asset the group was created for
  pub entry_asset_id: String,

  pub target: Target,
}
