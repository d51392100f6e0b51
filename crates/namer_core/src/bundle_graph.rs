use std::collections::HashMap;
use std::fmt::Debug;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::types::Bundle;
use crate::types::BundleBehavior;
use crate::types::BundleGroup;
use crate::types::Target;

/// Read access to the host's bundle graph during the naming phase
///
/// The graph is owned by the host bundler. Plugins only ever receive owned snapshots of the
/// records they ask for, so nothing they do can mutate the build.
///
pub trait BundleGraph: Debug + Send + Sync {
  /// Returns the bundle groups the given bundle is a member of
  fn bundle_groups_containing_bundle(&self, bundle: &Bundle) -> Vec<BundleGroup>;

  /// Returns the bundles loaded by a bundle group
  ///
  /// Inline bundles are only included when `include_inline` is set.
  ///
  fn bundles_in_bundle_group(&self, bundle_group: &BundleGroup, include_inline: bool)
    -> Vec<Bundle>;

  /// Whether the bundle group was created for one of the build entries
  fn is_entry_bundle_group(&self, bundle_group: &BundleGroup) -> bool;

  /// The common directory of the entries built for the target
  fn entry_root(&self, target: &Target) -> PathBuf;
}

/// A bundle group along with the ids of the bundles that belong to it
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleGroupNode {
  pub bundle_group: BundleGroup,
  pub bundle_ids: Vec<String>,
  pub is_entry: bool,
}

/// A value copy of the parts of the bundle graph a namer reads
///
/// Hosts serialize this once after bundling; tests build it directly from records.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleGraphSnapshot {
  pub bundles: Vec<Bundle>,
  pub bundle_groups: Vec<BundleGroupNode>,

  /// Entry roots keyed by target name
  pub entry_roots: HashMap<String, PathBuf>,

  /// Used as the entry root of targets missing from `entry_roots`
  pub project_root: PathBuf,
}

impl BundleGraph for BundleGraphSnapshot {
  fn bundle_groups_containing_bundle(&self, bundle: &Bundle) -> Vec<BundleGroup> {
    self
      .bundle_groups
      .iter()
      .filter(|node| node.bundle_ids.contains(&bundle.id))
      .map(|node| node.bundle_group.clone())
      .collect()
  }

  fn bundles_in_bundle_group(
    &self,
    bundle_group: &BundleGroup,
    include_inline: bool,
  ) -> Vec<Bundle> {
    let Some(node) = self
      .bundle_groups
      .iter()
      .find(|node| &node.bundle_group == bundle_group)
    else {
      return Vec::new();
    };

    node
      .bundle_ids
      .iter()
      .filter_map(|id| self.bundles.iter().find(|bundle| &bundle.id == id))
      .filter(|bundle| include_inline || bundle.bundle_behavior != BundleBehavior::Inline)
      .cloned()
      .collect()
  }

  fn is_entry_bundle_group(&self, bundle_group: &BundleGroup) -> bool {
    self
      .bundle_groups
      .iter()
      .any(|node| node.is_entry && &node.bundle_group == bundle_group)
  }

  fn entry_root(&self, target: &Target) -> PathBuf {
    self
      .entry_roots
      .get(&target.name)
      .cloned()
      .unwrap_or_else(|| self.project_root.clone())
  }
}
