use std::fmt::Debug;
use std::path::PathBuf;

use crate::bundle_graph::BundleGraph;
use crate::types::Bundle;

/// Determines the output filename for a bundle
///
/// Namers run in a pipeline until one returns a result. The host may name independent bundles
/// concurrently, so implementations must not rely on exclusive access.
///
pub trait NamerPlugin: Debug + Send + Sync {
  /// A hook designed to setup config needed for naming bundles
  ///
  /// This function will run once, shortly after the plugin is initialised.
  ///
  fn load_config(&self) -> Result<(), anyhow::Error>;

  /// Names the given bundle
  ///
  /// The returned file path should be relative to the target dist directory, and will be used to
  /// name the bundle. Naming can be forwarded onto the next plugin by returning None.
  ///
  fn name(
    &self,
    bundle: &Bundle,
    bundle_graph: &dyn BundleGraph,
  ) -> Result<Option<PathBuf>, anyhow::Error>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug)]
  struct TestNamerPlugin {}

  impl NamerPlugin for TestNamerPlugin {
    fn load_config(&self) -> Result<(), anyhow::Error> {
      Ok(())
    }

    fn name(
      &self,
      bundle: &Bundle,
      _bundle_graph: &dyn BundleGraph,
    ) -> Result<Option<PathBuf>, anyhow::Error> {
      Ok(Some(PathBuf::from(&bundle.id)))
    }
  }

  #[test]
  fn can_be_defined_in_dyn_vec() {
    let mut namers = Vec::<Box<dyn NamerPlugin>>::new();

    namers.push(Box::new(TestNamerPlugin {}));

    assert_eq!(namers.len(), 1);
  }
}
