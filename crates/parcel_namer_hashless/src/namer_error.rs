use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NamerError {
  /// Naming both bundles after the entry would produce the same file name twice
  #[error("Bundle group cannot have more than one entry bundle of the same type")]
  AmbiguousStableName { bundle_type: String },

  /// The host handed over a graph that breaks its own invariants
  #[error("Required value missing: {0}")]
  MissingValue(&'static str),
}
