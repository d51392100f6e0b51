//! Host-facing model of the bundler, as seen by a namer plugin
//!
//! Everything here is a read-only snapshot of state owned by the host bundler.

pub mod bundle_graph;
pub mod config_loader;
pub mod plugin;
pub mod types;
