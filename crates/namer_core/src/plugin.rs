use std::sync::Arc;

mod namer_plugin;
pub use namer_plugin::*;

use namer_filesystem::FileSystemRef;

use crate::config_loader::ConfigLoaderRef;
use crate::types::BuildMode;

/// Everything the host hands a plugin when it is initialised
pub struct PluginContext {
  pub config: ConfigLoaderRef,
  pub file_system: FileSystemRef,
  pub options: Arc<PluginOptions>,
}

#[derive(Debug, Default)]
pub struct PluginOptions {
  /// The mode the build is running in
  pub mode: BuildMode,
}
