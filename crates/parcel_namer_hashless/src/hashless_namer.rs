use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use namer_core::bundle_graph::BundleGraph;
use namer_core::config_loader::ConfigLoaderRef;
use namer_core::diagnostic_error;
use namer_core::format_markdown;
use namer_core::plugin::NamerPlugin;
use namer_core::plugin::PluginContext;
use namer_core::plugin::PluginOptions;
use namer_core::types::Bundle;
use namer_core::types::CodeFrame;
use namer_core::types::CodeHighlight;
use namer_core::types::DiagnosticBuilder;
use namer_core::types::ErrorKind;
use namer_filesystem::FileSystemRef;
use once_cell::sync::OnceCell;

use crate::hash_stripper::HashStripper;
use crate::hashless_config::HashPolicy;
use crate::hashless_config::HashlessConfig;
use crate::name_from_content::name_from_content;
use crate::name_from_content::relative_path;
use crate::NamerError;

/// Names bundles after their entry assets, then removes the content hash from the name
///
/// The configuration is read from the package.json of the working directory on first use, and
/// shared by every subsequent call, including calls made concurrently for different bundles. The
/// manifest at the host's search path, usually the project root, is never consulted.
///
pub struct HashlessNamer {
  config: OnceCell<HashlessConfig>,
  config_loader: ConfigLoaderRef,
  file_system: FileSystemRef,
  hash_stripper: OnceCell<HashStripper>,
  options: Arc<PluginOptions>,
}

impl fmt::Debug for HashlessNamer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("HashlessNamer")
      .field("config", &self.config.get())
      .field("options", &self.options)
      .finish()
  }
}

impl HashlessNamer {
  pub fn new(ctx: &PluginContext) -> Self {
    HashlessNamer {
      config: OnceCell::new(),
      config_loader: Arc::clone(&ctx.config),
      file_system: Arc::clone(&ctx.file_system),
      hash_stripper: OnceCell::new(),
      options: Arc::clone(&ctx.options),
    }
  }

  fn config(&self) -> Result<&HashlessConfig, anyhow::Error> {
    self.config.get_or_try_init(|| -> Result<HashlessConfig, anyhow::Error> {
      let config_loader = self
        .config_loader
        .with_search_path(self.file_system.cwd()?);

      Ok(HashlessConfig::load(&config_loader)?)
    })
  }

  /// Ensures the output file declared by a target can hold a bundle of the given type
  fn validate_dist_entry(&self, bundle: &Bundle, dist_entry: &Path) -> Result<(), anyhow::Error> {
    let target = &bundle.target;
    let dist_extension = dist_entry
      .extension()
      .and_then(|ext| ext.to_str())
      .unwrap_or_default();

    if bundle
      .bundle_type
      .allowed_extensions()
      .contains(&dist_extension)
    {
      return Ok(());
    }

    let Some(loc) = &target.loc else {
      return Ok(());
    };

    let bundle_type = bundle.bundle_type.extension();
    let full_name = relative_path(
      loc.file_path.parent().unwrap_or(Path::new("")),
      &target.dist_dir.join(dist_entry),
    );

    let config_file = match self.file_system.cwd() {
      Ok(cwd) => relative_path(&cwd, &loc.file_path),
      Err(_) => loc.file_path.clone(),
    };

    Err(diagnostic_error!(DiagnosticBuilder::default()
      .kind(ErrorKind::InvalidConfig)
      .message(format_markdown!(
        "Target \"{}\" declares an output file path of \"{}\" which does not match the compiled bundle type \"{}\".",
        target.name,
        full_name.display(),
        bundle_type
      ))
      .code_frames(vec![CodeFrame {
        code_highlights: vec![CodeHighlight {
          message: Some(format_markdown!(
            "Did you mean \"{}\"?",
            full_name.with_extension(bundle_type).display()
          )),
          start: loc.start.clone(),
          end: loc.end.clone(),
        }],
        ..CodeFrame::from(loc.file_path.clone())
      }])
      .hints(vec![format!(
        "Try changing the file extension of \"{}\" in {}.",
        target.name,
        config_file.display()
      )])))
  }

  fn strip_hash(&self, name: String, config: &HashlessConfig) -> String {
    let hash_stripper = self
      .hash_stripper
      .get_or_init(|| HashStripper::new(config.exclude.as_deref(), config.include.as_deref()));

    match self.file_system.cwd() {
      Ok(cwd) => hash_stripper.strip_hash(&name, &cwd),
      Err(error) => {
        tracing::error!(%name, ?error, "Unable to remove hash from bundle name");
        name
      }
    }
  }
}

impl NamerPlugin for HashlessNamer {
  fn load_config(&self) -> Result<(), anyhow::Error> {
    self.config().map(|_| ())
  }

  fn name(
    &self,
    bundle: &Bundle,
    bundle_graph: &dyn BundleGraph,
  ) -> Result<Option<PathBuf>, anyhow::Error> {
    let config = self.config()?;

    let bundle_group = bundle_graph
      .bundle_groups_containing_bundle(bundle)
      .into_iter()
      .next()
      .ok_or(NamerError::MissingValue("bundle group"))?;

    let bundle_group_bundles = bundle_graph.bundles_in_bundle_group(&bundle_group, true);
    let is_entry = bundle_graph.is_entry_bundle_group(&bundle_group);

    if bundle.needs_stable_name {
      let entry_bundles_of_type = bundle_group_bundles
        .iter()
        .filter(|b| b.needs_stable_name && b.bundle_type == bundle.bundle_type)
        .count();

      if entry_bundles_of_type != 1 {
        return Err(
          NamerError::AmbiguousStableName {
            bundle_type: String::from(bundle.bundle_type.extension()),
          }
          .into(),
        );
      }
    }

    let main_bundle = bundle_group_bundles
      .iter()
      .find(|b| b.entry_asset(&bundle_group.entry_asset_id).is_some())
      .ok_or(NamerError::MissingValue("main bundle"))?;

    if bundle.id == main_bundle.id && is_entry {
      if let Some(dist_entry) = &bundle.target.dist_entry {
        self.validate_dist_entry(bundle, dist_entry)?;

        return Ok(Some(dist_entry.clone()));
      }
    }

    // Split bundles are named after the main bundle of their group, so the css bundle of
    // `index.js` is called `index.css`
    let mut name = name_from_content(
      main_bundle,
      is_entry,
      &bundle_group.entry_asset_id,
      &bundle_graph.entry_root(&bundle.target),
    )?;

    if !bundle.needs_stable_name {
      name = format!("{}.{}", name, bundle.hash_reference);
    }

    let name = format!("{}.{}", name, bundle.bundle_type.extension());

    let name = match config.hash_policy(&self.options.mode) {
      HashPolicy::Defer => return Ok(None),
      HashPolicy::Strip if !bundle.needs_stable_name => self.strip_hash(name, config),
      HashPolicy::Strip | HashPolicy::Keep => name,
    };

    Ok(Some(PathBuf::from(name)))
  }
}
