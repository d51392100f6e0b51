use namer_core::config_loader::ConfigError;
use namer_core::config_loader::ConfigLoader;
use namer_core::types::BuildMode;
use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

/// The package.json key the plugin reads its configuration from
pub const CONFIG_KEY: &str = "parcel-namer-hashless";

/// The configured `mode` of the plugin
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StripMode {
  All,
  Development,
  Production,
  Other(String),
}

impl From<&str> for StripMode {
  fn from(mode: &str) -> Self {
    match mode {
      "all" => StripMode::All,
      "development" => StripMode::Development,
      "production" => StripMode::Production,
      _ => StripMode::Other(mode.to_string()),
    }
  }
}

/// What to do with the hash segment of a candidate bundle name
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HashPolicy {
  /// Leave the candidate name untouched
  Keep,
  /// Remove the hash, subject to the include/exclude filters
  Strip,
  /// Do not name the bundle and let the next namer in the pipeline decide
  Defer,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct HashlessConfig {
  #[serde(deserialize_with = "deserialize_mode")]
  pub mode: Option<StripMode>,

  /// Patterns of names that keep their hash; checked before `include`
  #[serde(deserialize_with = "deserialize_patterns")]
  pub exclude: Option<Vec<String>>,

  /// Patterns of names that lose their hash
  ///
  /// When present, the list acts as an allow-list: names matching none of its patterns keep
  /// their hash, even if the list is empty.
  ///
  #[serde(deserialize_with = "deserialize_patterns")]
  pub include: Option<Vec<String>>,
}

impl HashlessConfig {
  /// Reads the configuration from the package.json in the loader's search path
  ///
  /// A missing key, or one that is not a JSON object, results in the default configuration.
  ///
  pub fn load(config_loader: &ConfigLoader) -> Result<Self, ConfigError> {
    let (path, config) = config_loader.load_package_json_config(CONFIG_KEY)?;

    let config = match config {
      Some(config @ Value::Object(_)) => serde_json::from_value::<HashlessConfig>(config)
        .map_err(|source| ConfigError::ParseFailure {
          path: path.clone(),
          source,
        })?,
      _ => HashlessConfig::default(),
    };

    tracing::debug!(path = %path.display(), ?config, "Loaded {} config", CONFIG_KEY);

    Ok(config)
  }

  /// Decides whether names built in the given mode should lose their hash
  ///
  /// Without a configured mode, development builds keep their hashes. Any configured mode
  /// strips hashes in every build mode, except that a configured `all` defers to the next namer
  /// when the build mode itself is called `all`.
  ///
  pub fn hash_policy(&self, build_mode: &BuildMode) -> HashPolicy {
    match &self.mode {
      Some(StripMode::All) if build_mode.as_str() == "all" => HashPolicy::Defer,
      Some(_) => HashPolicy::Strip,
      None if *build_mode == BuildMode::Development => HashPolicy::Keep,
      None => HashPolicy::Strip,
    }
  }
}

fn deserialize_mode<'de, D>(deserializer: D) -> Result<Option<StripMode>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::Null => None,
    Value::String(mode) => Some(StripMode::from(mode.as_str())),
    other => Some(StripMode::Other(other.to_string())),
  })
}

/// Pattern lists are only honoured when they are arrays; anything else counts as unset
fn deserialize_patterns<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::Array(patterns) => Some(
      patterns
        .into_iter()
        .map(|pattern| match pattern {
          Value::String(pattern) => pattern,
          other => other.to_string(),
        })
        .collect(),
    ),
    _ => None,
  })
}
