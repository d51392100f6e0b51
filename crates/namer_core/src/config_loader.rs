use std::path::PathBuf;
use std::sync::Arc;

use namer_filesystem::FileSystemRef;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type ConfigLoaderRef = Arc<ConfigLoader>;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Failed to parse {path}")]
  ParseFailure {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
  #[error("Failed to read {path}")]
  ReadConfigFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Enables plugins to load JSON config from a single directory
///
/// Only the search path itself is read. Ancestor directories are never consulted, so a loader
/// pointed at a workspace member reads that member's manifest rather than the repository root's.
///
pub struct ConfigLoader {
  pub fs: FileSystemRef,
  pub search_path: PathBuf,
}

impl ConfigLoader {
  /// Creates a loader reading from another directory with the same file-system
  pub fn with_search_path(&self, search_path: PathBuf) -> ConfigLoader {
    ConfigLoader {
      fs: Arc::clone(&self.fs),
      search_path,
    }
  }

  pub fn load_json_config<Config: DeserializeOwned>(
    &self,
    filename: &str,
  ) -> Result<(PathBuf, Config), ConfigError> {
    let config_path = self.search_path.join(filename);
    let config = self
      .fs
      .read_to_string(&config_path)
      .map_err(|source| ConfigError::ReadConfigFile {
        path: config_path.clone(),
        source,
      })?;

    let config =
      serde_json::from_str::<Config>(&config).map_err(|source| ConfigError::ParseFailure {
        path: config_path.clone(),
        source,
      })?;

    Ok((config_path, config))
  }

  /// Loads the value stored under `key` in package.json, if any
  pub fn load_package_json_config(
    &self,
    key: &str,
  ) -> Result<(PathBuf, Option<serde_json::Value>), ConfigError> {
    let (config_path, mut package_json) =
      self.load_json_config::<serde_json::Value>("package.json")?;
    let config = package_json
      .as_object_mut()
      .and_then(|package_json| package_json.remove(key));

    Ok((config_path, config))
  }
}

#[cfg(test)]
mod tests {
  use namer_filesystem::in_memory_file_system::InMemoryFileSystem;
  use serde_json::json;

  use super::*;

  fn config_loader(fs: InMemoryFileSystem, search_path: PathBuf) -> ConfigLoader {
    ConfigLoader {
      fs: Arc::new(fs),
      search_path,
    }
  }

  mod load_json_config {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct JsonConfig {
      enabled: bool,
    }

    #[test]
    fn returns_an_error_when_the_config_does_not_exist() {
      let search_path = PathBuf::from("/project-root");
      let config = config_loader(InMemoryFileSystem::default(), search_path.clone());

      assert_eq!(
        config
          .load_json_config::<JsonConfig>("config.json")
          .map_err(|err| err.to_string()),
        Err(format!(
          "Failed to read {}",
          search_path.join("config.json").display()
        ))
      )
    }

    #[test]
    fn does_not_search_ancestor_directories() {
      let fs = InMemoryFileSystem::default();
      let project_root = PathBuf::from("/project-root");
      let search_path = project_root.join("packages").join("app");

      fs.write_file(
        &project_root.join("config.json"),
        String::from(r#"{ "enabled": true }"#),
      );

      let config = config_loader(fs, search_path);

      assert!(matches!(
        config.load_json_config::<JsonConfig>("config.json"),
        Err(ConfigError::ReadConfigFile { .. })
      ));
    }

    #[test]
    fn returns_an_error_when_the_config_is_malformed() {
      let fs = InMemoryFileSystem::default();
      let search_path = PathBuf::from("/project-root");
      let config_path = search_path.join("config.json");

      fs.write_file(&config_path, String::from("{ enabled: "));

      let config = config_loader(fs, search_path);

      assert_eq!(
        config
          .load_json_config::<JsonConfig>("config.json")
          .map_err(|err| err.to_string()),
        Err(format!("Failed to parse {}", config_path.display()))
      )
    }

    #[test]
    fn returns_json_config_at_search_path() {
      let fs = InMemoryFileSystem::default();
      let search_path = PathBuf::from("/project-root");
      let config_path = search_path.join("config.json");

      fs.write_file(&config_path, String::from(r#"{ "enabled": true }"#));

      let config = config_loader(fs, search_path);

      assert_eq!(
        config
          .load_json_config::<JsonConfig>("config.json")
          .map_err(|err| err.to_string()),
        Ok((config_path, JsonConfig { enabled: true }))
      )
    }
  }

  mod load_package_json_config {
    use super::*;

    #[test]
    fn reads_the_manifest_of_another_search_path() {
      let fs = InMemoryFileSystem::default();
      let project_root = PathBuf::from("/project-root");
      let app_dir = project_root.join("packages").join("app");

      fs.write_file(
        &project_root.join("package.json"),
        String::from(r#"{ "plugin": "root" }"#),
      );
      fs.write_file(
        &app_dir.join("package.json"),
        String::from(r#"{ "plugin": "app" }"#),
      );

      let config = config_loader(fs, project_root).with_search_path(app_dir.clone());

      assert_eq!(
        config
          .load_package_json_config("plugin")
          .map_err(|err| err.to_string()),
        Ok((app_dir.join("package.json"), Some(json!("app"))))
      )
    }

    #[test]
    fn returns_none_when_the_key_does_not_exist() {
      let fs = InMemoryFileSystem::default();
      let search_path = PathBuf::from("/project-root");
      let package_path = search_path.join("package.json");

      fs.write_file(&package_path, String::from(r#"{ "name": "app" }"#));

      let config = config_loader(fs, search_path);

      assert_eq!(
        config
          .load_package_json_config("plugin")
          .map_err(|err| err.to_string()),
        Ok((package_path, None))
      )
    }

    #[test]
    fn returns_none_when_package_json_is_not_an_object() {
      let fs = InMemoryFileSystem::default();
      let search_path = PathBuf::from("/project-root");
      let package_path = search_path.join("package.json");

      fs.write_file(&package_path, String::from("[]"));

      let config = config_loader(fs, search_path);

      assert_eq!(
        config
          .load_package_json_config("plugin")
          .map_err(|err| err.to_string()),
        Ok((package_path, None))
      )
    }

    #[test]
    fn returns_the_config_key() {
      let fs = InMemoryFileSystem::default();
      let search_path = PathBuf::from("/project-root");
      let package_path = search_path.join("package.json");

      fs.write_file(
        &package_path,
        String::from(r#"{ "name": "app", "plugin": { "enabled": true } }"#),
      );

      let config = config_loader(fs, search_path);

      assert_eq!(
        config
          .load_package_json_config("plugin")
          .map_err(|err| err.to_string()),
        Ok((package_path, Some(json!({ "enabled": true }))))
      )
    }
  }
}
