use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// The mode the host bundler is running the build in
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum BuildMode {
  #[default]
  Development,
  Production,
  Other(String),
}

impl BuildMode {
  pub fn as_str(&self) -> &str {
    match self {
      BuildMode::Development => "development",
      BuildMode::Production => "production",
      BuildMode::Other(mode) => mode.as_str(),
    }
  }
}

impl From<&str> for BuildMode {
  fn from(mode: &str) -> Self {
    match mode {
      "development" => BuildMode::Development,
      "production" => BuildMode::Production,
      _ => BuildMode::Other(mode.to_string()),
    }
  }
}

impl<'de> Deserialize<'de> for BuildMode {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;

    Ok(BuildMode::from(s.as_str()))
  }
}

impl Serialize for BuildMode {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    self.as_str().serialize(serializer)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_known_modes() {
    assert_eq!(
      serde_json::from_str::<BuildMode>(r#""production""#).ok(),
      Some(BuildMode::Production)
    );
    assert_eq!(
      serde_json::from_str::<BuildMode>(r#""development""#).ok(),
      Some(BuildMode::Development)
    );
  }

  #[test]
  fn keeps_unknown_modes() {
    assert_eq!(
      serde_json::from_str::<BuildMode>(r#""staging""#).ok(),
      Some(BuildMode::Other(String::from("staging")))
    );
  }
}
