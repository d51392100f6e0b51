use std::path::Path;

use namer_filesystem::normalize_path;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum StripError {
  #[error("Invalid pattern {pattern:?}")]
  InvalidPattern {
    pattern: String,
    #[source]
    source: regex::Error,
  },
  #[error("{0} does not contain a hash segment")]
  MissingHashSegment(String),
}

/// A regular expression compiled once, together with the source it was compiled from
///
/// Malformed patterns are kept as their compile error, so that they fail the names they are
/// tested against rather than the whole configuration.
///
#[derive(Debug)]
struct Pattern {
  source: String,
  regex: Result<Regex, regex::Error>,
}

impl Pattern {
  fn new(source: &str) -> Self {
    Pattern {
      source: String::from(source),
      regex: Regex::new(source),
    }
  }

  fn is_match(&self, pathname: &str) -> Result<bool, StripError> {
    match &self.regex {
      Ok(regex) => Ok(regex.is_match(pathname)),
      Err(source) => Err(StripError::InvalidPattern {
        pattern: self.source.clone(),
        source: source.clone(),
      }),
    }
  }
}

/// Removes the hash segment from bundle names, as allowed by the include and exclude patterns
///
/// The hash is the second to last `.` separated segment of the name, between the base name and
/// the extension. Patterns are regular expressions matched against the hash-free name resolved
/// against `cwd`, with forward slashes as separators.
///
/// - a name matching an `exclude` pattern keeps its hash
/// - otherwise a name matching an `include` pattern loses its hash
/// - otherwise the name keeps its hash if `include` is set, and loses it if not
///
#[derive(Debug)]
pub struct HashStripper {
  exclude: Option<Vec<Pattern>>,
  include: Option<Vec<Pattern>>,
}

impl HashStripper {
  pub fn new(exclude: Option<&[String]>, include: Option<&[String]>) -> Self {
    let compile = |patterns: &[String]| {
      patterns.iter().map(|p| Pattern::new(p)).collect::<Vec<_>>()
    };

    HashStripper {
      exclude: exclude.map(compile),
      include: include.map(compile),
    }
  }

  /// Removes the hash from `name`
  ///
  /// This never fails: when the hash cannot be removed the error is logged and the name is
  /// returned untouched.
  ///
  pub fn strip_hash(&self, name: &str, cwd: &Path) -> String {
    match self.try_strip_hash(name, cwd) {
      Ok(stripped) => {
        if stripped != name {
          tracing::debug!("{} -> {}", name, stripped);
        }

        stripped
      }
      Err(error) => {
        tracing::error!(%name, ?error, "Unable to remove hash from bundle name");
        String::from(name)
      }
    }
  }

  fn try_strip_hash(&self, name: &str, cwd: &Path) -> Result<String, StripError> {
    let stripped = remove_hash_segment(name)?;
    let pathname = normalize_path(&cwd.join(&stripped))
      .to_string_lossy()
      .replace('\\', "/");

    if matches_any(self.exclude.as_deref(), &pathname)? {
      return Ok(String::from(name));
    }

    if matches_any(self.include.as_deref(), &pathname)? {
      return Ok(stripped);
    }

    if self.include.is_some() {
      return Ok(String::from(name));
    }

    Ok(stripped)
  }
}

fn remove_hash_segment(name: &str) -> Result<String, StripError> {
  let mut segments = name.split('.').collect::<Vec<_>>();

  if segments.len() < 3 {
    return Err(StripError::MissingHashSegment(String::from(name)));
  }

  segments.remove(segments.len() - 2);

  Ok(segments.join("."))
}

fn matches_any(patterns: Option<&[Pattern]>, pathname: &str) -> Result<bool, StripError> {
  for pattern in patterns.unwrap_or_default() {
    if pattern.is_match(pathname)? {
      return Ok(true);
    }
  }

  Ok(false)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn patterns(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| String::from(*p)).collect()
  }

  fn strip(name: &str, exclude: Option<Vec<String>>, include: Option<Vec<String>>) -> String {
    HashStripper::new(exclude.as_deref(), include.as_deref()).strip_hash(name, Path::new("/app"))
  }

  #[test]
  fn strips_the_hash_without_filters() {
    assert_eq!(strip("index.a1b2c3.js", None, None), "index.js");
    assert_eq!(strip("pages/about.HASH_REF_1.css", None, None), "pages/about.css");
  }

  #[test]
  fn only_removes_the_hash_segment() {
    assert_eq!(strip("vendor.min.a1b2c3.js", None, None), "vendor.min.js");
  }

  #[test]
  fn keeps_the_hash_of_excluded_names() {
    let exclude = Some(patterns(&["^/app/vendor/"]));

    assert_eq!(
      strip("vendor/react.a1b2c3.js", exclude.clone(), None),
      "vendor/react.a1b2c3.js"
    );
    assert_eq!(
      strip("vendor/react.a1b2c3.js", exclude, Some(patterns(&["react"]))),
      "vendor/react.a1b2c3.js"
    );
  }

  #[test]
  fn strips_the_hash_of_names_not_excluded() {
    assert_eq!(
      strip("index.a1b2c3.js", Some(patterns(&["^/app/vendor/"])), None),
      "index.js"
    );
  }

  #[test]
  fn strips_the_hash_of_included_names() {
    assert_eq!(
      strip("index.a1b2c3.js", None, Some(patterns(&["\\.css$", "\\.js$"]))),
      "index.js"
    );
  }

  #[test]
  fn keeps_the_hash_of_names_not_included() {
    assert_eq!(
      strip("index.a1b2c3.js", None, Some(patterns(&["\\.css$"]))),
      "index.a1b2c3.js"
    );
  }

  #[test]
  fn treats_an_empty_include_list_as_an_allow_list() {
    assert_eq!(
      strip("index.a1b2c3.js", None, Some(Vec::new())),
      "index.a1b2c3.js"
    );
  }

  #[test]
  fn matches_against_the_resolved_path() {
    let include = Some(patterns(&["^/app/assets/logo\\.svg$"]));

    assert_eq!(
      strip("./assets/../assets/logo.a1b2c3.svg", None, include),
      "./assets/../assets/logo.svg"
    );
  }

  #[test]
  fn keeps_the_name_when_a_pattern_is_invalid() {
    assert_eq!(
      strip("index.a1b2c3.js", Some(patterns(&["(unclosed"])), None),
      "index.a1b2c3.js"
    );
    assert_eq!(
      strip("index.a1b2c3.js", None, Some(patterns(&["["]))),
      "index.a1b2c3.js"
    );
  }

  #[test]
  fn stops_at_the_first_matching_pattern() {
    assert_eq!(
      strip("index.a1b2c3.js", None, Some(patterns(&["index", "("]))),
      "index.js"
    );
  }

  #[test]
  fn reuses_compiled_patterns_across_names() {
    let stripper = HashStripper::new(
      Some(patterns(&["^/app/vendor/", "("]).as_slice()),
      Some(patterns(&["\\.js$"]).as_slice()),
    );
    let cwd = Path::new("/app");

    assert_eq!(stripper.strip_hash("vendor/react.a1b2c3.js", cwd), "vendor/react.a1b2c3.js");
    assert_eq!(stripper.strip_hash("index.a1b2c3.js", cwd), "index.a1b2c3.js");
    assert_eq!(stripper.strip_hash("pages/about.d4e5f6.js", cwd), "pages/about.d4e5f6.js");

    let stripper = HashStripper::new(None, Some(patterns(&["\\.js$", "("]).as_slice()));

    assert_eq!(stripper.strip_hash("index.a1b2c3.js", cwd), "index.js");
    assert_eq!(stripper.strip_hash("pages/about.d4e5f6.js", cwd), "pages/about.js");
    assert_eq!(stripper.strip_hash("index.a1b2c3.css", cwd), "index.a1b2c3.css");
  }

  #[test]
  fn keeps_names_without_a_hash_segment() {
    assert_eq!(strip("index.js", None, None), "index.js");
    assert_eq!(strip("index", None, None), "index");
  }
}
