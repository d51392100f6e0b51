use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use derive_builder::Builder;
use serde::Deserialize;
use serde::Serialize;

use super::file_type::FileType;
use super::source::Location;

/// This is a user facing error for the bundler.
///
/// Usually but not always this is linked to a source-code location.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, thiserror::Error)]
#[builder(default, setter(into))]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct Diagnostic {
  /// A list of files with source-code highlights
  pub code_frames: Vec<CodeFrame>,

  /// URL for the user to refer to documentation
  #[serde(rename = "documentationURL")]
  pub documentation_url: Option<String>,

  /// Hints for the user
  pub hints: Vec<String>,

  /// Indicates the type of error
  pub kind: ErrorKind,

  /// A summary user-facing message
  pub message: String,

  /// The plugin/module this diagnostic was emitted from
  pub origin: Option<String>,
}

impl DiagnosticBuilder {
  /// Finishes the diagnostic and wraps it into an error for the host
  ///
  /// Prefer the `diagnostic_error!` macro, which fills in the origin with the calling module.
  ///
  #[doc(hidden)]
  pub fn into_error(&mut self, origin: &str) -> anyhow::Error {
    match self.origin(Some(String::from(origin))).build() {
      Ok(diagnostic) => anyhow::Error::new(diagnostic),
      Err(error) => anyhow::Error::new(error),
    }
  }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
  /// The user configuration cannot produce a valid build
  InvalidConfig,
  #[default]
  Unknown,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFrame {
  /// Source-code of the file at the time of error
  pub code: Option<String>,

  /// List of source-code highlight messages
  pub code_highlights: Vec<CodeHighlight>,

  /// File-path of this source-file if applicable
  pub file_path: Option<PathBuf>,

  /// The file-type for this path
  pub language: Option<FileType>,
}

impl From<PathBuf> for CodeFrame {
  fn from(path: PathBuf) -> Self {
    let language = path
      .extension()
      .map(|ext| FileType::from_extension(&ext.to_string_lossy()));

    CodeFrame {
      code: None,
      code_highlights: Vec::new(),
      file_path: Some(path),
      language,
    }
  }
}

/// A message around a source-code range
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CodeHighlight {
  pub message: Option<String>,
  pub start: Location,
  pub end: Location,
}

/// Creates an `anyhow::Error` wrapping a `Diagnostic`
///
/// Accepts either a format string, or a `DiagnosticBuilder` expression. The origin of the
/// diagnostic is set to the module the macro is invoked from.
///
/// ```
/// use namer_core::diagnostic_error;
/// use namer_core::types::DiagnosticBuilder;
///
/// let error = diagnostic_error!("Unable to name {}", "index.js");
/// let error = diagnostic_error!(DiagnosticBuilder::default().message("Unable to name bundle"));
/// ```
#[macro_export]
macro_rules! diagnostic_error {
  ($fmt:literal $(, $arg:expr)* $(,)?) => {
    $crate::types::DiagnosticBuilder::default()
      .message(format!($fmt $(, $arg)*))
      .into_error(module_path!())
  };
  ($diagnostic:expr) => {
    $diagnostic.into_error(module_path!())
  };
}

/// Formats a value with the markdown control characters `*`, `_`, `~` and `\\` escaped
pub struct EscapeMarkdown<'a, T>(pub &'a T);

pub fn escape_markdown(s: &str) -> Cow<'_, str> {
  let mut result = Cow::Borrowed("");
  let mut start = 0;
  for (index, matched) in s.match_indices(&['*', '_', '~', '\\']) {
    result += &s[start..index];
    result += "\\";
    result += matched;
    start = index + 1;
  }

  result += &s[start..];
  result
}

impl<'a, T: fmt::Display> fmt::Display for EscapeMarkdown<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let res = format!("{}", self.0);
    fmt::Display::fmt(&escape_markdown(&res), f)
  }
}

/// Like `format!`, but escapes markdown in every interpolated argument
#[macro_export]
macro_rules! format_markdown {
  ($s:literal $(, $arg:expr)* $(,)?) => {
    format!($s $(, $crate::types::EscapeMarkdown(&$arg))*)
  };
}
