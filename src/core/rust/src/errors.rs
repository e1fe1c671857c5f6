/* src/core/rust/src/errors.rs */

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeoError {
  /// Requested locale is not one of the configured locales.
  InvalidLocale { locale: String, supported: Vec<String> },
  /// Blank title/description, locale-prefixed path, empty breadcrumb trail.
  MalformedInput(String),
  /// Site configuration failed validation.
  InvalidConfig(String),
  /// Output could not be encoded as JSON.
  Serialize(String),
}

impl SeoError {
  pub fn invalid_locale(locale: impl Into<String>, supported: &[String]) -> Self {
    Self::InvalidLocale { locale: locale.into(), supported: supported.to_vec() }
  }

  pub fn malformed(msg: impl Into<String>) -> Self {
    Self::MalformedInput(msg.into())
  }

  pub fn config(msg: impl Into<String>) -> Self {
    Self::InvalidConfig(msg.into())
  }

  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidLocale { .. } => "INVALID_LOCALE",
      Self::MalformedInput(_) => "MALFORMED_INPUT",
      Self::InvalidConfig(_) => "INVALID_CONFIG",
      Self::Serialize(_) => "SERIALIZE_ERROR",
    }
  }

  pub fn message(&self) -> String {
    match self {
      Self::InvalidLocale { locale, supported } => {
        format!("locale \"{locale}\" is not supported (expected one of {supported:?})")
      }
      Self::MalformedInput(msg) | Self::InvalidConfig(msg) | Self::Serialize(msg) => msg.clone(),
    }
  }
}

impl fmt::Display for SeoError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code(), self.message())
  }
}

impl std::error::Error for SeoError {}

impl From<serde_json::Error> for SeoError {
  fn from(err: serde_json::Error) -> Self {
    Self::Serialize(err.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_are_stable() {
    assert_eq!(SeoError::invalid_locale("de", &[]).code(), "INVALID_LOCALE");
    assert_eq!(SeoError::malformed("x").code(), "MALFORMED_INPUT");
    assert_eq!(SeoError::config("x").code(), "INVALID_CONFIG");
    assert_eq!(SeoError::Serialize("x".into()).code(), "SERIALIZE_ERROR");
  }

  #[test]
  fn invalid_locale_lists_supported() {
    let err = SeoError::invalid_locale("de", &["en".into(), "fr".into()]);
    let text = err.to_string();
    assert!(text.starts_with("INVALID_LOCALE: "));
    assert!(text.contains("\"de\""));
    assert!(text.contains("\"fr\""));
  }

  #[test]
  fn display_format() {
    let err = SeoError::malformed("title must not be empty");
    assert_eq!(err.to_string(), "MALFORMED_INPUT: title must not be empty");
  }

  #[test]
  fn from_serde_error() {
    let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SeoError::from(bad);
    assert_eq!(err.code(), "SERIALIZE_ERROR");
  }
}
