/* src/core/rust/src/config.rs */

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::SeoError;
use crate::url::is_absolute_url;

/// Key used in the alternates map for the language-neutral fallback URL.
pub const X_DEFAULT: &str = "x-default";

/// Static site facts injected into the generator. Loaded once (typically from
/// `pagemeta.toml`) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
  pub site: SiteSection,
  pub i18n: I18nSection,
  pub organization: OrganizationSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
  pub name: String,
  /// Absolute origin, e.g. `https://example.com`. Trailing slashes are ignored.
  pub base_url: String,
  #[serde(default = "default_search_path")]
  pub search_path: String,
  #[serde(default = "default_search_param")]
  pub search_param: String,
  #[serde(default)]
  pub twitter_card: TwitterCard,
  #[serde(default)]
  pub twitter_site: Option<String>,
  #[serde(default = "default_og_type")]
  pub og_type: String,
  /// Absolute URL of the default social preview image.
  #[serde(default)]
  pub image: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
  Summary,
  #[default]
  SummaryLargeImage,
}

impl TwitterCard {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Summary => "summary",
      Self::SummaryLargeImage => "summary_large_image",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nSection {
  pub locales: Vec<String>,
  pub default: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSection {
  pub name: String,
  /// Defaults to the site base URL when omitted.
  #[serde(default)]
  pub url: Option<String>,
  pub logo: String,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub telephone: Option<String>,
  #[serde(default)]
  pub same_as: Vec<String>,
  pub address: AddressSection,
  pub knows_about: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressSection {
  pub street_address: String,
  pub locality: String,
  #[serde(default)]
  pub region: Option<String>,
  pub postal_code: String,
  pub country: String,
}

fn default_search_path() -> String {
  "/search".to_string()
}

fn default_search_param() -> String {
  "q".to_string()
}

fn default_og_type() -> String {
  "website".to_string()
}

fn require_non_empty(value: &str, field: &str) -> Result<(), SeoError> {
  if value.trim().is_empty() {
    return Err(SeoError::config(format!("{field} must not be empty")));
  }
  Ok(())
}

impl SiteConfig {
  /// Base URL without trailing slashes.
  pub fn base_url(&self) -> &str {
    self.site.base_url.trim_end_matches('/')
  }

  pub fn locales(&self) -> &[String] {
    &self.i18n.locales
  }

  pub fn default_locale(&self) -> &str {
    &self.i18n.default
  }

  pub fn supports(&self, locale: &str) -> bool {
    self.i18n.locales.iter().any(|l| l == locale)
  }

  pub fn validate(&self) -> Result<(), SeoError> {
    self.site.validate()?;
    self.i18n.validate()?;
    self.organization.validate()
  }
}

impl SiteSection {
  fn validate(&self) -> Result<(), SeoError> {
    require_non_empty(&self.name, "site.name")?;
    if !is_absolute_url(&self.base_url) {
      return Err(SeoError::config(format!(
        "site.base_url \"{}\" must be an absolute http(s) URL",
        self.base_url
      )));
    }
    if self.base_url.trim_end_matches('/').contains(['?', '#']) {
      return Err(SeoError::config("site.base_url must not carry a query or fragment"));
    }
    if !self.search_path.starts_with('/') {
      return Err(SeoError::config(format!(
        "site.search_path \"{}\" must start with '/'",
        self.search_path
      )));
    }
    require_non_empty(&self.search_param, "site.search_param")?;
    require_non_empty(&self.og_type, "site.og_type")?;
    if let Some(ref image) = self.image
      && !is_absolute_url(image)
    {
      return Err(SeoError::config(format!("site.image \"{image}\" must be an absolute URL")));
    }
    Ok(())
  }
}

impl I18nSection {
  fn validate(&self) -> Result<(), SeoError> {
    if self.locales.is_empty() {
      return Err(SeoError::config("i18n.locales must not be empty"));
    }
    let mut seen = HashSet::new();
    for locale in &self.locales {
      if locale.is_empty() || locale.contains(['/', '?', '#']) || locale.contains(char::is_whitespace)
      {
        return Err(SeoError::config(format!("i18n.locales entry \"{locale}\" is not a locale code")));
      }
      if locale == X_DEFAULT {
        return Err(SeoError::config("\"x-default\" is reserved and cannot be a locale"));
      }
      if !seen.insert(locale.as_str()) {
        return Err(SeoError::config(format!("duplicate locale \"{locale}\" in i18n.locales")));
      }
    }
    if !seen.contains(self.default.as_str()) {
      return Err(SeoError::config(format!(
        "i18n.default \"{}\" is not in i18n.locales {:?}",
        self.default, self.locales
      )));
    }
    Ok(())
  }
}

impl OrganizationSection {
  fn validate(&self) -> Result<(), SeoError> {
    require_non_empty(&self.name, "organization.name")?;
    if !is_absolute_url(&self.logo) {
      return Err(SeoError::config(format!(
        "organization.logo \"{}\" must be an absolute URL",
        self.logo
      )));
    }
    if let Some(ref url) = self.url
      && !is_absolute_url(url)
    {
      return Err(SeoError::config(format!("organization.url \"{url}\" must be an absolute URL")));
    }
    if self.knows_about.iter().all(|t| t.trim().is_empty()) {
      return Err(SeoError::config("organization.knows_about must list at least one topic"));
    }
    let addr = &self.address;
    require_non_empty(&addr.street_address, "organization.address.street_address")?;
    require_non_empty(&addr.locality, "organization.address.locality")?;
    require_non_empty(&addr.postal_code, "organization.address.postal_code")?;
    require_non_empty(&addr.country, "organization.address.country")
  }
}
