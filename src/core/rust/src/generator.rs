/* src/core/rust/src/generator.rs */

use crate::config::SiteConfig;
use crate::errors::SeoError;
use crate::metadata::PageMetadataInput;
use crate::url::{locale_url, normalize_path};

/// Stateless metadata and JSON-LD generator bound to one validated site config.
///
/// Every method is a pure function of the config and its arguments, so a single
/// instance can be shared across threads and render calls.
#[derive(Debug, Clone)]
pub struct Generator {
  config: SiteConfig,
}

/// Input that passed validation, with its path normalized.
#[derive(Debug)]
pub(crate) struct ResolvedPage<'a> {
  pub(crate) title: &'a str,
  pub(crate) description: &'a str,
  pub(crate) locale: &'a str,
  pub(crate) path: String,
}

impl Generator {
  pub fn new(config: SiteConfig) -> Result<Self, SeoError> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &SiteConfig {
    &self.config
  }

  pub(crate) fn check_locale(&self, locale: &str) -> Result<(), SeoError> {
    if self.config.supports(locale) {
      Ok(())
    } else {
      Err(SeoError::invalid_locale(locale, self.config.locales()))
    }
  }

  pub(crate) fn normalize(&self, path: &str) -> Result<String, SeoError> {
    normalize_path(path, self.config.locales())
  }

  /// Absolute URL of `normalized_path` under `locale`.
  pub(crate) fn url(&self, locale: &str, normalized_path: &str) -> String {
    locale_url(self.config.base_url(), locale, normalized_path)
  }

  /// Public form of [`Self::url`] that validates both locale and path first.
  pub fn page_url(&self, locale: &str, path: &str) -> Result<String, SeoError> {
    self.check_locale(locale)?;
    let path = self.normalize(path)?;
    Ok(self.url(locale, &path))
  }

  pub(crate) fn resolve<'a>(
    &self,
    input: &'a PageMetadataInput,
  ) -> Result<ResolvedPage<'a>, SeoError> {
    self.check_locale(&input.locale)?;
    let title = input.title.trim();
    if title.is_empty() {
      return Err(SeoError::malformed("title must not be empty"));
    }
    let description = input.description.trim();
    if description.is_empty() {
      return Err(SeoError::malformed("description must not be empty"));
    }
    let path = self.normalize(&input.path)?;
    Ok(ResolvedPage { title, description, locale: &input.locale, path })
  }
}
