/* src/core/rust/src/metadata.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::X_DEFAULT;
use crate::errors::SeoError;
use crate::generator::Generator;
use crate::url::og_locale;

/// Caller-supplied description of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadataInput {
  pub title: String,
  pub description: String,
  pub locale: String,
  /// Site-relative path without the locale segment. Empty for the home page.
  #[serde(default)]
  pub path: String,
}

impl PageMetadataInput {
  pub fn new(
    title: impl Into<String>,
    description: impl Into<String>,
    locale: impl Into<String>,
    path: impl Into<String>,
  ) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      locale: locale.into(),
      path: path.into(),
    }
  }
}

/// Head metadata for one page, shaped like a framework metadata object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
  pub title: String,
  pub description: String,
  pub open_graph: OpenGraph,
  pub twitter: Twitter,
  pub alternates: Alternates,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
  pub title: String,
  pub description: String,
  pub url: String,
  pub site_name: String,
  pub locale: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub alternate_locale: Vec<String>,
  #[serde(rename = "type")]
  pub og_type: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Twitter {
  pub card: String,
  pub title: String,
  pub description: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub site: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub images: Vec<String>,
}

/// Canonical URL plus one URL per supported locale and `x-default`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternates {
  pub canonical: String,
  pub languages: BTreeMap<String, String>,
}

impl Generator {
  /// Build the head metadata object for one page.
  pub fn page_metadata(&self, input: &PageMetadataInput) -> Result<PageMetadata, SeoError> {
    let page = self.resolve(input)?;
    let cfg = self.config();
    let site = &cfg.site;

    let mut languages = BTreeMap::new();
    for locale in cfg.locales() {
      languages.insert(locale.clone(), self.url(locale, &page.path));
    }
    languages.insert(X_DEFAULT.to_string(), self.url(cfg.default_locale(), &page.path));

    let canonical = self.url(page.locale, &page.path);
    let images: Vec<String> = site.image.iter().cloned().collect();
    let alternate_locale = cfg
      .locales()
      .iter()
      .filter(|l| l.as_str() != page.locale)
      .map(|l| og_locale(l))
      .collect();

    Ok(PageMetadata {
      title: page.title.to_string(),
      description: page.description.to_string(),
      open_graph: OpenGraph {
        title: page.title.to_string(),
        description: page.description.to_string(),
        url: canonical.clone(),
        site_name: site.name.clone(),
        locale: og_locale(page.locale),
        alternate_locale,
        og_type: site.og_type.clone(),
        images: images.clone(),
      },
      twitter: Twitter {
        card: site.twitter_card.as_str().to_string(),
        title: page.title.to_string(),
        description: page.description.to_string(),
        site: site.twitter_site.clone(),
        images,
      },
      alternates: Alternates { canonical, languages },
    })
  }
}
