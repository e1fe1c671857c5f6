/* src/core/rust/src/schema/breadcrumb.rs */

use serde::{Deserialize, Serialize};

use super::SCHEMA_CONTEXT;
use crate::errors::SeoError;
use crate::generator::Generator;
use crate::url::absolute_url;

/// One ancestor reference supplied by the caller, root first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
  pub name: String,
  /// Site-relative path without locale prefix; empty for the locale root.
  #[serde(default)]
  pub url: String,
}

impl Crumb {
  pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
    Self { name: name.into(), url: url.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbSchema {
  #[serde(rename = "@context")]
  pub context: &'static str,
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
  #[serde(rename = "@type")]
  pub kind: &'static str,
  /// 1-based index in the trail.
  pub position: usize,
  pub name: String,
  /// Absolute URL of the crumb.
  pub item: String,
}

impl Generator {
  /// Annotate `trail` with positions and absolute locale URLs.
  ///
  /// Order is preserved as given; nothing is sorted or deduplicated.
  pub fn breadcrumb_schema(
    &self,
    trail: &[Crumb],
    locale: &str,
  ) -> Result<BreadcrumbSchema, SeoError> {
    self.check_locale(locale)?;
    if trail.is_empty() {
      return Err(SeoError::malformed("breadcrumb trail must not be empty"));
    }

    let item_list_element = trail
      .iter()
      .enumerate()
      .map(|(idx, crumb)| {
        let name = crumb.name.trim();
        if name.is_empty() {
          return Err(SeoError::malformed(format!("breadcrumb #{} has an empty name", idx + 1)));
        }
        let item = if crumb.url.contains("://") {
          absolute_url(&crumb.url)?
        } else {
          self.url(locale, &self.normalize(&crumb.url)?)
        };
        Ok(ListItem { kind: "ListItem", position: idx + 1, name: name.to_string(), item })
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(BreadcrumbSchema { context: SCHEMA_CONTEXT, kind: "BreadcrumbList", item_list_element })
  }
}
