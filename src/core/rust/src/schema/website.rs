/* src/core/rust/src/schema/website.rs */

use serde::Serialize;

use super::SCHEMA_CONTEXT;
use crate::errors::SeoError;
use crate::generator::Generator;
use crate::metadata::PageMetadataInput;

const SEARCH_TERM: &str = "search_term_string";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteSchema {
  #[serde(rename = "@context")]
  pub context: &'static str,
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub name: String,
  pub url: String,
  pub in_language: String,
  pub potential_action: SearchAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchAction {
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub target: EntryPoint,
  #[serde(rename = "query-input")]
  pub query_input: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub url_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPageSchema {
  #[serde(rename = "@context")]
  pub context: &'static str,
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub name: String,
  pub description: String,
  pub url: String,
  pub in_language: String,
  pub is_part_of: WebSiteRef,
}

/// Type-tagged pointer to the site, embedded by value in each WebPage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebSiteRef {
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub name: String,
  pub url: String,
}

impl Generator {
  pub fn website_schema(&self, locale: &str) -> Result<WebSiteSchema, SeoError> {
    self.check_locale(locale)?;
    let site = &self.config().site;
    let root = self.url(locale, "");
    let url_template =
      format!("{root}{}?{}={{{SEARCH_TERM}}}", site.search_path, site.search_param);
    Ok(WebSiteSchema {
      context: SCHEMA_CONTEXT,
      kind: "WebSite",
      name: site.name.clone(),
      url: root,
      in_language: locale.to_string(),
      potential_action: SearchAction {
        kind: "SearchAction",
        target: EntryPoint { kind: "EntryPoint", url_template },
        query_input: format!("required name={SEARCH_TERM}"),
      },
    })
  }

  pub fn webpage_schema(&self, input: &PageMetadataInput) -> Result<WebPageSchema, SeoError> {
    let page = self.resolve(input)?;
    Ok(WebPageSchema {
      context: SCHEMA_CONTEXT,
      kind: "WebPage",
      name: page.title.to_string(),
      description: page.description.to_string(),
      url: self.url(page.locale, &page.path),
      in_language: page.locale.to_string(),
      is_part_of: WebSiteRef {
        kind: "WebSite",
        name: self.config().site.name.clone(),
        url: self.url(page.locale, ""),
      },
    })
  }
}

#[cfg(test)]
mod tests {
  use crate::tests::fixture_generator;
  use crate::PageMetadataInput;

  #[test]
  fn website_in_language_matches_request() {
    let generator = fixture_generator();
    for locale in generator.config().locales() {
      let site = generator.website_schema(locale).unwrap();
      assert_eq!(&site.in_language, locale);
      assert_eq!(site.kind, "WebSite");
    }
  }

  #[test]
  fn website_search_action() {
    let value = serde_json::to_value(fixture_generator().website_schema("fr").unwrap()).unwrap();
    assert_eq!(value["url"], "https://acme.test/fr");
    assert_eq!(value["inLanguage"], "fr");
    assert_eq!(value["potentialAction"]["@type"], "SearchAction");
    assert_eq!(
      value["potentialAction"]["target"]["urlTemplate"],
      "https://acme.test/fr/search?q={search_term_string}"
    );
    assert_eq!(value["potentialAction"]["query-input"], "required name=search_term_string");
  }

  #[test]
  fn website_rejects_unknown_locale() {
    let err = fixture_generator().website_schema("de").unwrap_err();
    assert_eq!(err.code(), "INVALID_LOCALE");
  }

  #[test]
  fn webpage_is_part_of_website() {
    let generator = fixture_generator();
    let input = PageMetadataInput::new("Pricing", "Plans and prices", "zh-CN", "/pricing/");
    let page = generator.webpage_schema(&input).unwrap();
    assert_eq!(page.is_part_of.kind, "WebSite");
    assert_eq!(page.url, "https://acme.test/zh-CN/pricing");
    assert_eq!(page.in_language, "zh-CN");

    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["@type"], "WebPage");
    assert_eq!(value["isPartOf"]["@type"], "WebSite");
    assert_eq!(value["isPartOf"]["url"], "https://acme.test/zh-CN");
    assert!(value["isPartOf"].get("@context").is_none());
  }

  #[test]
  fn webpage_rejects_blank_description() {
    let input = PageMetadataInput::new("Pricing", " ", "en", "/pricing");
    let err = fixture_generator().webpage_schema(&input).unwrap_err();
    assert_eq!(err.code(), "MALFORMED_INPUT");
  }
}
