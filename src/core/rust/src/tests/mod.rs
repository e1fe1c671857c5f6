/* src/core/rust/src/tests/mod.rs */


use crate::{Generator, SiteConfig};

pub(crate) fn fixture_config() -> SiteConfig {
  serde_json::from_value(serde_json::json!({
    "site": {
      "name": "Acme",
      "base_url": "https://acme.test/",
      "twitter_site": "@acme",
      "image": "https://acme.test/og.png"
    },
    "i18n": { "locales": ["en", "fr", "zh-CN"], "default": "en" },
    "organization": {
      "name": "Acme Studio",
      "logo": "https://acme.test/logo.png",
      "same_as": ["https://github.com/acme"],
      "address": {
        "street_address": "1 Main St",
        "locality": "Springfield",
        "postal_code": "12345",
        "country": "US"
      },
      "knows_about": ["web design", "localization"]
    }
  }))
  .unwrap()
}

pub(crate) fn fixture_generator() -> Generator {
  Generator::new(fixture_config()).unwrap()
}
