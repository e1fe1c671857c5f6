/* src/head/rust/src/tests/mod.rs */

use pagemeta::{Generator, SiteConfig};

pub(crate) fn fixture_generator() -> Generator {
  let config: SiteConfig = serde_json::from_value(serde_json::json!({
    "site": { "name": "Acme", "base_url": "https://acme.test", "twitter_site": "@acme" },
    "i18n": { "locales": ["en", "fr"], "default": "en" },
    "organization": {
      "name": "Acme Studio",
      "logo": "https://acme.test/logo.png",
      "address": {
        "street_address": "1 Main St",
        "locality": "Springfield",
        "postal_code": "12345",
        "country": "US"
      },
      "knows_about": ["web design"]
    }
  }))
  .unwrap();
  Generator::new(config).unwrap()
}
