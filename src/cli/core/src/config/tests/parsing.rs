/* src/cli/core/src/config/tests/parsing.rs */

use super::*;
use pagemeta::TwitterCard;

#[test]
fn parse_minimal_config() {
  let config = parse_config(MINIMAL, "pagemeta.toml").unwrap();
  assert_eq!(config.site.name, "Acme");
  assert_eq!(config.i18n.locales, vec!["en", "fr"]);
  assert_eq!(config.default_locale(), "en");
  assert_eq!(config.site.search_path, "/search");
  assert_eq!(config.site.twitter_card, TwitterCard::SummaryLargeImage);
  assert!(config.organization.address.region.is_none());
}

#[test]
fn parse_full_site_section() {
  let toml_str = MINIMAL.replace(
    "base_url = \"https://acme.test\"",
    r#"base_url = "https://acme.test/"
search_path = "/find"
search_param = "query"
twitter_card = "summary"
twitter_site = "@acme"
image = "https://acme.test/og.png""#,
  );
  let config = parse_config(&toml_str, "pagemeta.toml").unwrap();
  assert_eq!(config.base_url(), "https://acme.test");
  assert_eq!(config.site.search_path, "/find");
  assert_eq!(config.site.search_param, "query");
  assert_eq!(config.site.twitter_card, TwitterCard::Summary);
  assert_eq!(config.site.twitter_site.as_deref(), Some("@acme"));
}

#[test]
fn parse_rejects_unknown_twitter_card() {
  let toml_str = MINIMAL.replace(
    "base_url = \"https://acme.test\"",
    "base_url = \"https://acme.test\"\ntwitter_card = \"player\"",
  );
  let err = parse_config(&toml_str, "site.toml").unwrap_err();
  assert!(err.to_string().contains("failed to parse site.toml"));
}

#[test]
fn parse_missing_section() {
  let err = parse_config("[site]\nname = \"x\"\nbase_url = \"https://x.test\"\n", "a.toml")
    .unwrap_err();
  assert!(err.to_string().contains("failed to parse a.toml"));
}

#[test]
fn validation_error_carries_context() {
  let toml_str = MINIMAL.replace("default = \"en\"", "default = \"ja\"");
  let err = parse_config(&toml_str, "pagemeta.toml").unwrap_err();
  assert!(err.to_string().contains("invalid config in pagemeta.toml"));
  let chain = format!("{err:#}");
  assert!(chain.contains("\"ja\""));
  assert!(chain.contains("INVALID_CONFIG"));
}
