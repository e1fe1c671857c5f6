/* src/core/rust/src/schema/organization.rs */

use serde::Serialize;

use super::SCHEMA_CONTEXT;
use crate::generator::Generator;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSchema {
  #[serde(rename = "@context")]
  pub context: &'static str,
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub name: String,
  pub url: String,
  pub logo: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub telephone: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub same_as: Vec<String>,
  pub address: PostalAddress,
  pub knows_about: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub street_address: String,
  pub address_locality: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub address_region: Option<String>,
  pub postal_code: String,
  pub address_country: String,
}

impl Generator {
  /// Publisher description. Identical for every page and locale.
  pub fn organization_schema(&self) -> OrganizationSchema {
    let cfg = self.config();
    let org = &cfg.organization;
    let addr = &org.address;
    OrganizationSchema {
      context: SCHEMA_CONTEXT,
      kind: "Organization",
      name: org.name.clone(),
      url: org.url.clone().unwrap_or_else(|| cfg.base_url().to_string()),
      logo: org.logo.clone(),
      email: org.email.clone(),
      telephone: org.telephone.clone(),
      same_as: org.same_as.clone(),
      address: PostalAddress {
        kind: "PostalAddress",
        street_address: addr.street_address.clone(),
        address_locality: addr.locality.clone(),
        address_region: addr.region.clone(),
        postal_code: addr.postal_code.clone(),
        address_country: addr.country.clone(),
      },
      knows_about: org.knows_about.iter().filter(|t| !t.trim().is_empty()).cloned().collect(),
    }
  }
}
