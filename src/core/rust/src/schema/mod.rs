/* src/core/rust/src/schema/mod.rs */

//! schema.org JSON-LD builders.
//!
//! Each builder returns a plain `Serialize` struct whose JSON form can be
//! embedded verbatim in a `<script type="application/ld+json">` tag.

mod breadcrumb;
mod organization;
mod website;

pub use breadcrumb::{BreadcrumbSchema, Crumb, ListItem};
pub use organization::{OrganizationSchema, PostalAddress};
pub use website::{EntryPoint, SearchAction, WebPageSchema, WebSiteRef, WebSiteSchema};

use serde_json::Value;

use crate::errors::SeoError;
use crate::generator::Generator;
use crate::metadata::PageMetadataInput;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

impl Generator {
  /// All JSON-LD objects for one page: Organization, WebSite, WebPage and,
  /// when `trail` is non-empty, BreadcrumbList.
  pub fn page_graph(
    &self,
    input: &PageMetadataInput,
    trail: &[Crumb],
  ) -> Result<Vec<Value>, SeoError> {
    // Build everything before serializing so a bad trail yields no output.
    let website = self.website_schema(&input.locale)?;
    let webpage = self.webpage_schema(input)?;
    let breadcrumb =
      if trail.is_empty() { None } else { Some(self.breadcrumb_schema(trail, &input.locale)?) };

    let mut graph = vec![
      serde_json::to_value(self.organization_schema())?,
      serde_json::to_value(website)?,
      serde_json::to_value(webpage)?,
    ];
    if let Some(list) = breadcrumb {
      graph.push(serde_json::to_value(list)?);
    }
    Ok(graph)
  }
}
