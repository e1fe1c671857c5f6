/* src/core/rust/src/lib.rs */

pub mod config;
pub mod errors;
pub mod generator;
pub mod metadata;
pub mod schema;
pub mod url;

// Re-exports for ergonomic use
pub use config::{
  AddressSection, I18nSection, OrganizationSection, SiteConfig, SiteSection, TwitterCard, X_DEFAULT,
};
pub use errors::SeoError;
pub use generator::Generator;
pub use metadata::{Alternates, OpenGraph, PageMetadata, PageMetadataInput, Twitter};
pub use schema::{
  BreadcrumbSchema, Crumb, ListItem, OrganizationSchema, PostalAddress, SCHEMA_CONTEXT,
  WebPageSchema, WebSiteSchema,
};

#[cfg(test)]
mod tests;
