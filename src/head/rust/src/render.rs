/* src/head/rust/src/render.rs */

use pagemeta::{PageMetadata, SeoError};
use serde::Serialize;

use crate::escape::{escape_html, escape_json_for_script};

fn meta_name(out: &mut String, name: &str, content: &str) {
  out.push_str(&format!(
    r#"<meta name="{}" content="{}">"#,
    escape_html(name),
    escape_html(content)
  ));
}

fn meta_property(out: &mut String, property: &str, content: &str) {
  out.push_str(&format!(
    r#"<meta property="{}" content="{}">"#,
    escape_html(property),
    escape_html(content)
  ));
}

/// Serialize a metadata object into head tags.
///
/// Order: title, description, canonical, hreflang alternates, Open Graph,
/// Twitter. Every value is HTML-escaped.
pub fn render_head_meta(meta: &PageMetadata) -> String {
  let mut out = String::new();
  out.push_str(&format!("<title>{}</title>", escape_html(&meta.title)));
  meta_name(&mut out, "description", &meta.description);

  out.push_str(&format!(
    r#"<link rel="canonical" href="{}">"#,
    escape_html(&meta.alternates.canonical)
  ));
  for (lang, href) in &meta.alternates.languages {
    out.push_str(&format!(
      r#"<link rel="alternate" hreflang="{}" href="{}">"#,
      escape_html(lang),
      escape_html(href)
    ));
  }

  let og = &meta.open_graph;
  meta_property(&mut out, "og:title", &og.title);
  meta_property(&mut out, "og:description", &og.description);
  meta_property(&mut out, "og:url", &og.url);
  meta_property(&mut out, "og:site_name", &og.site_name);
  meta_property(&mut out, "og:locale", &og.locale);
  for alt in &og.alternate_locale {
    meta_property(&mut out, "og:locale:alternate", alt);
  }
  meta_property(&mut out, "og:type", &og.og_type);
  for image in &og.images {
    meta_property(&mut out, "og:image", image);
  }

  let tw = &meta.twitter;
  meta_name(&mut out, "twitter:card", &tw.card);
  meta_name(&mut out, "twitter:title", &tw.title);
  meta_name(&mut out, "twitter:description", &tw.description);
  if let Some(ref site) = tw.site {
    meta_name(&mut out, "twitter:site", site);
  }
  for image in &tw.images {
    meta_name(&mut out, "twitter:image", image);
  }
  out
}

/// Wrap one JSON-LD object in a `<script type="application/ld+json">` tag.
pub fn json_ld_script<T: Serialize + ?Sized>(node: &T) -> Result<String, SeoError> {
  let json = serde_json::to_string(node)?;
  Ok(format!(r#"<script type="application/ld+json">{}</script>"#, escape_json_for_script(&json)))
}

/// One script tag per node, concatenated in order.
pub fn json_ld_scripts<T: Serialize>(nodes: &[T]) -> Result<String, SeoError> {
  nodes.iter().map(json_ld_script).collect()
}
