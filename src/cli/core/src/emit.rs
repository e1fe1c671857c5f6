/* src/cli/core/src/emit.rs */

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use pagemeta::{Crumb, Generator, PageMetadataInput};
use pagemeta_head::{inject_page_head, json_ld_scripts, render_head_meta};
use serde_json::Value;

/// Page description shared by every page-level command.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
  /// Page title
  #[arg(short, long)]
  pub title: Option<String>,
  /// Page description
  #[arg(short, long)]
  pub description: Option<String>,
  /// Locale code (defaults to i18n.default)
  #[arg(short, long)]
  pub locale: Option<String>,
  /// Site-relative path without locale prefix; empty for home
  #[arg(short, long, default_value = "")]
  pub path: String,
  /// Breadcrumb entry as NAME=PATH, root first (repeatable)
  #[arg(long = "crumb", value_name = "NAME=PATH")]
  pub crumbs: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
  Organization,
  Website,
  Webpage,
  Breadcrumb,
  /// Every node for the page, as a JSON array
  Graph,
}

impl PageArgs {
  pub fn locale<'a>(&'a self, generator: &'a Generator) -> &'a str {
    self.locale.as_deref().unwrap_or_else(|| generator.config().default_locale())
  }

  pub fn input(&self, generator: &Generator) -> Result<PageMetadataInput> {
    let (Some(title), Some(description)) = (&self.title, &self.description) else {
      bail!("--title and --description are required for page output");
    };
    Ok(PageMetadataInput::new(
      title.as_str(),
      description.as_str(),
      self.locale(generator),
      self.path.as_str(),
    ))
  }

  pub fn trail(&self) -> Result<Vec<Crumb>> {
    self.crumbs.iter().map(|c| parse_crumb(c)).collect()
  }
}

/// `Home=` -> (Home, ""), `About=/about` -> (About, /about).
pub fn parse_crumb(raw: &str) -> Result<Crumb> {
  let Some((name, url)) = raw.rsplit_once('=') else {
    bail!("invalid --crumb \"{raw}\": expected NAME=PATH");
  };
  Ok(Crumb::new(name.trim(), url.trim()))
}

fn pretty(value: &impl serde::Serialize) -> Result<String> {
  serde_json::to_string_pretty(value).context("failed to encode JSON")
}

pub fn metadata_json(generator: &Generator, page: &PageArgs) -> Result<String> {
  let meta = generator.page_metadata(&page.input(generator)?)?;
  pretty(&meta)
}

pub fn schema_json(generator: &Generator, kind: SchemaKind, page: &PageArgs) -> Result<String> {
  let locale = page.locale(generator);
  match kind {
    SchemaKind::Organization => pretty(&generator.organization_schema()),
    SchemaKind::Website => pretty(&generator.website_schema(locale)?),
    SchemaKind::Webpage => pretty(&generator.webpage_schema(&page.input(generator)?)?),
    SchemaKind::Breadcrumb => pretty(&generator.breadcrumb_schema(&page.trail()?, locale)?),
    SchemaKind::Graph => pretty(&graph(generator, page)?),
  }
}

fn graph(generator: &Generator, page: &PageArgs) -> Result<Vec<Value>> {
  Ok(generator.page_graph(&page.input(generator)?, &page.trail()?)?)
}

/// Head fragment: meta/link tags followed by JSON-LD scripts.
pub fn head_html(generator: &Generator, page: &PageArgs) -> Result<String> {
  let meta = generator.page_metadata(&page.input(generator)?)?;
  let scripts = json_ld_scripts(&graph(generator, page)?)?;
  Ok(format!("{}{scripts}", render_head_meta(&meta)))
}

pub fn inject_document(generator: &Generator, page: &PageArgs, html: &str) -> Result<String> {
  let input = page.input(generator)?;
  let meta = generator.page_metadata(&input)?;
  let graph = graph(generator, page)?;
  if !html.contains("</head>") {
    bail!("template has no </head>; nothing to inject into");
  }
  Ok(inject_page_head(html, &meta, &input.locale, &graph)?)
}
