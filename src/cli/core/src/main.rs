/* src/cli/core/src/main.rs */

mod config;
mod emit;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagemeta::Generator;

use config::{find_config, load_config};
use emit::{PageArgs, SchemaKind};

#[derive(Parser)]
#[command(name = "pagemeta", about = "Page metadata and JSON-LD generator", version)]
struct Cli {
  /// Path to pagemeta.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Validate pagemeta.toml and print a summary
  Check,
  /// Print the head metadata object for a page as JSON
  Meta {
    #[command(flatten)]
    page: PageArgs,
  },
  /// Print one JSON-LD object (or the whole page graph)
  Schema {
    #[arg(value_enum)]
    kind: SchemaKind,
    #[command(flatten)]
    page: PageArgs,
  },
  /// Print head tags and JSON-LD script tags for a page
  Head {
    #[command(flatten)]
    page: PageArgs,
  },
  /// Inject head output into an HTML document
  Inject {
    /// HTML template to read
    #[arg(long)]
    html: PathBuf,
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
    #[command(flatten)]
    page: PageArgs,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, Generator)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_config(&cwd)?
    }
  };
  let config = load_config(&path)?;
  let generator = Generator::new(config)?;
  Ok((path, generator))
}

fn run_check(path: &Path, generator: &Generator) {
  let cfg = generator.config();
  ui::banner("check");
  ui::ok(&format!("{} is valid", path.display()));
  ui::detail(&format!("site: {} ({})", cfg.site.name, cfg.base_url()));
  ui::detail(&format!("locales: {} (default {})", cfg.locales().join(", "), cfg.default_locale()));
  ui::detail(&format!("organization: {}", cfg.organization.name));
  if cfg.site.image.is_none() {
    ui::warn("site.image is not set; social previews will have no image");
  }
}

fn run(cli: Cli) -> Result<()> {
  let (path, generator) = resolve_config(cli.config)?;

  match cli.command {
    Command::Check => run_check(&path, &generator),
    Command::Meta { page } => {
      println!("{}", emit::metadata_json(&generator, &page)?);
    }
    Command::Schema { kind, page } => {
      println!("{}", emit::schema_json(&generator, kind, &page)?);
    }
    Command::Head { page } => {
      println!("{}", emit::head_html(&generator, &page)?);
    }
    Command::Inject { html, out, page } => {
      let template = std::fs::read_to_string(&html)
        .with_context(|| format!("failed to read {}", html.display()))?;
      let result = emit::inject_document(&generator, &page, &template)?;
      match out {
        Some(out) => {
          std::fs::write(&out, result)
            .with_context(|| format!("failed to write {}", out.display()))?;
          ui::arrow(&format!("{} -> {}", html.display(), out.display()));
        }
        None => print!("{result}"),
      }
    }
  }
  Ok(())
}

fn main() {
  let cli = Cli::parse();
  if let Err(err) = run(cli) {
    ui::fail(&format!("{err:#}"));
    std::process::exit(1);
  }
}
