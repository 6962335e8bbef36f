//! # storefront
//!
//! Command line front end for the storefront page.
//!
//! ```bash
//! # Static page from the builtin catalog
//! storefront render --out index.html
//!
//! # Custom catalog, opened on a category
//! storefront render --catalog products.json --selection Electronics --out index.html
//!
//! # What the grid would show
//! storefront list --selection Clothing --json
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use storefront::{Catalog, Product, RenderOptions, Selection, render_storefront};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Render the storefront page and inspect its catalog")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the static storefront page
    Render(RenderArgs),
    /// Print the products visible under a selection
    List(ListArgs),
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// JSON array of products (defaults to the builtin catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Category to select ("All" shows everything)
    #[arg(short, long, default_value = "All")]
    selection: Selection,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Document title
    #[arg(long, default_value = "Storefront")]
    title: String,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

// ============================================================================
// Commands
// ============================================================================

/// Visible products as printed by `list --json`.
#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    selection: String,
    count: usize,
    products: &'a [Product],
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;
    info!("Loaded {} products from {:?}", catalog.len(), path);
    Ok(catalog)
}

fn render(args: &RenderArgs) -> Result<String> {
    let catalog = load_catalog(args.catalog.catalog.as_deref())?;
    let options = RenderOptions {
        title: args.title.clone(),
        initial_selection: args.catalog.selection.clone(),
    };
    Ok(render_storefront(&catalog, &options))
}

fn list(args: &ListArgs) -> Result<String> {
    let catalog = load_catalog(args.catalog.catalog.as_deref())?;
    let selection = &args.catalog.selection;
    let visible = catalog.visible(selection);

    if args.json {
        let response = ListResponse {
            selection: selection.to_string(),
            count: visible.len(),
            products: &visible,
        };
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    if visible.is_empty() {
        return Ok("No products available in this category.\n".to_string());
    }
    let mut out = String::new();
    for product in &visible {
        writeln!(
            out,
            "{:>4}  {:<28} {:>10}  {}",
            product.id, product.name, product.price, product.category
        )?;
    }
    Ok(out)
}

fn write_output(html: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, html)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            info!("Page written to {:?} ({} bytes)", path, html.len());
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout may carry the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("storefront v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Render(args) => {
            let html = render(args)?;
            write_output(&html, args.out.as_deref())?;
        }
        Command::List(args) => print!("{}", list(args)?),
    }
    Ok(())
}
