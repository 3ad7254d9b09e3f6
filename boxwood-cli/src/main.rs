//! Boxwood CLI
//!
//! Parses CSS declarations, computes them against an optional parent, and
//! prints the resulting box-model values.
//!
//! Examples:
//!   boxwood 'margin: 0 auto; height: 50%'
//!   boxwood --parent 'height: 12px' 'height: inherit' --json
//!   boxwood --file style.css --tokens

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use boxwood_common::warning::{set_quiet, warning_count};
use boxwood_css::{
    BoxEdges, CacheConfig, ComputeContext, ComputedBox, ParserRegistry, ResourceCache,
    SpecifiedStyle, compute_box, parse_style, tokenize,
};
use clap::Parser;
use owo_colors::OwoColorize;

/// Parse CSS declarations and print the computed box.
#[derive(Parser, Debug)]
#[command(name = "boxwood", version, about)]
struct Cli {
    /// Declarations to compute, e.g. "margin: 0 auto; height: 50%".
    declarations: Option<String>,

    /// Read the declarations from a file instead.
    #[arg(short, long, conflicts_with = "declarations")]
    file: Option<PathBuf>,

    /// Declarations of the parent element, used to resolve `inherit`.
    #[arg(long)]
    parent: Option<String>,

    /// JSON file with `dpi`, `default_font_size` and `ex_ratio`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured DPI.
    #[arg(long)]
    dpi: Option<f32>,

    /// Override the configured font size, in pixels.
    #[arg(long)]
    font_size: Option<f32>,

    /// Treat the containing block's height as `auto`.
    #[arg(long)]
    cb_height_auto: bool,

    /// Print the tokens of the declarations.
    #[arg(short, long)]
    tokens: bool,

    /// Print the computed box as JSON.
    #[arg(short, long)]
    json: bool,

    /// Do not print warnings about dropped declarations.
    #[arg(short, long)]
    quiet: bool,
}

fn load_config(cli: &Cli) -> Result<CacheConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            CacheConfig::from_json(&text)?
        }
        None => CacheConfig::default(),
    };
    if let Some(dpi) = cli.dpi {
        config.dpi = dpi;
    }
    if let Some(font_size) = cli.font_size {
        config.default_font_size = font_size;
    }
    Ok(config)
}

fn print_specified(style: &SpecifiedStyle) {
    println!("{}", "=== Specified ===".bold());
    if style.is_empty() {
        println!("  (none)");
    }
    for value in style.values() {
        let name = value.name();
        let important = if style.is_important(name) { " !important" } else { "" };
        println!("  {}: {value}{important}", name.cyan());
    }
}

fn print_edges<T: Display>(name: &str, edges: &BoxEdges<T>) {
    println!(
        "  {}: {} {} {} {}",
        name.cyan(),
        edges.top,
        edges.right,
        edges.bottom,
        edges.left
    );
}

fn print_computed(computed: &ComputedBox) {
    println!("{}", "=== Computed ===".bold());
    print_edges("margin", &computed.margin);
    print_edges("border-width", &computed.border);
    print_edges("padding", &computed.padding);
    println!("  {}: {}", "width".cyan(), computed.width);
    println!("  {}: {}", "height".cyan(), computed.height);
    println!("  {}: {}", "min-width".cyan(), computed.min_width);
    println!("  {}: {}", "min-height".cyan(), computed.min_height);
    println!("  {}: {}", "max-width".cyan(), computed.max_width);
    println!("  {}: {}", "max-height".cyan(), computed.max_height);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    let cache = ResourceCache::new(load_config(&cli)?)?;
    let registry = ParserRegistry::standard()?;

    let text = match (&cli.declarations, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        (None, None) => bail!("no declarations given (pass them as an argument or use --file)"),
    };

    if cli.tokens {
        let tokens = tokenize(&text);
        println!("{}", format!("=== Tokens ({}) ===", tokens.len()).bold());
        for (i, token) in tokens.iter().enumerate() {
            println!("  {i:3}: {token}");
        }
    }

    let root_ctx = ComputeContext::new(&cache);
    let parent = cli
        .parent
        .as_deref()
        .map(|parent| compute_box(&parse_style(&registry, parent), None, &root_ctx));

    let specified = parse_style(&registry, &text);
    let ctx = root_ctx.with_containing_block_height_auto(cli.cb_height_auto);
    let computed = compute_box(&specified, parent.as_ref(), &ctx);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&computed)?);
    } else {
        print_specified(&specified);
        print_computed(&computed);
    }

    let warnings = warning_count();
    if warnings > 0 && !cli.quiet {
        eprintln!("{}", format!("{warnings} warning(s)").dimmed());
    }

    Ok(())
}
