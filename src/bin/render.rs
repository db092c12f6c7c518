//! CLI tool that renders the storefront chrome to stdout.
//!
//! Uses the same configuration as the server (`NAV_VARIANT`, `BRAND_NAME`,
//! `NAV_EXTRA_LINKS`), with an optional per-invocation variant override.
//!
//! # Usage
//!
//! ```bash
//! # Full HTML document around some content
//! cargo run --bin render -- page --content "<p>Welcome</p>"
//!
//! # Same page with the responsive navigation bar
//! cargo run --bin render -- --variant responsive page
//!
//! # Navigation links, in display order
//! cargo run --bin render -- nav
//!
//! # Footer copyright line
//! cargo run --bin render -- footer
//! ```

use storefront::config;
use storefront::domain::entities::NavVariant;
use storefront::server::layout_from_config;
use storefront::web::views;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// Render storefront chrome without starting the server.
#[derive(Parser)]
#[command(name = "render")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Navigation variant to use instead of NAV_VARIANT (simple | responsive)
    #[arg(short, long, global = true)]
    variant: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a full HTML page
    Page {
        /// HTML fragment for the content slot
        #[arg(short, long, default_value = "")]
        content: String,
    },

    /// List navigation links
    Nav,

    /// Print the footer notice
    Footer,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(variant) = cli.variant {
        config.nav_variant = variant
            .parse::<NavVariant>()
            .context("Invalid --variant")?;
    }

    let layout = layout_from_config(&config);

    match cli.command {
        Commands::Page { content } => {
            let page = layout.render_page(content);
            let html = views::render_html(&page).context("Failed to render page")?;
            println!("{html}");
        }
        Commands::Nav => {
            let nav = layout.navigation_bar();
            println!(
                "{} {}",
                nav.brand().name().bright_white().bold(),
                format!("({} navigation)", nav.variant()).dimmed()
            );
            for (i, link) in nav.links().iter().enumerate() {
                println!(
                    "  {}. {} {} {}",
                    i + 1,
                    link.label().cyan(),
                    "->".dimmed(),
                    link.target().yellow()
                );
            }
        }
        Commands::Footer => {
            println!("{}", layout.footer().notice().to_string().green());
        }
    }

    Ok(())
}
