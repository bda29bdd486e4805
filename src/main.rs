// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use page_navigator::utils::logging::{format_link, format_success};
use page_navigator::{Config, Navigator};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "page_navigator")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Find library website pages that answer a question", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all published pages and report what was indexed
    Rebuild,

    /// Rank pages against a query and print scores
    Search {
        /// Search query text
        query: String,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Answer a visitor message the way the chat widget would
    Ask {
        message: String,

        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    page_navigator::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using environment only",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    let navigator = Navigator::from_config(config.clone()).context("Failed to create index")?;

    match cli.command {
        Commands::Rebuild => cmd_rebuild(&navigator).await?,
        Commands::Search { query, limit } => {
            let limit = limit.unwrap_or(config.index.top_k);
            cmd_search(&navigator, &query, limit).await?;
        }
        Commands::Ask { message, json } => cmd_ask(&navigator, &message, json).await?,
    }

    Ok(())
}

async fn cmd_rebuild(navigator: &Navigator) -> Result<()> {
    let start_time = Instant::now();

    navigator
        .index()
        .rebuild()
        .await
        .context("Index rebuild failed")?;

    println!(
        "{}",
        format_success(&format!(
            "Indexed {} pages in {:.2}s",
            navigator.index().len(),
            start_time.elapsed().as_secs_f64()
        ))
    );

    Ok(())
}

async fn cmd_search(navigator: &Navigator, query: &str, limit: usize) -> Result<()> {
    navigator
        .ensure_fresh()
        .await
        .context("Failed to build index")?;

    let results = navigator.index().search_scored(query, limit);

    if results.is_empty() {
        println!("\nNo pages matched: \"{}\"\n", query);
        return Ok(());
    }

    println!("\nSearch Results for: \"{}\"\n", query);
    println!("{}", "=".repeat(80));
    for result in &results {
        println!("{}", result.format_summary(160));
    }
    println!("{}", "=".repeat(80));

    Ok(())
}

async fn cmd_ask(navigator: &Navigator, message: &str, json: bool) -> Result<()> {
    let reply = navigator
        .answer(message)
        .await
        .context("Failed to answer message")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    println!("\n{}\n", reply.reply);
    for (rank, link) in reply.links.iter().enumerate() {
        println!("{}", format_link(rank + 1, &link.title, &link.url));
    }

    Ok(())
}
