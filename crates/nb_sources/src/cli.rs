use clap::{Args, Subcommand};

use nb_core::Result;

use crate::SourceManager;

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[command(subcommand)]
    pub command: SourceCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SourceCommands {
    /// Query all sources for a topic and print the merged result
    Scrape {
        /// Free-text topic to search for
        topic: String,
        /// Only keep articles published within the last N hours
        #[arg(long)]
        hours: Option<i64>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered sources and whether they are configured
    List,
}

pub async fn handle_command(args: SourceArgs, manager: &SourceManager) -> Result<()> {
    match args.command {
        SourceCommands::Scrape { topic, hours, json } => {
            let result = manager.scrape_topic(&topic, hours).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "Found {} articles for \"{}\" ({})",
                    result.total_articles, result.topic, result.time_range
                );
                for article in &result.articles {
                    println!(
                        "  [{}] {} - {}",
                        article.api_source, article.published_at, article.title
                    );
                }
                if !result.sources_used.is_empty() {
                    println!("Sources used: {}", result.sources_used.join(", "));
                }
            }
        }
        SourceCommands::List => {
            println!("Available sources:");
            for source in manager.sources() {
                let status = if source.is_configured() {
                    "configured"
                } else {
                    "missing API key"
                };
                println!("  - {} ({})", source.name(), status);
            }
        }
    }
    Ok(())
}
