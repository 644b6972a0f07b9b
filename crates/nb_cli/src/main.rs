use clap::Parser;
use tracing::info;

use nb_analysis::{BiasAnalyzer, BiasReport};
use nb_core::{Result, ScrapeResult};
use nb_sources::cli::{handle_command, SourceArgs, SourceCommands};
use nb_sources::SourceManager;

#[derive(Parser, Debug)]
#[command(author, version, about = "Political news aggregation and bias scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Query all sources for a topic
    Scrape {
        topic: String,
        /// Only keep articles published within the last N hours
        #[arg(long)]
        hours: Option<i64>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Query all sources for a topic and score the results for bias
    Analyze {
        topic: String,
        /// Only keep articles published within the last N hours
        #[arg(long)]
        hours: Option<i64>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered sources
    Sources,
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let manager = SourceManager::from_env();

    match cli.command {
        Commands::Scrape { topic, hours, json } => {
            let args = SourceArgs {
                command: SourceCommands::Scrape { topic, hours, json },
            };
            handle_command(args, &manager).await?;
        }
        Commands::Analyze { topic, hours, json } => {
            let result = manager.scrape_topic(&topic, hours).await;
            let report = BiasAnalyzer::new().analyze_batch(&result.articles);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&result, &report);
            }
        }
        Commands::Sources => {
            let args = SourceArgs {
                command: SourceCommands::List,
            };
            handle_command(args, &manager).await?;
        }
        Commands::Serve { addr } => {
            let state = nb_web::AppState {
                manager,
                analyzer: BiasAnalyzer::new(),
            };
            let app = nb_web::create_app(state);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("🌐 Serving on {}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

fn print_report(result: &ScrapeResult, report: &BiasReport) {
    println!(
        "Analyzed {} articles for \"{}\"",
        report.total_articles_analyzed, result.topic
    );
    println!("Average bias score: {:.2}", report.average_bias_score);
    let d = &report.bias_distribution;
    println!(
        "Distribution: {} low / {} moderate / {} high / {} very high",
        d.low_bias, d.moderate_bias, d.high_bias, d.very_high_bias
    );
    for analysis in &report.individual_analyses {
        println!(
            "  {:.2} {} - {} ({})",
            analysis.overall_bias_score, analysis.bias_category, analysis.article_title, analysis.source
        );
    }
    for recommendation in &report.overall_recommendations {
        println!("! {}", recommendation);
    }
}
