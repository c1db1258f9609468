use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use issuecollector::projects::read_projects;
use issuecollector::{Collector, CollectorConfig, Config, GitHubClient};

#[derive(Parser, Debug)]
#[command(name = "issuecollector")]
#[command(version = "0.1.0")]
#[command(about = "Collect labeled GitHub issues for a list of projects and export CSV metrics")]
struct Args {
    /// Project list CSV (columns: project_name, github_url, framework)
    #[arg(short, long, default_value = "projects.csv")]
    projects: PathBuf,

    /// Issue state to request (open, closed, all)
    #[arg(long, default_value = "all")]
    state: String,

    /// Directory the CSV exports are written to (defaults to OUTPUT_DIR or ".")
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("issuecollector=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;

    let projects = read_projects(&args.projects)?;
    tracing::info!(
        "Loaded {} projects from {}",
        projects.len(),
        args.projects.display()
    );

    let github = GitHubClient::new(&config.github_token)?;

    let collector_config = CollectorConfig {
        state: args.state,
        output_dir: args
            .output_dir
            .unwrap_or_else(|| PathBuf::from(&config.output_dir)),
        aggregate_file: config.aggregate_file.clone(),
    };

    let collector = Collector::new(github, collector_config);
    collector.run(&projects).await?;

    Ok(())
}
