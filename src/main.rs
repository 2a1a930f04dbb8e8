use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scoreline::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "scoreline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.scoreline")]
    data_dir: String,

    /// Keep favorites in memory for this run only
    #[arg(long, global = true)]
    memory_storage: bool,

    /// Base URL of a highlights provider (overrides SCORELINE_HIGHLIGHTS_URL)
    #[arg(long, global = true)]
    highlights_url: Option<String>,

    /// JSON file with a highlights catalog to search locally
    #[arg(long, global = true)]
    highlights_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let data_dir = expand_tilde(&cli.data_dir);
    if !cli.memory_storage {
        std::fs::create_dir_all(&data_dir)?;
    }

    let container = Container::new(ContainerConfig {
        data_dir,
        memory_storage: cli.memory_storage,
        highlights_url: cli.highlights_url,
        highlights_file: cli.highlights_file,
    })
    .await?;

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
