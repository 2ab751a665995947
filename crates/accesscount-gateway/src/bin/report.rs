//! Operator report CLI.
//!
//! `accesscount-report pv --days 7` prints the daily PV table;
//! `accesscount-report endpoints --days 7` prints per-day endpoint
//! rankings. `--url` overrides the configured redis URL; with neither
//! available, reporting fails loudly.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use accesscount_core::error::Result;
use accesscount_gateway::{config, report, store};

#[derive(Parser)]
#[command(name = "accesscount-report", about = "Access counter reports")]
struct Cli {
    /// Config file; defaults apply when the file does not exist.
    #[arg(long, default_value = "accesscount.yaml")]
    config: String,

    /// Redis URL override.
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Daily page-view totals with a trailing average.
    Pv {
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Per-day endpoint rankings.
    Endpoints {
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
}

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = if std::path::Path::new(&cli.config).exists() {
        config::load_from_file(&cli.config)?
    } else {
        config::AppConfig::default()
    };

    let url = cli.url.as_deref().or(cfg.access_count.redis_url.as_deref());
    let store = store::resolve_store(url, None).await?;
    let keys = cfg.access_count.keys();

    match cli.cmd {
        Command::Pv { days } => report::report_pv(store.as_ref(), &keys, days).await,
        Command::Endpoints { days } => {
            report::report_endpoints(store.as_ref(), &keys, days).await
        }
    }
}
