mod fetch;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "brandbase-cli")]
#[command(about = "Brandbase company brand-data pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch brand data from Brand.dev for candidate domains and persist it
    Fetch {
        /// Maximum number of candidate domains to process
        #[arg(long, default_value_t = 10)]
        limit: i64,

        /// Log intended writes without touching the database
        #[arg(long)]
        dry_run: bool,

        /// Process these domains instead of running candidate discovery
        #[arg(long, num_args = 1..)]
        domains: Vec<String>,
    },
    /// Apply pending database migrations
    Migrate,
    /// Seed sample job postings for local development
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = brandbase_core::load_app_config()?;
    init_tracing(&config);

    match cli.command {
        Commands::Fetch {
            limit,
            dry_run,
            domains,
        } => fetch::run_fetch(&config, limit, dry_run, &domains).await,
        Commands::Migrate => run_migrate(&config).await,
        Commands::Seed => run_seed(&config).await,
    }
}

fn init_tracing(config: &brandbase_core::AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn connect(config: &brandbase_core::AppConfig) -> anyhow::Result<sqlx::PgPool> {
    let pool = brandbase_db::connect_pool(
        &config.database_url,
        brandbase_db::PoolConfig::from_app_config(config),
    )
    .await?;
    brandbase_db::health_check(&pool).await?;
    Ok(pool)
}

async fn run_migrate(config: &brandbase_core::AppConfig) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    let applied = brandbase_db::run_migrations(&pool).await?;
    println!("applied {applied} migrations");
    Ok(())
}

async fn run_seed(config: &brandbase_core::AppConfig) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    let seeded = brandbase_db::seed_jobs(&pool).await?;
    println!("seeded {seeded} sample jobs");
    Ok(())
}
