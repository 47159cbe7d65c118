//! User Service - CLI for exercising the in-memory user store.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::{UserFilter, UserId};
use user_service_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "In-memory user store")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create users concurrently and report assigned ids
    Seed {
        #[command(flatten)]
        seed: SeedArgs,
    },
    /// Seed users, then print those matching a filter as JSON
    Query {
        #[command(flatten)]
        seed: SeedArgs,
        /// Only users with this active flag
        #[arg(long)]
        active: Option<bool>,
        /// Inclusive lower id bound
        #[arg(long)]
        min_id: Option<UserId>,
        /// Inclusive upper id bound
        #[arg(long)]
        max_id: Option<UserId>,
        /// Case-sensitive name fragment
        #[arg(long, default_value = "")]
        name_like: String,
    },
}

#[derive(Args)]
struct SeedArgs {
    /// Number of users to create
    #[arg(long, env = "USER_SERVICE_SEED_USERS")]
    count: Option<usize>,
    /// Number of concurrent tasks
    #[arg(long, env = "USER_SERVICE_WORKERS")]
    workers: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UserServiceConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.service.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Seed { seed } => {
            let (count, workers) = seed.resolve(&config);
            let report = user_service_lib::run_seed(count, workers).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Query {
            seed,
            active,
            min_id,
            max_id,
            name_like,
        } => {
            let (count, workers) = seed.resolve(&config);
            let filter = UserFilter {
                active,
                min_id,
                max_id,
                name_like,
            };
            let users = user_service_lib::run_query(count, workers, &filter).await?;
            println!("{}", serde_json::to_string_pretty(&users)?);
        }
    }

    Ok(())
}

impl SeedArgs {
    fn resolve(&self, config: &UserServiceConfig) -> (usize, usize) {
        (
            self.count.unwrap_or(config.seed_users),
            self.workers.unwrap_or(config.workers),
        )
    }
}
