use anyhow::Result;
use clap::{Parser, Subcommand};

use org_console_api::{app, config, database, seed, AppState};

#[derive(Parser)]
#[command(name = "org-console-api")]
#[command(about = "REST backend for the organization administration console")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Start the HTTP server (default)")]
    Serve,

    #[command(about = "Populate the database with demo organizations and users")]
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Seed => {
            let pool = database::pool::connect().await?;
            database::pool::run_migrations(&pool).await?;
            seed::run(pool).await
        }
    }
}

async fn serve() -> Result<()> {
    let config = config::config();
    tracing::info!("Starting org-console-api in {:?} mode", config.environment);

    let pool = database::pool::connect().await?;
    database::pool::run_migrations(&pool).await?;

    let app = app(AppState::new(pool));

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("org-console-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
