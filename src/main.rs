use address_book::cli::{format_table, seed_samples};
use address_book::config::Config;
use address_book::logging;
use address_book::server;
use address_book::storage::SqliteStorage;
use address_book::AddressStore;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "address-book")]
#[command(about = "Address book API with great-circle proximity search")]
#[command(version)]
struct Cli {
    /// SQLite database file (overrides config and DATABASE_NAME)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Insert the sample addresses
    Seed,
    /// Print every stored address
    List,
    /// Print addresses within a distance (km) of a point
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
        #[arg(long)]
        distance: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();
    let mut config = Config::load().context("loading configuration")?;
    let (host, port) = match &cli.command {
        Commands::Serve { host, port } => (host.clone(), *port),
        _ => (None, None),
    };
    config.apply_cli(cli.database, host, port);

    let storage = SqliteStorage::open(&config.database.path)
        .await
        .with_context(|| format!("opening {}", config.database.path.display()))?;
    let store = AddressStore::new(Arc::new(storage));

    match cli.command {
        Commands::Serve { .. } => {
            let (host, port) = (&config.server.host, config.server.port);
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("invalid listen address {host}:{port}"))?;
            server::start_server(store, addr).await?;
        }
        Commands::Seed => {
            let seeded = seed_samples(&store).await?;
            info!(
                "Seeded {} sample addresses into {}",
                seeded.len(),
                config.database.path.display()
            );
        }
        Commands::List => {
            print!("{}", format_table(&store.list_all().await?));
        }
        Commands::Nearby {
            latitude,
            longitude,
            distance,
        } => {
            address_book::domain::validate_coordinates(latitude, longitude)?;
            address_book::app::validate_radius(distance)?;
            print!(
                "{}",
                format_table(&store.find_nearby(latitude, longitude, distance).await?)
            );
        }
    }
    Ok(())
}
