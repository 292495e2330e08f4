/// Ledger Server - JSON account ledger over HTTP
use clap::{Parser, Subcommand};
use ledger_core::{Account, AccountStorage};
use ledger_server::{
    config::ServerConfig, create_router, services::TokenService, state::AppState,
    with_http_layers,
};
use ledger_storage::SqliteAccountStore;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ledger-server")]
#[command(about = "Account ledger HTTP server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create an account and print it with its token
    CreateAccount {
        /// Holder's first name
        #[arg(long)]
        first_name: String,
        /// Holder's last name
        #[arg(long)]
        last_name: String,
    },
    /// List all accounts
    ListAccounts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledger_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::CreateAccount {
            first_name,
            last_name,
        } => create_account(config, first_name, last_name).await?,
        Commands::ListAccounts => list_accounts(config).await?,
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteAccountStore> {
    let pool = ledger_storage::create_pool(&config.storage.database_url).await?;
    ledger_storage::run_migrations(&pool).await?;
    Ok(SqliteAccountStore::new(pool))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting ledger server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = Arc::new(open_store(&config).await?);
    tracing::info!("Database connected");

    let tokens = Arc::new(TokenService::from_settings(&config.auth));
    if !config.auth.enforce_expiry {
        tracing::warn!("Token expiry is not enforced (auth.enforce_expiry = false)");
    }

    let app_state = AppState::new(store, tokens);

    let app = with_http_layers(create_router(app_state));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn create_account(
    config: ServerConfig,
    first_name: String,
    last_name: String,
) -> anyhow::Result<()> {
    config.validate()?;

    let store = open_store(&config).await?;
    let tokens = TokenService::from_settings(&config.auth);

    let id = store
        .create_account(&Account::new(first_name, last_name))
        .await?;
    let account = store.get_account_by_id(id).await?;
    let token = tokens.issue_token(&account)?;

    println!("{}", serde_json::to_string_pretty(&account)?);
    println!("token: {}", token);

    Ok(())
}

async fn list_accounts(config: ServerConfig) -> anyhow::Result<()> {
    let store = open_store(&config).await?;

    let accounts = store.get_accounts().await?;

    println!("Accounts:");
    for account in accounts {
        println!(
            "  {} #{} - {} {} (balance {})",
            account.id, account.number, account.first_name, account.last_name, account.balance
        );
    }

    Ok(())
}
