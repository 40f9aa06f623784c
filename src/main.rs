use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use folio::{
    AppState, Config, create_router, load_catalog, parse_log_level,
    chat::ResponseGenerator,
    preferences::BookmarkStore,
    startup_checks, storage,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Global options that apply to all commands
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Overrides `app.log_level` from the config file
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web server (default if no command specified)
    Serve {
        #[arg(short, long)]
        port: Option<u16>,

        #[arg(long)]
        host: Option<String>,

        /// Automatically quit after specified number of seconds (useful for testing)
        #[arg(long)]
        quit_after: Option<u64>,
    },

    /// Ask the chat assistant a question
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Manage bookmarks in the configured storage
    #[command(subcommand)]
    Bookmarks(BookmarkCommands),
}

#[derive(Subcommand, Debug)]
enum BookmarkCommands {
    /// List bookmarked post slugs
    List,
    /// Bookmark a post
    Add { slug: String },
    /// Remove a bookmark
    Remove { slug: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, found) = load_config(&cli.config)?;

    let level = parse_log_level(cli.log_level.as_deref().unwrap_or(&config.app.log_level));
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if found {
        info!("Configuration loaded from: {:?}", cli.config);
    } else {
        info!("Config file not found at {:?}, using defaults", cli.config);
    }

    match cli.command {
        Some(Commands::Ask { question }) => handle_ask(config, question.join(" ")).await,
        Some(Commands::Bookmarks(cmd)) => handle_bookmark_command(config, cmd).await,
        Some(Commands::Serve {
            port,
            host,
            quit_after,
        }) => run_server(config, port, host, quit_after).await,
        None => run_server(config, None, None, None).await,
    }
}

/// Runs before logging is set up, so it reports whether the file was found
/// instead of logging it.
fn load_config(config_path: &Path) -> Result<(Config, bool), Box<dyn std::error::Error>> {
    if config_path.exists() {
        let config_content = std::fs::read_to_string(config_path)?;
        let config = toml_edit::de::from_str::<Config>(&config_content)?;
        Ok((config, true))
    } else {
        Ok((Config::default(), false))
    }
}

async fn handle_ask(config: Config, question: String) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(&config.catalog).await?;
    let generator = ResponseGenerator::new(std::sync::Arc::new(catalog));
    println!("{}", generator.generate_response(&question));
    Ok(())
}

async fn handle_bookmark_command(
    config: Config,
    cmd: BookmarkCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = storage::create_provider(&config.storage).await?;
    let bookmarks = BookmarkStore::load(provider).await;

    match cmd {
        BookmarkCommands::List => {
            let slugs = bookmarks.bookmarks().await;
            if slugs.is_empty() {
                println!("No bookmarks");
            } else {
                println!("Bookmarks:");
                for slug in slugs {
                    println!("  {}", slug);
                }
            }
        }
        BookmarkCommands::Add { slug } => {
            let slug = slug.trim().to_string();
            if bookmarks.add(&slug).await {
                println!("Bookmarked '{}'", slug);
            } else {
                println!("'{}' is already bookmarked", slug);
            }
        }
        BookmarkCommands::Remove { slug } => {
            let slug = slug.trim().to_string();
            if bookmarks.remove(&slug).await {
                println!("Removed bookmark '{}'", slug);
            } else {
                eprintln!("Error: '{}' is not bookmarked", slug);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn run_server(
    config: Config,
    port: Option<u16>,
    host: Option<String>,
    quit_after: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let host = host.unwrap_or(config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    info!("Starting {} server", config.app.name);
    match &config.catalog.path {
        Some(path) => info!("Catalog file: {:?}", path),
        None => info!("Catalog: built-in"),
    }

    if let Err(errors) = startup_checks::perform_startup_checks(&config).await {
        for error in &errors {
            tracing::error!("Startup check failed: {}", error);
        }
        tracing::error!("Critical startup check failed, exiting");
        return Err("Critical startup check failed".into());
    }

    let app_state = AppState::from_config(config).await?;
    let app = create_router(app_state);

    let addr = SocketAddr::from((host.parse::<std::net::IpAddr>()?, port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let server = axum::serve(listener, app);
    let graceful = server.with_graceful_shutdown(shutdown_signal(quit_after));

    if let Err(e) = graceful.await {
        tracing::error!("Server error: {}", e);
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(quit_after: Option<u64>) {
    use tokio::signal;
    use tokio::time::{Duration, sleep};

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let quit_timer = async {
        if let Some(seconds) = quit_after {
            info!(
                "Server will automatically shut down after {} seconds",
                seconds
            );
            sleep(Duration::from_secs(seconds)).await;
            info!("Quit timer expired, shutting down");
        } else {
            std::future::pending::<()>().await
        }
    };

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        },
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        },
        _ = quit_timer => {},
    }
}
