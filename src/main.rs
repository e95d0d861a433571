use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use skyview::config::{self, Settings, DEFAULT_HOST, DEFAULT_PORT};
use skyview::error::StartupError;
use skyview::models::AppState;
use skyview::routes::build_router;

#[derive(Parser)]
#[command(
    name = "skyview",
    author,
    version,
    about = "Read-only dashboard over a cloud provider's compute inventory",
    long_about = r#"Skyview serves a single-page HTML view of the compute resources
visible to the configured credentials: instances, virtual networks, load
balancers and machine images, plus /health and /info endpoints.

Credentials come from the environment (or an --env-file):
  CLOUD_ACCESS_KEY_ID      required
  CLOUD_SECRET_ACCESS_KEY  required
  CLOUD_REGION             optional, defaults to us-east-1
"#,
    after_help = "Use `skyview <subcommand> --help` for subcommand options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration (env vars / provider connectivity)
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

fn build_state_from_env(env_file: Option<&str>) -> Result<AppState, StartupError> {
    config::load_env_file(env_file);
    let settings = Settings::from_env()?;
    AppState::new(settings)
}

/// Missing credentials or a broken client are fatal preconditions: report
/// them and refuse to serve traffic.
fn state_or_exit(env_file: Option<&str>) -> AppState {
    match build_state_from_env(env_file) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(%e, "startup failed");
            eprintln!("{}: {}", yansi::Paint::red("Startup failed"), e);
            process::exit(1);
        }
    }
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };

    let app = build_router(state);
    tracing::info!(%addr, "Starting Skyview server");
    println!(
        "{} {}",
        yansi::Paint::new("Dashboard running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::red("Server error"), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e
            );
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // No subcommand: serve on the defaults
    match cli.command {
        None => {
            let state = state_or_exit(None);
            start_server(state, DEFAULT_HOST, DEFAULT_PORT).await;
        }
        Some(Commands::Serve {
            host,
            port,
            env_file,
        }) => {
            let state = state_or_exit(env_file.as_deref());
            start_server(state, &host, port).await;
        }
        Some(Commands::CheckConfig { env_file }) => {
            let state = state_or_exit(env_file.as_deref());
            match state.compute.describe_regions(1).await {
                Ok(_) => {
                    println!(
                        "{}",
                        yansi::Paint::new("Configuration looks valid (provider reachable)").green()
                    );
                    process::exit(0);
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::red("Configuration appears invalid"), e);
                    process::exit(1);
                }
            }
        }
    }
}
