//! Read-only HTTP API for the browser tag-translation tool.
//!
//! Serves the converter page plus one JSON endpoint combining the tag and
//! threshold tables. Configuration comes from `config.json` next to the
//! executable; the only flag selects loopback or all-interface binding.

use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tagdict_core::{CONFIG_FILE, ServerConfig};
use tagdict_server::{AppState, create_router};

/// Port the API server always binds.
const PORT: u16 = 5000;

#[derive(Parser, Debug)]
#[command(
    name = "tagdict-server",
    version,
    about = "HTTP API for the tag translation dictionary"
)]
struct Cli {
    /// Listen on all interfaces instead of loopback only.
    #[arg(long)]
    listen: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse_from(normalized_args(std::env::args()));

    let base_dir = base_dir();
    let config_path = base_dir.join(CONFIG_FILE);
    let config = match ServerConfig::from_file(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: cannot load {}: {err}", config_path.display());
            std::process::exit(1);
        }
    };

    let host = if cli.listen {
        Ipv4Addr::UNSPECIFIED
    } else {
        Ipv4Addr::LOCALHOST
    };
    let addr = SocketAddr::from((host, PORT));
    if cli.listen {
        tracing::info!("external access enabled, listening on all interfaces");
    } else {
        tracing::info!("serving loopback only, pass --listen to expose");
    }

    let app = create_router(AppState::new(config, base_dir));

    tracing::info!("tag API server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Directory the executable lives in; `config.json` and the converter page
/// are resolved against it.
fn base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Historical launchers pass `-listen` with a single dash; rewrite that
/// spelling to the long form clap expects.
fn normalized_args(args: impl Iterator<Item = String>) -> Vec<String> {
    args.map(|arg| {
        if arg == "-listen" {
            "--listen".to_string()
        } else {
            arg
        }
    })
    .collect()
}
