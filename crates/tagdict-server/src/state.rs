//! Server application state.

use std::path::PathBuf;
use std::sync::Arc;
use tagdict_core::ServerConfig;

/// File served at `/` and by the single-file static route.
pub const CONVERTER_PAGE: &str = "converter.html";

/// Shared application state for the API server.
///
/// Holds the configuration loaded at startup and the directory the
/// converter page is read from. Immutable for the process lifetime;
/// handlers receive it through axum state, never through globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The loaded configuration.
    config: ServerConfig,
    /// Directory holding the converter page.
    base_dir: PathBuf,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: ServerConfig, base_dir: PathBuf) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, base_dir }),
        }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Location of the converter page on disk.
    pub fn page_path(&self) -> PathBuf {
        self.inner.base_dir.join(CONVERTER_PAGE)
    }
}
