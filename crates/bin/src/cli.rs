//! CLI argument definitions for the widgets binary.

use clap::{Parser, Subcommand};

use widgets::api::ApiConfig;
use widgets::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// In-memory widget store server
#[derive(Parser, Debug)]
#[command(name = "widgets")]
#[command(about = "Widgets: 2D widgets with collision-free Z-ordering over HTTP")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the widgets server
    Serve(ServeArgs),
    /// Check health of a running widgets server
    Health(HealthArgs),
}

/// Arguments for the serve command
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "WIDGETS_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0", env = "WIDGETS_HOST")]
    pub host: String,

    /// Page size used when a listing request sends none
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, env = "WIDGETS_DEFAULT_PAGE_SIZE")]
    pub default_page_size: usize,

    /// Largest page size a listing request may ask for
    #[arg(long, default_value_t = MAX_PAGE_SIZE, env = "WIDGETS_MAX_PAGE_SIZE")]
    pub max_page_size: usize,

    /// Log filter directives, overridden by RUST_LOG
    #[arg(long, default_value = "widgets=info", env = "WIDGETS_LOG")]
    pub log: String,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            log: "widgets=info".to_string(),
        }
    }
}

impl ServeArgs {
    /// Paging limits for the HTTP adapter.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }
}

/// Arguments for the health command
#[derive(clap::Args, Debug)]
pub struct HealthArgs {
    /// Base URL of the server to check
    #[arg(long, default_value = "http://127.0.0.1:8080", env = "WIDGETS_URL")]
    pub url: String,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,
}
