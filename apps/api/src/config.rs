use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is set but cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Ceiling on `target_days × target_hours` accepted by the grid endpoint.
    pub max_grid_cells: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_grid_cells: std::env::var("MAX_GRID_CELLS")
                .unwrap_or_else(|_| "1000000".to_string())
                .parse::<usize>()
                .context("MAX_GRID_CELLS must be a non-negative integer")?,
        })
    }
}
