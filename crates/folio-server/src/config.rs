//! Server configuration for folio.
//!
//! Loads configuration from environment variables with sensible
//! defaults. All settings can be overridden via `FOLIO_*` environment
//! variables.

use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Message store backend type.
    pub store_backend: StoreBackendType,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
}

/// Supported message store backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackendType {
    /// In-memory (development default, data lost on restart).
    Memory,
    /// JSON-lines file store.
    File { path: String },
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (hosting-platform convention, binds to `0.0.0.0`)
    /// - `FOLIO_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:5000`)
    /// - `FOLIO_STORE` — `memory` or `file` (default: `memory`)
    /// - `FOLIO_STORE_PATH` — path for the file backend (default: `./messages.jsonl`)
    /// - `FOLIO_LOG_LEVEL` — log filter (default: `info`)
    #[must_use]
    pub fn from_env() -> Self {
        // Priority: FOLIO_BIND_ADDR > PORT > default 127.0.0.1:5000
        let bind_addr = if let Ok(addr) = std::env::var("FOLIO_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 5000)))
        } else if let Ok(port_str) = std::env::var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(5000);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 5000))
        };

        let store_path = std::env::var("FOLIO_STORE_PATH")
            .unwrap_or_else(|_| "./messages.jsonl".to_owned());

        let store_backend = match std::env::var("FOLIO_STORE")
            .unwrap_or_else(|_| "memory".to_owned())
            .to_lowercase()
            .as_str()
        {
            "file" => StoreBackendType::File { path: store_path },
            _ => StoreBackendType::Memory,
        };

        let log_level = std::env::var("FOLIO_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());

        Self {
            bind_addr,
            store_backend,
            log_level,
        }
    }
}
