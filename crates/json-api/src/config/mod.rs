//! Server configuration module

use clap::Parser;

use crate::config::{
    identity::IdentityConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    store::StoreConfig,
};

pub(crate) mod identity;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod store;

/// Job tracker JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "jobtrack-json", about = "Job tracker JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Record store settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Caller identity settings.
    #[command(flatten)]
    pub identity: IdentityConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()?.validated()
    }

    fn validated(self) -> Result<Self, clap::Error> {
        self.store.validate()?;

        Ok(self)
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
