//! Record Store Config

use clap::{
    Args, ValueEnum,
    error::{Error, ErrorKind},
};

/// Backing store for job records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// `PostgreSQL` table keyed by owner and record id.
    Postgres,

    /// Process-local map. Records are lost on restart.
    Memory,
}

/// Record store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Record store backend (postgres, memory)
    #[arg(long, env = "STORE_BACKEND", value_enum, default_value_t = StoreBackend::Postgres)]
    pub store_backend: StoreBackend,

    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Apply pending migrations before serving
    #[arg(long, env = "DATABASE_RUN_MIGRATIONS", default_value_t = false)]
    pub database_run_migrations: bool,
}

impl StoreConfig {
    /// Reject settings the selected backend cannot start with.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.store_backend == StoreBackend::Postgres && self.database_url.is_none() {
            return Err(Error::raw(
                ErrorKind::MissingRequiredArgument,
                "DATABASE_URL is required when STORE_BACKEND is postgres\n",
            ));
        }

        Ok(())
    }

    /// The connection string, when the `PostgreSQL` backend is selected.
    pub(crate) fn postgres_url(&self) -> Option<&str> {
        match self.store_backend {
            StoreBackend::Postgres => self.database_url.as_deref(),
            StoreBackend::Memory => None,
        }
    }
}
