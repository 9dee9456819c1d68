use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::db::{DbConnection, DbPool, establish_connection_pool};
use crate::domain::bore::{Bore, NewBore};
use crate::domain::types::{BoreCategory, BoreId, BoreText};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod bore;
pub mod errors;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url` and bring its schema up to date.
    ///
    /// Fails if the pool cannot be built or the migrations cannot be applied.
    pub fn connect(database_url: &str) -> RepositoryResult<Self> {
        let pool = establish_connection_pool(database_url)?;
        let repo = Self::new(pool);

        let mut conn = repo.conn()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| RepositoryError::Migration(e.to_string()))?;
        log::info!(
            "Connected to {database_url}, applied {} pending migration(s)",
            applied.len()
        );

        Ok(repo)
    }

    /// Release this handle's connections.
    ///
    /// Other clones of the handle keep their share of the pool alive until
    /// they are dropped as well.
    pub fn disconnect(self) {
        let state = self.pool.state();
        log::info!(
            "Disconnecting from database ({} connection(s) open)",
            state.connections
        );
        drop(self.pool);
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for bore entities.
pub trait BoreReader {
    /// List every stored bore.
    fn list_bores(&self) -> RepositoryResult<Vec<Bore>>;
}

/// Write operations for bore entities.
pub trait BoreWriter {
    /// Persist a new bore and return it with its assigned identifier.
    fn create_bore(&self, bore: &NewBore) -> RepositoryResult<Bore>;
    /// Replace text and category of a bore. Returns `None` for unknown ids.
    fn update_bore(
        &self,
        id: BoreId,
        text: &BoreText,
        category: &BoreCategory,
    ) -> RepositoryResult<Option<Bore>>;
    /// Delete a bore, returning its last stored state. Returns `None` for unknown ids.
    fn delete_bore(&self, id: BoreId) -> RepositoryResult<Option<Bore>>;
}
