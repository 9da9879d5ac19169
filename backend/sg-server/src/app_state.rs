use sg_db::SprintRepository;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn sprints(&self) -> SprintRepository {
        SprintRepository::new(self.pool.clone())
    }
}
