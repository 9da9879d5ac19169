pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{create_pool, create_pool_from_url, run_migrations};
pub use error::{DbError, Result};
pub use repositories::sprint_repository::SprintRepository;
