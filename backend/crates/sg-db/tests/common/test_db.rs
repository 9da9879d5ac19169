use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Number of goal rows stored for a sprint
pub async fn count_goal_rows(pool: &SqlitePool, sprint_id: uuid::Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sprint_goals WHERE sprint_id = ?")
        .bind(sprint_id.to_string())
        .fetch_one(pool)
        .await
        .expect("Failed to count goals")
}
