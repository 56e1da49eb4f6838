use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::config::Config;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

pub async fn migrate_up(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Reverts every applied migration.
pub async fn migrate_down(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.undo(pool, 0).await
}

/// Single-connection in-memory database with the schema applied.
///
/// The pool never recycles its connection, since that would drop the database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    migrate_up(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
             AND name IN ('users', 'tasks', 'projects')",
        )
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[actix_web::test]
    async fn up_and_down_manage_the_schema() {
        let pool = connect_in_memory().await.unwrap();
        ping(&pool).await.unwrap();
        assert_eq!(table_count(&pool).await, 3);

        // re-running is a no-op
        migrate_up(&pool).await.unwrap();

        migrate_down(&pool).await.unwrap();
        assert_eq!(table_count(&pool).await, 0);

        migrate_up(&pool).await.unwrap();
        assert_eq!(table_count(&pool).await, 3);
    }
}
