use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::query::{contains_ignore_case, UserQuery};
use super::rows::{scan_all, scan_last, scan_task, scan_user, select_tasks, select_users};
use super::{StoreResult, UserStore};
use crate::models::{NewUser, Task, User, UserChanges};

pub struct SqlUserStore {
    pool: SqlitePool,
}

impl SqlUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query(select_users!(""))
            .fetch_all(&self.pool)
            .await?;

        scan_all(&rows, scan_user)
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<i64> {
        let result = sqlx::query(
            "INSERT INTO users (full_name, email, register_date, user_role) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(Utc::now())
        .bind(user.user_role)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_user_by_id(&self, user_id: i64) -> StoreResult<User> {
        let rows = sqlx::query(select_users!(" WHERE id = ?"))
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        scan_last(&rows, scan_user, "user")
    }

    async fn get_users_by_query(&self, query_type: &str, query: &str) -> StoreResult<Vec<User>> {
        let field: fn(&User) -> &str = match UserQuery::parse(query_type)? {
            UserQuery::Name => |u| u.full_name.as_str(),
            UserQuery::Email => |u| u.email.as_str(),
        };

        let mut users = self.list_users().await?;
        users.retain(|u| contains_ignore_case(field(u), query));
        Ok(users)
    }

    async fn update_user(&self, user_id: i64, changes: UserChanges) -> StoreResult<()> {
        sqlx::query(
            "UPDATE users SET full_name = COALESCE(?, full_name), user_role = COALESCE(?, user_role) \
             WHERE id = ?",
        )
        .bind(changes.full_name)
        .bind(changes.user_role)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_user(&self, user_id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_user_tasks(&self, user_id: i64) -> StoreResult<Vec<Task>> {
        let rows = sqlx::query(select_tasks!(" WHERE user_id = ?"))
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        scan_all(&rows, scan_task)
    }
}
