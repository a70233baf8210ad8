// tasks/store.rs — SQLite persistence for tasks.
//
// Thin single-statement CRUD over the shared pool. The store never decides
// "not found" — callers read it off `fetch_optional` / the affected-row count.

use sqlx::SqlitePool;

use super::model::TaskRow;

#[derive(Clone)]
pub struct TaskStore {
    pool: SqlitePool,
}

impl TaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All tasks, newest first.
    pub async fn select_all(&self) -> Result<Vec<TaskRow>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM tasks ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn select_by_id(&self, id: &str) -> Result<Option<TaskRow>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn insert(&self, row: &TaskRow) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO tasks (id, title, description, completed, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&row.id)
        .bind(&row.title)
        .bind(&row.description)
        .bind(row.completed)
        .bind(&row.created_at)
        .bind(&row.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Single UPDATE touching only the supplied fields. `updated_at` is always
    /// set, even when no other field is. A `Some(None)` description binds SQL
    /// NULL, clearing the column. Returns the affected-row count — zero means
    /// no task with that id.
    pub async fn update_fields(
        &self,
        id: &str,
        title: Option<&str>,
        description: Option<Option<&str>>,
        completed: Option<bool>,
        updated_at: &str,
    ) -> Result<u64, sqlx::Error> {
        let mut sets = vec!["updated_at = ?"];
        if title.is_some() {
            sets.push("title = ?");
        }
        if description.is_some() {
            sets.push("description = ?");
        }
        if completed.is_some() {
            sets.push("completed = ?");
        }
        let sql = format!("UPDATE tasks SET {} WHERE id = ?", sets.join(", "));

        let mut query = sqlx::query(&sql).bind(updated_at);
        if let Some(t) = title {
            query = query.bind(t);
        }
        if let Some(d) = description {
            query = query.bind(d);
        }
        if let Some(c) = completed {
            query = query.bind(c);
        }
        let result = query.bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Hard delete. Returns the affected-row count — zero means no such task.
    pub async fn delete_by_id(&self, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
