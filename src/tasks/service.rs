// tasks/service.rs — Task use-cases and the domain error taxonomy.

use tracing::debug;

use super::model::{normalize_title, now_rfc3339, NewTask, TaskPatch, TaskRow};
use super::store::TaskStore;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Everything a task operation can fail with. The REST layer maps each
/// variant to a status code; `Display` is the user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Rejected input (empty title) — HTTP 400.
    #[error("{0}")]
    Validation(String),
    /// No task with the requested id — HTTP 404. Carries the id, which the
    /// REST boundary logs at debug.
    #[error("Task not found")]
    NotFound(String),
    /// The database failed — HTTP 500.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Use-case layer over [`TaskStore`]. Stateless; cheap to clone (the store
/// holds an Arc-backed pool). Mutations re-read the row after writing and
/// return the stored state, never a locally assembled struct.
#[derive(Clone)]
pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    /// All tasks, newest first.
    pub async fn list(&self) -> Result<Vec<TaskRow>, TaskError> {
        Ok(self.store.select_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<TaskRow, TaskError> {
        self.store
            .select_by_id(id)
            .await?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    pub async fn create(&self, new: NewTask) -> Result<TaskRow, TaskError> {
        let title = normalize_title(&new.title)
            .ok_or_else(|| TaskError::Validation("title must not be empty".to_string()))?;
        let row = TaskRow::create(title, new.description);
        self.store.insert(&row).await?;
        debug!(task_id = %row.id, "task created");
        // The insert succeeded, so a missing re-read is a storage fault, not a
        // stale client id.
        self.store
            .select_by_id(&row.id)
            .await?
            .ok_or_else(|| TaskError::Storage(sqlx::Error::RowNotFound))
    }

    /// Apply a partial update. Absent fields stay untouched; an empty patch is
    /// still a mutation — `updated_at` is refreshed regardless.
    pub async fn update(&self, id: &str, patch: TaskPatch) -> Result<TaskRow, TaskError> {
        // Existence check up front so a bad id is a clean NotFound even when
        // the patch itself would be rejected or is empty.
        self.get(id).await?;

        let title = match &patch.title {
            Some(Some(raw)) => Some(normalize_title(raw).ok_or_else(|| {
                TaskError::Validation("title must not be empty".to_string())
            })?),
            // Title is required once set — an explicit erase is invalid input.
            Some(None) => {
                return Err(TaskError::Validation(
                    "title must not be empty".to_string(),
                ))
            }
            None => None,
        };

        let affected = self
            .store
            .update_fields(
                id,
                title.as_deref(),
                patch.description.as_ref().map(|d| d.as_deref()),
                patch.completed,
                &now_rfc3339(),
            )
            .await?;
        if affected == 0 {
            // Deleted between the read and the write — still a NotFound.
            return Err(TaskError::NotFound(id.to_string()));
        }
        self.get(id).await
    }

    /// Flip `completed` and refresh `updated_at`. Last-write-wins under
    /// concurrent toggles on the same id.
    pub async fn toggle(&self, id: &str) -> Result<TaskRow, TaskError> {
        let task = self.get(id).await?;
        let affected = self
            .store
            .update_fields(id, None, None, Some(!task.completed), &now_rfc3339())
            .await?;
        if affected == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }
        self.get(id).await
    }

    /// Hard delete. NotFound is derived from the affected-row count — the
    /// store itself never raises it.
    pub async fn delete(&self, id: &str) -> Result<(), TaskError> {
        let affected = self.store.delete_by_id(id).await?;
        if affected == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }
        debug!(task_id = %id, "task deleted");
        Ok(())
    }
}
