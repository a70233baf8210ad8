// tasks/model.rs — Task entity and the request/patch types.
//
// Timestamps are RFC 3339 UTC strings. With a fixed +00:00 offset they order
// lexicographically in time order, so `ORDER BY created_at DESC` on the TEXT
// column is chronological.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// ─── Row type ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl TaskRow {
    /// Build a fresh row for insertion: new UUID, `completed = false`,
    /// `created_at == updated_at`. The caller has already normalized the title.
    pub fn create(title: String, description: Option<String>) -> Self {
        let now = now_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            completed: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Current UTC time as an RFC 3339 string, the stored timestamp format.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// Trim a raw title; `None` when nothing remains. The trimmed value is what
/// gets stored, so the non-empty invariant reasons about persisted data.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ─── Request types ────────────────────────────────────────────────────────────

/// POST /api/tasks body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
}

/// PATCH /api/tasks/{id} body. Absent fields are left untouched, so `title`
/// and `description` are double-options:
///   - field absent        → outer `None`
///   - `"field": null`     → `Some(None)`
///   - `"field": "value"`  → `Some(Some(value))`
/// `completed` is a plain option — clearing a boolean has no meaning here, so
/// an explicit `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// True when no field is present at all. An empty patch is still a valid
    /// mutation — it refreshes `updated_at` and nothing else.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Wrap a present field (including an explicit `null`) in the outer `Some`,
/// so `#[serde(default)]` alone marks absence.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
