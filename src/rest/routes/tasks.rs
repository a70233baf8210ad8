// rest/routes/tasks.rs — Task resource routes.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::rest::envelope::{ok_empty, ApiError, Envelope};
use crate::tasks::{NewTask, TaskPatch, TaskRow};
use crate::AppContext;

/// GET /api/tasks — all tasks, newest first.
pub async fn list_tasks(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Envelope<Vec<TaskRow>>>, ApiError> {
    let tasks = ctx.tasks.list().await?;
    Ok(Envelope::ok(tasks, "Tasks retrieved successfully"))
}

/// POST /api/tasks — create a task from `{title, description?}`.
pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<NewTask>,
) -> Result<Json<Envelope<TaskRow>>, ApiError> {
    let task = ctx.tasks.create(body).await?;
    Ok(Envelope::ok(task, "Task created successfully"))
}

/// PATCH /api/tasks/{id} — partial update; absent fields stay untouched.
pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<TaskPatch>,
) -> Result<Json<Envelope<TaskRow>>, ApiError> {
    let task = ctx.tasks.update(&id, body).await?;
    Ok(Envelope::ok(task, "Task updated successfully"))
}

/// PATCH /api/tasks/{id}/toggle — flip completion.
pub async fn toggle_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<TaskRow>>, ApiError> {
    let task = ctx.tasks.toggle(&id).await?;
    Ok(Envelope::ok(task, "Task updated successfully"))
}

/// DELETE /api/tasks/{id} — hard delete; `data` is null on success.
pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    ctx.tasks.delete(&id).await?;
    Ok(ok_empty("Task deleted successfully"))
}
