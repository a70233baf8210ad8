pub mod config;
pub mod rest;
pub mod storage;
pub mod tasks;

use std::sync::Arc;

use config::ServerConfig;
use storage::Storage;
use tasks::TaskService;

/// Shared application state passed to every route handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub storage: Arc<Storage>,
    /// Task use-cases over the shared SQLite pool.
    pub tasks: TaskService,
    pub started_at: std::time::Instant,
}
