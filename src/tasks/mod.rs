// tasks/mod.rs — Task domain: entity model, SQLite store, use-case service.

pub mod model;
pub mod service;
pub mod store;

pub use model::{NewTask, TaskPatch, TaskRow};
pub use service::{TaskError, TaskService};
pub use store::TaskStore;
