pub mod analytics;
pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use analytics::Analytics;
pub use app::router;
pub use state::{AppState, Session};
pub use storage::{load_log, resolve_data_path};
