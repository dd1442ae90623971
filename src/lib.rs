pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod store;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use store::{resolve_db_path, DiaryStore};
