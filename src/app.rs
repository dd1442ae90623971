use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/diary",
            get(handlers::list_entries)
                .post(handlers::create_entry)
                .delete(handlers::delete_today)
                .fallback(handlers::collection_method_not_allowed),
        )
        .route(
            "/api/diary/:id",
            get(handlers::fetch_entry)
                .put(handlers::update_entry)
                .delete(handlers::delete_entry)
                .fallback(handlers::item_method_not_allowed),
        )
        .with_state(state)
}
