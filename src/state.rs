use crate::store::DiaryStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<DiaryStore>>,
}

impl AppState {
    pub fn new(store: DiaryStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
