use crate::editor::EditorState;
use crate::storage::FileSlot;
use crate::store::GoalStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Store and edit mode, mutated together under one lock.
pub struct Tracker {
    pub store: GoalStore<FileSlot>,
    pub editor: EditorState,
}

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(store: GoalStore<FileSlot>) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(Tracker {
                store,
                editor: EditorState::new(),
            })),
        }
    }
}
