use crate::models::{GoalId, GoalPatch};
use crate::storage::SlotStorage;
use crate::store::GoalStore;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorState {
    editing: Option<GoalId>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(&self) -> Option<GoalId> {
        self.editing
    }

    pub fn is_editing(&self, id: GoalId) -> bool {
        self.editing == Some(id)
    }

    pub fn start_edit(&mut self, id: GoalId) {
        if let Some(previous) = self.editing.replace(id) {
            if previous != id {
                debug!(%previous, %id, "edit moved to another goal");
            }
        }
    }

    /// Returns `false` for a stale commit: `id` is not the goal in edit mode.
    pub fn commit_edit<S: SlotStorage>(
        &mut self,
        store: &mut GoalStore<S>,
        id: GoalId,
        patch: GoalPatch,
    ) -> bool {
        if !self.is_editing(id) {
            return false;
        }
        self.editing = None;
        store.edit(id, patch)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn forget(&mut self, id: GoalId) {
        if self.is_editing(id) {
            self.editing = None;
        }
    }
}
