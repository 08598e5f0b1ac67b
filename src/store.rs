use crate::models::{Goal, GoalId, GoalPatch};
use crate::storage::SlotStorage;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};
use uuid::Uuid;

pub struct GoalStore<S> {
    goals: Vec<Goal>,
    slot: S,
}

impl<S: SlotStorage> GoalStore<S> {
    // Missing, unreadable or malformed data yields an empty list.
    pub fn load(slot: S) -> Self {
        let goals = match slot.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Goal>>(&raw) {
                Ok(goals) => dedupe_ids(goals),
                Err(err) => {
                    warn!("discarding malformed goal data: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to read goal data: {err}");
                Vec::new()
            }
        };
        debug!(count = goals.len(), "goals loaded");

        Self { goals, slot }
    }

    pub fn add(&mut self, title: &str, notes: &str, due: Option<NaiveDate>) -> Option<GoalId> {
        self.add_at(title, notes, due, Utc::now())
    }

    pub fn add_at(
        &mut self,
        title: &str,
        notes: &str,
        due: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Option<GoalId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let id = self.fresh_id();
        self.goals.insert(
            0,
            Goal {
                id,
                title: title.to_string(),
                notes: notes.to_string(),
                due,
                done: false,
                created_at: now,
            },
        );
        debug!(%id, "goal added");
        self.persist();
        Some(id)
    }

    pub fn toggle(&mut self, id: GoalId) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == id) else {
            return false;
        };
        goal.done = !goal.done;
        debug!(%id, done = goal.done, "goal toggled");
        self.persist();
        true
    }

    pub fn remove(&mut self, id: GoalId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);
        if self.goals.len() == before {
            return false;
        }
        debug!(%id, "goal removed");
        self.persist();
        true
    }

    // A blank title in the patch is ignored so titles never become empty.
    pub fn edit(&mut self, id: GoalId, patch: GoalPatch) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == id) else {
            return false;
        };

        if let Some(title) = patch.title {
            let title = title.trim();
            if !title.is_empty() {
                goal.title = title.to_string();
            }
        }
        if let Some(notes) = patch.notes {
            goal.notes = notes;
        }
        debug!(%id, "goal edited");
        self.persist();
        true
    }

    // Storage errors are logged and dropped; memory stays authoritative.
    pub fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.goals) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("failed to serialize goals: {err}");
                return;
            }
        };
        if let Err(err) = self.slot.write(&payload) {
            warn!("failed to persist goals: {err}");
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    fn fresh_id(&self) -> GoalId {
        loop {
            let id = Uuid::new_v4();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}

fn dedupe_ids(goals: Vec<Goal>) -> Vec<Goal> {
    let mut seen = HashSet::with_capacity(goals.len());
    let before = goals.len();
    let goals: Vec<Goal> = goals.into_iter().filter(|goal| seen.insert(goal.id)).collect();
    if goals.len() != before {
        warn!(dropped = before - goals.len(), "dropped goals with duplicate ids");
    }
    goals
}
