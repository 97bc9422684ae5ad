//! Business logic for savings-goal mutations.

use pitaka_domain::{EntityId, Goal};

use crate::{
    services::{remove_entry, replace_entry},
    store::{keys, OfflineStore},
    time::{stamp_id, Clock},
    CoreError,
};

/// Draft payload for creating or editing a goal. The saved balance is not
/// part of the draft; it starts at zero and only grows through
/// [`GoalService::add_progress`].
#[derive(Debug, Clone)]
pub struct GoalDraft {
    pub id: Option<EntityId>,
    pub name: String,
    pub total: f64,
}

/// Provides validated mutations for [`Goal`] entries.
pub struct GoalService;

impl GoalService {
    pub fn list(store: &OfflineStore) -> Vec<Goal> {
        store.get(keys::GOALS, Vec::new())
    }

    pub fn save(store: &OfflineStore, clock: &dyn Clock, draft: GoalDraft) -> Result<Goal, CoreError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Validation("goal name must not be empty".into()));
        }
        if !(draft.total > 0.0) {
            return Err(CoreError::Validation(
                "goal target must be a positive number".into(),
            ));
        }

        let mut goals = Self::list(store);
        let saved = match draft.id {
            Some(id) => {
                let accumulated = goals
                    .iter()
                    .find(|goal| goal.id == id)
                    .map(|goal| goal.saved)
                    .ok_or(CoreError::GoalNotFound(id))?;
                let mut goal = Goal::new(id, name, draft.total);
                goal.saved = accumulated;
                replace_entry(&mut goals, goal.clone());
                goal
            }
            None => {
                let goal = Goal::new(stamp_id(clock, &goals), name, draft.total);
                goals.push(goal.clone());
                goal
            }
        };
        store.set(keys::GOALS, &goals);
        Ok(saved)
    }

    /// Adds the magnitude of `amount` to a goal's saved balance. A zero
    /// amount leaves the goal (and the store) untouched.
    pub fn add_progress(store: &OfflineStore, id: EntityId, amount: f64) -> Result<Goal, CoreError> {
        let mut goals = Self::list(store);
        let goal = goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(CoreError::GoalNotFound(id))?;
        if !(amount.abs() > 0.0) {
            return Ok(goal.clone());
        }
        goal.add_progress(amount);
        let updated = goal.clone();
        store.set(keys::GOALS, &goals);
        Ok(updated)
    }

    pub fn remove(store: &OfflineStore, id: EntityId) -> Result<(), CoreError> {
        let mut goals = Self::list(store);
        if !remove_entry(&mut goals, id) {
            return Err(CoreError::GoalNotFound(id));
        }
        store.set(keys::GOALS, &goals);
        Ok(())
    }
}
