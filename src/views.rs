use crate::models::{Goal, GoalSummary};
use chrono::{Local, NaiveDate};

pub fn active(goals: &[Goal]) -> Vec<&Goal> {
    goals.iter().filter(|goal| !goal.done).collect()
}

pub fn completed(goals: &[Goal]) -> Vec<&Goal> {
    goals.iter().filter(|goal| goal.done).collect()
}

#[derive(Debug, Clone, Default)]
pub struct GoalViews {
    pub active: Vec<Goal>,
    pub completed: Vec<Goal>,
}

impl GoalViews {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let (completed, active) = goals.iter().cloned().partition(|goal| goal.done);
        Self { active, completed }
    }
}

pub fn summarize(goals: &[Goal]) -> GoalSummary {
    summarize_at(Local::now().date_naive(), goals)
}

pub fn summarize_at(today: NaiveDate, goals: &[Goal]) -> GoalSummary {
    let mut summary = GoalSummary {
        total: goals.len(),
        ..GoalSummary::default()
    };
    for goal in goals {
        if goal.done {
            summary.completed += 1;
            continue;
        }
        summary.active += 1;
        if goal.due.is_some_and(|due| due < today) {
            summary.overdue += 1;
        }
    }
    summary
}
