use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub type GoalId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub notes: Option<String>,
}

impl GoalPatch {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            notes: None,
        }
    }

    pub fn notes(value: impl Into<String>) -> Self {
        Self {
            title: None,
            notes: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditField {
    Title,
    Notes,
}

impl EditField {
    pub fn into_patch(self, value: impl Into<String>) -> GoalPatch {
        match self {
            EditField::Title => GoalPatch::title(value),
            EditField::Notes => GoalPatch::notes(value),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddGoalRequest {
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub due: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct CommitRequest {
    pub field: EditField,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GoalSummary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub overdue: usize,
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub active: Vec<Goal>,
    pub completed: Vec<Goal>,
    pub summary: GoalSummary,
    pub editing: Option<GoalId>,
}

// HTML date inputs submit "" when left empty.
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
