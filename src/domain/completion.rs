/// Completion payload sent by clients when ticking a habit off
/// 
/// The period and period key come from the request path; the body only names
/// the habit and whether it is done.

use serde::{Deserialize, Serialize};
use crate::domain::DomainError;

/// Body of a "set completion" request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionPayload {
    #[serde(default)]
    pub habit_id: String,
    #[serde(default)]
    pub completed: bool,
}

impl CompletionPayload {
    pub fn new(habit_id: impl Into<String>, completed: bool) -> Self {
        Self {
            habit_id: habit_id.into(),
            completed,
        }
    }
    
    /// The habit id must not be blank
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.habit_id.trim().is_empty() {
            return Err(DomainError::validation("habitId", "must not be blank"));
        }
        Ok(())
    }
}
