/// Habit entity and related functionality
///
/// This module defines the Habit struct that represents a recurring action the
/// user wants to perform after a trigger, along with the upsert defaults and
/// the validation the HTTP layer applies before anything reaches the store.

use serde::{Deserialize, Serialize};
use crate::domain::{now_millis, DomainError, HabitId};

/// A habit in "after <trigger> at <time>, I will <action>" form
///
/// Field names serialize in camelCase so `created_at` travels as `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier; generated on upsert when blank
    #[serde(default)]
    pub id: String,
    /// What happens right before the habit (e.g., "Wake up")
    #[serde(default)]
    pub trigger: String,
    /// Optional `HH:mm` time of day
    #[serde(default)]
    pub time: Option<String>,
    /// What the user will do
    #[serde(default)]
    pub action: String,
    /// Why the user does it (e.g., "fitness")
    #[serde(default)]
    pub goal: String,
    /// How often: daily, weekly, monthly, quarterly or yearly (not enforced)
    #[serde(default)]
    pub frequency: String,
    /// Creation time in epoch milliseconds; 0 means not yet set
    #[serde(default)]
    pub created_at: i64,
}

impl Habit {
    /// Create a habit with no id or creation time yet
    pub fn new(
        trigger: impl Into<String>,
        time: Option<&str>,
        action: impl Into<String>,
        goal: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            trigger: trigger.into(),
            time: time.map(str::to_string),
            action: action.into(),
            goal: goal.into(),
            frequency: frequency.into(),
            created_at: 0,
        }
    }

    /// Builder-style helper to set an explicit id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Fill in the id and creation time if they are missing
    ///
    /// A blank id gets a freshly generated one and a zero `created_at` gets
    /// the current time. Values that are already set are left alone.
    pub fn apply_defaults(&mut self) {
        if HabitId::is_blank(&self.id) {
            self.id = HabitId::generate();
        }
        if self.created_at == 0 {
            self.created_at = now_millis();
        }
    }

    /// Validate the fields a client must provide
    ///
    /// The id is not checked here since it is generated when blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::require("trigger", &self.trigger)?;
        Self::require("action", &self.action)?;
        Self::require("goal", &self.goal)?;
        Self::require("frequency", &self.frequency)?;

        if let Some(time) = &self.time {
            if !is_clock_time(time) {
                return Err(DomainError::validation("time", "must match HH:mm"));
            }
        }

        Ok(())
    }

    fn require(field: &str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::validation(field, "must not be blank"));
        }
        Ok(())
    }
}

/// Two digits, a colon, two digits. Ranges are not checked.
fn is_clock_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
}
