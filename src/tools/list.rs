/// Handler for listing habits

use crate::domain::Habit;
use crate::storage::HabitStorage;

/// All habits ordered by time of day, untimed habits first
pub fn list_habits<S: HabitStorage>(storage: &S) -> Vec<Habit> {
    storage.list()
}
