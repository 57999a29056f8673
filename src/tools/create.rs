/// Handler for adding or replacing a habit

use tracing::info;

use crate::domain::{DomainError, Habit};
use crate::storage::{HabitStorage, UpsertOutcome};

/// Validate and store a habit
/// 
/// A blank id means "new habit"; an existing id replaces that habit but
/// always keeps its original creation time.
pub fn add_habit<S: HabitStorage>(storage: &S, habit: Habit) -> Result<UpsertOutcome, DomainError> {
    habit.validate()?;
    
    let outcome = storage.upsert(habit);
    if outcome.created {
        info!("Created habit {} ({})", outcome.habit.id, outcome.habit.action);
    } else {
        info!("Updated habit {}", outcome.habit.id);
    }
    
    Ok(outcome)
}
