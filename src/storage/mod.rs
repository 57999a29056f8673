/// In-memory storage for habits and their completions
/// 
/// Two independent stores live here: `HabitStore`, the registry of habits
/// keyed by id, and `CompletionLedger`, the period -> key -> habit flags map.
/// Both are safe to share across request threads without outside locking.
/// Nothing is persisted; state lasts as long as the process.

pub mod habits;
pub mod completions;

// Re-export the main storage types
pub use habits::*;
pub use completions::*;

use crate::domain::Habit;

/// Result of storing a habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// The habit as stored, with id and creation time filled in
    pub habit: Habit,
    /// True when no habit with this id existed before
    pub created: bool,
}

/// Trait defining the registry interface for habits
/// 
/// This keeps handlers independent of the concrete map so another backend
/// could be dropped in later without touching them.
pub trait HabitStorage {
    /// All habits ordered by time of day, habits without a time first
    fn list(&self) -> Vec<Habit>;
    
    /// Look up a single habit
    fn get(&self, id: &str) -> Option<Habit>;
    
    /// Insert or overwrite a habit, defaulting its id and creation time
    fn upsert(&self, habit: Habit) -> UpsertOutcome;
    
    /// Remove a habit; returns whether it existed
    fn remove(&self, id: &str) -> bool;
    
    /// Remove every habit, returning the ids that were removed
    fn clear(&self) -> Vec<String>;
}
