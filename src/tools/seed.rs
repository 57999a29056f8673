/// Handler that resets the registry to a fixed set of sample habits

use tracing::info;

use crate::domain::Habit;
use crate::storage::{CompletionLedger, HabitStorage};

/// Sample habits as (trigger, time, action, goal, frequency), in insert order
pub const SAMPLE_HABITS: [(&str, &str, &str, &str, &str); 4] = [
    ("Wake up", "05:45", "thank God", "gratitude", "daily"),
    ("Brush", "06:00", "wash my face", "self-care", "daily"),
    ("Toilet", "06:15", "do 10 pushups", "fitness", "daily"),
    ("Tea", "06:30", "read a book for 20 minutes", "reading", "daily"),
];

/// Replace every habit with the sample set and return the sorted list
/// 
/// Completions of the wiped habits are removed too, so the ledger never
/// refers to ids that the reset discarded.
pub fn seed_defaults<S: HabitStorage>(storage: &S, ledger: &CompletionLedger) -> Vec<Habit> {
    let removed = storage.clear();
    for id in &removed {
        ledger.cascade_delete(id);
    }
    
    for (trigger, time, action, goal, frequency) in SAMPLE_HABITS {
        storage.upsert(Habit::new(trigger, Some(time), action, goal, frequency));
    }
    
    info!("Seeded {} sample habits, removed {}", SAMPLE_HABITS.len(), removed.len());
    storage.list()
}
