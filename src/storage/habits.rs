/// Habit registry backed by a concurrent map

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::{Habit, HabitId};
use crate::storage::{HabitStorage, UpsertOutcome};

/// Authoritative set of habits keyed by id
#[derive(Debug, Default)]
pub struct HabitStore {
    habits: DashMap<String, Habit>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }
    
    pub fn len(&self) -> usize {
        self.habits.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}

impl HabitStorage for HabitStore {
    fn list(&self) -> Vec<Habit> {
        let mut habits: Vec<Habit> = self
            .habits
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        
        // `None` orders before any `Some`, which puts untimed habits first.
        // "HH:mm" strings compare correctly as plain strings.
        habits.sort_by(|a, b| a.time.cmp(&b.time));
        habits
    }
    
    fn get(&self, id: &str) -> Option<Habit> {
        self.habits.get(id).map(|entry| entry.value().clone())
    }
    
    fn upsert(&self, mut habit: Habit) -> UpsertOutcome {
        if HabitId::is_blank(&habit.id) {
            habit.id = HabitId::generate();
        }
        
        // The entry guard holds the shard lock, so a concurrent upsert of the
        // same id cannot slip in between reading and writing createdAt.
        let created = match self.habits.entry(habit.id.clone()) {
            Entry::Occupied(mut existing) => {
                // createdAt is fixed at first insert, whatever the update carries
                habit.created_at = existing.get().created_at;
                existing.insert(habit.clone());
                false
            }
            Entry::Vacant(slot) => {
                habit.apply_defaults();
                slot.insert(habit.clone());
                true
            }
        };
        
        debug!("Stored habit {} (created: {})", habit.id, created);
        UpsertOutcome { habit, created }
    }
    
    fn remove(&self, id: &str) -> bool {
        self.habits.remove(id).is_some()
    }
    
    fn clear(&self) -> Vec<String> {
        let ids: Vec<String> = self.habits.iter().map(|entry| entry.key().clone()).collect();
        for id in &ids {
            self.habits.remove(id);
        }
        ids
    }
}
