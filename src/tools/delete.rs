/// Handler for deleting a habit along with its completions

use tracing::info;

use crate::storage::{CompletionLedger, HabitStorage};

/// Delete a habit and every completion recorded for it
/// 
/// Deleting an unknown id succeeds and still sweeps the ledger, which also
/// clears flags written for ids that were never registered. The registry is
/// updated before the ledger so the habit is gone from both once this returns.
pub fn delete_habit<S: HabitStorage>(storage: &S, ledger: &CompletionLedger, habit_id: &str) -> bool {
    let existed = storage.remove(habit_id);
    ledger.cascade_delete(habit_id);
    
    if existed {
        info!("Deleted habit {}", habit_id);
    }
    existed
}
