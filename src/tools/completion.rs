/// Handlers for reading and writing completion flags

use tracing::debug;

use crate::domain::{CompletionPayload, DomainError};
use crate::storage::{CompletionLedger, CompletionMap};

/// Flags recorded for a period instance
pub fn get_completions(ledger: &CompletionLedger, period: &str, period_key: &str) -> CompletionMap {
    ledger.get_bucket(period, period_key)
}

/// Record whether a habit was completed in a period instance
/// 
/// The habit id is not checked against the registry.
pub fn set_completion(
    ledger: &CompletionLedger,
    period: &str,
    period_key: &str,
    payload: CompletionPayload,
) -> Result<CompletionMap, DomainError> {
    payload.validate()?;
    
    debug!("Completion for {} in {}/{}", payload.habit_id, period, period_key);
    Ok(ledger.set_flag(period, period_key, &payload.habit_id, payload.completed))
}
