/// Per-period progress summary
/// 
/// For every known period this counts the habits whose frequency names that
/// period and how many of them are ticked off for the period instance that
/// contains the given date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Period;
use crate::storage::{CompletionLedger, HabitStorage};

/// Progress for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodProgress {
    pub period: Period,
    pub label: String,
    pub period_key: String,
    pub total: usize,
    pub done: usize,
    /// Rounded completion percentage; 0 when the period has no habits
    pub percent: u32,
}

/// Canonical key for the instance of `period` containing `date`
pub fn current_period_key(period: Period, date: NaiveDate) -> String {
    period.key_for(date)
}

/// Progress for every period as of `date`
pub fn dashboard<S: HabitStorage>(storage: &S, ledger: &CompletionLedger, date: NaiveDate) -> Vec<PeriodProgress> {
    let habits = storage.list();
    
    Period::ALL
        .into_iter()
        .map(|period| {
            let period_key = period.key_for(date);
            let flags = ledger.get_bucket(period.as_str(), &period_key);
            
            let in_period: Vec<_> = habits
                .iter()
                .filter(|h| h.frequency == period.as_str())
                .collect();
            let total = in_period.len();
            let done = in_period
                .iter()
                .filter(|h| flags.get(&h.id).copied().unwrap_or(false))
                .count();
            
            PeriodProgress {
                period,
                label: period.label().to_string(),
                period_key,
                total,
                done,
                percent: percent(done, total),
            }
        })
        .collect()
}

fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u32
}
