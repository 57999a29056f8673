/// Completion ledger: period -> period key -> habit id -> completed
///
/// Every level is a concurrent map. Nested maps are shared through `Arc` and
/// created with `entry().or_default()`, so two writers racing on a new
/// (period, key) pair always end up on the same bucket.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

/// Flags for one (period, period key) pair
pub type CompletionMap = HashMap<String, bool>;

type Bucket = DashMap<String, bool>;
type PeriodBuckets = DashMap<String, Arc<Bucket>>;

/// Sparse record of which habits were completed in which period instance
#[derive(Debug, Default)]
pub struct CompletionLedger {
    periods: DashMap<String, Arc<PeriodBuckets>>,
}

impl CompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags recorded for a period instance, empty if nothing was written
    ///
    /// Reading never creates buckets.
    pub fn get_bucket(&self, period: &str, period_key: &str) -> CompletionMap {
        self.find_bucket(period, period_key)
            .map(|bucket| snapshot(&bucket))
            .unwrap_or_default()
    }

    /// Set one habit's flag, creating the buckets on first use
    ///
    /// Returns the whole bucket as it stands after the write.
    pub fn set_flag(
        &self,
        period: &str,
        period_key: &str,
        habit_id: &str,
        completed: bool,
    ) -> CompletionMap {
        // Clone the Arcs out so no outer shard lock is held during the write
        let buckets = Arc::clone(self.periods.entry(period.to_string()).or_default().value());
        let bucket = Arc::clone(buckets.entry(period_key.to_string()).or_default().value());

        bucket.insert(habit_id.to_string(), completed);
        debug!(
            "Set completion {}/{} {} = {}",
            period, period_key, habit_id, completed
        );

        snapshot(&bucket)
    }

    /// Remove a habit from every bucket of every period
    ///
    /// Emptied buckets are kept.
    pub fn cascade_delete(&self, habit_id: &str) {
        let buckets: Vec<Arc<Bucket>> = self
            .periods
            .iter()
            .flat_map(|period| {
                period
                    .value()
                    .iter()
                    .map(|bucket| Arc::clone(bucket.value()))
                    .collect::<Vec<_>>()
            })
            .collect();

        let removed = buckets
            .iter()
            .filter(|bucket| bucket.remove(habit_id).is_some())
            .count();

        debug!("Removed habit {} from {} completion buckets", habit_id, removed);
    }

    /// Number of (period, period key) buckets that exist
    pub fn bucket_count(&self) -> usize {
        self.periods.iter().map(|period| period.value().len()).sum()
    }

    /// Drop every recorded completion
    pub fn clear(&self) {
        self.periods.clear();
    }

    fn find_bucket(&self, period: &str, period_key: &str) -> Option<Arc<Bucket>> {
        let buckets = self.periods.get(period).map(|b| Arc::clone(b.value()))?;
        let bucket = buckets.get(period_key).map(|b| Arc::clone(b.value()));
        bucket
    }
}

fn snapshot(bucket: &Bucket) -> CompletionMap {
    bucket
        .iter()
        .map(|entry| (entry.key().clone(), *entry.value()))
        .collect()
}
