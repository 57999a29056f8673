/// Behavioural tests for the tracker through its public interface
use habit_tracker_api::*;
use std::collections::HashSet;

#[cfg(test)]
mod habit_tracker_tests {
    use super::*;

    fn habit(time: Option<&str>) -> Habit {
        Habit::new("Trigger", time, "act", "goal", "daily")
    }

    #[test]
    fn test_generated_ids_never_repeat() {
        let tracker = HabitTracker::new();
        let ids: HashSet<String> = (0..1_000)
            .map(|_| tracker.add_habit(habit(None)).unwrap().habit.id)
            .collect();

        assert_eq!(ids.len(), 1_000);
        assert!(ids.iter().all(|id| !id.trim().is_empty()));
        assert_eq!(tracker.list_habits().len(), 1_000);
    }

    #[test]
    fn test_created_at_survives_updates() {
        let tracker = HabitTracker::new();
        let original = tracker.add_habit(habit(Some("06:00"))).unwrap().habit;

        std::thread::sleep(std::time::Duration::from_millis(2));
        let update = habit(Some("06:10")).with_id(original.id.clone());
        let stored = tracker.add_habit(update).unwrap().habit;

        assert_eq!(stored.created_at, original.created_at);
        assert_eq!(stored.time.as_deref(), Some("06:10"));
    }

    #[test]
    fn test_list_orders_untimed_first() {
        let tracker = HabitTracker::new();
        tracker.add_habit(habit(Some("06:00"))).unwrap();
        tracker.add_habit(habit(None)).unwrap();
        tracker.add_habit(habit(Some("05:45"))).unwrap();

        let times: Vec<Option<String>> = tracker.list_habits().into_iter().map(|h| h.time).collect();
        assert_eq!(times, vec![None, Some("05:45".into()), Some("06:00".into())]);
    }

    #[test]
    fn test_completion_buckets() {
        let tracker = HabitTracker::new();
        tracker
            .set_completion("daily", "2024-01-01", CompletionPayload::new("h1", true))
            .unwrap();

        assert_eq!(
            tracker.completions("daily", "2024-01-01"),
            CompletionMap::from([("h1".to_string(), true)])
        );
        assert!(tracker.completions("daily", "2024-01-02").is_empty());
    }

    #[test]
    fn test_delete_removes_completions_everywhere() {
        let tracker = HabitTracker::new();
        let h1 = tracker.add_habit(habit(None).with_id("h1")).unwrap().habit;
        tracker.add_habit(habit(None).with_id("h2")).unwrap();
        for (period, key) in [("daily", "2024-01-01"), ("weekly", "2024-W01")] {
            tracker.set_completion(period, key, CompletionPayload::new("h1", true)).unwrap();
            tracker.set_completion(period, key, CompletionPayload::new("h2", true)).unwrap();
        }

        assert!(tracker.delete_habit(&h1.id));
        assert!(!tracker.delete_habit(&h1.id));

        for (period, key) in [("daily", "2024-01-01"), ("weekly", "2024-W01")] {
            let bucket = tracker.completions(period, key);
            assert!(!bucket.contains_key("h1"));
            assert_eq!(bucket.get("h2"), Some(&true));
        }
        assert!(tracker.list_habits().iter().all(|h| h.id != "h1"));
    }

    #[test]
    fn test_seed_defaults_replaces_custom_habits() {
        let tracker = HabitTracker::new();
        tracker.add_habit(habit(Some("12:00")).with_id("custom")).unwrap();

        tracker.seed_defaults();
        let habits = tracker.list_habits();

        assert_eq!(habits.len(), SAMPLE_HABITS.len());
        assert!(habits.iter().all(|h| h.id != "custom"));
        let actions: Vec<&str> = habits.iter().map(|h| h.action.as_str()).collect();
        assert_eq!(
            actions,
            vec!["thank God", "wash my face", "do 10 pushups", "read a book for 20 minutes"]
        );
    }

    #[test]
    fn test_concurrent_completions_for_new_bucket() {
        let tracker = HabitTracker::new();

        std::thread::scope(|s| {
            for i in 0..50 {
                let tracker = &tracker;
                s.spawn(move || {
                    tracker
                        .set_completion("weekly", "2024-W10", CompletionPayload::new(format!("h{}", i), true))
                        .unwrap();
                });
            }
        });

        assert_eq!(tracker.completions("weekly", "2024-W10").len(), 50);
        assert_eq!(tracker.completion_ledger().bucket_count(), 1);
    }

    #[test]
    fn test_reset_empties_both_stores() {
        let tracker = HabitTracker::new();
        tracker.seed_defaults();
        tracker
            .set_completion("daily", "2024-01-01", CompletionPayload::new("x", true))
            .unwrap();

        tracker.reset();

        assert!(tracker.habit_store().is_empty());
        assert_eq!(tracker.completion_ledger().bucket_count(), 0);
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(config.socket_addr().is_ok());

        let bad = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(bad.socket_addr(), Err(ServerError::Config(_))));
    }
}
