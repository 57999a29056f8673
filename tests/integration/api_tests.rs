/// HTTP-level tests: requests go through the full router, CORS and tracing included
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use habit_tracker_api::*;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

#[cfg(test)]
mod http_api_tests {
    use super::*;

    fn app() -> (Router, Arc<HabitTracker>) {
        let tracker = Arc::new(HabitTracker::new());
        let origins: Vec<String> = DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect();
        let router = tokio_test::assert_ok!(router(tracker.clone(), &origins));
        (router, tracker)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn habit_body(time: Value) -> Value {
        json!({
            "trigger": "Tea",
            "time": time,
            "action": "read a book",
            "goal": "reading",
            "frequency": "daily"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        let (status, body) = send(&app, Method::GET, "/api/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn test_create_list_and_update_habit() {
        let (app, _) = app();

        let (status, created) = send(&app, Method::POST, "/api/habits", Some(habit_body(json!("06:30")))).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert!(id.starts_with("h_"));
        assert!(created["createdAt"].as_i64().unwrap() > 0);

        let mut update = habit_body(json!("07:00"));
        update["id"] = json!(id);
        update["createdAt"] = json!(5);
        let (status, updated) = send(&app, Method::POST, "/api/habits", Some(update)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["createdAt"], created["createdAt"]);

        let (status, list) = send(&app, Method::GET, "/api/habits", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["time"], "07:00");
    }

    #[tokio::test]
    async fn test_invalid_habit_is_rejected() {
        let (app, tracker) = app();

        let (status, body) = send(&app, Method::POST, "/api/habits", Some(habit_body(json!("7am")))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "time");

        let mut blank = habit_body(Value::Null);
        blank["goal"] = json!("");
        let (status, body) = send(&app, Method::POST, "/api/habits", Some(blank)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "goal");

        assert!(tracker.list_habits().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let (app, _) = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/habits")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_completions_round_trip_and_cascade() {
        let (app, _) = app();

        let (_, created) = send(&app, Method::POST, "/api/habits", Some(habit_body(Value::Null))).await;
        let id = created["id"].as_str().unwrap().to_string();

        let (status, bucket) = send(
            &app,
            Method::POST,
            "/api/completions/daily/2024-01-01",
            Some(json!({ "habitId": id.clone(), "completed": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bucket[&id], true);

        let (_, other) = send(&app, Method::GET, "/api/completions/daily/2024-01-02", None).await;
        assert_eq!(other, json!({}));

        let (status, _) = send(&app, Method::DELETE, &format!("/api/habits/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, after) = send(&app, Method::GET, "/api/completions/daily/2024-01-01", None).await;
        assert_eq!(after, json!({}));
    }

    #[tokio::test]
    async fn test_delete_unknown_habit_is_no_content() {
        let (app, _) = app();
        let (status, _) = send(&app, Method::DELETE, "/api/habits/does-not-exist", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_blank_completion_habit_id_is_rejected() {
        let (app, _) = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/completions/daily/2024-01-01",
            Some(json!({ "habitId": "", "completed": true })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "habitId");
    }

    #[tokio::test]
    async fn test_seed_returns_sorted_samples() {
        let (app, _) = app();
        send(&app, Method::POST, "/api/habits", Some(habit_body(json!("04:00")))).await;

        let (status, seeded) = send(&app, Method::POST, "/api/seed", None).await;
        assert_eq!(status, StatusCode::OK);

        let times: Vec<&str> = seeded
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["time"].as_str().unwrap())
            .collect();
        assert_eq!(times, vec!["05:45", "06:00", "06:15", "06:30"]);
    }

    #[tokio::test]
    async fn test_current_period_key() {
        let (app, _) = app();

        let (status, body) = send(&app, Method::GET, "/api/periods/quarterly/current", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "quarterly");
        assert!(body["periodKey"].as_str().unwrap().contains("-Q"));

        let (status, _) = send(&app, Method::GET, "/api/periods/hourly/current", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard_lists_every_period() {
        let (app, _) = app();
        send(&app, Method::POST, "/api/seed", None).await;

        let (status, body) = send(&app, Method::GET, "/api/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);

        let periods = body.as_array().unwrap();
        assert_eq!(periods.len(), 5);
        assert_eq!(periods[0]["period"], "daily");
        assert_eq!(periods[0]["total"], 4);
        assert_eq!(periods[0]["done"], 0);
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() {
        let (app, _) = app();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/habits")
            .header(header::ORIGIN, "http://localhost:4200")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:4200"
        );
    }

    #[test]
    fn test_invalid_origin_is_a_config_error() {
        let tracker = Arc::new(HabitTracker::new());
        let result = router(tracker, &["bad\norigin".to_string()]);
        assert!(matches!(result, Err(ServerError::Config(_))));
    }
}
