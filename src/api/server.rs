/// Axum router and request handlers
///
/// Routes (all under `/api`):
/// - `GET /health`
/// - `GET /habits`, `POST /habits`, `DELETE /habits/:id`
/// - `GET|POST /completions/:period/:period_key`
/// - `POST /seed`
/// - `GET /periods/:period/current`
/// - `GET /dashboard`

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::Local;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::protocol::{ApiError, HealthResponse, PeriodKeyResponse};
use crate::domain::{CompletionPayload, Habit, Period};
use crate::storage::CompletionMap;
use crate::tools::{self, PeriodProgress};
use crate::{HabitTracker, ServerError};

type SharedTracker = Arc<HabitTracker>;

/// Build the application router around a shared tracker
///
/// `allowed_origins` configures CORS; `"*"` allows any origin.
pub fn router(tracker: SharedTracker, allowed_origins: &[String]) -> Result<Router, ServerError> {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/habits", get(list_habits).post(add_habit))
        .route("/habits/:id", delete(delete_habit))
        .route(
            "/completions/:period/:period_key",
            get(get_completions).post(set_completion),
        )
        .route("/seed", post(seed_defaults))
        .route("/periods/:period/current", get(current_period_key))
        .route("/dashboard", get(dashboard))
        .with_state(tracker);

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors_layer(allowed_origins)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, ServerError> {
    let allow_origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| ServerError::Config(format!("invalid CORS origin '{}': {}", origin, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/habits
async fn list_habits(State(tracker): State<SharedTracker>) -> Json<Vec<Habit>> {
    Json(tracker.list_habits())
}

/// POST /api/habits - 201 for a new habit, 200 when an id was replaced
async fn add_habit(
    State(tracker): State<SharedTracker>,
    body: Result<Json<Habit>, JsonRejection>,
) -> Result<(StatusCode, Json<Habit>), ApiError> {
    let Json(habit) = body?;
    let outcome = tracker.add_habit(habit)?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.habit)))
}

/// DELETE /api/habits/:id
async fn delete_habit(State(tracker): State<SharedTracker>, Path(id): Path<String>) -> StatusCode {
    tracker.delete_habit(&id);
    StatusCode::NO_CONTENT
}

/// GET /api/completions/:period/:period_key
async fn get_completions(
    State(tracker): State<SharedTracker>,
    Path((period, period_key)): Path<(String, String)>,
) -> Json<CompletionMap> {
    Json(tracker.completions(&period, &period_key))
}

/// POST /api/completions/:period/:period_key
async fn set_completion(
    State(tracker): State<SharedTracker>,
    Path((period, period_key)): Path<(String, String)>,
    body: Result<Json<CompletionPayload>, JsonRejection>,
) -> Result<Json<CompletionMap>, ApiError> {
    let Json(payload) = body?;
    Ok(Json(tracker.set_completion(&period, &period_key, payload)?))
}

/// POST /api/seed
async fn seed_defaults(State(tracker): State<SharedTracker>) -> Json<Vec<Habit>> {
    info!("Resetting habits to the sample set");
    Json(tracker.seed_defaults())
}

/// GET /api/periods/:period/current
async fn current_period_key(Path(period): Path<String>) -> Result<Json<PeriodKeyResponse>, ApiError> {
    let period: Period = period.parse()?;
    let period_key = tools::current_period_key(period, Local::now().date_naive());

    Ok(Json(PeriodKeyResponse { period, period_key }))
}

/// GET /api/dashboard
async fn dashboard(State(tracker): State<SharedTracker>) -> Json<Vec<PeriodProgress>> {
    Json(tracker.dashboard(Local::now().date_naive()))
}
