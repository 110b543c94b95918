use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use log::{info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{SearchStats, ShortestPathAlgorithm};
use crate::graph::JsonAdjacency;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions
            .lock()
            .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "state_poisoned", "Session store is unavailable".to_string()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/distances", post(run_distances))
        .route("/api/sessions", get(list_sessions).post(create_session))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/sessions/:session_id/distances", post(run_session_distances))
        .route("/api/health", get(health_check))
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (status, Json(ErrorResponse {
        error: error.to_string(),
        message,
    }))
}

fn library_error(err: Error) -> ApiError {
    warn!("Rejected request: {}", err);
    let code = match err {
        Error::UnknownStartVertex(_) => "unknown_start_vertex",
        Error::NegativeWeight { .. } => "negative_weight",
        Error::Json(_) => "invalid_graph",
        Error::EmptyQueue | Error::Io(_) => "internal_error",
    };
    let status = match err {
        Error::EmptyQueue | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    api_error(status, code, err.to_string())
}

fn parse_graph(adjacency: JsonAdjacency) -> Result<WebGraph, ApiError> {
    WebGraph::from_adjacency(adjacency).map_err(library_error)
}

fn run_search(graph: &WebGraph, start: String, strict: bool) -> Result<DistanceResponse, ApiError> {
    let dijkstra = Dijkstra::new().with_start_check(strict);
    let mut stats = SearchStats::default();

    let start_time = Instant::now();
    let distances = dijkstra
        .compute_observed(graph, &start, &mut stats)
        .map_err(library_error)?;
    let execution_time = start_time.elapsed();

    Ok(DistanceResponse {
        execution_id: Uuid::new_v4(),
        start,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances,
        stats,
    })
}

/// Compute distances for a graph sent with the request
pub async fn run_distances(
    Json(request): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let graph = parse_graph(request.graph)?;
    let response = run_search(&graph, request.start, request.strict)?;
    Ok(Json(response))
}

/// Store a graph in a new session
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionInfo>), ApiError> {
    let graph = parse_graph(request.graph)?;
    let session = Session::new(graph);
    let info = session.info();

    let mut sessions = state.sessions()?;
    prune_expired(&mut sessions, state.config.session_timeout_minutes);
    if sessions.len() >= state.config.max_sessions {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "too_many_sessions",
            format!("Session limit of {} reached", state.config.max_sessions),
        ));
    }
    sessions.insert(session.id, session);
    info!("Created session {} ({} vertices)", info.id, info.vertex_count);

    Ok((StatusCode::CREATED, Json(info)))
}

/// List all sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionInfo>>, ApiError> {
    let mut sessions = state.sessions()?;
    prune_expired(&mut sessions, state.config.session_timeout_minutes);

    let mut infos: Vec<SessionInfo> = sessions.values().map(Session::info).collect();
    infos.sort_by_key(|info| info.created_at);
    Ok(Json(infos))
}

/// Get a specific session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionInfo>, ApiError> {
    let sessions = state.sessions()?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.info())),
        None => Err(session_not_found()),
    }
}

/// Compute distances on a stored graph
pub async fn run_session_distances(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SessionDistanceRequest>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let graph = {
        let sessions = state.sessions()?;
        match sessions.get(&session_id) {
            Some(session) => session.graph.clone(),
            None => return Err(session_not_found()),
        }
    };

    let response = run_search(&graph, request.start, request.strict)?;

    // Update session with result
    {
        let mut sessions = state.sessions()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

fn prune_expired(sessions: &mut HashMap<Uuid, Session>, timeout_minutes: u64) {
    let cutoff = i64::try_from(timeout_minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .and_then(|timeout| Utc::now().checked_sub_signed(timeout));
    // A timeout too large to represent never expires anything
    let Some(cutoff) = cutoff else {
        return;
    };
    sessions.retain(|_, session| session.created_at >= cutoff);
}
