use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::{DistanceTable, SearchStats};
use crate::graph::{DirectedGraph, Graph, JsonAdjacency};

/// Graph type served by the API
pub type WebGraph = DirectedGraph<String, OrderedFloat<f64>>;

/// One-shot distance request carrying its own graph
#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub graph: JsonAdjacency,
    pub start: String,
    #[serde(default)]
    pub strict: bool,
}

/// Distance request against a graph stored in a session
#[derive(Debug, Deserialize)]
pub struct SessionDistanceRequest {
    pub start: String,
    #[serde(default)]
    pub strict: bool,
}

/// Request to store a graph for repeated queries
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub graph: JsonAdjacency,
}

/// Response containing search results
#[derive(Debug, Clone, Serialize)]
pub struct DistanceResponse {
    pub execution_id: Uuid,
    pub start: String,
    pub execution_time_ms: f64,
    /// Unreachable vertices are `null`
    pub distances: DistanceTable<String, OrderedFloat<f64>>,
    pub stats: SearchStats,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Session containing a graph and its latest result
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub last_result: Option<DistanceResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WebGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            last_result: None,
            created_at: Utc::now(),
        }
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            created_at: self.created_at,
            last_result: self.last_result.clone(),
        }
    }
}

/// Serializable view of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_result: Option<DistanceResponse>,
}
