//! Serving semantics for the vector endpoint, independent of any HTTP
//! framework.
//!
//! A network layer owns the socket and routing; it hands the request method
//! and raw query values to [`handle_vectors`] and writes the returned
//! status, headers, and body back out. Invalid client input never surfaces
//! as an error: bad query values fall back to the defaults, and only
//! unexpected internal failures map to a 5xx.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::dataset::{
    generate, DatasetConfig, VectorItem, DEFAULT_NUM_DIMENSIONS, DEFAULT_NUM_SAMPLES,
};

/// JSON envelope returned for vector data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorDataResponse {
    pub data: Vec<VectorItem>,
    pub total: usize,
}

/// Parsed query parameters for the vector endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorQuery {
    pub limit: usize,
    pub dimensions: usize,
}

impl Default for VectorQuery {
    fn default() -> Self {
        VectorQuery {
            limit: DEFAULT_NUM_SAMPLES,
            dimensions: DEFAULT_NUM_DIMENSIONS,
        }
    }
}

impl VectorQuery {
    /// Parse raw query values.
    ///
    /// Missing, malformed, or non-positive values fall back to the defaults
    /// (500 items, 100 dimensions) instead of erroring.
    pub fn from_params(limit: Option<&str>, dimensions: Option<&str>) -> Self {
        VectorQuery {
            limit: parse_positive(limit).unwrap_or(DEFAULT_NUM_SAMPLES),
            dimensions: parse_positive(dimensions).unwrap_or(DEFAULT_NUM_DIMENSIONS),
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw?.parse::<usize>().ok().filter(|v| *v > 0)
}

/// Status, headers, and body for the network layer to write out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// CORS headers attached to every response: any origin, GET and OPTIONS,
/// Content-Type allowed.
fn cors_headers() -> Vec<(String, String)> {
    vec![
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Methods".to_string(),
            "GET, OPTIONS".to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        ),
    ]
}

/// Handle one request to the vector endpoint.
///
/// `OPTIONS` answers the CORS preflight with an empty 200; anything other
/// than `GET` is rejected with 405. A `GET` generates a fresh batch for the
/// query and returns the `{data, total}` envelope.
pub fn handle_vectors(method: &str, query: VectorQuery) -> ServiceResponse {
    let mut headers = cors_headers();

    if method == "OPTIONS" {
        return ServiceResponse {
            status: 200,
            headers,
            body: Vec::new(),
        };
    }

    if method != "GET" {
        warn!(method, "rejecting unsupported method");
        return ServiceResponse {
            status: 405,
            headers,
            body: b"Method not allowed".to_vec(),
        };
    }

    debug!(
        limit = query.limit,
        dimensions = query.dimensions,
        "serving vector data"
    );

    let config = DatasetConfig {
        num_samples: query.limit,
        num_dimensions: query.dimensions,
        seed: None,
    };

    let body = generate(&config)
        .map_err(|e| e.to_string())
        .and_then(|data| {
            let envelope = VectorDataResponse {
                total: data.len(),
                data,
            };
            serde_json::to_vec(&envelope).map_err(|e| e.to_string())
        });

    headers.push((
        "Content-Type".to_string(),
        "application/json".to_string(),
    ));

    match body {
        Ok(body) => ServiceResponse {
            status: 200,
            headers,
            body,
        },
        Err(message) => {
            error!(%message, "vector generation failed");
            let body = serde_json::json!({ "error": message });
            ServiceResponse {
                status: 500,
                headers,
                body: serde_json::to_vec(&body).unwrap_or_default(),
            }
        }
    }
}
