//! The classification endpoint and the result it serves.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tokio::task::JoinError;

use crate::fun_fact::{FactClient, FactServiceConfig};
use crate::properties::{
    Property, armstrong_explanation, digit_sum, get_properties, is_armstrong, is_perfect, is_prime,
};
use crate::validate::parse_number;

/////////////////////////////////////////// Classification /////////////////////////////////////////////

/// The response body for a successfully classified number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The validated integer.
    pub number: i64,
    /// Whether the number is prime.
    pub is_prime: bool,
    /// Whether the number is perfect.
    pub is_perfect: bool,
    /// `armstrong` (when applicable) followed by the parity tag.
    pub properties: Vec<Property>,
    /// Sum of the decimal digits of the absolute value.
    pub digit_sum: u64,
    /// A fact from the fact service, a fallback message, or the Armstrong explanation.
    pub fun_fact: String,
}

/// Number-theoretic properties of a single integer, computed without I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Whether the number is prime.
    pub is_prime: bool,
    /// Whether the number is perfect.
    pub is_perfect: bool,
    /// Whether the number is an Armstrong number.
    pub is_armstrong: bool,
    /// `armstrong` (when applicable) followed by the parity tag.
    pub properties: Vec<Property>,
    /// Sum of the decimal digits of the absolute value.
    pub digit_sum: u64,
}

/// Runs every property evaluator over `number`.
pub fn evaluate(number: i64) -> Evaluation {
    Evaluation {
        is_prime: is_prime(number),
        is_perfect: is_perfect(number),
        is_armstrong: is_armstrong(number),
        properties: get_properties(number),
        digit_sum: digit_sum(number),
    }
}

/// Classifies `number`, consulting `facts` for the fun fact.
///
/// The evaluators run on the blocking pool while the fact lookup is in
/// flight, keeping the async workers free.  Armstrong numbers always
/// report their digit-power explanation in place of whatever the fact service
/// returned.
pub async fn classify(facts: &FactClient, number: i64) -> Result<ClassificationResult, JoinError> {
    let evaluation = tokio::task::spawn_blocking(move || evaluate(number));
    let fetched = facts.fun_fact(number).await;
    let evaluation = evaluation.await?;

    let fun_fact = if evaluation.is_armstrong {
        armstrong_explanation(number)
    } else {
        fetched
    };
    Ok(ClassificationResult {
        number,
        is_prime: evaluation.is_prime,
        is_perfect: evaluation.is_perfect,
        properties: evaluation.properties,
        digit_sum: evaluation.digit_sum,
        fun_fact,
    })
}

////////////////////////////////////////////// Routes //////////////////////////////////////////////////

/// Shared state for the classification routes.
#[derive(Debug, Clone)]
pub struct ClassifyState {
    facts: Arc<FactClient>,
}

impl ClassifyState {
    /// Builds state whose fact client follows `config`.
    pub fn new(config: &FactServiceConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(FactClient::new(config)?))
    }

    /// Wraps an already constructed fact client.
    pub fn with_client(facts: FactClient) -> Self {
        Self {
            facts: Arc::new(facts),
        }
    }
}

async fn classify_number(
    State(state): State<ClassifyState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ClassificationResult>, Response> {
    // The first `number` parameter wins when it repeats.
    let raw = params
        .iter()
        .find(|(key, _)| key == "number")
        .map(|(_, value)| value.as_str());

    let number = parse_number(raw).map_err(|err| {
        tracing::debug!(input = ?raw, error = %err, "rejected classification input");
        err.into_response()
    })?;

    let result = classify(&state.facts, number).await.map_err(|err| {
        tracing::error!(number, error = %err, "classification task failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "classification failed").into_response()
    })?;
    tracing::debug!(
        number,
        is_prime = result.is_prime,
        is_perfect = result.is_perfect,
        "classified number"
    );
    Ok(Json(result))
}

////////////////////////////////////////////// Router //////////////////////////////////////////////////

/// Creates an Axum router with the classification endpoint.
pub fn create_classify_router(state: ClassifyState) -> Router {
    Router::new()
        .route("/classify-number", get(classify_number))
        .with_state(state)
}
