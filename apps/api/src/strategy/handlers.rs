//! Axum route handlers for the Strategy API.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ProductRecord;
use crate::currency;
use crate::errors::AppError;
use crate::state::AppState;
use crate::strategy::generator::{generate_strategy, Language, StrategyRequest};

/// Fixed name of the exported strategy file.
pub const STRATEGY_FILENAME: &str = "clickbank_strategy.txt";

// Form contract bounds, mirrored server-side.
const INVESTMENT_MIN_BRL: f64 = 0.0;
const INVESTMENT_MAX_BRL: f64 = 100_000.0;
const GOAL_MIN_BRL: f64 = 500.0;
const GOAL_MAX_BRL: f64 = 100_000.0;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub session_id: Uuid,
    /// Available budget in BRL.
    pub investment: f64,
    /// Desired monthly earnings in BRL.
    pub monthly_goal: f64,
    pub skills: String,
    #[serde(default)]
    pub language: Language,
}

/// A catalog hit enriched with the commission figures the page displays.
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub name: String,
    pub price_usd: f64,
    pub commission_pct: f64,
    pub gravity: u32,
    pub url: String,
    pub commission_usd: f64,
    pub commission_brl: f64,
}

impl From<&ProductRecord> for ProductSummary {
    fn from(record: &ProductRecord) -> Self {
        let commission_usd = currency::commission_per_sale(record.price, record.commission_pct);
        Self {
            name: record.name.to_string(),
            price_usd: record.price,
            commission_pct: record.commission_pct,
            gravity: record.gravity,
            url: record.url.to_string(),
            commission_usd,
            commission_brl: currency::usd_to_brl(commission_usd),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub strategy: String,
    pub products: Vec<ProductSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/strategy
///
/// The form submission. Validates inputs, resolves the credential
/// (deployment key first, then the session key), runs the generation
/// pipeline and records the outcome into the session.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.skills.trim().is_empty() {
        return Err(AppError::Validation(
            "Please describe your skills".to_string(),
        ));
    }
    if !(INVESTMENT_MIN_BRL..=INVESTMENT_MAX_BRL).contains(&request.investment) {
        return Err(AppError::Validation(format!(
            "investment must be between {INVESTMENT_MIN_BRL} and {INVESTMENT_MAX_BRL}"
        )));
    }
    if !(GOAL_MIN_BRL..=GOAL_MAX_BRL).contains(&request.monthly_goal) {
        return Err(AppError::Validation(format!(
            "monthly_goal must be between {GOAL_MIN_BRL} and {GOAL_MAX_BRL}"
        )));
    }

    let session = state
        .sessions
        .get(request.session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", request.session_id)))?;

    // Deployment key wins over the session-scoped key.
    let api_key = state
        .config
        .gemini_api_key
        .clone()
        .or(session.api_key)
        .ok_or(AppError::MissingCredential)?;

    let strategy_request = StrategyRequest {
        investment_brl: request.investment,
        monthly_goal_brl: request.monthly_goal,
        skills: request.skills,
        language: request.language,
    };

    let outcome =
        generate_strategy(state.generator.as_ref(), &api_key, &strategy_request).await;

    state.sessions.record_result(
        request.session_id,
        outcome.products.clone(),
        outcome.strategy.clone(),
    );

    Ok(Json(AnalyzeResponse {
        strategy: outcome.strategy,
        products: outcome.products.iter().map(ProductSummary::from).collect(),
    }))
}

/// GET /api/v1/strategy/:session_id/download
///
/// Plain-text export of the last generated strategy, verbatim, under the
/// fixed filename.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<(HeaderMap, String), AppError> {
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    let strategy = session
        .strategy
        .ok_or_else(|| AppError::NotFound("No strategy generated yet".to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    let disposition = format!("attachment; filename=\"{STRATEGY_FILENAME}\"");
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid disposition header: {e}")))?,
    );

    Ok((headers, strategy))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::config::Config;
    use crate::llm_client::{LlmError, TextGenerator};
    use crate::session::SessionStore;
    use crate::strategy::prompts::FAILURE_MARKER;

    /// Stub backend that counts calls — lets tests assert the external call
    /// never happens on validation or credential failures.
    struct CountingStub {
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TextGenerator for CountingStub {
        async fn generate(&self, api_key: &str, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(LlmError::Api {
                    status: 503,
                    message: "backend unavailable".to_string(),
                })
            } else {
                Ok(format!("strategy via {api_key}"))
            }
        }
    }

    fn test_state(env_key: Option<&str>, fail: bool) -> (AppState, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let state = AppState {
            config: Config {
                gemini_api_key: env_key.map(str::to_string),
                port: 8080,
                rust_log: "info".to_string(),
            },
            sessions: SessionStore::new(),
            generator: Arc::new(CountingStub {
                fail,
                calls: calls.clone(),
            }),
        };
        (state, calls)
    }

    fn analyze_request(session_id: Uuid, skills: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            session_id,
            investment: 500.0,
            monthly_goal: 3000.0,
            skills: skills.to_string(),
            language: Language::English,
        }
    }

    #[tokio::test]
    async fn test_empty_skills_never_reaches_the_backend() {
        let (state, calls) = test_state(Some("env-key"), false);
        let session_id = state.sessions.create();

        let result = handle_analyze(
            State(state),
            Json(analyze_request(session_id, "   ")),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_out_of_bounds_amounts_are_rejected() {
        let (state, calls) = test_state(Some("env-key"), false);
        let session_id = state.sessions.create();

        let mut request = analyze_request(session_id, "health");
        request.investment = 150_000.0;
        let result = handle_analyze(State(state.clone()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let mut request = analyze_request(session_id, "health");
        request.monthly_goal = 100.0; // below the 500 floor
        let result = handle_analyze(State(state), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let (state, _) = test_state(Some("env-key"), false);
        let result = handle_analyze(
            State(state),
            Json(analyze_request(Uuid::new_v4(), "health")),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_no_credential_blocks_generation() {
        let (state, calls) = test_state(None, false);
        let session_id = state.sessions.create();

        let result = handle_analyze(
            State(state),
            Json(analyze_request(session_id, "health")),
        )
        .await;

        assert!(matches!(result, Err(AppError::MissingCredential)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_env_key_takes_precedence_over_session_key() {
        let (state, _) = test_state(Some("env-key"), false);
        let session_id = state.sessions.create();
        state.sessions.set_api_key(session_id, "session-key".to_string());

        let response = handle_analyze(
            State(state),
            Json(analyze_request(session_id, "health")),
        )
        .await
        .unwrap();

        assert_eq!(response.0.strategy, "strategy via env-key");
    }

    #[tokio::test]
    async fn test_session_key_used_when_no_env_key() {
        let (state, _) = test_state(None, false);
        let session_id = state.sessions.create();
        state.sessions.set_api_key(session_id, "session-key".to_string());

        let response = handle_analyze(
            State(state),
            Json(analyze_request(session_id, "health")),
        )
        .await
        .unwrap();

        assert_eq!(response.0.strategy, "strategy via session-key");
    }

    #[tokio::test]
    async fn test_successful_analysis_records_session_state() {
        let (state, calls) = test_state(Some("env-key"), false);
        let session_id = state.sessions.create();

        let response = handle_analyze(
            State(state.clone()),
            Json(analyze_request(session_id, "health and fitness")),
        )
        .await
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // first-match-wins: health only
        assert_eq!(response.0.products.len(), 2);
        assert_eq!(response.0.products[0].name, "The Smoothie Diet");
        assert_eq!(response.0.products[0].commission_usd, 27.75);
        assert_eq!(response.0.products[0].commission_brl, 27.75 * 5.0);

        let session = state.sessions.get(session_id).unwrap();
        assert_eq!(session.products.len(), 2);
        assert_eq!(session.strategy.as_deref(), Some("strategy via env-key"));
    }

    #[tokio::test]
    async fn test_backend_failure_degrades_to_marker_text() {
        let (state, _) = test_state(Some("env-key"), true);
        let session_id = state.sessions.create();

        let response = handle_analyze(
            State(state.clone()),
            Json(analyze_request(session_id, "health")),
        )
        .await
        .unwrap();

        assert!(response.0.strategy.starts_with(FAILURE_MARKER));
        // the failure text is still recorded and downloadable
        let session = state.sessions.get(session_id).unwrap();
        assert!(session.strategy.unwrap().starts_with(FAILURE_MARKER));
    }

    #[tokio::test]
    async fn test_download_requires_a_generated_strategy() {
        let (state, _) = test_state(Some("env-key"), false);
        let session_id = state.sessions.create();

        let result = handle_download(State(state.clone()), Path(session_id)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        handle_analyze(
            State(state.clone()),
            Json(analyze_request(session_id, "health")),
        )
        .await
        .unwrap();

        let (headers, body) = handle_download(State(state), Path(session_id)).await.unwrap();
        assert_eq!(body, "strategy via env-key");
        assert_eq!(
            headers[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            format!("attachment; filename=\"{STRATEGY_FILENAME}\"")
        );
    }
}
