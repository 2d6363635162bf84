//! HTTP request handlers for the severance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_breakdown;
use crate::error::EngineError;
use crate::letter::assemble_letter;
use crate::models::{
    CompensationInputs, EmploymentPeriod, EntitlementFlags, LetterRequest, TerminationVariant,
};

use super::request::{CalculationRequest, LetterGenerationRequest};
use super::response::{ApiError, ApiErrorResponse, LetterResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/resignation", post(resignation_handler))
        .route("/calculate/dismissal", post(dismissal_handler))
        .route("/letter", post(letter_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error.
fn map_rejection(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Runs a calculation for an already-resolved variant and builds the
/// response.
fn run_calculation(
    state: &AppState,
    request: CalculationRequest,
    variant: TerminationVariant,
    correlation_id: Uuid,
) -> Response {
    let period: EmploymentPeriod = request.period.into();
    let compensation: CompensationInputs = request.compensation.into();
    let entitlements: EntitlementFlags = request.entitlements.into();
    let today = Utc::now().date_naive();

    match compute_breakdown(
        &period,
        &compensation,
        &entitlements,
        variant,
        state.params(),
        today,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                worker = %request.name,
                lines = result.lines.len(),
                total = %result.total,
                duration_us = result.trace.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /calculate/resignation.
async fn resignation_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing resignation calculation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(map_rejection(rejection, correlation_id)),
    };

    run_calculation(
        &state,
        request,
        TerminationVariant::Resignation,
        correlation_id,
    )
}

/// Handler for POST /calculate/dismissal.
///
/// Requires the `dismissal` section of the request; the category drives
/// severance-compensation eligibility.
async fn dismissal_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing dismissal calculation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(map_rejection(rejection, correlation_id)),
    };

    let variant = match &request.dismissal {
        Some(details) => TerminationVariant::Dismissal {
            category: details.category,
            notice_given: details.notice_given,
        },
        None => {
            warn!(correlation_id = %correlation_id, "Dismissal details missing");
            let api_error: ApiErrorResponse = EngineError::MissingDismissalDetails {
                message: "dismissal category is required".to_string(),
            }
            .into();
            return api_error.into_response();
        }
    };

    run_calculation(&state, request, variant, correlation_id)
}

/// Handler for POST /letter.
async fn letter_handler(
    payload: Result<Json<LetterGenerationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing letter generation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(map_rejection(rejection, correlation_id)),
    };

    let letter_request: LetterRequest = request.into();
    let today = Utc::now().date_naive();
    let document = assemble_letter(&letter_request, today);

    info!(
        correlation_id = %correlation_id,
        paragraphs = document.paragraphs.len(),
        "Letter assembled"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(LetterResponse {
            text: document.to_text(),
            document,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{ComponentKind, SeveranceBreakdown};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use serde_json::json;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/pt_labor_code").expect("Failed to load config");
        AppState::new(config)
    }

    fn valid_calculation_body() -> serde_json::Value {
        json!({
            "name": "João Ferreira",
            "period": {
                "start_date": "2020-01-02",
                "end_date": "2023-01-01"
            },
            "compensation": {
                "monthly_salary": 1000,
                "daily_meal_allowance": 6,
                "unused_vacation_days": 10
            },
            "entitlements": {
                "vacation_subsidy": true,
                "christmas_subsidy": true,
                "last_month_salary_unpaid": false
            },
            "dismissal": {
                "category": "collective",
                "notice_given": true
            }
        })
    }

    async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, Vec<u8>) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_api_001_valid_dismissal_returns_200() {
        let (status, body) = post_json("/calculate/dismissal", valid_calculation_body()).await;
        assert_eq!(status, StatusCode::OK);

        let result: SeveranceBreakdown = serde_json::from_slice(&body).unwrap();
        assert!(result.variant.is_dismissal());
        assert_eq!(result.tenure.years, 2);
        // 2 × 1000 × 0.66
        assert_eq!(
            result.amount(ComponentKind::SeveranceCompensation),
            Decimal::from(1320)
        );
        let sum: Decimal = result.lines.iter().map(|l| l.amount).sum();
        assert_eq!(result.total, sum);
    }

    #[tokio::test]
    async fn test_api_002_valid_resignation_returns_200() {
        let mut body = valid_calculation_body();
        body["entitlements"]["last_month_salary_unpaid"] = json!(true);

        let (status, bytes) = post_json("/calculate/resignation", body).await;
        assert_eq!(status, StatusCode::OK);

        let result: SeveranceBreakdown = serde_json::from_slice(&bytes).unwrap();
        assert!(!result.variant.is_dismissal());
        assert_eq!(
            result.amount(ComponentKind::OutstandingSalary),
            Decimal::from(1000)
        );
        // The dismissal section is ignored by the resignation endpoint.
        assert!(result.line(ComponentKind::SeveranceCompensation).is_none());
        assert!(result.line(ComponentKind::BaseSalary).is_none());
    }

    #[tokio::test]
    async fn test_api_003_dismissal_without_details_returns_400() {
        let mut body = valid_calculation_body();
        body.as_object_mut().unwrap().remove("dismissal");

        let (status, bytes) = post_json("/calculate/dismissal", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MISSING_DISMISSAL_DETAILS");
    }

    #[tokio::test]
    async fn test_api_004_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate/resignation")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_005_invalid_date_order_returns_400() {
        let mut body = valid_calculation_body();
        body["period"]["start_date"] = json!("2023-01-02");
        body["period"]["end_date"] = json!("2023-01-01");

        let (status, bytes) = post_json("/calculate/dismissal", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_DATE_ORDER");
    }

    #[tokio::test]
    async fn test_api_006_future_end_date_returns_400() {
        let mut body = valid_calculation_body();
        body["period"]["end_date"] = json!("2100-01-01");

        let (status, bytes) = post_json("/calculate/resignation", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "FUTURE_END_DATE");
    }

    #[tokio::test]
    async fn test_api_007_letter_generation() {
        let body = json!({
            "name": "Maria Santos",
            "role": "Técnica de Vendas",
            "company": "Empresa Exemplo Lda.",
            "start_date": "2019-04-01",
            "end_date": "2024-02-29",
            "letter_type": "employer_initiated",
            "notice_given": true,
            "notice_days": 60,
            "reason": "Reestruturação do departamento",
            "request_final_settlement": true
        });

        let (status, bytes) = post_json("/letter", body).await;
        assert_eq!(status, StatusCode::OK);

        let response: LetterResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(response.text.contains("60 dias"));
        assert!(response.text.contains("Maria Santos"));
        assert_eq!(
            response.document.paragraphs.len(),
            11 // all paragraphs, notice and settlement included
        );
    }

    #[tokio::test]
    async fn test_api_008_lenient_salary_string() {
        let mut body = valid_calculation_body();
        body["compensation"]["monthly_salary"] = json!("1.000,00 €");

        let (status, bytes) = post_json("/calculate/dismissal", body).await;
        assert_eq!(status, StatusCode::OK);

        let result: SeveranceBreakdown = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result.amount(ComponentKind::BaseSalary), Decimal::from(1000));
    }
}
