//! HTTP request handlers for the commission deadline API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::DerivedFieldsResult;
use crate::error::EngineError;
use crate::models::{LegalizationInput, Order, OrderRecord};

use super::request::DeriveRequest;
use super::response::{ApiError, ApiErrorResponse, AuditTrace, DeriveResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/derive", post(derive_handler))
        .route("/orders", post(create_order_handler))
        .route(
            "/orders/:order_number",
            get(get_order_handler).put(edit_order_handler),
        )
        .route(
            "/orders/:order_number/legalization",
            put(legalization_handler),
        )
        .route("/maintenance/recalculate", post(recalculate_handler))
        .with_state(state)
}

/// Handler for POST /derive.
///
/// Computes derived fields for an order without storing anything.
///
/// Order dates that cannot be read give a 200 with the safe-default fields and
/// an `UNPARSABLE_ORDER` warning. An unreadable `today` is a 400.
async fn derive_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeriveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing derive request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    let service = state.service();
    let today = match request.today() {
        Ok(explicit) => explicit.unwrap_or_else(|| service.today()),
        Err(err) => return engine_error(correlation_id, err),
    };
    let holidays = request.holiday_set();
    let order_number = request.order.order_number;

    let start_time = Instant::now();
    let result = match Order::try_from(request.order) {
        Ok(order) => service.preview_order(&order, holidays, Some(today)).await,
        Err(err) => DerivedFieldsResult::unparsable(order_number, &err),
    };
    info!(
        correlation_id = %correlation_id,
        order_number,
        alert = %result.fields.alert,
        warnings = result.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Derivation completed"
    );

    json_response(
        StatusCode::OK,
        DeriveResponse {
            calculation_id: correlation_id,
            calculated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            order_number,
            today,
            derived: result.fields.to_record(),
            audit_trace: AuditTrace {
                steps: result.audit_steps,
                warnings: result.warnings,
            },
        },
    )
}

/// Handler for POST /orders.
async fn create_order_handler(
    State(state): State<AppState>,
    payload: Result<Json<OrderRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing order registration");

    let record = match payload {
        Ok(Json(record)) => record,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    match state.service().register_order(record).await {
        Ok(saved) => {
            info!(
                correlation_id = %correlation_id,
                order_number = saved.order_number,
                "Order registration completed"
            );
            json_response(StatusCode::CREATED, saved)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /orders/{order_number}.
async fn get_order_handler(
    State(state): State<AppState>,
    Path(order_number): Path<u64>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().get_order(order_number).await {
        Ok(record) => json_response(StatusCode::OK, record),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for PUT /orders/{order_number}.
async fn edit_order_handler(
    State(state): State<AppState>,
    Path(order_number): Path<u64>,
    payload: Result<Json<OrderRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, order_number, "Processing order edit");

    let record = match payload {
        Ok(Json(record)) => record,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    match state.service().edit_order(order_number, record).await {
        Ok(saved) => json_response(StatusCode::OK, saved),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for PUT /orders/{order_number}/legalization.
async fn legalization_handler(
    State(state): State<AppState>,
    Path(order_number): Path<u64>,
    payload: Result<Json<LegalizationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, order_number, "Processing legalization");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    match state.service().record_legalization(order_number, input).await {
        Ok(saved) => json_response(StatusCode::OK, saved),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /maintenance/recalculate.
///
/// Recomputes every stored order and reports per-order failures.
async fn recalculate_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bulk recalculation");

    let start_time = Instant::now();
    match state.service().recalculate_all().await {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                updated = summary.updated,
                failed = summary.failures.len(),
                duration_ms = start_time.elapsed().as_millis(),
                "Bulk recalculation completed"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
