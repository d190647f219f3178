use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use metrics::{counter, histogram};
use token_select_core::selector::{select, SelectorError};
use token_select_core::types::{ComputeRequest, ComputeResponse};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::problem::ProblemResponse;
use crate::router::AppState;

pub async fn handle(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Result<Json<ComputeResponse>, ProblemResponse> {
    let start = Instant::now();
    let op_id = Uuid::new_v4().to_string();

    let Json(request) = payload.map_err(|rejection| {
        counter!("compute_requests_total", "result" => "invalid_body").increment(1);
        warn!(stage = "compute", %op_id, error = %rejection.body_text(), "rejected request body");
        ProblemResponse::new(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
    })?;

    let count = request.tokens.len();
    if count > state.max_tokens() {
        counter!("compute_requests_total", "result" => "too_many_tokens").increment(1);
        warn!(stage = "compute", %op_id, count, limit = state.max_tokens(), "token limit exceeded");
        return Err(ProblemResponse::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            "too_many_tokens",
            format!(
                "request carried {count} tokens; at most {} are accepted",
                state.max_tokens()
            ),
        ));
    }

    let selection = select(&request.tokens).map_err(|err| match err {
        SelectorError::EmptyInput => {
            counter!("compute_requests_total", "result" => "empty_input").increment(1);
            debug!(stage = "compute", %op_id, "empty token sequence");
            ProblemResponse::new(StatusCode::UNPROCESSABLE_ENTITY, "empty_input", err.to_string())
        }
    })?;

    counter!("compute_requests_total", "result" => "ok").increment(1);
    histogram!("compute_tokens").record(count as f64);
    info!(
        stage = "compute",
        %op_id,
        count,
        index = selection.index,
        length = selection.length,
        elapsed_us = start.elapsed().as_micros() as u64,
        "selected longest token"
    );

    Ok(Json(
        ComputeResponse::from_selection(selection).with_op_id(op_id),
    ))
}
