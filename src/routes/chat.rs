use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthResponse},
    services::{
        metrics_manager::MetricsData,
        quick_actions::{QUICK_ACTIONS, QuickAction},
        random::ThreadRandom,
        responder::respond,
    },
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.inspect_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "rejected chat request");
    })?;

    let reply = respond(
        &payload.user_message,
        payload.customer_name.as_deref(),
        &mut ThreadRandom,
    );

    state.metrics.record(reply.category).await;
    tracing::debug!(
        category = %reply.category,
        has_name = reply.customer_name.is_some(),
        "chat reply generated"
    );

    Ok(Json(ChatResponse {
        reply: reply.text,
        customer_name: reply.customer_name,
    }))
}

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
    })
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}

pub async fn quick_actions_handler() -> Json<[QuickAction; 4]> {
    Json(QUICK_ACTIONS)
}
