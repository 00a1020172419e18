use crate::api::AppState;
use crate::api::middleware::AdminUser;
use crate::api::schemas::contact::{ActionResponse, Submission, SubmitRequest, UpdateStatus};
use crate::domain::submission::{SubmissionDraft, SubmissionStatus};
use crate::error::{AppError, FieldError, Result};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Public contact-form submission. No authorization.
pub async fn submit(State(state): State<AppState>, Json(payload): Json<SubmitRequest>) -> Result<impl IntoResponse> {
    let draft = SubmissionDraft {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        message: payload.message,
    };

    state.contact_service.submit(draft).await?;

    Ok((StatusCode::CREATED, Json(ActionResponse { success: true, message: "Mensagem enviada com sucesso!" })))
}

/// Admin inbox: the full collection, newest first.
pub async fn list(_admin: AdminUser, State(state): State<AppState>) -> Result<impl IntoResponse> {
    let submissions = state.contact_service.list().await?;
    let body: Vec<Submission> = submissions.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

pub async fn get_by_id(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let submission = state.contact_service.get_by_id(id).await?;
    Ok(Json(Submission::from(submission)))
}

pub async fn update_status(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatus>,
) -> Result<impl IntoResponse> {
    let status = payload.status.parse::<SubmissionStatus>().map_err(|()| {
        AppError::Validation(vec![FieldError { field: "status", message: "Status inválido" }])
    })?;

    state.contact_service.update_status(id, status).await?;

    Ok(Json(ActionResponse { success: true, message: "Status atualizado com sucesso!" }))
}
