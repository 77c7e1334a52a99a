use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::dto::{self, DeleteAck, DeleteFailure, Health, TransitionSummary};
use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::campus_actor::CampusError;
use crate::model::{Campus, CampusCreate, CampusId, CampusPatch, StatusReport};

pub async fn healthcheck() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn create_campus(
    State(state): State<AppState>,
    Json(payload): Json<CampusCreate>,
) -> ApiResult<(StatusCode, Json<Campus>)> {
    let campus = state.campuses.create(payload).await?;
    Ok((StatusCode::CREATED, Json(campus)))
}

pub async fn list_campuses(State(state): State<AppState>) -> ApiResult<Json<Vec<Campus>>> {
    Ok(Json(state.campuses.find_all().await?))
}

pub async fn get_campus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Campus>> {
    Ok(Json(state.campuses.find_by_id(CampusId::from(id)).await?))
}

pub async fn update_campus(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CampusPatch>,
) -> ApiResult<Json<Campus>> {
    let campus = state
        .campuses
        .update(CampusId::from(id), patch)
        .await
        .map_err(ApiError::for_update)?;
    Ok(Json(campus))
}

pub async fn delete_campus(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = CampusId::from(id);
    match state.campuses.delete(id.clone()).await {
        Ok(campus) => Json(DeleteAck {
            message: dto::DEACTIVATED,
            id: campus.id,
        })
        .into_response(),
        Err(CampusError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(DeleteFailure {
                error: dto::NOT_FOUND,
                id,
            }),
        )
            .into_response(),
        Err(other) => ApiError::from(other).into_response(),
    }
}

pub async fn open_campus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TransitionSummary>> {
    let campus = state.campuses.open(CampusId::from(id)).await?;
    Ok(Json(TransitionSummary::new(dto::OPENED, campus)))
}

pub async fn close_campus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TransitionSummary>> {
    let campus = state.campuses.close(CampusId::from(id)).await?;
    Ok(Json(TransitionSummary::new(dto::CLOSED, campus)))
}

pub async fn maintain_campus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TransitionSummary>> {
    let campus = state.campuses.enter_maintenance(CampusId::from(id)).await?;
    Ok(Json(TransitionSummary::new(dto::MAINTENANCE, campus)))
}

pub async fn campus_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<StatusReport>> {
    Ok(Json(state.campuses.status(CampusId::from(id)).await?))
}

pub async fn campuses_in_state(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<Vec<Campus>>> {
    Ok(Json(state.campuses.find_by_state(Some(code.as_str())).await?))
}

pub async fn available_campuses(State(state): State<AppState>) -> ApiResult<Json<Vec<Campus>>> {
    Ok(Json(state.campuses.find_available().await?))
}
