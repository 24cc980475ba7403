use crate::{
    extractor::AuthorizedUser,
    model::report::{
        CreateReportRequest, CreateReportRequestWithUserId, ReportResponse,
        ReportsResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::{LocalId, ReportId, UserId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_report(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReportRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    let event = CreateReportRequestWithUserId::new(req, user.id()).into();
    let created = registry.report_repository().create(event).await?;

    Ok((StatusCode::CREATED, Json(ReportResponse::from(created))))
}

pub async fn delete_report(
    user: AuthorizedUser,
    Path(report_id): Path<ReportId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let repo = registry.report_repository();
    let existing = repo
        .find_by_id(report_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("specified report not found".into()))?;

    if !user.can_access(existing.user_id) {
        return Err(AppError::ForbiddenOperation);
    }

    repo.delete(report_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn show_reports_by_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReportsResponse>> {
    if !user.can_access(user_id) {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .report_repository()
        .find_by_user_id(user_id)
        .await
        .map(ReportsResponse::from)
        .map(Json)
}

/// Deliberately open to every authenticated caller, unlike the per-user
/// listing; anyone may read what was filed against a local.
pub async fn show_reports_by_local(
    _user: AuthorizedUser,
    Path(local_id): Path<LocalId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReportsResponse>> {
    registry
        .report_repository()
        .find_by_local_id(local_id)
        .await
        .map(ReportsResponse::from)
        .map(Json)
}
