use crate::{
    extractor::AuthorizedUser,
    model::reservation::{
        CreateReservationRequest, CreateReservationRequestWithUserId,
        ReservationResponse, ReservationsResponse, UpdateReservationRequest,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{ReservationId, UserId},
    reservation,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_reservation(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;
    reservation::validate_time_range(req.start_date, req.end_date)?;

    let event = CreateReservationRequestWithUserId::new(req, user.id()).into();
    let created = registry.reservation_repository().create(event).await?;

    Ok((StatusCode::CREATED, Json(ReservationResponse::from(created))))
}

pub async fn update_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    req.validate(&())?;

    let repo = registry.reservation_repository();
    let existing = repo
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("specified reservation not found".into()))?;

    if !user.can_access(existing.user_id) {
        return Err(AppError::ForbiddenOperation);
    }

    // Validate against the fully merged state so a partial payload can
    // never slip past the time-range rule.
    let merged = existing.merge(req.into());
    reservation::validate_time_range(merged.start_date, merged.end_date)?;

    repo.update(&merged).await?;

    Ok(Json(ReservationResponse::from(merged)))
}

pub async fn delete_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let repo = registry.reservation_repository();
    let existing = repo
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("specified reservation not found".into()))?;

    if !user.can_access(existing.user_id) {
        return Err(AppError::ForbiddenOperation);
    }

    repo.delete(reservation_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn show_reservations_by_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    if !user.can_access(user_id) {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .reservation_repository()
        .find_by_user_id(user_id)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

/// Same listing as `show_reservations_by_user` for now. Reserved as the
/// extension point where each reservation gets enriched with local details
/// fetched from the locals service.
pub async fn show_reservations_with_local_details(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    show_reservations_by_user(user, Path(user_id), State(registry)).await
}

/// The caller's own reservations starting at or after the threshold; there
/// is no admin override for this query.
pub async fn show_reservations_starting_from(
    user: AuthorizedUser,
    Path(threshold): Path<DateTime<Utc>>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_starting_from(user.id(), threshold)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

/// The caller's own reservations ending at or before the threshold.
pub async fn show_reservations_ending_until(
    user: AuthorizedUser,
    Path(threshold): Path<DateTime<Utc>>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_ending_until(user.id(), threshold)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}
