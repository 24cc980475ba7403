use crate::model::{
    id::{ReservationId, UserId},
    reservation::{event::CreateReservation, Reservation},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Inserts a reservation and returns it with its store-assigned id.
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    /// Writes a fully merged snapshot back; callers validate the merged
    /// state before handing it over.
    async fn update(&self, reservation: &Reservation) -> AppResult<()>;
    async fn delete(&self, reservation_id: ReservationId) -> AppResult<()>;
    async fn find_by_id(
        &self,
        reservation_id: ReservationId,
    ) -> AppResult<Option<Reservation>>;
    /// Reservations owned by the user, newest start_date first.
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>>;
    /// The user's reservations with start_date >= threshold, ascending.
    async fn find_starting_from(
        &self,
        user_id: UserId,
        threshold: DateTime<Utc>,
    ) -> AppResult<Vec<Reservation>>;
    /// The user's reservations with end_date <= threshold, ascending.
    async fn find_ending_until(
        &self,
        user_id: UserId,
        threshold: DateTime<Utc>,
    ) -> AppResult<Vec<Reservation>>;
}
