use crate::database::{model::reservation::ReservationRow, ConnectionPool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::{
    id::{ReservationId, UserId},
    reservation::{event::CreateReservation, Reservation},
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        // The id is assigned here, never by the caller.
        let reservation_id = ReservationId::new();
        let row: ReservationRow = sqlx::query_as(
            r#"
                INSERT INTO reservations
                (reservation_id, user_id, local_id, start_date, end_date,
                price, voucher_image_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING
                reservation_id, user_id, local_id, start_date, end_date,
                price, voucher_image_url
                ;
            "#,
        )
        .bind(reservation_id)
        .bind(event.user_id)
        .bind(event.local_id)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(event.price)
        .bind(event.voucher_image_url)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Reservation::from(row))
    }

    async fn update(&self, reservation: &Reservation) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET
                    start_date = $2,
                    end_date = $3,
                    local_id = $4,
                    price = $5,
                    voucher_image_url = $6
                WHERE reservation_id = $1
            "#,
        )
        .bind(reservation.id)
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .bind(reservation.local_id)
        .bind(reservation.price)
        .bind(reservation.voucher_image_url.as_deref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified reservation not found".into(),
            ));
        }

        Ok(())
    }

    async fn delete(&self, reservation_id: ReservationId) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM reservations WHERE reservation_id = $1;
            "#,
        )
        .bind(reservation_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified reservation not found".into(),
            ));
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        reservation_id: ReservationId,
    ) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT
                reservation_id, user_id, local_id, start_date, end_date,
                price, voucher_image_url
                FROM reservations
                WHERE reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Reservation::from))
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>> {
        sqlx::query_as(
            r#"
                SELECT
                reservation_id, user_id, local_id, start_date, end_date,
                price, voucher_image_url
                FROM reservations
                WHERE user_id = $1
                ORDER BY start_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows: Vec<ReservationRow>| rows.into_iter().map(Reservation::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_starting_from(
        &self,
        user_id: UserId,
        threshold: DateTime<Utc>,
    ) -> AppResult<Vec<Reservation>> {
        sqlx::query_as(
            r#"
                SELECT
                reservation_id, user_id, local_id, start_date, end_date,
                price, voucher_image_url
                FROM reservations
                WHERE user_id = $1 AND start_date >= $2
                ORDER BY start_date ASC
            "#,
        )
        .bind(user_id)
        .bind(threshold)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows: Vec<ReservationRow>| rows.into_iter().map(Reservation::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_ending_until(
        &self,
        user_id: UserId,
        threshold: DateTime<Utc>,
    ) -> AppResult<Vec<Reservation>> {
        sqlx::query_as(
            r#"
                SELECT
                reservation_id, user_id, local_id, start_date, end_date,
                price, voucher_image_url
                FROM reservations
                WHERE user_id = $1 AND end_date <= $2
                ORDER BY end_date ASC
            "#,
        )
        .bind(user_id)
        .bind(threshold)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows: Vec<ReservationRow>| rows.into_iter().map(Reservation::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
