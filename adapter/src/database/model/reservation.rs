use kernel::model::{
    id::{LocalId, ReservationId, UserId},
    reservation::Reservation,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub local_id: LocalId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub voucher_image_url: Option<String>,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            reservation_id,
            user_id,
            local_id,
            start_date,
            end_date,
            price,
            voucher_image_url,
        } = value;
        Reservation {
            id: reservation_id,
            user_id,
            local_id,
            start_date,
            end_date,
            price,
            voucher_image_url,
        }
    }
}
