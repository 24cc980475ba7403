use crate::model::id::{LocalId, UserId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateReservation {
    pub user_id: UserId,
    pub local_id: LocalId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub voucher_image_url: Option<String>,
}

/// Partial update; `None` fields keep their stored values.
#[derive(new, Debug, Default)]
pub struct UpdateReservation {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub local_id: Option<LocalId>,
    pub price: Option<f64>,
    pub voucher_image_url: Option<String>,
}
