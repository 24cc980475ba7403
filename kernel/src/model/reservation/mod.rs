use crate::model::id::{LocalId, ReservationId, UserId};
use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult};

pub mod event;

use event::UpdateReservation;

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ReservationId,
    pub user_id: UserId,
    pub local_id: LocalId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub voucher_image_url: Option<String>,
}

impl Reservation {
    /// Applies a partial update over this snapshot. Fields absent from the
    /// event keep their stored values; the result is the fully resolved
    /// post-update state the validator must see.
    pub fn merge(mut self, event: UpdateReservation) -> Self {
        let UpdateReservation {
            start_date,
            end_date,
            local_id,
            price,
            voucher_image_url,
        } = event;
        if let Some(start_date) = start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = end_date {
            self.end_date = end_date;
        }
        if let Some(local_id) = local_id {
            self.local_id = local_id;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(voucher_image_url) = voucher_image_url {
            self.voucher_image_url = Some(voucher_image_url);
        }
        self
    }
}

/// A reservation must occupy a strictly positive time window; equal
/// timestamps are rejected. Price and voucher URL are deliberately left
/// unvalidated.
pub fn validate_time_range(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> AppResult<()> {
    if end_date <= start_date {
        return Err(AppError::InvalidTimeRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    fn reservation() -> Reservation {
        Reservation {
            id: ReservationId::new(),
            user_id: UserId::new(),
            local_id: LocalId::new(),
            start_date: at(1, 0),
            end_date: at(2, 0),
            price: 100.0,
            voucher_image_url: None,
        }
    }

    fn patch() -> UpdateReservation {
        UpdateReservation::default()
    }

    #[test]
    fn accepts_positive_duration() {
        assert!(validate_time_range(at(1, 0), at(1, 1)).is_ok());
    }

    #[test]
    fn rejects_equal_timestamps() {
        let res = validate_time_range(at(1, 0), at(1, 0));
        assert!(matches!(res, Err(AppError::InvalidTimeRange)));
    }

    #[test]
    fn rejects_reversed_range() {
        let res = validate_time_range(at(2, 0), at(1, 0));
        assert!(matches!(res, Err(AppError::InvalidTimeRange)));
    }

    #[test]
    fn merge_retains_absent_fields() {
        let original = reservation();
        let merged = original.clone().merge(UpdateReservation {
            price: Some(50.0),
            ..patch()
        });

        assert_eq!(merged.price, 50.0);
        assert_eq!(merged.start_date, original.start_date);
        assert_eq!(merged.end_date, original.end_date);
        assert_eq!(merged.local_id, original.local_id);
        assert!(validate_time_range(merged.start_date, merged.end_date).is_ok());
    }

    #[test]
    fn merge_applies_present_fields() {
        let merged = reservation().merge(UpdateReservation {
            end_date: Some(at(3, 0)),
            voucher_image_url: Some("https://example.com/voucher.png".into()),
            ..patch()
        });

        assert_eq!(merged.end_date, at(3, 0));
        assert_eq!(
            merged.voucher_image_url.as_deref(),
            Some("https://example.com/voucher.png")
        );
    }

    #[test]
    fn shrinking_end_to_start_fails_against_merged_state() {
        let original = reservation();
        let merged = original.clone().merge(UpdateReservation {
            end_date: Some(original.start_date),
            ..patch()
        });

        let res = validate_time_range(merged.start_date, merged.end_date);
        assert!(matches!(res, Err(AppError::InvalidTimeRange)));
        // The snapshot the caller loaded is untouched; nothing was written.
        assert_eq!(original.end_date, at(2, 0));
    }
}
