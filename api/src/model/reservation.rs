use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{LocalId, ReservationId, UserId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation,
    },
};
use serde::{Deserialize, Serialize};

// The payload carries no user_id field; ownership always comes from the
// authenticated caller via CreateReservationRequestWithUserId.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub start_date: DateTime<Utc>,
    #[garde(skip)]
    pub end_date: DateTime<Utc>,
    #[garde(skip)]
    pub local_id: LocalId,
    #[garde(skip)]
    pub price: f64,
    #[garde(skip)]
    pub voucher_image_url: Option<String>,
}

#[derive(new)]
pub struct CreateReservationRequestWithUserId(CreateReservationRequest, UserId);

impl From<CreateReservationRequestWithUserId> for CreateReservation {
    fn from(value: CreateReservationRequestWithUserId) -> Self {
        let CreateReservationRequestWithUserId(
            CreateReservationRequest {
                start_date,
                end_date,
                local_id,
                price,
                voucher_image_url,
            },
            user_id,
        ) = value;
        CreateReservation {
            user_id,
            local_id,
            start_date,
            end_date,
            price,
            voucher_image_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    #[garde(skip)]
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[garde(skip)]
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[garde(skip)]
    #[serde(default)]
    pub local_id: Option<LocalId>,
    #[garde(skip)]
    #[serde(default)]
    pub price: Option<f64>,
    #[garde(skip)]
    #[serde(default)]
    pub voucher_image_url: Option<String>,
}

impl From<UpdateReservationRequest> for UpdateReservation {
    fn from(value: UpdateReservationRequest) -> Self {
        let UpdateReservationRequest {
            start_date,
            end_date,
            local_id,
            price,
            voucher_image_url,
        } = value;
        UpdateReservation {
            start_date,
            end_date,
            local_id,
            price,
            voucher_image_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub user_id: UserId,
    pub local_id: LocalId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub voucher_image_url: Option<String>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            user_id,
            local_id,
            start_date,
            end_date,
            price,
            voucher_image_url,
        } = value;
        Self {
            id,
            user_id,
            local_id,
            start_date,
            end_date,
            price,
            voucher_image_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn create_request_forces_caller_as_owner() {
        let req: CreateReservationRequest = serde_json::from_str(
            r#"{
                "startDate": "2024-01-01T00:00:00Z",
                "endDate": "2024-01-02T00:00:00Z",
                "localId": "bb0e8400-e29b-41d4-a716-446655440000",
                "price": 100.0
            }"#,
        )
        .unwrap();
        let caller = UserId::new();

        let event: CreateReservation =
            CreateReservationRequestWithUserId::new(req, caller).into();

        assert_eq!(event.user_id, caller);
        assert_eq!(
            event.local_id,
            LocalId::from_str("bb0e8400-e29b-41d4-a716-446655440000").unwrap()
        );
        assert_eq!(event.voucher_image_url, None);
    }

    #[test]
    fn update_request_defaults_absent_fields_to_none() {
        let req: UpdateReservationRequest =
            serde_json::from_str(r#"{"price": 50.0}"#).unwrap();

        let event = UpdateReservation::from(req);

        assert_eq!(event.price, Some(50.0));
        assert!(event.start_date.is_none());
        assert!(event.end_date.is_none());
        assert!(event.local_id.is_none());
        assert!(event.voucher_image_url.is_none());
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = ReservationResponse {
            id: ReservationId::new(),
            user_id: UserId::new(),
            local_id: LocalId::new(),
            start_date: "2024-01-01T00:00:00Z".parse().unwrap(),
            end_date: "2024-01-02T00:00:00Z".parse().unwrap(),
            price: 100.0,
            voucher_image_url: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("startDate").is_some());
        assert!(json.get("voucherImageUrl").is_some());
        assert!(json.get("user_id").is_none());
    }
}
