use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{LocalId, ReportId, UserId},
    report::{event::CreateReport, Report},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    #[garde(skip)]
    pub local_id: LocalId,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub description: String,
}

#[derive(new)]
pub struct CreateReportRequestWithUserId(CreateReportRequest, UserId);

impl From<CreateReportRequestWithUserId> for CreateReport {
    fn from(value: CreateReportRequestWithUserId) -> Self {
        let CreateReportRequestWithUserId(
            CreateReportRequest {
                local_id,
                title,
                description,
            },
            user_id,
        ) = value;
        CreateReport {
            user_id,
            local_id,
            title,
            description,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: ReportId,
    pub local_id: LocalId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponse {
    fn from(value: Report) -> Self {
        let Report {
            id,
            local_id,
            user_id,
            title,
            description,
            created_at,
        } = value;
        Self {
            id,
            local_id,
            user_id,
            title,
            description,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsResponse {
    pub items: Vec<ReportResponse>,
}

impl From<Vec<Report>> for ReportsResponse {
    fn from(value: Vec<Report>) -> Self {
        Self {
            items: value.into_iter().map(ReportResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_forces_caller_as_owner() {
        let req: CreateReportRequest = serde_json::from_str(
            r#"{
                "localId": "bb0e8400-e29b-41d4-a716-446655440000",
                "title": "Broken projector",
                "description": "The projector in room 2 does not turn on."
            }"#,
        )
        .unwrap();
        let caller = UserId::new();

        let event: CreateReport = CreateReportRequestWithUserId::new(req, caller).into();

        assert_eq!(event.user_id, caller);
        assert_eq!(event.title, "Broken projector");
    }

    #[test]
    fn empty_title_is_rejected() {
        let req = CreateReportRequest {
            local_id: LocalId::new(),
            title: "".into(),
            description: "something".into(),
        };
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn empty_description_is_rejected() {
        let req = CreateReportRequest {
            local_id: LocalId::new(),
            title: "something".into(),
            description: "".into(),
        };
        assert!(req.validate(&()).is_err());
    }
}
