use kernel::model::{
    id::{LocalId, ReportId, UserId},
    report::Report,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct ReportRow {
    pub report_id: ReportId,
    pub local_id: LocalId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReportRow> for Report {
    fn from(value: ReportRow) -> Self {
        let ReportRow {
            report_id,
            local_id,
            user_id,
            title,
            description,
            created_at,
        } = value;
        Report {
            id: report_id,
            local_id,
            user_id,
            title,
            description,
            created_at,
        }
    }
}
