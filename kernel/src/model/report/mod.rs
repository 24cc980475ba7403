use crate::model::id::{LocalId, ReportId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: ReportId,
    pub local_id: LocalId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
