use crate::model::{
    id::{LocalId, ReportId, UserId},
    report::{event::CreateReport, Report},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Inserts a report and returns it with its store-assigned id and
    /// created_at.
    async fn create(&self, event: CreateReport) -> AppResult<Report>;
    async fn delete(&self, report_id: ReportId) -> AppResult<()>;
    async fn find_by_id(&self, report_id: ReportId) -> AppResult<Option<Report>>;
    /// Reports owned by the user, newest created_at first.
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Report>>;
    /// All reports filed against the local, newest created_at first.
    async fn find_by_local_id(&self, local_id: LocalId) -> AppResult<Vec<Report>>;
}
