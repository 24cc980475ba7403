use crate::database::{model::report::ReportRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{LocalId, ReportId, UserId},
    report::{event::CreateReport, Report},
};
use kernel::repository::report::ReportRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReportRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReportRepository for ReportRepositoryImpl {
    async fn create(&self, event: CreateReport) -> AppResult<Report> {
        let report_id = ReportId::new();
        // created_at comes from the table default so it reflects commit time.
        let row: ReportRow = sqlx::query_as(
            r#"
                INSERT INTO reports
                (report_id, local_id, user_id, title, description)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING
                report_id, local_id, user_id, title, description, created_at
                ;
            "#,
        )
        .bind(report_id)
        .bind(event.local_id)
        .bind(event.user_id)
        .bind(event.title)
        .bind(event.description)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Report::from(row))
    }

    async fn delete(&self, report_id: ReportId) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM reports WHERE report_id = $1;
            "#,
        )
        .bind(report_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified report not found".into()));
        }

        Ok(())
    }

    async fn find_by_id(&self, report_id: ReportId) -> AppResult<Option<Report>> {
        let row: Option<ReportRow> = sqlx::query_as(
            r#"
                SELECT
                report_id, local_id, user_id, title, description, created_at
                FROM reports
                WHERE report_id = $1
            "#,
        )
        .bind(report_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Report::from))
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Report>> {
        sqlx::query_as(
            r#"
                SELECT
                report_id, local_id, user_id, title, description, created_at
                FROM reports
                WHERE user_id = $1
                ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows: Vec<ReportRow>| rows.into_iter().map(Report::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_local_id(&self, local_id: LocalId) -> AppResult<Vec<Report>> {
        sqlx::query_as(
            r#"
                SELECT
                report_id, local_id, user_id, title, description, created_at
                FROM reports
                WHERE local_id = $1
                ORDER BY created_at DESC
            "#,
        )
        .bind(local_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows: Vec<ReportRow>| rows.into_iter().map(Report::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
