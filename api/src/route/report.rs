use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::report::{
    delete_report, register_report, show_reports_by_local, show_reports_by_user,
};

pub fn build_report_routers() -> Router<AppRegistry> {
    let report_routers = Router::new()
        .route("/", post(register_report))
        .route("/:report_id", delete(delete_report))
        .route("/users/:user_id", get(show_reports_by_user))
        .route("/locals/:local_id", get(show_reports_by_local));

    Router::new().nest("/reports", report_routers)
}
