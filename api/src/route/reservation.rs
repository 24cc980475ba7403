use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    delete_reservation, register_reservation, show_reservations_by_user,
    show_reservations_ending_until, show_reservations_starting_from,
    show_reservations_with_local_details, update_reservation,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/", post(register_reservation))
        .route("/:reservation_id", put(update_reservation))
        .route("/:reservation_id", delete(delete_reservation))
        .route("/users/:user_id", get(show_reservations_by_user))
        .route(
            "/users/:user_id/details",
            get(show_reservations_with_local_details),
        )
        .route("/start-date/:threshold", get(show_reservations_starting_from))
        .route("/end-date/:threshold", get(show_reservations_ending_until));

    Router::new().nest("/reservations", reservation_routers)
}
