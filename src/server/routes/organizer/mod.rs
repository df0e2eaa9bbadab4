use crate::server::router::AlmanacState;
use axum::{Router, routing::get};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<AlmanacState> {
    Router::new()
        .route(
            "/api/data",
            get(handlers::organizer_state_handler).post(handlers::organizer_action_handler),
        )
        .route("/api/contacts", get(handlers::contact_search_handler))
        .route("/api/contacts/{name}", get(handlers::contact_lookup_handler))
}
