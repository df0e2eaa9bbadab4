use crate::server::router::AlmanacState;
use axum::{Router, response::Html, routing::get};

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router<AlmanacState> {
    Router::new().route("/", get(index_handler))
}
