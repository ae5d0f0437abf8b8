use axum::http::StatusCode;

/// Liveness only; says nothing about the catalog file or the database.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
