//! Route definitions for record submission, listing and import.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{submissions, upload};
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// POST   /submit               -> submit
/// GET    /submissions          -> list_submissions    (?search)
/// GET    /submissions/export   -> export_submissions  (?search)
/// POST   /upload               -> upload_file         (multipart `file`)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submissions::submit))
        .route("/submissions", get(submissions::list_submissions))
        .route("/submissions/export", get(submissions::export_submissions))
        .route("/upload", post(upload::upload_file))
}
