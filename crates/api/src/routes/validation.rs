//! Route definitions for the advisory validation endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::validation;
use crate::state::AppState;

/// ```text
/// POST   /validate            -> validate     (dry-run)
/// GET    /validation/rules    -> list_rules
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(validation::validate))
        .route("/validation/rules", get(validation::list_rules))
}
