pub mod health;
pub mod submissions;
pub mod validation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /submit                     create one record (POST)
/// /submissions                list records (?search)
/// /submissions/export         list records as CSV (?search)
/// /upload                     bulk import from a .csv or .txt file (POST)
///
/// /validate                   dry-run validation (POST)
/// /validation/rules           rule table
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(submissions::router())
        .merge(validation::router())
}
