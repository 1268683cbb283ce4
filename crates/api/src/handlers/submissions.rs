//! Handlers for submitting, listing and exporting employee records.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::Json;
use intake_core::export::records_to_csv;
use intake_core::record::{NewRecord, Record};
use intake_core::search::filter_by_full_name;
use intake_core::validation::validate_new_record;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters shared by the list and export endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Exact full name (`"First Last"`), case-insensitive.
    pub search: Option<String>,
}

/// POST /api/submit
///
/// Assign an id and store the record. Validation runs for logging only;
/// a failing record is stored all the same.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<NewRecord>,
) -> AppResult<(StatusCode, Json<DataResponse<Record>>)> {
    let errors = validate_new_record(&input);
    if !errors.is_empty() {
        tracing::debug!(?errors, "Storing submission that fails validation");
    }

    let record = Record::new(state.ids.next_id(), input);
    let record = state.store.append(record).await?;
    tracing::info!(id = %record.id, "Submission stored");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /api/submissions?search=
///
/// Every stored record in insertion order, optionally narrowed to an exact
/// full-name match.
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Record>>> {
    let records = search(&state, &params).await?;
    Ok(Json(records))
}

/// GET /api/submissions/export?search=
///
/// The same list as CSV, served as an attachment.
pub async fn export_submissions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<(
    StatusCode,
    [(header::HeaderName, &'static str); 2],
    String,
)> {
    let records = search(&state, &params).await?;
    tracing::info!(count = records.len(), "Exporting submissions");
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"submissions.csv\"",
            ),
        ],
        records_to_csv(&records),
    ))
}

async fn search(state: &AppState, params: &SearchParams) -> AppResult<Vec<Record>> {
    let records = state.store.list().await?;
    Ok(match params.search.as_deref() {
        Some(term) => filter_by_full_name(records, term),
        None => records,
    })
}
