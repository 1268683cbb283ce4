//! Handlers for the advisory validation endpoints.

use axum::Json;
use intake_core::validation::{rules, validate_record, RuleDescriptor, ValidationErrors};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::response::DataResponse;

/// Outcome of a dry-run validation.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: ValidationErrors,
}

/// POST /api/validate
///
/// Run the rule engine over every key of the posted object. Nothing is
/// stored.
pub async fn validate(
    Json(data): Json<Map<String, Value>>,
) -> Json<DataResponse<ValidationReport>> {
    let errors = validate_record(&data);
    Json(DataResponse {
        data: ValidationReport {
            valid: errors.is_empty(),
            errors,
        },
    })
}

/// GET /api/validation/rules
pub async fn list_rules() -> Json<DataResponse<Vec<RuleDescriptor>>> {
    Json(DataResponse {
        data: rules().iter().map(|rule| rule.describe()).collect(),
    })
}
