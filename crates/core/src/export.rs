//! CSV export of submissions.

use crate::record::{Record, RECORD_COLUMNS};

/// Escape a value for CSV: wrap in quotes if it contains a comma, quote or
/// line break.
fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render records as CSV with a camelCase header row.
///
/// Only the eleven record columns are written; extra imported columns are
/// left out.
pub fn records_to_csv(records: &[Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(RECORD_COLUMNS.join(","));

    for record in records {
        let f = &record.fields;
        let row = [
            csv_escape(&record.id),
            csv_escape(&f.first_name),
            csv_escape(&f.last_name),
            csv_escape(&f.employee_id),
            csv_escape(&f.phone_number),
            f.salary.to_string(),
            csv_escape(&f.start_date),
            csv_escape(&f.supervisor_email),
            csv_escape(&f.cost_center),
            csv_escape(&f.project_code),
            f.privacy_consent.to_string(),
        ];
        lines.push(row.join(","));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
