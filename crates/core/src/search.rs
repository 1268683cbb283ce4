//! Full-name search over submissions.

use crate::record::Record;

/// Case-insensitive exact match of `"{firstName} {lastName}"` against
/// `term`. Both sides are trimmed; an empty term matches everything.
pub fn matches_full_name(record: &Record, term: &str) -> bool {
    let search = term.trim().to_lowercase();
    search.is_empty() || record.full_name().to_lowercase().trim() == search
}

/// Keep only the records whose full name matches `term`, preserving order.
pub fn filter_by_full_name(records: Vec<Record>, term: &str) -> Vec<Record> {
    if term.trim().is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| matches_full_name(record, term))
        .collect()
}
