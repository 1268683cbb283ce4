//! Positional plain-text import: one record per line, eleven comma-separated
//! fields in [`RECORD_COLUMNS`](crate::record::RECORD_COLUMNS) order.

use serde_json::Map;

use super::{id_or_generate, ImportError};
use crate::ids::IdGenerator;
use crate::record::{coerce_consent, coerce_salary, NewRecord, Record};

/// Parse plain text into records.
///
/// Blank lines are skipped. Any other line without exactly
/// [`TEXT_FIELD_COUNT`](super::TEXT_FIELD_COUNT) fields fails the whole import.
pub fn parse_text(text: &str, ids: &IdGenerator) -> Result<Vec<Record>, ImportError> {
    let mut records = Vec::new();

    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        let [
            id,
            first_name,
            last_name,
            employee_id,
            phone_number,
            salary,
            start_date,
            supervisor_email,
            cost_center,
            project_code,
            privacy_consent,
        ] = parts.as_slice()
        else {
            return Err(ImportError::FieldCount {
                line: idx + 1,
                found: parts.len(),
            });
        };

        let fields = NewRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            employee_id: employee_id.to_string(),
            phone_number: phone_number.to_string(),
            salary: coerce_salary(salary),
            start_date: start_date.to_string(),
            supervisor_email: supervisor_email.to_string(),
            cost_center: cost_center.to_string(),
            project_code: project_code.to_string(),
            privacy_consent: coerce_consent(privacy_consent),
            extra: Map::new(),
        };
        records.push(Record::new(id_or_generate(id, ids), fields));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    const LINE: &str = "1,John,Doe,ABC-12345,+1 (555) 555-5555,50000,2020-01-01,\
                        sup@the4d.ca,AB-123-XYZ,PRJ-2024-001,true";

    #[test]
    fn parses_positional_line() {
        let ids = IdGenerator::new();
        let records = parse_text(LINE, &ids).unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.id, "1");
        assert_eq!(r.fields.first_name, "John");
        assert_eq!(r.fields.phone_number, "+1 (555) 555-5555");
        assert_eq!(r.fields.salary, 50000);
        assert!(r.fields.privacy_consent);

        let value = serde_json::to_value(r).unwrap();
        assert_eq!(value["salary"], json!(50000));
        assert_eq!(value["privacyConsent"], json!(true));
    }

    #[test]
    fn trims_fields_and_skips_blank_lines() {
        let ids = IdGenerator::new();
        let text = format!("\n  {LINE}  \r\n\n 2 , Jane , Smith ,ABC-1,x, 70000 ,d,e,f,g, false \n");

        let records = parse_text(&text, &ids).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, "2");
        assert_eq!(records[1].fields.first_name, "Jane");
        assert_eq!(records[1].fields.salary, 70000);
        assert!(!records[1].fields.privacy_consent);
    }

    #[test]
    fn non_numeric_salary_defaults_to_zero() {
        let ids = IdGenerator::new();
        let line = LINE.replace("50000", "lots");
        let records = parse_text(&line, &ids).unwrap();
        assert_eq!(records[0].fields.salary, 0);
    }

    #[test]
    fn only_literal_true_grants_consent() {
        let ids = IdGenerator::new();
        for (raw, expected) in [("true", true), ("True", false), ("1", false), ("", false)] {
            let line = LINE.replace(",true", &format!(",{raw}"));
            let records = parse_text(&line, &ids).unwrap();
            assert_eq!(records[0].fields.privacy_consent, expected, "{raw:?}");
        }
    }

    #[test]
    fn wrong_field_count_fails_with_line_number() {
        let ids = IdGenerator::new();
        let text = format!("{LINE}\n\n1,Too,Short\n");
        assert_matches!(
            parse_text(&text, &ids),
            Err(ImportError::FieldCount { line: 3, found: 3 })
        );

        let too_long = format!("{LINE},extra");
        assert_matches!(
            parse_text(&too_long, &ids),
            Err(ImportError::FieldCount { line: 1, found: 12 })
        );
    }

    #[test]
    fn blank_id_generates_one() {
        let ids = IdGenerator::new();
        let line = LINE.replacen('1', "", 1);
        let records = parse_text(&line, &ids).unwrap();
        assert!(!records[0].id.is_empty());
        assert_ne!(records[0].id, "1");
    }

    #[test]
    fn empty_text_yields_nothing() {
        let ids = IdGenerator::new();
        assert!(parse_text("", &ids).unwrap().is_empty());
        assert!(parse_text("\n \n", &ids).unwrap().is_empty());
    }
}
