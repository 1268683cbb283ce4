//! Rule evaluator. Pure logic, no I/O.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::rules::{rule_for, RuleKind, REQUIRED_MESSAGE};
use crate::record::NewRecord;

/// Failing fields mapped to their messages.
pub type ValidationErrors = BTreeMap<String, String>;

/// Check one field. Returns an empty string when the value is acceptable,
/// otherwise the message to show next to the field.
pub fn validate_field(name: &str, value: &Value) -> String {
    let Some(rule) = rule_for(name) else {
        return String::new();
    };

    if is_blank(value) {
        return REQUIRED_MESSAGE.to_string();
    }

    match &rule.kind {
        RuleKind::Required => String::new(),
        RuleKind::Pattern(re) => {
            if re.is_match(render(value).trim()) {
                String::new()
            } else {
                rule.message.to_string()
            }
        }
    }
}

/// Check every key present in `data`, collecting the failures.
pub fn validate_record(data: &Map<String, Value>) -> ValidationErrors {
    data.iter()
        .filter_map(|(field, value)| {
            let message = validate_field(field, value);
            (!message.is_empty()).then(|| (field.clone(), message))
        })
        .collect()
}

pub fn validate_new_record(record: &NewRecord) -> ValidationErrors {
    validate_record(&record.to_map())
}

/// Null, `false`, zero and whitespace-only strings all count as missing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_record() -> Map<String, Value> {
        let value = json!({
            "firstName": "John",
            "lastName": "Doe",
            "employeeId": "ABC-12345",
            "phoneNumber": "+1 (555) 555-5555",
            "salary": "50000",
            "startDate": "2020-01-01",
            "supervisorEmail": "sup@the4d.ca",
            "costCenter": "AB-123-XYZ",
            "projectCode": "PRJ-2024-001",
            "privacyConsent": true
        });
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn empty_values_are_required() {
        for field in ["firstName", "employeeId", "salary", "startDate", "projectCode"] {
            assert_eq!(validate_field(field, &json!("")), REQUIRED_MESSAGE);
            assert_eq!(validate_field(field, &json!("   ")), REQUIRED_MESSAGE);
            assert_eq!(validate_field(field, &Value::Null), REQUIRED_MESSAGE);
        }
    }

    #[test]
    fn zero_salary_counts_as_missing() {
        assert_eq!(validate_field("salary", &json!(0)), REQUIRED_MESSAGE);
    }

    #[test]
    fn matching_values_pass() {
        for (field, value) in valid_record() {
            assert_eq!(validate_field(&field, &value), "", "{field} should pass");
        }
    }

    #[test]
    fn values_are_trimmed_before_matching() {
        assert_eq!(validate_field("employeeId", &json!("  ABC-12345 ")), "");
    }

    #[test]
    fn mismatches_return_field_message() {
        let cases = [
            ("firstName", json!("J"), "First name must be 2-50 letters only"),
            ("firstName", json!("J0hn"), "First name must be 2-50 letters only"),
            ("lastName", json!("O'Neil"), "Last name must be 2-50 letters only"),
            ("supervisorEmail", json!("sup@gmail.com"), "Must be a valid @the4d.ca email"),
            ("employeeId", json!("abc-12345"), "Format: ABC-12345"),
            ("phoneNumber", json!("1 (555) 555-5555"), "Format: +1 (555) 555-5555"),
            ("salary", json!("-100"), "Must be a positive number"),
            ("salary", json!("012"), "Must be a positive number"),
            ("costCenter", json!("A-123-XYZ"), "Format: AB-123-ABC"),
            ("projectCode", json!("PRJ-24-001"), "Format: PRJ-YEAR-001"),
        ];
        for (field, value, message) in cases {
            assert_eq!(validate_field(field, &value), message, "{field} = {value}");
        }
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        let cases = [
            // Arabic-Indic digits.
            ("employeeId", "ABC-\u{0661}\u{0662}\u{0663}\u{0664}\u{0665}", "Format: ABC-12345"),
            // Fullwidth digits.
            ("projectCode", "PRJ-\u{FF12}\u{FF10}\u{FF12}\u{FF14}-001", "Format: PRJ-YEAR-001"),
            ("salary", "\u{0665}0000", "Must be a positive number"),
            ("phoneNumber", "+1 (\u{FF15}55) 555-5555", "Format: +1 (555) 555-5555"),
            ("costCenter", "AB-\u{0661}23-XYZ", "Format: AB-123-ABC"),
        ];
        for (field, value, message) in cases {
            assert_eq!(validate_field(field, &json!(value)), message, "{field} = {value}");
        }
    }

    #[test]
    fn numeric_salary_is_rendered_before_matching() {
        assert_eq!(validate_field("salary", &json!(50000)), "");
        assert_eq!(validate_field("salary", &json!(12.5)), "Must be a positive number");
    }

    #[test]
    fn unruled_fields_always_pass() {
        assert_eq!(validate_field("id", &json!("")), "");
        assert_eq!(validate_field("privacyConsent", &json!(false)), "");
        assert_eq!(validate_field("department", &Value::Null), "");
    }

    #[test]
    fn record_collects_only_failures() {
        let mut data = valid_record();
        data.insert("firstName".into(), json!(""));
        data.insert("costCenter".into(), json!("bad"));

        let errors = validate_record(&data);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["firstName"], REQUIRED_MESSAGE);
        assert_eq!(errors["costCenter"], "Format: AB-123-ABC");
    }

    #[test]
    fn record_only_checks_present_keys() {
        let mut data = Map::new();
        data.insert("employeeId".into(), json!("ABC-12345"));
        assert!(validate_record(&data).is_empty());
    }

    #[test]
    fn typed_record_validation() {
        let record = NewRecord {
            first_name: "John".into(),
            last_name: "Doe".into(),
            employee_id: "ABC-12345".into(),
            phone_number: "+1 (555) 555-5555".into(),
            salary: 0,
            start_date: "2020-01-01".into(),
            supervisor_email: "sup@the4d.ca".into(),
            cost_center: "AB-123-XYZ".into(),
            project_code: "PRJ-2024-001".into(),
            privacy_consent: false,
            extra: Map::new(),
        };

        let errors = validate_new_record(&record);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["salary"], REQUIRED_MESSAGE);
    }
}
