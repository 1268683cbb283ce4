//! The per-field rule table.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Message returned for any ruled field whose value is blank.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// What a rule checks beyond presence.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Presence only.
    Required,
    /// Presence, then the trimmed value must match.
    Pattern(Regex),
}

/// A single field's contract.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: RuleKind,
    pub message: &'static str,
}

/// Serializable view of a [`FieldRule`].
#[derive(Debug, Clone, Serialize)]
pub struct RuleDescriptor {
    pub field: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub message: &'static str,
}

impl FieldRule {
    fn pattern(field: &'static str, pattern: &str, message: &'static str) -> Self {
        Self {
            field,
            kind: RuleKind::Pattern(Regex::new(pattern).expect("valid regex")),
            message,
        }
    }

    fn required(field: &'static str, message: &'static str) -> Self {
        Self {
            field,
            kind: RuleKind::Required,
            message,
        }
    }

    pub fn describe(&self) -> RuleDescriptor {
        RuleDescriptor {
            field: self.field,
            required: true,
            pattern: match &self.kind {
                RuleKind::Required => None,
                RuleKind::Pattern(re) => Some(re.as_str().to_string()),
            },
            message: self.message,
        }
    }
}

static RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        FieldRule::pattern(
            "firstName",
            r"^[A-Za-z]{2,50}$",
            "First name must be 2-50 letters only",
        ),
        FieldRule::pattern(
            "lastName",
            r"^[A-Za-z]{2,50}$",
            "Last name must be 2-50 letters only",
        ),
        FieldRule::pattern(
            "supervisorEmail",
            r"^[a-zA-Z0-9._%+-]+@the4d\.ca$",
            "Must be a valid @the4d.ca email",
        ),
        FieldRule::pattern("employeeId", r"^[A-Z]{3}-[0-9]{5}$", "Format: ABC-12345"),
        FieldRule::pattern(
            "phoneNumber",
            r"^\+1 \([0-9]{3}\) [0-9]{3}-[0-9]{4}$",
            "Format: +1 (555) 555-5555",
        ),
        FieldRule::pattern("salary", r"^[1-9][0-9]*$", "Must be a positive number"),
        FieldRule::required("startDate", "Start date is required"),
        FieldRule::pattern("costCenter", r"^[A-Z]{2}-[0-9]{3}-[A-Z]{3}$", "Format: AB-123-ABC"),
        FieldRule::pattern("projectCode", r"^PRJ-[0-9]{4}-[0-9]{3}$", "Format: PRJ-YEAR-001"),
    ]
});

/// All rules, in declaration order.
pub fn rules() -> &'static [FieldRule] {
    &RULES
}

/// The rule for `field`, if it has one.
pub fn rule_for(field: &str) -> Option<&'static FieldRule> {
    RULES.iter().find(|rule| rule.field == field)
}
