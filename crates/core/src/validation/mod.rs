//! Field validation engine.
//!
//! A static rule table ([`rules`]) and a pure-logic evaluator
//! ([`evaluator`]). Results are advisory: the server stores records whether
//! or not they pass.

pub mod evaluator;
pub mod rules;

pub use evaluator::{validate_field, validate_new_record, validate_record, ValidationErrors};
pub use rules::{rule_for, rules, FieldRule, RuleDescriptor, RuleKind, REQUIRED_MESSAGE};
