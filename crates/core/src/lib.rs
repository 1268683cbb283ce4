//! Domain logic for the employee document intake service.
//!
//! Everything in this crate is free of HTTP concerns: record types, the
//! field validation engine, the CSV/TXT import parser, full-name search,
//! CSV export, id generation and the submission store interface.

pub mod error;
pub mod export;
pub mod ids;
pub mod import;
pub mod record;
pub mod search;
pub mod store;
pub mod validation;
