//! Submission storage.
//!
//! Handlers only see [`SubmissionStore`], so a persistent backend can
//! replace [`MemoryStore`] without touching parsing or validation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::record::{NewRecord, Record};

/// Append-only record storage.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Append one record and return it as stored.
    async fn append(&self, record: Record) -> Result<Record, CoreError>;

    /// Append a batch contiguously, preserving its order.
    async fn append_all(&self, records: Vec<Record>) -> Result<(), CoreError>;

    /// Every stored record in insertion order.
    async fn list(&self) -> Result<Vec<Record>, CoreError>;

    async fn count(&self) -> Result<usize, CoreError>;
}

/// Process-lifetime, unbounded in-memory list. No deduplication.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// A store pre-populated with [`sample_records`].
    pub fn seeded() -> Self {
        Self::with_records(sample_records())
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn append(&self, record: Record) -> Result<Record, CoreError> {
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn append_all(&self, records: Vec<Record>) -> Result<(), CoreError> {
        self.records.write().await.extend(records);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Record>, CoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn count(&self) -> Result<usize, CoreError> {
        Ok(self.records.read().await.len())
    }
}

/// Demo submissions the service starts with.
pub fn sample_records() -> Vec<Record> {
    let sample = |id: &str,
                  first: &str,
                  last: &str,
                  employee_id: &str,
                  salary: u64,
                  start_date: &str,
                  supervisor: &str,
                  cost_center: &str,
                  project_code: &str,
                  consent: bool| {
        Record::new(
            id,
            NewRecord {
                first_name: first.into(),
                last_name: last.into(),
                employee_id: employee_id.into(),
                phone_number: "1 (555) 555-5555".into(),
                salary,
                start_date: start_date.into(),
                supervisor_email: supervisor.into(),
                cost_center: cost_center.into(),
                project_code: project_code.into(),
                privacy_consent: consent,
                ..Default::default()
            },
        )
    };

    vec![
        sample(
            "1",
            "John",
            "Doe",
            "ABC-12345",
            50000,
            "2020-01-01",
            "supervisor1@the4d.ca",
            "SA-212-XYZ",
            "PRJ-2024-004",
            true,
        ),
        sample(
            "2",
            "Jane",
            "Smith",
            "ABC-12344",
            60000,
            "2020-02-01",
            "supervisor2@the4d.ca",
            "ON-323-ABC",
            "PRJ-2024-003",
            true,
        ),
        sample(
            "3",
            "Alice",
            "Johnson",
            "ABC-12346",
            55000,
            "2020-03-01",
            "supervisor3@the4d.ca",
            "NN-211-DSA",
            "PRJ-2024-001",
            false,
        ),
        sample(
            "4",
            "Bob",
            "Williams",
            "ABC-12347",
            58000,
            "2020-04-01",
            "supervisor4@the4d.ca",
            "AN-923-CAS",
            "PRJ-2024-002",
            true,
        ),
    ]
}
