use std::sync::Arc;

use intake_core::ids::IdGenerator;
use intake_core::store::{MemoryStore, SubmissionStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Submission storage.
    pub store: Arc<dyn SubmissionStore>,
    /// Source of submission ids.
    pub ids: Arc<IdGenerator>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn SubmissionStore>, config: ServerConfig) -> Self {
        Self {
            store,
            ids: Arc::new(IdGenerator::new()),
            config: Arc::new(config),
        }
    }

    /// State backed by a [`MemoryStore`], seeded when the config asks for it.
    pub fn in_memory(config: ServerConfig) -> Self {
        let store = if config.seed_sample_data {
            MemoryStore::seeded()
        } else {
            MemoryStore::new()
        };
        Self::new(Arc::new(store), config)
    }
}
