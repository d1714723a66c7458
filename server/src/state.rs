use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::calendar::seed;
use crate::models::NewEvent;
use crate::store::EventStore;
use crate::utils::error::AppError;

/// Shared handler state. The store is injected so tests can run against memory.
pub struct AppState {
    pub store: Arc<dyn EventStore>,
    rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>, mock_seed: Option<u64>) -> Self {
        let rng = match mock_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            store,
            rng: Mutex::new(rng),
        }
    }

    /// Draws a fresh mock week from the shared random source.
    pub fn mock_week(&self) -> Result<Vec<NewEvent>, AppError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::InternalServerError("random source poisoned".to_string()))?;

        Ok(seed::mock_week(seed::reference_saturday(), &mut *rng))
    }
}
