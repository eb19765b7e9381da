use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::modules::registrations::core::outcome::RequestOutcome;

/// Every outcome of one batch run, in completion order.
#[derive(Debug)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub issued: usize,
    pub outcomes: Vec<RequestOutcome>,
    /// Tasks that ended without an outcome (panicked).
    pub aborted: usize,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn responses_by_status(&self) -> BTreeMap<u16, usize> {
        let mut counts = BTreeMap::new();
        for outcome in &self.outcomes {
            if let RequestOutcome::Succeeded(response) = outcome {
                *counts.entry(response.status).or_insert(0) += 1;
            }
        }
        counts
    }

    /// True when every issued request is accounted for.
    pub fn is_complete(&self) -> bool {
        self.outcomes.len() + self.aborted == self.issued
    }
}
