use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::ResumeDraft;
use crate::errors::SaveError;

/// Where the builder navigates after a successful save.
pub const RESUME_LIST_ROUTE: &str = "/dashboard/resume";
pub const SAVE_DELAY: Duration = Duration::from_millis(2000);

/// Persists a draft. The builder ships only [`DelayedSave`].
#[async_trait]
pub trait SaveBackend: Send + Sync {
    async fn save(&self, draft: &ResumeDraft) -> Result<(), SaveError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Navigate(String),
    Stayed,
}

/// Waits a fixed delay and reports success. Nothing is stored.
#[derive(Debug, Clone)]
pub struct DelayedSave {
    pub delay: Duration,
}

impl Default for DelayedSave {
    fn default() -> Self {
        Self { delay: SAVE_DELAY }
    }
}

#[async_trait]
impl SaveBackend for DelayedSave {
    async fn save(&self, draft: &ResumeDraft) -> Result<(), SaveError> {
        debug!(
            "Simulating save of draft with {} experience entries",
            draft.experiences.len()
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
