use std::time::Duration;

use async_trait::async_trait;

use crate::error::SubmitError;
use crate::form::FormSnapshot;

/// Delivers a captured form to wherever contact messages go.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the snapshot. Resolves once the backend has accepted or refused it.
    async fn send(&self, snapshot: &FormSnapshot) -> Result<(), SubmitError>;
}

/// Local stand-in for a backend: logs the snapshot, waits, and succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    async fn send(&self, snapshot: &FormSnapshot) -> Result<(), SubmitError> {
        log::info!("Form submitted with data: {}", snapshot.to_json()?);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
