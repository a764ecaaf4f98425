//! Contact form submission.
//!
//! The [`SubmissionController`] validates, captures a
//! [`FormSnapshot`](crate::form::FormSnapshot), and hands it to a
//! [`Transport`]. [`SimulatedTransport`] stands in for a backend;
//! [`HttpTransport`] posts to a real one.

mod controller;
mod http;
mod state;
mod transport;

pub use controller::{BUSY_LABEL, SubmissionController};
pub use http::HttpTransport;
pub use state::{SubmissionOutcome, SubmissionState, SubmitAttempt};
pub use transport::{SimulatedTransport, Transport};

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::error::ConfigError;

/// The transport a configuration asks for: HTTP when an endpoint is set,
/// otherwise the simulated one with the configured delay.
pub fn transport_for(config: &SiteConfig) -> Result<Arc<dyn Transport>, ConfigError> {
    match HttpTransport::from_config(&config.transport)? {
        Some(http) => {
            log::debug!("Submitting to {}", http.endpoint());
            Ok(Arc::new(http))
        }
        None => Ok(Arc::new(SimulatedTransport::new(config.timing.submit_delay()))),
    }
}
