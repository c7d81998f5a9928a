//! AppMessage enum for async communication within the application.

use crate::error::FlowError;
use crate::flow::HealthStatus;
use crate::models::GenerationResult;

/// Messages received from spawned tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The generate request finished
    GenerationFinished(Result<GenerationResult, FlowError>),
    /// Startup health probe finished
    HealthChecked(HealthStatus),
    /// Copy acknowledgment window closed
    CopyAckExpired { ticket: u64 },
}
