//! Reachability of the service, shown in the header.

/// Result of the startup health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    /// Probe still running
    #[default]
    Checking,
    Online,
    Offline,
}

impl HealthStatus {
    /// Indicator glyph and label for the header.
    pub fn indicator(&self) -> (&'static str, &'static str) {
        match self {
            HealthStatus::Checking => ("…", "checking"),
            HealthStatus::Online => ("●", "online"),
            HealthStatus::Offline => ("○", "offline"),
        }
    }
}
