/// Immutable metadata describing this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub title: &'static str,
    pub version: &'static str,
    pub welcome_message: &'static str,
}

impl ServiceInfo {
    pub const TITLE: &'static str = "Weather Station Data Processor API";
    pub const WELCOME_MESSAGE: &'static str = "Welcome to the Weather Station Data Processor API";
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            title: Self::TITLE,
            version: env!("CARGO_PKG_VERSION"),
            welcome_message: Self::WELCOME_MESSAGE,
        }
    }
}

/// Application state shared read-only by every worker.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub service: ServiceInfo,
}
