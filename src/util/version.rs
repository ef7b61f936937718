pub const APP_NAME: &str = "Mamta Movers";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent for outgoing requests to the image service.
pub const USER_AGENT: &str = concat!("mamta-movers/", env!("CARGO_PKG_VERSION"));

pub fn version_label() -> String {
    format!("v{APP_VERSION}")
}
