//! Process-wide SDK constants.
//!
//! All values here are immutable for the lifetime of the process; nothing in
//! the crate mutates them after startup.

use once_cell::sync::Lazy;
use std::time::Duration;

/// SDK name, used in identity headers (`User-Agent`, `X-OmniEdge-*`).
pub const SDK_NAME: &str = "OmniEdge";

/// SDK version, taken from the crate manifest at compile time.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API endpoint used when the caller does not supply a base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.omniedge.ai/v1";

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "OMNIEDGE_API_KEY";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default retry budget. Advisory only: stored on the client and exposed to
/// callers, but request dispatch never loops on it.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Composed `User-Agent` value: `OmniEdge/<version> Rust/<min-rust-version>`.
pub static USER_AGENT: Lazy<String> = Lazy::new(|| {
    format!(
        "{}/{} Rust/{}",
        SDK_NAME,
        SDK_VERSION,
        env!("CARGO_PKG_RUST_VERSION")
    )
});

/// Normalized operating system label for the `X-OmniEdge-OS` header.
///
/// Darwin reports as "macOS" and a JVM-hosted platform as "Jython"; every
/// other platform name passes through unchanged.
pub fn os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "macOS",
        "java" => "Jython",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_carries_sdk_identity() {
        assert!(USER_AGENT.starts_with("OmniEdge/"));
        assert!(USER_AGENT.contains(" Rust/"));
    }

    #[test]
    fn os_name_is_normalized() {
        let name = os_name();
        assert_ne!(name, "macos");
        assert!(!name.is_empty());
    }
}
