mod error;
mod setting;
pub mod store;
pub use error::CoreError;
pub use setting::{Setting, LOREM};
pub use tracing;

const LOG_LEVEL: &str = "debug";

/// Sets up logging and the config directory. Call once, before the UI starts.
pub fn init_core() -> Result<(), CoreError> {
    let mut rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| LOG_LEVEL.to_owned());

    const LOUD_CRATES: [&str; 6] = [
        // wgpu crates spam a lot on info level, which is really annoying
        "naga",
        "wgpu_core",
        "wgpu_hal",
        // These are quite spammy on debug, drowning out what we care about:
        "winit",
        "eframe",
        "egui_glow",
    ];
    for loud_crate in LOUD_CRATES {
        if !rust_log.contains(&format!("{loud_crate}=")) {
            rust_log += &format!(",{loud_crate}=warn");
        }
    }

    std::env::set_var("RUST_LOG", rust_log);

    if std::env::var("RUST_BACKTRACE").is_err() {
        // Make sure we always produce backtraces for the (hopefully rare) cases when we crash!
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    init_logging()?;

    store::store().create_req_dirs()
}

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
fn init_logging() -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install the log subscriber: {err}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_installs_once() {
        let _ = init_logging();
        let err = init_logging().unwrap_err();
        assert!(matches!(err, CoreError::Other(_)));
        assert!(err.to_string().contains("log subscriber"));
    }
}
