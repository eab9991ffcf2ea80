//! Process-wide logger setup for the command-line tool.
//!
//! The library only talks to the `log` facade; this module installs a
//! `flexi_logger` backend writing to stderr. Initialization happens at most once.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<(&'static str, LoggerHandle)> = OnceCell::new();

/// Starts stderr logging at `level`, unless `RUST_LOG` is set.
///
/// A second call with the same level is a no-op; a different level is an error.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = normalize_level(level)?;
    let (active, _) = LOGGER.get_or_try_init(|| -> Result<_, String> {
        let handle = Logger::try_with_env_or_str(level)
            .map_err(|err| format!("invalid log specification: {err}"))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;
        Ok((level, handle))
    })?;

    if *active != level {
        return Err(format!(
            "logging already initialized with level `{active}`; refusing to switch to `{level}`"
        ));
    }
    Ok(())
}

pub fn default_log_level() -> &'static str {
    "info"
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level_accepts_known_values() {
        assert_eq!(normalize_level(" WARNING ").unwrap(), "warn");
        assert_eq!(normalize_level("Info").unwrap(), "info");
    }

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(normalize_level(default_log_level()).unwrap(), "info");
    }

    #[test]
    fn test_normalize_level_rejects_unknown() {
        assert!(normalize_level("verbose").unwrap_err().contains("unsupported"));
    }

    #[test]
    fn test_init_is_idempotent_and_rejects_switch() {
        init_logging("warn").unwrap();
        init_logging("warn").unwrap();
        assert!(init_logging("trace").unwrap_err().contains("refusing to switch"));
    }
}
