//! This module provides observability and diagnostics for the transform engine.
//!
//! The inverse transform is an iterative rebuild whose intermediate states are
//! otherwise invisible, so the engine reports sizes and step counts through the
//! `log` facade. The `log_metric!` macro is the primary tool. It is compiled out
//! of release builds by `#[cfg(debug_assertions)]`.
//!
//! `enable_verbose_logging` installs an `env_logger` backend for callers (the
//! Python bindings, the benches) that do not set up logging themselves.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::BwtError;

/// Logs a structured key-value metric line at `debug` level, only in debug builds.
///
/// # Example
/// ```
/// use bwt_core::log_metric;
/// let rows = 7;
/// log_metric!("event"="inverse", "rows"=&rows);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            log::debug!("BWT_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs a global `env_logger` at `Info` level, printing `[LEVEL] message`.
///
/// When `log_file` is given, records are appended to that file instead of stderr.
/// Only the first call has an effect; later calls are no-ops (after the file,
/// if any, has been opened successfully).
pub fn enable_verbose_logging(log_file: Option<&Path>) -> Result<(), BwtError> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });

    Ok(())
}
