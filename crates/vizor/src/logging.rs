use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "vizor.log";

/// Initialize logging to a file in the data directory.
///
/// Logs go to `{data_dir}/vizor.log` so stdout carries only command output.
/// The level comes from `RUST_LOG` when set, otherwise from `level`.
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes and stops the background writer.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;

    let appender = tracing_appender::rolling::never(data_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_filter = format!("vizor={level},vizor_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(
        "Vizor logging initialized (log_path={})",
        data_dir.join(LOG_FILE).display()
    );
    Ok(guard)
}
