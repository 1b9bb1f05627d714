// src/logging.rs

use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::config::RunConfig;

/// `2016-08-21 23:59:59,123`, local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"))
    }
}

/// Debug log line: `time [  thread][  module][   LEVEL] message`.
///
/// `module` is the last segment of the event's module path.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketFormat;

impl<S, N> FormatEvent<S, N> for BracketFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let thread = std::thread::current();
        let module = meta
            .module_path()
            .unwrap_or_else(|| meta.target())
            .rsplit("::")
            .next()
            .unwrap_or_default();

        LocalTime.format_time(&mut writer)?;
        write!(
            writer,
            " [{:>16}][{:>14}][{:>8}] ",
            thread.name().unwrap_or("unnamed"),
            module,
            meta.level().as_str()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Open (append) the debug log.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening debug log {}", path.display()))
}

/// Build the subscriber for this run without installing it.
///
/// With `--debug` everything from DEBUG up goes to the log file in
/// [`BracketFormat`]. Otherwise no file is touched and warnings go to stderr;
/// `RUST_LOG` can still override the filter.
pub fn build(cfg: &RunConfig) -> Result<Box<dyn Subscriber + Send + Sync>> {
    if cfg.debug {
        let file = open_log_file(&cfg.log_path)?;
        Ok(Box::new(
            tracing_subscriber::fmt::Subscriber::builder()
                .with_env_filter(EnvFilter::new("debug"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .event_format(BracketFormat)
                .finish(),
        ))
    } else {
        let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        Ok(Box::new(
            tracing_subscriber::fmt::Subscriber::builder()
                .with_env_filter(env)
                .with_writer(std::io::stderr)
                .finish(),
        ))
    }
}

/// Install the global subscriber for this run.
pub fn init(cfg: &RunConfig) -> Result<()> {
    tracing::subscriber::set_global_default(build(cfg)?)
        .map_err(|e| anyhow!("installing logger: {}", e))
}
