//! Process-wide `tracing` setup for the command-line tool.
//!
//! Events go to stderr, keeping stdout for reports, and optionally to a log
//! file opened after start-up. The level filter can be swapped at runtime.

use std::fmt;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use anyhow::{Result, anyhow, bail};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, Registry, filter, prelude::*, reload};

static LEVEL_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();
static CONSOLE_ENABLED: AtomicBool = AtomicBool::new(true);
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

// --- Event format ---

/// `<local time> <LEVEL> <crate> <fields>`, colored when the sink is a
/// terminal.
struct CliFormat;

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

fn painted(
    writer: &mut Writer<'_>,
    color: &str,
    text: impl fmt::Display,
) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "{color}{text}\x1b[0m")
    } else {
        write!(writer, "{text}")
    }
}

impl<S, N> FormatEvent<S, N> for CliFormat
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
        let crate_name = meta.target().split("::").next().unwrap_or_default();

        painted(&mut writer, "\x1b[2m", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))?;
        writer.write_char(' ')?;
        painted(&mut writer, level_color(meta.level()), format_args!("{:>5}", meta.level()))?;
        writer.write_char(' ')?;
        painted(&mut writer, "\x1b[36m", crate_name)?;
        writer.write_char(' ')?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Log file sink ---

/// Writes to [`LOG_FILE`] when one is open, otherwise swallows the bytes.
struct FileSink;

struct FileSinkGuard(MutexGuard<'static, Option<File>>);

impl Write for FileSinkGuard {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), |file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for FileSink {
    type Writer = FileSinkGuard;

    fn make_writer(&'a self) -> Self::Writer {
        FileSinkGuard(LOG_FILE.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// --- Public API ---

/// Installs the global subscriber. Later calls are ignored.
///
/// The initial filter comes from `RUST_LOG`, falling back to
/// `default_directive`.
pub fn init_logging(default_directive: &str) {
    let initial = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let (level_layer, level_handle) = reload::Layer::new(initial);

    let console = tracing_subscriber::fmt::layer()
        .event_format(CliFormat)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter::filter_fn(|_| CONSOLE_ENABLED.load(Ordering::Relaxed)));

    let file = tracing_subscriber::fmt::layer()
        .event_format(CliFormat)
        .with_ansi(false)
        .with_writer(FileSink);

    let installed = tracing_subscriber::registry()
        .with(level_layer)
        .with(console)
        .with(file)
        .try_init()
        .is_ok();

    if installed {
        let _ = LEVEL_HANDLE.set(level_handle);
    }
}

/// Replaces the level filter. Takes a bare level (`debug`) or any
/// `EnvFilter` directive list (`warn,salaryfy_core=debug`).
pub fn set_log_level(directives: &str) -> Result<()> {
    let Some(handle) = LEVEL_HANDLE.get() else {
        bail!("logging not yet initialized");
    };
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| anyhow!("invalid log level '{directives}': {e}"))?;
    handle
        .reload(filter)
        .map_err(|e| anyhow!("filter reload failed: {e}"))
}

/// Mutes or unmutes stderr output. The log file keeps receiving events.
pub fn set_console_enabled(enabled: bool) {
    CONSOLE_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Appends events to `path` from now on, replacing any open log file. The
/// parent directory must exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("cannot open log file '{}': {e}", path.display()))?;

    *LOG_FILE.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test only: the subscriber and the log file are process-global.
    #[test]
    fn logging_lifecycle() {
        assert!(set_log_level("info").is_err());

        init_logging("warn");

        assert!(set_log_level("info").is_ok());
        assert!(set_log_level("salaryfy=loud").is_err());
        set_console_enabled(false);

        let missing = std::env::temp_dir()
            .join("salaryfy-no-such-dir")
            .join("app.log");
        assert!(enable_file_logging(&missing).is_err());

        let path = std::env::temp_dir().join(format!("salaryfy-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        enable_file_logging(&path).unwrap();

        tracing::info!(answer = 42, "written to file");
        tracing::debug!("filtered out");

        *LOG_FILE.lock().unwrap() = None;
        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(contents.contains("written to file"));
        assert!(contents.contains("answer=42"));
        assert!(contents.contains(" INFO "));
        assert!(!contents.contains("filtered out"));
        assert!(!contents.contains("\x1b["));
    }
}
