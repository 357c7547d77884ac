use once_cell::sync::OnceCell;
use std::env;
use std::fs::OpenOptions;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::Level;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);
static SUBSCRIBER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Initializes logging based on environment variables:
/// - SEAL_SWEEP_LOGGING: enables/disables logging (true/false, default false)
/// - SEAL_SWEEP_LOG_FILE: optional file to append to instead of stderr
///
/// Log lines never go to stdout, which carries the progress lines and the
/// simulator's own output.
pub fn init_logging() {
    match env::var("SEAL_SWEEP_LOGGING").as_deref() {
        Ok("true") => enable_logging(env::var("SEAL_SWEEP_LOG_FILE").ok().as_deref()),
        Ok("false") | Err(_) => ENABLE_LOGGING.store(false, Ordering::SeqCst),
        Ok(other) => {
            eprintln!(
                "SEAL_SWEEP_LOGGING must be 'true' or 'false' (got '{}'); logging stays disabled",
                other
            );
            ENABLE_LOGGING.store(false, Ordering::SeqCst);
        }
    }
}

/// Turns logging on, writing to `log_file` when given and to stderr otherwise.
pub fn enable_logging(log_file: Option<&str>) {
    SUBSCRIBER_INSTALLED.get_or_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(false);
        let file = log_file.and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| eprintln!("Failed to open log file {}: {}", path, e))
                .ok()
        });
        // another subscriber may already be set (e.g. by a test harness)
        let _ = match file {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).try_init(),
            None => builder.with_writer(std::io::stderr).try_init(),
        };
    });
    ENABLE_LOGGING.store(true, Ordering::SeqCst);
}

pub fn is_enabled() -> bool {
    ENABLE_LOGGING.load(Ordering::SeqCst)
}

pub fn log(prefix: &str, message: &str) {
    if is_enabled() {
        tracing::info!("[{}]   {}", prefix, message);
    }
}
