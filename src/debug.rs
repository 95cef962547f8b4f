// Debug logging for Touchpong
// The terminal belongs to the game, so diagnostics go to a file,
// enabled via the --debug flag

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::SystemTime;

use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PATH: &str = "/tmp/touchpong-debug.log";

const DEFAULT_FILTER: &str = "touchpong=debug";

/// Initialize debug logging to file
///
/// # Behavior
/// - If enabled=false: Returns immediately; tracing events are discarded
/// - If enabled=true: Truncates the log file, writes a header and installs a
///   global subscriber filtered by `RUST_LOG` (default `touchpong=debug`)
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE_PATH)?;

    writeln!(file, "=== Touchpong Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", LOG_FILE_PATH)?;
    writeln!(file, "========================================\n")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
