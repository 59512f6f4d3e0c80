use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// A logger that writes one line per record to stdout
pub struct StdoutLogger {
    max_level: LevelFilter,
}

impl StdoutLogger {
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }
}

impl Default for StdoutLogger {
    fn default() -> Self {
        Self::new(default_level())
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        println!("{}", format_record(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Render a record as `TIMESTAMP [LEVEL] target file:line - message`
pub fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] {} {}:{} - {}",
        format_timestamp(),
        record.level(),
        record.target(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

/// Format current time as YYYY-MM-DDTHH:MM:SS (UTC)
pub fn format_timestamp() -> String {
    // A clock before 1970 renders as the epoch.
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let days = secs / 86400;
    let time_of_day = secs % 86400;
    let (year, month, day) = civil_from_days(days as i64);

    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    format!("{:04}-{:02}-{:02}T{:02}:{:02}:{:02}", year, month, day, hours, minutes, seconds)
}

/// Convert days since Unix epoch to civil date (year, month, day)
/// Uses Howard Hinnant's algorithm (public domain)
/// http://howardhinnant.github.io/date_algorithms.html
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize the global logger with a StdoutLogger
///
/// Debug builds log at Debug, release builds at Info. Only the first call per
/// process installs a logger; later calls are ignored.
pub fn init_stdout_logger() {
    init_stdout_logger_with_level(default_level());
}

/// Initialize the global logger with a StdoutLogger at an explicit level
pub fn init_stdout_logger_with_level(max_level: LevelFilter) {
    static LOGGER: OnceLock<StdoutLogger> = OnceLock::new();

    let logger = LOGGER.get_or_init(|| StdoutLogger::new(max_level));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(max_level);
    }
}
