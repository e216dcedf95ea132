pub mod aggregator;
pub mod log_file;
pub mod report;
pub mod window;

pub use aggregator::{aggregate, ScanReport, ScanStats, WindowAggregator, DEFAULT_THRESHOLD};
pub use log_file::{scan_file, ScanError};
pub use report::{persist, AlertMatch, PersistError, PersistOutcome};
pub use window::MinuteKey;
