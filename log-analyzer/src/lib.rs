//! Access-log parsing and request statistics.
//!
//! Lines in the combined log shape
//! `177.71.128.21 - - [10/Jul/2018:22:21:28 +0200] "GET /url1 HTTP/1.1" 200 3574`
//! are parsed into [`LogEntry`] values and ranked by URL and client address.

pub mod analytics;
pub mod ingest;
pub mod invariants;
pub mod models;
pub mod parser;
pub mod report;

pub use analytics::{Analyzer, DEFAULT_TOP_LIMIT};
pub use models::{IpCount, LogEntry, UrlCount};
pub use parser::parse_log_line;
pub use report::{OutputFormat, Report};
