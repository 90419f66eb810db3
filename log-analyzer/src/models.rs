use serde::Serialize;

use crate::invariants::{IpAddress, Url};

/// One successfully parsed access-log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub ip_address: IpAddress,
    /// Raw text in front of the request, usually the bracketed timestamp. Never parsed.
    pub timestamp: String,
    pub method: String,
    pub url: Url,
    pub protocol: String,
    pub status_code: u32,
    pub response_size: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlCount {
    pub url: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpCount {
    pub ip: String,
    pub count: usize,
}
