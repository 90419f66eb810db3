use std::sync::LazyLock;

use regex::Regex;

use crate::{
    invariants::{IpAddress, Url},
    models::LogEntry,
};

// 177.71.128.21 - - [10/Jul/2018:22:21:28 +0200] "GET /url1 HTTP/1.1" 200 3574 "-" "Mozilla/5.0"
// Anything between the address and the request is skipped. A ` [...]` block right before the
// request is taken as the timestamp, otherwise the whole skipped text is.
static LOG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(?P<ip>[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+) "#,
        r#"(?:.* \[(?P<timestamp>.*?)\]|(?P<preamble>.*?)) "#,
        r#""(?P<method>\S+) (?P<url>.*?) (?P<protocol>HTTP/[0-9.]+)" "#,
        r#"(?P<status>[0-9]+) (?P<size>[0-9]+)"#,
    ))
    .expect("log pattern is a valid regex")
});

const USER_AGENT_SEGMENT: usize = 5;

/// Parses one access-log line. Lines that do not fit the grammar yield `None`.
pub fn parse_log_line(line: &str) -> Option<LogEntry> {
    let caps = LOG_PATTERN.captures(line)?;
    let timestamp = caps
        .name("timestamp")
        .or_else(|| caps.name("preamble"))
        .map_or("", |m| m.as_str());
    // ASCII digits only, so the sole failure left is overflow.
    let status_code = caps["status"].parse().unwrap_or(u32::MAX);
    let response_size = caps["size"].parse().unwrap_or(u64::MAX);

    Some(LogEntry {
        ip_address: IpAddress::from(&caps["ip"]),
        timestamp: timestamp.to_string(),
        method: caps["method"].to_string(),
        url: Url::from(&caps["url"]),
        protocol: caps["protocol"].to_string(),
        status_code,
        response_size,
        user_agent: user_agent(line),
    })
}

/// Positional: the sixth `"`-delimited segment of the raw line, whatever field sits there.
fn user_agent(line: &str) -> String {
    line.split('"')
        .nth(USER_AGENT_SEGMENT)
        .unwrap_or_default()
        .to_string()
}
