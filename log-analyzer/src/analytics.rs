use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    models::{IpCount, LogEntry, UrlCount},
    parser::parse_log_line,
};

pub const DEFAULT_TOP_LIMIT: usize = 3;

/// Parsed entries of one log text. Filled once by [`Analyzer::new`], read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    entries: Vec<LogEntry>,
    rejected: usize,
}

impl Analyzer {
    /// Splits `content` on `\n`, skips blank lines and silently drops lines that do not parse.
    pub fn new(content: &str) -> Self {
        let mut entries = Vec::new();
        let mut rejected = 0;
        for line in content.split('\n').filter(|l| !l.trim().is_empty()) {
            match parse_log_line(line) {
                Some(entry) => entries.push(entry),
                None => rejected += 1,
            }
        }
        debug!(parsed = entries.len(), rejected, "parsed log content");
        Self { entries, rejected }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-blank lines that failed to parse.
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    pub fn unique_ip_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.ip_address.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn top_urls(&self, limit: usize) -> Vec<UrlCount> {
        rank(self.entries.iter().map(|e| e.url.as_str()), limit)
            .into_iter()
            .map(|(url, count)| UrlCount {
                url: url.to_string(),
                count,
            })
            .collect()
    }

    pub fn top_ips(&self, limit: usize) -> Vec<IpCount> {
        rank(self.entries.iter().map(|e| e.ip_address.as_str()), limit)
            .into_iter()
            .map(|(ip, count)| IpCount {
                ip: ip.to_string(),
                count,
            })
            .collect()
    }
}

/// Counts keys and orders them by count, highest first. Equal counts keep the order in which
/// each key was first seen.
fn rank<'a>(keys: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(&'a str, usize)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for key in keys {
        let slot = *slots.entry(key).or_insert_with(|| {
            counts.push((key, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
