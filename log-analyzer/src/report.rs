use std::fmt;

use clap::ValueEnum;
use num_format::{Locale, ToFormattedString};
use serde::Serialize;

use crate::{
    analytics::Analyzer,
    models::{IpCount, UrlCount},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Snapshot of the statistics printed for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub unique_ips: usize,
    pub top_urls: Vec<UrlCount>,
    pub top_ips: Vec<IpCount>,
    pub rejected_lines: usize,
    #[serde(skip)]
    limit: usize,
}

impl Report {
    pub fn new(analyzer: &Analyzer, limit: usize) -> Self {
        Self {
            unique_ips: analyzer.unique_ip_count(),
            top_urls: analyzer.top_urls(limit),
            top_ips: analyzer.top_ips(limit),
            rejected_lines: analyzer.rejected_count(),
            limit,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = |v: usize| v.to_formatted_string(&Locale::en);
        writeln!(f, "Log Analysis Results:")?;
        writeln!(f, "-----------------")?;
        writeln!(f, "Unique IP addresses: {}", n(self.unique_ips))?;

        writeln!(f, "\nTop {} most visited URLs:", self.limit)?;
        for UrlCount { url, count } in &self.top_urls {
            writeln!(f, "{url}: {} visits", n(*count))?;
        }

        writeln!(f, "\nTop {} most active IP addresses:", self.limit)?;
        for IpCount { ip, count } in &self.top_ips {
            writeln!(f, "{ip}: {} requests", n(*count))?;
        }

        if self.rejected_lines > 0 {
            writeln!(f, "\nSkipped {} unparseable lines", n(self.rejected_lines))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    fn sample() -> Analyzer {
        let mut content = String::new();
        for _ in 0..1200 {
            content.push_str(r#"10.0.0.1 - - [01/Jan/2024:00:00:00 +0000] "GET /home HTTP/1.1" 200 10"#);
            content.push('\n');
        }
        content.push_str(r#"10.0.0.2 - - [01/Jan/2024:00:00:01 +0000] "GET /about HTTP/1.1" 200 10"#);
        content.push_str("\nnot a log line\n");
        Analyzer::new(&content)
    }

    #[test]
    fn text_lists_rankings_with_separators() {
        let text = Report::new(&sample(), 3).render(OutputFormat::Text).unwrap();

        assert_that!(text.as_str()).contains("Unique IP addresses: 2\n");
        assert_that!(text.as_str()).contains("Top 3 most visited URLs:\n/home: 1,200 visits\n/about: 1 visits\n");
        assert_that!(text.as_str()).contains("10.0.0.1: 1,200 requests\n");
        assert_that!(text.as_str()).contains("Skipped 1 unparseable lines");
    }

    #[test]
    fn text_omits_skip_note_when_everything_parsed() {
        let text = Report::new(&Analyzer::new(""), 3).to_string();
        assert_that!(text.contains("Skipped")).is_false();
        assert_that!(text.as_str()).contains("Unique IP addresses: 0\n");
    }

    #[test]
    fn json_carries_the_same_numbers() {
        let json = Report::new(&sample(), 1).render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_that!(value["unique_ips"].as_u64()).is_equal_to(Some(2));
        assert_that!(value["top_urls"][0]["url"].as_str()).is_equal_to(Some("/home"));
        assert_that!(value["top_urls"][0]["count"].as_u64()).is_equal_to(Some(1200));
        assert_that!(value["top_ips"].as_array().map(Vec::len)).is_equal_to(Some(1));
        assert_that!(value["rejected_lines"].as_u64()).is_equal_to(Some(1));
        assert_that!(value.get("limit").is_none()).is_true();
    }
}
