//! Fixed-column comparison table.

use crate::metrics::BenchmarkResult;
use crate::record::RECORD_SIZE;
use core::fmt;
use serde::{Deserialize, Serialize};

const RULE_WIDTH: usize = 80;

/// Rows of a finished run plus the banner they are printed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Title line.
    pub title: String,
    /// Target description line.
    pub platform: String,
    /// One row per workload, in run order.
    pub results: Vec<BenchmarkResult>,
}

impl Report {
    /// Creates an empty report with the standard banner.
    pub fn new() -> Self {
        Self {
            title: format!("FINAL BENCHMARK REPORT: {RECORD_SIZE}-BYTE SLAB ALLOCATOR"),
            platform: format!(
                "Platform: {} ({}) | Resolution: Nanoseconds",
                std::env::consts::ARCH,
                std::env::consts::OS
            ),
            results: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Row for `operation`, if present.
    pub fn get(&self, operation: &str) -> Option<&BenchmarkResult> {
        self.results.iter().find(|r| r.operation == operation)
    }

    /// Pretty-printed JSON of the whole report.
    ///
    /// # Errors
    /// Returns the serializer error; cannot happen for finite values.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.platform)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "{:<24} | {:>14} | {:>14} | {:>14}",
            "Operation", "Heap (ns/op)", "Slab (ns/op)", "Speedup"
        )?;
        writeln!(f, "{:-<25}|{:-<16}|{:-<16}|{:-<15}", "", "", "", "")?;
        for r in &self.results {
            writeln!(
                f,
                "{:<24} | {:>14.2} | {:>14.2} | {:>13.2}x",
                r.operation, r.ns_per_op_baseline, r.ns_per_op_candidate, r.speedup
            )?;
        }
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Measurement;

    fn sample() -> Report {
        let mut report = Report::new();
        report.push(BenchmarkResult::compare(
            "Allocation (Linear)",
            Measurement::new(20_000, 1_000),
            Measurement::new(10_000, 1_000),
        ));
        report
    }

    #[test]
    fn test_row_format() {
        let text = sample().to_string();
        assert!(text.contains("Allocation (Linear)      |          20.00 |          10.00 |          2.00x"));
    }

    #[test]
    fn test_columns_align() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(80));
        assert!(lines[2].starts_with("FINAL BENCHMARK REPORT: 64-BYTE"));
        assert!(lines[3].ends_with("| Resolution: Nanoseconds"));

        let header = lines[5];
        let divider = lines[6];
        let row = lines[7];
        assert_eq!(header.len(), divider.len());
        assert_eq!(header.len(), row.len());
        for (i, c) in divider.char_indices() {
            if c == '|' {
                assert_eq!(&header[i..=i], "|");
                assert_eq!(&row[i..=i], "|");
            }
        }
        assert_eq!(lines.last().copied(), Some("=".repeat(80).as_str()));
    }

    #[test]
    fn test_json_export() {
        let report = sample();
        let json = report.to_json().unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get("Allocation (Linear)").unwrap().speedup, 2.0);
        assert!(back.get("Missing").is_none());
    }
}
