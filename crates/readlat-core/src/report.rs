//! Console report formatting.

use std::fmt::Write;

use crate::runner::BackendReport;

const COLUMNS: [&str; 5] = ["p50", "p95", "p99", "mean", "max"];

/// Run banner: payload size and iteration count.
pub fn format_banner(payload_len: usize, iterations: usize) -> String {
    format!(
        "Benchmark: {:.1}kb of text, {} iterations each",
        payload_len as f64 / 1024.0,
        iterations
    )
}

/// One backend section: bracketed title, column headers, values.
pub fn format_section(report: &BackendReport) -> String {
    let s = &report.summary;
    let mut out = String::new();

    let _ = writeln!(out, "[ {} ]", report.title);
    let _ = writeln!(
        out,
        "  {:>8}  {:>8}  {:>8}  {:>8}  {:>8}",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4]
    );
    let _ = write!(
        out,
        "  {:>7.3}ms  {:>7.3}ms  {:>7.3}ms  {:>7.3}ms  {:>7.3}ms",
        s.p50, s.p95, s.p99, s.mean, s.max
    );
    out
}

/// Side-by-side p50/p95/p99 of every backend, in run order.
pub fn format_comparison(reports: &[BackendReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Comparison:");
    let _ = writeln!(
        out,
        "  {:16} {:>10} {:>10} {:>10}",
        "backend", "p50 (ms)", "p95 (ms)", "p99 (ms)"
    );
    let _ = write!(out, "  {}", "-".repeat(49));
    for r in reports {
        let _ = write!(
            out,
            "\n  {:16} {:>10.3} {:>10.3} {:>10.3}",
            r.label, r.summary.p50, r.summary.p95, r.summary.p99
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Summary;

    fn report() -> BackendReport {
        BackendReport {
            label: "fs_single".to_string(),
            title: "Filesystem — single file (100kb)".to_string(),
            samples: 1000,
            summary: Summary {
                p50: 0.029,
                p95: 0.043,
                p99: 0.058,
                mean: 0.031,
                max: 1.25,
            },
        }
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            format_banner(100 * 1024, 1000),
            "Benchmark: 100.0kb of text, 1000 iterations each"
        );
    }

    #[test]
    fn test_section_layout() {
        let text = format_section(&report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[ Filesystem — single file (100kb) ]");
        assert_eq!(lines[1], "       p50       p95       p99      mean       max");
        assert_eq!(
            lines[2],
            "    0.029ms    0.043ms    0.058ms    0.031ms    1.250ms"
        );
    }

    #[test]
    fn test_comparison_lists_every_backend() {
        let mut second = report();
        second.label = "redis".to_string();
        let text = format_comparison(&[report(), second]);

        assert!(text.lines().any(|l| l.trim_start().starts_with("fs_single")));
        assert!(text.lines().any(|l| l.trim_start().starts_with("redis")));
        assert_eq!(text.lines().count(), 5);
    }
}
