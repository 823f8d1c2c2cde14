use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::types::{Comparison, Measurement};

/// Announce line printed before a tool's measurement loop begins.
pub fn format_measuring_line(tool: &str, command: &str) -> String {
    format!(
        "Measuring time for {}: {}",
        tool.if_supports_color(Stream::Stdout, |s| s.cyan()),
        command.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    )
}

/// Result line for one tool, mean formatted to six decimal places.
pub fn format_result_line(tool: &str, mean_secs: f64) -> String {
    let secs = format!("{:.6}", mean_secs);
    format!(
        "Execution time for {}: {} seconds",
        tool.if_supports_color(Stream::Stdout, |s| s.cyan()),
        secs.if_supports_color(Stream::Stdout, |s| s.green()),
    )
}

/// One-line comparison summary, e.g. `cpplint-cpp is 12.34x faster than
/// cpplint.py`. `None` when either mean is zero and no ratio exists.
pub fn format_speedup_line(comparison: &Comparison) -> Option<String> {
    let speedup = comparison.speedup()?;
    if speedup <= 0.0 {
        return None;
    }
    let (ratio, word) = if speedup >= 1.0 {
        (speedup, "faster")
    } else {
        (1.0 / speedup, "slower")
    };
    let ratio_str = format!("{:.2}x", ratio);
    Some(format!(
        "cpplint-cpp is {} {} than cpplint.py",
        ratio_str.if_supports_color(Stream::Stdout, |s| s.bold()),
        word
    ))
}

/// JSON report format.
#[derive(Serialize)]
struct JsonReport<'a> {
    started_at: String,
    candidate: &'a Measurement,
    reference: &'a Measurement,
    speedup: Option<f64>,
}

pub fn format_json(comparison: &Comparison, started_at: DateTime<Utc>) -> String {
    let report = JsonReport {
        started_at: started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        candidate: &comparison.candidate,
        reference: &comparison.reference,
        speedup: comparison.speedup(),
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_measurement(command: &str, mean: f64, count: u64) -> Measurement {
        Measurement {
            command: command.to_string(),
            mean_secs: mean,
            cumulative_secs: mean * count as f64,
            invocations: count,
        }
    }

    fn make_comparison(candidate_mean: f64, reference_mean: f64) -> Comparison {
        Comparison {
            candidate: make_measurement("./build/cpplint-cpp --quiet src", candidate_mean, 10),
            reference: make_measurement("python cpplint.py --quiet src", reference_mean, 2),
        }
    }

    #[test]
    fn measuring_line_names_tool_and_command() {
        let line = format_measuring_line("cpplint-cpp", "./build/cpplint-cpp --quiet src");
        assert_eq!(
            line,
            "Measuring time for cpplint-cpp: ./build/cpplint-cpp --quiet src"
        );
    }

    #[test]
    fn result_line_uses_six_decimal_places() {
        let line = format_result_line("cpplint-cpp", 0.123_456_789);
        assert_eq!(line, "Execution time for cpplint-cpp: 0.123457 seconds");
    }

    #[test]
    fn result_line_pads_short_means_to_six_decimals() {
        let line = format_result_line("cpplint.py", 2.5);
        assert_eq!(line, "Execution time for cpplint.py: 2.500000 seconds");
    }

    #[test]
    fn speedup_line_when_candidate_is_faster() {
        let line = format_speedup_line(&make_comparison(0.1, 1.2)).unwrap();
        assert_eq!(line, "cpplint-cpp is 12.00x faster than cpplint.py");
    }

    #[test]
    fn speedup_line_when_candidate_is_slower() {
        let line = format_speedup_line(&make_comparison(2.0, 1.0)).unwrap();
        assert_eq!(line, "cpplint-cpp is 2.00x slower than cpplint.py");
    }

    #[test]
    fn speedup_line_absent_for_zero_means() {
        assert!(format_speedup_line(&make_comparison(0.0, 1.0)).is_none());
        assert!(format_speedup_line(&make_comparison(1.0, 0.0)).is_none());
    }

    #[test]
    fn json_report_has_all_fields() {
        let started = DateTime::parse_from_rfc3339("2026-02-18T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let json = format_json(&make_comparison(0.5, 1.5), started);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["started_at"], "2026-02-18T00:00:00Z");
        assert_eq!(parsed["candidate"]["invocations"], 10);
        assert_eq!(
            parsed["candidate"]["command"],
            "./build/cpplint-cpp --quiet src"
        );
        assert_eq!(parsed["reference"]["invocations"], 2);
        assert!((parsed["speedup"].as_f64().unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn json_speedup_is_null_for_zero_candidate_mean() {
        let json = format_json(&make_comparison(0.0, 1.5), Utc::now());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["speedup"].is_null());
    }
}
