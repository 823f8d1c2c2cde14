use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default candidate invocation (a locally built cpplint-cpp).
pub const DEFAULT_CPPLINT_CPP: &str = "./build/cpplint-cpp";

/// Default reference invocation (cpplint.py through the interpreter).
pub const DEFAULT_CPPLINT_PY: &str = "python cpplint.py";

/// Options appended identically to both tools' command lines.
pub const DEFAULT_OPTIONS: &str = "--recursive --quiet --counting=detailed";

/// How the measured tool's output is handled across repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputPolicy {
    /// Pass stdout/stderr through on every invocation.
    Always,
    /// Pass output through on the first invocation, discard it afterwards.
    QuietAfterFirst,
}

/// Named defaults matching the two variants of the original harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 30 seconds per tool, tool output shown on every run.
    Quick,
    /// 60 seconds per tool, tool output shown once then suppressed.
    Soak,
}

impl Preset {
    pub fn min_duration_secs(self) -> f64 {
        match self {
            Preset::Quick => 30.0,
            Preset::Soak => 60.0,
        }
    }

    pub fn output_policy(self) -> OutputPolicy {
        match self {
            Preset::Quick => OutputPolicy::Always,
            Preset::Soak => OutputPolicy::QuietAfterFirst,
        }
    }
}

/// Fully resolved settings for one comparison. Built once at startup;
/// nothing else in the crate reads configuration from globals.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub target_file: String,
    pub candidate_command: String,
    pub reference_command: String,
    pub shared_options: String,
    pub min_duration_secs: f64,
    pub output_policy: OutputPolicy,
}

/// Result of one tool's measurement run.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    /// The command string that was executed, after separator normalization.
    pub command: String,
    /// Exactly `cumulative_secs / invocations`; rounding happens only at
    /// presentation time.
    pub mean_secs: f64,
    pub cumulative_secs: f64,
    pub invocations: u64,
}

/// The pair of measurement runs produced by one harness invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub candidate: Measurement,
    pub reference: Measurement,
}

impl Comparison {
    /// Reference mean over candidate mean, so values above 1.0 mean the
    /// candidate is faster. `None` when the candidate mean is zero.
    pub fn speedup(&self) -> Option<f64> {
        if self.candidate.mean_secs <= 0.0 {
            None
        } else {
            Some(self.reference.mean_secs / self.candidate.mean_secs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(mean: f64) -> Measurement {
        Measurement {
            command: "true".to_string(),
            mean_secs: mean,
            cumulative_secs: mean * 4.0,
            invocations: 4,
        }
    }

    #[test]
    fn preset_defaults_match_harness_variants() {
        assert_eq!(Preset::Quick.min_duration_secs(), 30.0);
        assert_eq!(Preset::Quick.output_policy(), OutputPolicy::Always);
        assert_eq!(Preset::Soak.min_duration_secs(), 60.0);
        assert_eq!(Preset::Soak.output_policy(), OutputPolicy::QuietAfterFirst);
    }

    #[test]
    fn speedup_is_reference_over_candidate() {
        let cmp = Comparison {
            candidate: measurement(0.5),
            reference: measurement(2.0),
        };
        assert!((cmp.speedup().unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn speedup_guards_zero_candidate_mean() {
        let cmp = Comparison {
            candidate: measurement(0.0),
            reference: measurement(2.0),
        };
        assert!(cmp.speedup().is_none());
    }
}
