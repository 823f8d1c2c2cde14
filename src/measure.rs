use std::process::{Command, Stdio};
use std::time::Instant;

use crate::errors::LintbenchError;
use crate::types::{Measurement, OutputPolicy};

/// Shell exit codes meaning the command could not be launched at all.
/// POSIX shells use 126 (found but not executable) and 127 (not found);
/// cmd.exe reports 9009 for an unrecognized command.
#[cfg(not(windows))]
const LAUNCH_FAILURE_CODES: &[i32] = &[126, 127];
#[cfg(windows)]
const LAUNCH_FAILURE_CODES: &[i32] = &[9009];

/// Runs `command` through the platform shell repeatedly until the summed
/// wall-clock time reaches `min_duration_secs`, then returns the mean
/// per-invocation duration.
///
/// The target check is a post-condition of the loop body, so a zero or
/// negative target still yields exactly one invocation. The measured
/// tool's exit status is not part of the measurement: a tool that exits
/// non-zero is timed like any other run. Only a failure to launch is an
/// error, and it aborts the measurement immediately.
///
/// The command string is handed to the shell verbatim so that shell
/// operators in user-supplied option strings keep working. Callers must
/// not feed this untrusted input.
pub fn run(
    command: &str,
    min_duration_secs: f64,
    policy: OutputPolicy,
) -> Result<Measurement, LintbenchError> {
    if command.trim().is_empty() {
        return Err(LintbenchError::EmptyCommand);
    }

    let mut cumulative_secs = 0.0_f64;
    let mut invocations: u64 = 0;

    loop {
        let show_output = inherit_output(policy, invocations);

        let start = Instant::now();
        let status = shell(command)
            .stdout(if show_output {
                Stdio::inherit()
            } else {
                Stdio::null()
            })
            .stderr(if show_output {
                Stdio::inherit()
            } else {
                Stdio::null()
            })
            .status()
            .map_err(|source| LintbenchError::LaunchFailure {
                command: command.to_string(),
                source,
            })?;
        let elapsed = start.elapsed().as_secs_f64();

        // A missing or non-executable binary surfaces as a shell exit code
        // rather than a spawn error. Checked on the first invocation only;
        // after that the measured tool's exit status is ignored.
        if invocations == 0 {
            match status.code() {
                Some(code) if LAUNCH_FAILURE_CODES.contains(&code) => {
                    return Err(LintbenchError::CommandNotFound {
                        command: command.to_string(),
                        code,
                    });
                }
                _ => {}
            }
        }

        cumulative_secs += elapsed;
        invocations += 1;

        if cumulative_secs >= min_duration_secs {
            break;
        }
    }

    Ok(Measurement {
        command: command.to_string(),
        mean_secs: cumulative_secs / invocations as f64,
        cumulative_secs,
        invocations,
    })
}

/// True when this invocation's stdout/stderr should reach the operator.
pub(crate) fn inherit_output(policy: OutputPolicy, invocations_so_far: u64) -> bool {
    invocations_so_far == 0 || policy == OutputPolicy::Always
}

fn shell(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}
