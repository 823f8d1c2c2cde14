use std::path::PathBuf;
use std::process;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use lintbench::command;
use lintbench::config::{self, Overrides};
use lintbench::display;
use lintbench::measure;
use lintbench::types::{Comparison, OutputPolicy, Preset};

#[derive(Parser)]
#[command(
    name = "lintbench",
    version,
    about = "Measure and compare average execution time of cpplint-cpp and cpplint.py"
)]
struct Cli {
    /// Path to the source tree or file to analyze
    file: String,

    /// Invocation for cpplint-cpp [default: ./build/cpplint-cpp]
    #[arg(long, value_name = "CMD")]
    cpplint_cpp: Option<String>,

    /// Invocation for cpplint.py [default: python cpplint.py]
    #[arg(long, value_name = "CMD")]
    cpplint_py: Option<String>,

    /// Options appended to both command lines
    /// [default: --recursive --quiet --counting=detailed]
    #[arg(long, value_name = "OPTS", allow_hyphen_values = true)]
    options: Option<String>,

    /// Minimum cumulative measurement time per tool, in seconds.
    /// Zero or negative still runs each tool once.
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    time: Option<f64>,

    /// Whether tool output is shown on every run or only the first
    #[arg(long, value_enum)]
    output: Option<OutputPolicy>,

    /// Named defaults: quick = 30s/always, soak = 60s/quiet-after-first
    #[arg(long, value_enum, default_value = "quick")]
    preset: Preset,

    /// Config file path (default: ./lintbench.toml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the report as JSON (progress lines move to stderr)
    #[arg(long)]
    json: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let file_cfg = config::load(cli.config.as_deref())?;
    let cfg = config::resolve(
        cli.file,
        cli.preset,
        Overrides {
            cpplint_cpp: cli.cpplint_cpp,
            cpplint_py: cli.cpplint_py,
            options: cli.options,
            time: cli.time,
            output: cli.output,
        },
        file_cfg,
    );

    let cmd_cpp = command::build(&cfg.candidate_command, &cfg.shared_options, &cfg.target_file);
    let cmd_py = command::build(&cfg.reference_command, &cfg.shared_options, &cfg.target_file);

    let started_at = Utc::now();

    // Strictly sequential: the candidate's full loop completes before the
    // reference loop starts, so neither measurement loads the machine while
    // the other is being timed.
    announce(cli.json, &display::format_measuring_line("cpplint-cpp", &cmd_cpp));
    let candidate = measure::run(&cmd_cpp, cfg.min_duration_secs, cfg.output_policy)?;

    announce(cli.json, &display::format_measuring_line("cpplint.py", &cmd_py));
    let reference = measure::run(&cmd_py, cfg.min_duration_secs, cfg.output_policy)?;

    let comparison = Comparison {
        candidate,
        reference,
    };

    if cli.json {
        println!("{}", display::format_json(&comparison, started_at));
    } else {
        println!(
            "{}",
            display::format_result_line("cpplint-cpp", comparison.candidate.mean_secs)
        );
        println!(
            "{}",
            display::format_result_line("cpplint.py", comparison.reference.mean_secs)
        );
        if let Some(line) = display::format_speedup_line(&comparison) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Progress lines go to stderr under --json so stdout stays parseable.
fn announce(json: bool, line: &str) {
    if json {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
