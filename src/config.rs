use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::LintbenchError;
use crate::types::{
    DEFAULT_CPPLINT_CPP, DEFAULT_CPPLINT_PY, DEFAULT_OPTIONS, HarnessConfig, OutputPolicy, Preset,
};

/// On-disk defaults, every key optional. Unknown keys are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileConfig {
    pub cpplint_cpp: Option<String>,
    pub cpplint_py: Option<String>,
    pub options: Option<String>,
    pub time: Option<f64>,
    pub output: Option<OutputPolicy>,
}

/// Loads the config file.
///
/// An explicit `path` must exist and parse. Without one, `./lintbench.toml`
/// and then `<user config dir>/lintbench/config.toml` are tried; absence is
/// not an error, the defaults simply stay empty.
pub fn load(path: Option<&Path>) -> Result<FileConfig, LintbenchError> {
    if let Some(path) = path {
        return read_file(path);
    }
    for candidate in search_paths() {
        if candidate.is_file() {
            return read_file(&candidate);
        }
    }
    Ok(FileConfig::default())
}

fn read_file(path: &Path) -> Result<FileConfig, LintbenchError> {
    let text = fs::read_to_string(path).map_err(|source| LintbenchError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|e| LintbenchError::ConfigParse {
        path: path.to_path_buf(),
        detail: e.message().to_string(),
    })
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("lintbench.toml")];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("lintbench").join("config.toml"));
    }
    paths
}

/// Settings given on the command line; `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub cpplint_cpp: Option<String>,
    pub cpplint_py: Option<String>,
    pub options: Option<String>,
    pub time: Option<f64>,
    pub output: Option<OutputPolicy>,
}

/// Merges CLI flags, file config, and preset defaults (strongest first)
/// into one explicit configuration value.
pub fn resolve(
    target_file: String,
    preset: Preset,
    cli: Overrides,
    file: FileConfig,
) -> HarnessConfig {
    HarnessConfig {
        target_file,
        candidate_command: cli
            .cpplint_cpp
            .or(file.cpplint_cpp)
            .unwrap_or_else(|| DEFAULT_CPPLINT_CPP.to_string()),
        reference_command: cli
            .cpplint_py
            .or(file.cpplint_py)
            .unwrap_or_else(|| DEFAULT_CPPLINT_PY.to_string()),
        shared_options: cli
            .options
            .or(file.options)
            .unwrap_or_else(|| DEFAULT_OPTIONS.to_string()),
        min_duration_secs: cli
            .time
            .or(file.time)
            .unwrap_or_else(|| preset.min_duration_secs()),
        output_policy: cli
            .output
            .or(file.output)
            .unwrap_or_else(|| preset.output_policy()),
    }
}
