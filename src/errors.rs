use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum LintbenchError {
    #[error("Failed to launch `{command}`: {source}")]
    LaunchFailure {
        command: String,
        source: std::io::Error,
    },

    #[error("Command not found or not executable (shell exit {code}): `{command}`")]
    CommandNotFound { command: String, code: i32 },

    #[error("Refusing to measure an empty command")]
    EmptyCommand,

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },
}
