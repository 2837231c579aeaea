use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommitteeError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("candidate roster is empty")]
    EmptyRoster,
    #[error("candidate '{0}' appears more than once in the roster")]
    DuplicateCandidate(String),
    #[error("invalid team size {team_size}: must be between 1 and the roster size ({roster_size})")]
    TeamSize { team_size: usize, roster_size: usize },
    #[error("field '{field}' has weight {weight}; field weights must be positive")]
    NonPositiveFieldWeight { field: String, weight: u32 },
    #[error("candidate '{candidate}' lists field '{field}' which has no configured weight")]
    UnknownField { candidate: String, field: String },
    #[error("measure '{measure}' has a non-finite weight ({weight})")]
    InvalidMeasureWeight { measure: &'static str, weight: f64 },
    #[error("measure '{measure}' overflows for team ({})", .members.join(", "))]
    ScoreOverflow {
        measure: &'static str,
        members: Vec<String>,
    },
    #[error("{path} already exists; pass --force to overwrite")]
    ConfigExists { path: PathBuf },
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CommitteeError>;
