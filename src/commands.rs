use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::CommitteeConfig;
use crate::error::{CommitteeError, Result};
use crate::report::ReportFormat;
use crate::{build_report, rank_committees};

#[derive(Debug, Clone)]
pub struct RankOptions {
    pub config: Option<PathBuf>,
    /// Replaces the configured team size; still validated against the roster.
    pub team_size: Option<usize>,
    pub top: Option<usize>,
    pub format: ReportFormat,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            config: None,
            team_size: None,
            top: None,
            format: ReportFormat::Text,
        }
    }
}

/// Loads, ranks and renders. Returns the report text.
pub fn rank(options: &RankOptions) -> Result<String> {
    let (mut config, source) = CommitteeConfig::load(options.config.clone())?;
    if let Some(team_size) = options.team_size {
        config.team_size = team_size;
    }
    match source {
        Some(path) => info!(path = %path.display(), team_size = config.team_size, "ranking committees"),
        None => info!(team_size = config.team_size, "ranking committees with built-in tables"),
    }

    let mut teams = rank_committees(&config)?;
    if let Some(top) = options.top {
        teams.truncate(top);
    }

    let mut rendered = build_report(&config, &teams).render(options.format)?;
    if options.format == ReportFormat::Json {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Writes the built-in configuration to `path`. Refuses to clobber unless `force`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CommitteeError::ConfigExists {
            path: path.to_path_buf(),
        });
    }
    CommitteeConfig::default().write(path)?;
    info!(path = %path.display(), "wrote default committee config");
    Ok(())
}
