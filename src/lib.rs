pub mod commands;
pub mod config;
pub mod error;
pub mod measures;
pub mod report;
pub mod roster;
pub mod scoring;

use crate::config::CommitteeConfig;
use crate::error::Result;
use crate::scoring::RankedTeam;

pub use crate::error::CommitteeError;
pub use crate::measures::{FieldBreakdown, Measure, MeasureVector};
pub use crate::report::{Report, ReportFormat};
pub use crate::roster::{CandidateProfile, Roster, Team};

/// Validates `config` and ranks every team of the configured size, best first.
pub fn rank_committees(config: &CommitteeConfig) -> Result<Vec<RankedTeam>> {
    let roster = config.validate()?;
    config.pipeline().rank(&roster, config.team_size)
}

pub fn build_report<'a>(config: &'a CommitteeConfig, teams: &'a [RankedTeam]) -> Report<'a> {
    Report {
        team_size: config.team_size,
        measure_weights: &config.measure_weights,
        field_weights: &config.field_weights,
        teams,
    }
}
