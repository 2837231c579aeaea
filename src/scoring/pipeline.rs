use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, info, trace};

use crate::error::Result;
use crate::measures::{FieldBreakdown, MeasureVector};
use crate::roster::{Roster, Team};
use crate::scoring::{combination_count, AttributeScorer, Combinations, FieldScorer, WeightedScorer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTeam {
    pub members: Vec<String>,
    pub total: f64,
    pub field_breakdown: FieldBreakdown,
    pub measures: MeasureVector,
}

#[derive(Debug, Clone)]
pub struct RankingPipeline {
    field_scorer: FieldScorer,
    attribute_scorer: AttributeScorer,
    weighted_scorer: WeightedScorer,
}

impl RankingPipeline {
    pub fn new(
        field_scorer: FieldScorer,
        attribute_scorer: AttributeScorer,
        weighted_scorer: WeightedScorer,
    ) -> Self {
        Self {
            field_scorer,
            attribute_scorer,
            weighted_scorer,
        }
    }

    pub fn score_team(&self, team: &Team<'_>) -> Result<RankedTeam> {
        let fields = self.field_scorer.score(team)?;
        let attributes = self.attribute_scorer.score(team)?;

        let measures = MeasureVector {
            field: fields.weighted,
            field_diversity: fields.diversity,
            seniority: attributes.seniority,
            gender_diversity: attributes.gender_diversity,
            geo_diversity: attributes.geo_diversity,
            community_extension: attributes.community_extension,
        };
        let total = self.weighted_scorer.score(&measures);

        Ok(RankedTeam {
            members: team.ids(),
            total,
            field_breakdown: fields.breakdown,
            measures,
        })
    }

    /// Scores every team of `team_size` in enumeration order, without sorting.
    pub fn score_all(&self, roster: &Roster, team_size: usize) -> Result<Vec<RankedTeam>> {
        let combinations = Combinations::new(roster.len(), team_size)?;
        let candidates = roster.len();
        match combination_count(candidates, team_size) {
            Some(teams) => info!(candidates, team_size, teams = %teams, "enumerating teams"),
            None => info!(candidates, team_size, "enumerating teams"),
        }

        let mut teams = Vec::new();
        for indices in combinations {
            let team = roster.team(&indices);
            let scored = self.score_team(&team)?;
            trace!(members = ?scored.members, measures = ?scored.measures, "scored team");
            teams.push(scored);
        }
        Ok(teams)
    }

    /// Scores every team and sorts descending by total. Ties keep enumeration order.
    pub fn rank(&self, roster: &Roster, team_size: usize) -> Result<Vec<RankedTeam>> {
        let mut teams = self.score_all(roster, team_size)?;

        // sort_by is stable
        teams.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));

        if let Some(best) = teams.first() {
            debug!(members = ?best.members, total = best.total, "top ranked team");
        }
        Ok(teams)
    }
}
