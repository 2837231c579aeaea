use serde::Serialize;

use crate::measures::{FieldBreakdown, MeasureVector};
use crate::report::Report;
use crate::scoring::{FieldWeights, MeasureWeights};

#[derive(Serialize)]
struct JsonReport<'a> {
    team_size: usize,
    measure_weights: &'a MeasureWeights,
    field_weights: &'a FieldWeights,
    teams: Vec<JsonTeam<'a>>,
}

#[derive(Serialize)]
struct JsonTeam<'a> {
    rank: usize,
    members: &'a [String],
    total: f64,
    field_breakdown: &'a FieldBreakdown,
    measures: &'a MeasureVector,
}

pub fn render_json(report: &Report<'_>) -> Result<String, serde_json::Error> {
    let teams = report
        .teams
        .iter()
        .enumerate()
        .map(|(idx, team)| JsonTeam {
            rank: idx + 1,
            members: &team.members,
            total: team.total,
            field_breakdown: &team.field_breakdown,
            measures: &team.measures,
        })
        .collect();

    let document = JsonReport {
        team_size: report.team_size,
        measure_weights: report.measure_weights,
        field_weights: report.field_weights,
        teams,
    };
    serde_json::to_string_pretty(&document)
}
