use crate::report::{format_weight, Report};
use crate::scoring::RankedTeam;

const RULE: &str = "--------------------------\n";

pub fn render_text(report: &Report<'_>) -> String {
    let mut out = String::new();

    out.push_str("Weights for each measure:\n");
    out.push_str(RULE);
    for (measure, weight) in report.measure_weights.iter() {
        out.push_str(&format!("{} {}\n", measure.label(), format_weight(weight)));
    }
    out.push('\n');

    out.push_str("Weights for fields:\n");
    out.push_str(RULE);
    for (field, weight) in report.field_weights {
        out.push_str(&format!("{} {}\n", field, weight));
    }
    out.push('\n');

    out.push_str(&format!(
        "Teams ranked by total scores (team size {})\n",
        report.team_size
    ));
    for team in report.teams {
        out.push_str(&render_team(team));
    }

    out
}

fn render_team(team: &RankedTeam) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "({}) {}\n",
        team.members.join(", "),
        format_weight(team.total)
    ));

    let breakdown = team
        .field_breakdown
        .iter()
        .map(|(field, count)| format!("{} {}", field, count))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!("\t Field expertise distribution: {}\n", breakdown));

    out.push_str("\t Individual measure scoring:\n");
    for (measure, value) in team.measures.iter() {
        out.push_str(&format!("\t   {} {}\n", measure.label(), value));
    }
    out.push('\n');
    out
}
