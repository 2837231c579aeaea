pub mod json;
pub mod text;

use crate::scoring::{FieldWeights, MeasureWeights, RankedTeam};

pub use json::render_json;
pub use text::render_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Everything a report needs: the weights that produced the ranking plus the ranked teams.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub team_size: usize,
    pub measure_weights: &'a MeasureWeights,
    pub field_weights: &'a FieldWeights,
    pub teams: &'a [RankedTeam],
}

impl Report<'_> {
    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(render_text(self)),
            ReportFormat::Json => render_json(self),
        }
    }
}

pub fn format_weight(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
