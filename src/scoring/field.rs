use std::collections::BTreeMap;

use crate::error::{CommitteeError, Result};
use crate::measures::{FieldBreakdown, Measure};
use crate::roster::Team;

pub type FieldWeights = BTreeMap<String, u32>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldScore {
    /// Sum of field weights over every tag occurrence on the team.
    pub weighted: u32,
    /// Number of distinct tags on the team.
    pub diversity: u32,
    pub breakdown: FieldBreakdown,
}

#[derive(Debug, Clone)]
pub struct FieldScorer {
    weights: FieldWeights,
}

impl FieldScorer {
    pub fn new(weights: FieldWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, team: &Team<'_>) -> Result<FieldScore> {
        let mut breakdown = FieldBreakdown::new();
        for member in team.members() {
            for field in &member.fields {
                if !self.weights.contains_key(field) {
                    return Err(CommitteeError::UnknownField {
                        candidate: member.id.clone(),
                        field: field.clone(),
                    });
                }
                *breakdown.entry(field.clone()).or_insert(0) += 1;
            }
        }

        let mut weighted: u32 = 0;
        for (field, count) in &breakdown {
            weighted = self.weights[field]
                .checked_mul(*count)
                .and_then(|points| weighted.checked_add(points))
                .ok_or_else(|| CommitteeError::ScoreOverflow {
                    measure: Measure::Field.label(),
                    members: team.ids(),
                })?;
        }

        Ok(FieldScore {
            weighted,
            diversity: breakdown.len() as u32,
            breakdown,
        })
    }
}
