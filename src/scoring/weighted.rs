use serde::{Deserialize, Serialize};

use crate::error::{CommitteeError, Result};
use crate::measures::{Measure, MeasureVector};

/// One weight per measure. Unknown or missing measures fail deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeasureWeights {
    pub field: f64,
    pub field_diversity: f64,
    pub seniority: f64,
    pub gender_diversity: f64,
    pub geo_diversity: f64,
    pub community_extension: f64,
}

impl Default for MeasureWeights {
    fn default() -> Self {
        Self {
            field: 3.0,
            field_diversity: 1.0,
            seniority: 2.0,
            gender_diversity: 1.0,
            geo_diversity: 1.0,
            community_extension: 3.0,
        }
    }
}

impl MeasureWeights {
    pub fn get(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Field => self.field,
            Measure::FieldDiversity => self.field_diversity,
            Measure::Seniority => self.seniority,
            Measure::GenderDiversity => self.gender_diversity,
            Measure::GeoDiversity => self.geo_diversity,
            Measure::CommunityExtension => self.community_extension,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Measure, f64)> + '_ {
        Measure::ALL
            .into_iter()
            .map(move |measure| (measure, self.get(measure)))
    }

    pub fn validate(&self) -> Result<()> {
        for (measure, weight) in self.iter() {
            if !weight.is_finite() {
                return Err(CommitteeError::InvalidMeasureWeight {
                    measure: measure.label(),
                    weight,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct WeightedScorer {
    weights: MeasureWeights,
}

impl WeightedScorer {
    pub fn new(weights: MeasureWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, measures: &MeasureVector) -> f64 {
        let mut score = 0.0;

        score += measures.field as f64 * self.weights.field;
        score += measures.field_diversity as f64 * self.weights.field_diversity;
        score += measures.seniority as f64 * self.weights.seniority;
        score += measures.gender_diversity as f64 * self.weights.gender_diversity;
        score += measures.geo_diversity as f64 * self.weights.geo_diversity;
        score += measures.community_extension as f64 * self.weights.community_extension;

        score
    }
}
