use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-team count of expertise tags, keyed by field. Fields absent from the team are not present.
pub type FieldBreakdown = BTreeMap<String, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measure {
    Field,
    FieldDiversity,
    Seniority,
    GenderDiversity,
    GeoDiversity,
    CommunityExtension,
}

impl Measure {
    pub const ALL: [Measure; 6] = [
        Measure::Field,
        Measure::FieldDiversity,
        Measure::Seniority,
        Measure::GenderDiversity,
        Measure::GeoDiversity,
        Measure::CommunityExtension,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Measure::Field => "field",
            Measure::FieldDiversity => "field_diversity",
            Measure::Seniority => "seniority",
            Measure::GenderDiversity => "gender_diversity",
            Measure::GeoDiversity => "geo_diversity",
            Measure::CommunityExtension => "community_extension",
        }
    }

    /// Whether the measure is a 0/1 indicator rather than an additive count.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Measure::Seniority | Measure::GenderDiversity | Measure::GeoDiversity
        )
    }
}

/// Raw measure values for one team. Every measure is always populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureVector {
    pub field: u32,
    pub field_diversity: u32,
    pub seniority: u32,
    pub gender_diversity: u32,
    pub geo_diversity: u32,
    pub community_extension: u32,
}

impl MeasureVector {
    pub fn get(&self, measure: Measure) -> u32 {
        match measure {
            Measure::Field => self.field,
            Measure::FieldDiversity => self.field_diversity,
            Measure::Seniority => self.seniority,
            Measure::GenderDiversity => self.gender_diversity,
            Measure::GeoDiversity => self.geo_diversity,
            Measure::CommunityExtension => self.community_extension,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Measure, u32)> + '_ {
        Measure::ALL
            .into_iter()
            .map(move |measure| (measure, self.get(measure)))
    }
}
