use std::collections::HashSet;

use crate::error::{CommitteeError, Result};
use crate::measures::Measure;
use crate::roster::Team;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeScore {
    pub seniority: u32,
    pub gender_diversity: u32,
    pub geo_diversity: u32,
    pub community_extension: u32,
}

/// Seniority, diversity and community-extension measures. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeScorer;

impl AttributeScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, team: &Team<'_>) -> Result<AttributeScore> {
        let members = team.members();

        let has_senior = members.iter().any(|member| member.senior);
        let genders: HashSet<&str> = members.iter().map(|member| member.gender.as_str()).collect();
        let geos: HashSet<&str> = members.iter().map(|member| member.geo.as_str()).collect();
        let community_extension = members
            .iter()
            .try_fold(0u32, |total, member| total.checked_add(member.community_ext))
            .ok_or_else(|| CommitteeError::ScoreOverflow {
                measure: Measure::CommunityExtension.label(),
                members: team.ids(),
            })?;

        Ok(AttributeScore {
            seniority: bool_to_u32(has_senior),
            gender_diversity: bool_to_u32(genders.len() > 1),
            geo_diversity: bool_to_u32(geos.len() > 1),
            community_extension,
        })
    }
}

fn bool_to_u32(value: bool) -> u32 {
    if value {
        1
    } else {
        0
    }
}
