use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CommitteeError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    /// Expertise tags; a tag may repeat and each occurrence counts.
    pub fields: Vec<String>,
    pub senior: bool,
    pub geo: String,
    pub gender: String,
    pub community_ext: u32,
}

impl CandidateProfile {
    pub fn new(
        id: &str,
        fields: &[&str],
        senior: bool,
        geo: &str,
        gender: &str,
        community_ext: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            fields: fields.iter().map(|field| field.to_string()).collect(),
            senior,
            geo: geo.to_string(),
            gender: gender.to_string(),
            community_ext,
        }
    }
}

/// Ordered, duplicate-free candidate pool. Order drives enumeration order.
#[derive(Debug, Clone)]
pub struct Roster {
    candidates: Vec<CandidateProfile>,
}

impl Roster {
    pub fn new(candidates: Vec<CandidateProfile>) -> Result<Self> {
        if candidates.is_empty() {
            return Err(CommitteeError::EmptyRoster);
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for candidate in &candidates {
            if !seen.insert(candidate.id.as_str()) {
                return Err(CommitteeError::DuplicateCandidate(candidate.id.clone()));
            }
        }
        Ok(Self { candidates })
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[CandidateProfile] {
        &self.candidates
    }

    pub fn team(&self, indices: &[usize]) -> Team<'_> {
        Team {
            members: indices.iter().map(|&idx| &self.candidates[idx]).collect(),
        }
    }
}

/// A borrowed selection of distinct roster members.
#[derive(Debug, Clone)]
pub struct Team<'a> {
    members: Vec<&'a CandidateProfile>,
}

impl<'a> Team<'a> {
    pub fn from_members(members: Vec<&'a CandidateProfile>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[&'a CandidateProfile] {
        &self.members
    }

    pub fn ids(&self) -> Vec<String> {
        self.members.iter().map(|member| member.id.clone()).collect()
    }
}
