use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{CommitteeError, Result};
use crate::roster::{CandidateProfile, Roster};
use crate::scoring::{
    AttributeScorer, Combinations, FieldScorer, FieldWeights, MeasureWeights, RankingPipeline,
    WeightedScorer,
};

pub const DEFAULT_CONFIG_PATH: &str = "config/committee.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitteeConfig {
    pub team_size: usize,
    pub field_weights: FieldWeights,
    pub measure_weights: MeasureWeights,
    pub candidates: Vec<CandidateProfile>,
}

impl Default for CommitteeConfig {
    fn default() -> Self {
        let field_weights = [("IR", 2), ("IIR", 2), ("HCI", 1)]
            .into_iter()
            .map(|(field, weight)| (field.to_string(), weight))
            .collect();

        Self {
            team_size: 3,
            field_weights,
            measure_weights: MeasureWeights::default(),
            candidates: vec![
                CandidateProfile::new("PH", &["HCI", "IIR"], true, "EU", "m", 0),
                CandidateProfile::new("JG", &["HCI", "IIR"], true, "US", "m", 0),
                CandidateProfile::new("JH", &["IR", "IIR"], false, "EU", "f", 0),
                CandidateProfile::new("CE", &["IR", "IIR"], false, "EU", "m", 1),
                CandidateProfile::new("KT", &["IR"], true, "US", "m", 1),
            ],
        }
    }
}

impl CommitteeConfig {
    /// Loads from `path`, else [`DEFAULT_CONFIG_PATH`] when present, else the built-in tables.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let config = match config_path.as_ref() {
            Some(path) => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| CommitteeError::Read {
                        path: path.clone(),
                        source,
                    })?;
                info!(path = %path.display(), "loaded committee config");
                Self::from_toml_str(&contents)?
            }
            None => {
                debug!("no config file found, using built-in committee tables");
                CommitteeConfig::default()
            }
        };
        Ok((config, config_path))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| CommitteeError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = self.to_toml_string()?;
        std::fs::write(path, payload).map_err(|source| CommitteeError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks every consistency rule that would otherwise surface mid-enumeration.
    pub fn validate(&self) -> Result<Roster> {
        let roster = Roster::new(self.candidates.clone())?;
        Combinations::new(roster.len(), self.team_size)?;

        for (field, &weight) in &self.field_weights {
            if weight == 0 {
                return Err(CommitteeError::NonPositiveFieldWeight {
                    field: field.clone(),
                    weight,
                });
            }
        }
        for candidate in roster.candidates() {
            if let Some(field) = candidate
                .fields
                .iter()
                .find(|field| !self.field_weights.contains_key(*field))
            {
                return Err(CommitteeError::UnknownField {
                    candidate: candidate.id.clone(),
                    field: field.clone(),
                });
            }
        }
        self.measure_weights.validate()?;

        Ok(roster)
    }

    pub fn pipeline(&self) -> RankingPipeline {
        RankingPipeline::new(
            FieldScorer::new(self.field_weights.clone()),
            AttributeScorer::new(),
            WeightedScorer::new(self.measure_weights.clone()),
        )
    }
}

fn default_config_path() -> Option<PathBuf> {
    let path = PathBuf::from(DEFAULT_CONFIG_PATH);
    path.exists().then_some(path)
}
