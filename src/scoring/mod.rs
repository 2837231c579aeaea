pub mod attributes;
pub mod combinations;
pub mod field;
pub mod pipeline;
pub mod weighted;

pub use attributes::{AttributeScore, AttributeScorer};
pub use combinations::{combination_count, Combinations};
pub use field::{FieldScore, FieldScorer, FieldWeights};
pub use pipeline::{RankedTeam, RankingPipeline};
pub use weighted::{MeasureWeights, WeightedScorer};
