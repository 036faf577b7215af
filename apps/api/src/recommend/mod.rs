// Placement recommendation engine.
// Implements: skill vectorization, composite scoring, top-K ranking.
// All state is immutable after startup; handlers share it via Arc.

pub mod handlers;
pub mod ranking;
pub mod scoring;
pub mod vocabulary;
pub mod weights;

use serde::Deserialize;

use crate::roster::Student;
use ranking::{rank, RankedStudent};
use vocabulary::SkillVocabulary;
use weights::RoleWeightTable;

/// One inbound requirement from a company. Constructed per request and
/// discarded after the response. `req_skills` and `pref_skills` are
/// semantically sets; duplicates are collapsed during scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    pub role: String,
    pub req_skills: Vec<String>,
    #[serde(default)]
    pub pref_skills: Vec<String>,
    pub min_cgpa: f64,
    pub count: i64,
}

/// Owns the immutable vocabulary, role weight table, and roster snapshot.
/// Every ranking pass is a pure in-memory transformation over these, so
/// concurrent requests need no coordination.
pub struct RecommendEngine {
    vocabulary: SkillVocabulary,
    weights: RoleWeightTable,
    roster: Vec<Student>,
}

impl RecommendEngine {
    pub fn new(
        vocabulary: SkillVocabulary,
        weights: RoleWeightTable,
        roster: Vec<Student>,
    ) -> Self {
        Self {
            vocabulary,
            weights,
            roster,
        }
    }

    /// Ordered top-K matches for the requirement. Empty result is a valid,
    /// non-error outcome (nobody eligible, or no required skills given).
    pub fn recommend(&self, request: &RecommendRequest) -> Vec<RankedStudent> {
        rank(&self.roster, request, &self.vocabulary, &self.weights)
    }

    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    pub fn student(&self, id: u32) -> Option<&Student> {
        self.roster.iter().find(|s| s.id == id)
    }
}
