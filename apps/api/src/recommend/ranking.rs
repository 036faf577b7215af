//! Ranking pipeline: filter by minimum grade, score the survivors, sort
//! descending, truncate to the requested count.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::scoring::composite_score;
use super::vocabulary::SkillVocabulary;
use super::weights::RoleWeightTable;
use super::RecommendRequest;
use crate::roster::Student;

/// One ranked result record, as returned over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedStudent {
    pub id: u32,
    pub name: String,
    pub cgpa: f64,
    pub skills: Vec<String>,
    pub score: f64,
}

/// Produces the ordered top-K result for one requirement.
///
/// A request without required skills short-circuits to an empty result, as
/// does a non-positive count. The sort is stable, so students with equal
/// scores keep their roster order and identical inputs always produce an
/// identical ordering.
pub fn rank(
    roster: &[Student],
    request: &RecommendRequest,
    vocabulary: &SkillVocabulary,
    weights: &RoleWeightTable,
) -> Vec<RankedStudent> {
    if request.req_skills.is_empty() || request.count <= 0 {
        return Vec::new();
    }

    let mut ranked: Vec<RankedStudent> = roster
        .iter()
        .filter(|student| student.cgpa >= request.min_cgpa)
        .map(|student| RankedStudent {
            id: student.id,
            name: student.name.clone(),
            cgpa: student.cgpa,
            skills: student.skills.clone(),
            score: composite_score(student, request, vocabulary, weights),
        })
        .collect();

    // Scores are never NaN for well-typed input.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(request.count as usize);
    ranked
}
