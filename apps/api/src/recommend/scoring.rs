//! Composite scoring for a (student, requirement) pair.
//!
//! Two skill signals are blended: cosine similarity between presence vectors
//! over the shared vocabulary (profile alignment, size-independent) and raw
//! set coverage of the required/preferred skills (rewards exact requirement
//! hits that broad-but-shallow overlap would dilute). The blend is then
//! weighted against the normalized grade per the role weight table.
//!
//! Out-of-vocabulary skills drop out of the cosine term but still count in
//! set coverage. Intentional: the vocabulary is the closed universe the
//! vector metric can reason about, while coverage compares the literal
//! requirement text.

use std::collections::HashSet;

use super::vocabulary::SkillVocabulary;
use super::weights::RoleWeightTable;
use super::RecommendRequest;
use crate::roster::Student;

/// Required vs preferred split inside the set-overlap score.
const REQUIRED_COVERAGE_WEIGHT: f64 = 0.8;
const PREFERRED_COVERAGE_WEIGHT: f64 = 0.2;

/// Cosine vs set-overlap split inside the skill score.
const COSINE_WEIGHT: f64 = 0.7;
const COVERAGE_WEIGHT: f64 = 0.3;

/// Maximum attainable cumulative grade; normalizes cgpa into [0, 1].
const MAX_CGPA: f64 = 10.0;

/// Cosine similarity of two binary presence vectors. Zero or orthogonal
/// vectors score 0 rather than dividing by zero.
pub fn cosine_similarity(a: &[u8], b: &[u8]) -> f64 {
    let dot: u32 = a.iter().zip(b).map(|(&x, &y)| u32::from(x * y)).sum();
    let norm_a = a.iter().map(|&x| u32::from(x)).sum::<u32>() as f64;
    let norm_b = b.iter().map(|&x| u32::from(x)).sum::<u32>() as f64;
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    f64::from(dot) / (norm_a.sqrt() * norm_b.sqrt())
}

/// Fraction of `target` present in `candidate`; 0 for an empty target.
fn coverage(target: &[String], candidate: &HashSet<&str>) -> f64 {
    let target_set: HashSet<&str> = target.iter().map(String::as_str).collect();
    if target_set.is_empty() {
        return 0.0;
    }
    let matched = target_set.intersection(candidate).count();
    matched as f64 / target_set.len() as f64
}

/// Set-overlap score: 0.8 × required coverage + 0.2 × preferred coverage.
/// Preferred coverage contributes 0 when no preferred skills were given.
pub fn coverage_score(
    req_skills: &[String],
    pref_skills: &[String],
    student_skills: &[String],
) -> f64 {
    let student: HashSet<&str> = student_skills.iter().map(String::as_str).collect();
    let required = coverage(req_skills, &student);
    let preferred = if pref_skills.is_empty() {
        0.0
    } else {
        coverage(pref_skills, &student)
    };
    REQUIRED_COVERAGE_WEIGHT * required + PREFERRED_COVERAGE_WEIGHT * preferred
}

/// Composite score for one (student, requirement) pair, in [0, 1], rounded
/// to 4 decimal places for stable comparison and display.
///
/// An empty required-skill set is invalid for scoring and reports the zero
/// sentinel. Grade filtering happens upstream in the ranker, not here.
pub fn composite_score(
    student: &Student,
    request: &RecommendRequest,
    vocabulary: &SkillVocabulary,
    weights: &RoleWeightTable,
) -> f64 {
    if request.req_skills.is_empty() {
        return 0.0;
    }

    let student_vec = vocabulary.presence_vector(&student.skills);
    let required_vec = vocabulary.presence_vector(&request.req_skills);
    let cosine = cosine_similarity(&required_vec, &student_vec);

    let overlap = coverage_score(&request.req_skills, &request.pref_skills, &student.skills);

    let skill_score = COSINE_WEIGHT * cosine + COVERAGE_WEIGHT * overlap;
    let grade_score = student.cgpa / MAX_CGPA;

    let role_weights = weights.lookup(&request.role);
    round4(role_weights.skill * skill_score + role_weights.grade * grade_score)
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
