//! Skill vocabulary: the closed, ordered universe of skills the similarity
//! metric can reason about. Vector positions are fixed for the process
//! lifetime; skills outside the vocabulary are silently ignored.

use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Skill vocabulary must not be empty")]
    Empty,

    #[error("Duplicate skill in vocabulary: '{0}'")]
    Duplicate(String),
}

/// Ordered, distinct skill identifiers. Validated at construction so every
/// downstream presence vector has a stable, well-defined length.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    pub fn new(skills: Vec<String>) -> Result<Self, VocabularyError> {
        if skills.is_empty() {
            return Err(VocabularyError::Empty);
        }
        let mut seen = HashSet::new();
        for skill in &skills {
            if !seen.insert(skill.as_str()) {
                return Err(VocabularyError::Duplicate(skill.clone()));
            }
        }
        Ok(Self { skills })
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Binary presence vector over the vocabulary: position i is 1 iff the
    /// i-th vocabulary skill appears in `skills`. Out-of-vocabulary skills
    /// contribute to no position.
    pub fn presence_vector(&self, skills: &[String]) -> Vec<u8> {
        let present: HashSet<&str> = skills.iter().map(String::as_str).collect();
        self.skills
            .iter()
            .map(|skill| u8::from(present.contains(skill.as_str())))
            .collect()
    }
}
