use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One candidate student. Loaded once at startup; read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    /// Cumulative grade metric on a 0–10 scale.
    pub cgpa: f64,
    pub skills: Vec<String>,
}

/// On-disk roster snapshot: the skill vocabulary and the student population.
#[derive(Debug, Deserialize)]
pub struct RosterFile {
    pub vocabulary: Vec<String>,
    pub students: Vec<Student>,
}

/// Reads and parses the roster snapshot. Called once from main; any failure
/// here is a startup error, not a request-time condition.
pub fn load_roster(path: impl AsRef<Path>) -> Result<RosterFile> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file '{}'", path.display()))?;
    let roster: RosterFile = serde_json::from_str(&raw)
        .with_context(|| format!("Roster file '{}' is not valid roster JSON", path.display()))?;

    info!(
        "Roster loaded: {} students, {} vocabulary skills",
        roster.students.len(),
        roster.vocabulary.len()
    );
    Ok(roster)
}
