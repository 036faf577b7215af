//! Role-based weighting of the skill and grade signals. Skill-heavy roles
//! (fullstack, backend) lean on skill alignment; ops and analytics roles
//! give academic performance a larger say. Unknown roles fall back to an
//! even split rather than failing.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleWeights {
    pub skill: f64,
    pub grade: f64,
}

impl RoleWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.grade
    }
}

/// Fallback pair for roles the table does not recognize.
pub const DEFAULT_WEIGHTS: RoleWeights = RoleWeights {
    skill: 0.5,
    grade: 0.5,
};

/// Mapping from normalized (lowercased) role name to its weight pair.
/// Constructed once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RoleWeightTable {
    entries: HashMap<String, RoleWeights>,
}

impl RoleWeightTable {
    /// The standard table used in production.
    pub fn standard() -> Self {
        let entries = [
            ("backend", RoleWeights { skill: 0.8, grade: 0.2 }),
            ("frontend", RoleWeights { skill: 0.7, grade: 0.3 }),
            ("fullstack", RoleWeights { skill: 0.9, grade: 0.1 }),
            ("data_science", RoleWeights { skill: 0.6, grade: 0.4 }),
            ("devops", RoleWeights { skill: 0.5, grade: 0.5 }),
        ]
        .into_iter()
        .map(|(role, weights)| (role.to_string(), weights))
        .collect();

        Self { entries }
    }

    /// Role lookup is case-insensitive; unrecognized roles get the default pair.
    pub fn lookup(&self, role: &str) -> RoleWeights {
        self.entries
            .get(role.to_lowercase().as_str())
            .copied()
            .unwrap_or(DEFAULT_WEIGHTS)
    }
}
